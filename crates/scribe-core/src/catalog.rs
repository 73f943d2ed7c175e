use std::collections::HashMap;

use crate::traits::InclusionPredicate;

/// Declares which API versions publish one operation and whether callers
/// must be authorized to invoke it.
///
/// Version values are declared bare (`"1"`) and matched against labels with
/// a `v` prefix (`"v1"`), so an operation declared with value `1` lands in
/// the `v1` document.
#[derive(Debug, Clone)]
pub struct OperationSpec {
    operation_id: String,
    versions: Vec<String>,
    requires_auth: bool,
}

impl OperationSpec {
    pub fn new(operation_id: impl Into<String>) -> Self {
        Self {
            operation_id: operation_id.into(),
            versions: Vec::new(),
            requires_auth: false,
        }
    }

    /// Publish this operation in the version with the given value.
    /// May be repeated; the operation lands in every matching document.
    pub fn version(mut self, value: impl Into<String>) -> Self {
        self.versions.push(value.into());
        self
    }

    /// Mark this operation as requiring bearer authorization.
    pub fn secured(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn operation_id(&self) -> &str {
        &self.operation_id
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth
    }

    /// True iff any declared version value, prefixed with `v`, equals the
    /// target label.
    pub fn matches_label(&self, label: &str) -> bool {
        self.versions
            .iter()
            .any(|value| label.strip_prefix('v').is_some_and(|rest| rest == value))
    }
}

/// The statically declared operation registry: one [`OperationSpec`] per
/// `operationId`, built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct OperationCatalog {
    specs: HashMap<String, OperationSpec>,
}

impl OperationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one operation. Re-declaring an id replaces the earlier
    /// entry and logs a warning.
    pub fn declare(mut self, spec: OperationSpec) -> Self {
        if let Some(previous) = self.specs.insert(spec.operation_id.clone(), spec) {
            tracing::warn!(
                operation = previous.operation_id(),
                "operation declared twice, keeping the later entry"
            );
        }
        self
    }

    pub fn get(&self, operation_id: &str) -> Option<&OperationSpec> {
        self.specs.get(operation_id)
    }

    /// Whether the catalog marks the operation as requiring authorization.
    /// Unknown ids are unauthenticated by definition.
    pub fn requires_auth(&self, operation_id: &str) -> bool {
        self.specs
            .get(operation_id)
            .is_some_and(OperationSpec::requires_auth)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl InclusionPredicate for OperationCatalog {
    fn includes(&self, label: &str, operation_id: Option<&str>) -> bool {
        let Some(id) = operation_id else {
            return false;
        };
        self.specs
            .get(id)
            .is_some_and(|spec| spec.matches_label(label))
    }
}

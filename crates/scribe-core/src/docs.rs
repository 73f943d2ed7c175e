use std::collections::HashSet;
use std::path::PathBuf;

use utoipa::Modify;
use utoipa::openapi::OpenApi;
use utoipa::openapi::path::{Operation, PathItem};
use utoipa::openapi::server::Server;

use crate::catalog::OperationCatalog;
use crate::error::{DocsError, Result};
use crate::security::{AuthorizationFilter, SecurityAddon};
use crate::sources::{DocSource, scan_sources};
use crate::traits::{InclusionPredicate, OperationContext, OperationFilter};
use crate::version::ApiVersion;

/// Assembles one immutable document per registered [`ApiVersion`].
///
/// The builder is consumed by [`DocsBuilder::build`]; nothing about the
/// produced [`Docs`] can change afterwards. The catalog doubles as the
/// default inclusion predicate and supplies the requires-auth flag handed
/// to operation filters.
pub struct DocsBuilder {
    versions: Vec<ApiVersion>,
    catalog: OperationCatalog,
    base_path: Option<String>,
    sources_dir: Option<PathBuf>,
    predicate: Option<Box<dyn InclusionPredicate>>,
    filters: Vec<Box<dyn OperationFilter>>,
}

impl DocsBuilder {
    pub fn new(catalog: OperationCatalog) -> Self {
        Self {
            versions: Vec::new(),
            catalog,
            base_path: None,
            sources_dir: None,
            predicate: None,
            filters: vec![Box::new(AuthorizationFilter)],
        }
    }

    /// Register one version descriptor. Order is preserved in the UI.
    pub fn version(mut self, version: ApiVersion) -> Self {
        self.versions.push(version);
        self
    }

    /// Path prefix the service is mounted under, e.g. `"api"` when the
    /// service lives at `https://host/api/`. Slashes are trimmed; an empty
    /// value means no prefix.
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        let trimmed = base_path.into().trim_matches('/').to_string();
        self.base_path = (!trimmed.is_empty()).then_some(trimmed);
        self
    }

    /// Directory scanned for Markdown documentation sources at build time.
    pub fn sources_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sources_dir = Some(dir.into());
        self
    }

    /// Replace the catalog-backed inclusion predicate.
    pub fn predicate(mut self, predicate: impl InclusionPredicate + 'static) -> Self {
        self.predicate = Some(Box::new(predicate));
        self
    }

    /// Register an extra operation filter, run after the built-in
    /// authorization filter.
    pub fn filter(mut self, filter: impl OperationFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Assemble one document per registered version from `base`.
    ///
    /// Registration failures are logged and returned. Everything else
    /// degrades gracefully: an operation without a matching version is
    /// excluded, a missing source directory is skipped.
    pub fn build(self, base: OpenApi) -> Result<Docs> {
        match self.assemble(base) {
            Ok(docs) => Ok(docs),
            Err(e) => {
                tracing::error!("failed to assemble versioned documents: {e}");
                Err(e)
            }
        }
    }

    fn assemble(self, base: OpenApi) -> Result<Docs> {
        if self.versions.is_empty() {
            return Err(DocsError::config("no API versions registered"));
        }
        let mut seen = HashSet::new();
        for version in &self.versions {
            if !seen.insert(version.label.as_str()) {
                return Err(DocsError::config(format!(
                    "duplicate version label: {}",
                    version.label
                )));
            }
        }

        self.warn_on_catalog_drift(&base);

        let sources = match &self.sources_dir {
            Some(dir) => scan_sources(dir)?,
            None => Vec::new(),
        };
        let labels: Vec<String> = self.versions.iter().map(|v| v.label.clone()).collect();

        let mut entries = Vec::with_capacity(self.versions.len());
        for version in &self.versions {
            let mut doc = base.clone();
            self.prune_operations(&mut doc, &version.label);
            self.apply_filters(&mut doc, &version.label);
            SecurityAddon.modify(&mut doc);
            doc.info = version.info.clone();
            append_sources(&mut doc, &version.label, &labels, &sources);
            if let Some(base_path) = &self.base_path {
                doc.servers = Some(vec![Server::new(format!("/{base_path}"))]);
            }
            tracing::info!(
                "registered document for {} ({} operations) at {}",
                version.label,
                count_operations(&doc),
                version.endpoint
            );
            entries.push((version.clone(), doc));
        }

        Ok(Docs {
            entries,
            base_path: self.base_path,
        })
    }

    fn inclusion_predicate(&self) -> &dyn InclusionPredicate {
        match &self.predicate {
            Some(custom) => custom.as_ref(),
            None => &self.catalog,
        }
    }

    /// Drop every operation the predicate rejects for `label`, then every
    /// path item left without operations.
    fn prune_operations(&self, doc: &mut OpenApi, label: &str) {
        let predicate = self.inclusion_predicate();
        for item in doc.paths.paths.values_mut() {
            for slot in operations_mut(item) {
                let keep = slot
                    .as_ref()
                    .is_some_and(|op| predicate.includes(label, op.operation_id.as_deref()));
                if slot.is_some() && !keep {
                    *slot = None;
                }
            }
        }
        doc.paths
            .paths
            .retain(|_, item| operations(item).iter().any(Option::is_some));
    }

    fn apply_filters(&self, doc: &mut OpenApi, label: &str) {
        for item in doc.paths.paths.values_mut() {
            for slot in operations_mut(item) {
                let Some(operation) = slot else { continue };
                let operation_id = operation.operation_id.clone();
                let context = OperationContext {
                    label,
                    operation_id: operation_id.as_deref(),
                    requires_auth: operation_id
                        .as_deref()
                        .is_some_and(|id| self.catalog.requires_auth(id)),
                };
                for filter in &self.filters {
                    filter.apply(operation, &context);
                }
            }
        }
    }

    /// Catalog entries without a document operation (and vice versa) are a
    /// sign of drift between route table and catalog. Warn, don't fail.
    fn warn_on_catalog_drift(&self, base: &OpenApi) {
        let document_ids: HashSet<&str> = base
            .paths
            .paths
            .values()
            .flat_map(|item| operations(item).into_iter().flatten())
            .filter_map(|op| op.operation_id.as_deref())
            .collect();

        for id in self.catalog.ids() {
            if !document_ids.contains(id) {
                tracing::warn!("catalog entry `{id}` matches no operation in the base document");
            }
        }
        for id in &document_ids {
            if self.catalog.get(id).is_none() {
                tracing::warn!(
                    "operation `{id}` is missing from the catalog and will appear in no version"
                );
            }
        }
    }
}

/// The immutable product of assembly: one finished document per version,
/// in registration order, plus the settings the HTTP layer needs.
#[derive(Clone)]
pub struct Docs {
    entries: Vec<(ApiVersion, OpenApi)>,
    base_path: Option<String>,
}

impl Docs {
    pub fn entries(&self) -> &[(ApiVersion, OpenApi)] {
        &self.entries
    }

    pub fn base_path(&self) -> Option<&str> {
        self.base_path.as_deref()
    }

    pub fn get(&self, label: &str) -> Option<&OpenApi> {
        self.entries
            .iter()
            .find(|(version, _)| version.label == label)
            .map(|(_, doc)| doc)
    }

    /// The endpoint as the UI should reference it: prefixed with the base
    /// path when one is configured.
    pub fn prefixed_endpoint(&self, endpoint: &str) -> String {
        match &self.base_path {
            Some(base) => format!("/{base}{endpoint}"),
            None => endpoint.to_string(),
        }
    }

    /// Serialize the document for `label` as pretty-printed JSON.
    pub fn pretty_json(&self, label: &str) -> Result<String> {
        let doc = self
            .get(label)
            .ok_or_else(|| DocsError::UnknownVersion(label.to_string()))?;
        Ok(doc.to_pretty_json()?)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All operation slots of a path item. The OpenAPI model pins one optional
/// operation per HTTP method.
fn operations_mut(item: &mut PathItem) -> [&mut Option<Operation>; 8] {
    [
        &mut item.get,
        &mut item.put,
        &mut item.post,
        &mut item.delete,
        &mut item.options,
        &mut item.head,
        &mut item.patch,
        &mut item.trace,
    ]
}

fn operations(item: &PathItem) -> [Option<&Operation>; 8] {
    [
        item.get.as_ref(),
        item.put.as_ref(),
        item.post.as_ref(),
        item.delete.as_ref(),
        item.options.as_ref(),
        item.head.as_ref(),
        item.patch.as_ref(),
        item.trace.as_ref(),
    ]
}

fn count_operations(doc: &OpenApi) -> usize {
    doc.paths
        .paths
        .values()
        .map(|item| operations(item).iter().filter(|op| op.is_some()).count())
        .sum()
}

fn append_sources(doc: &mut OpenApi, label: &str, all_labels: &[String], sources: &[DocSource]) {
    let mut description = doc.info.description.take().unwrap_or_default();
    for source in sources {
        if !source.applies_to(label, all_labels) || source.body.is_empty() {
            continue;
        }
        if !description.is_empty() {
            description.push_str("\n\n");
        }
        description.push_str(&source.body);
    }
    if !description.is_empty() {
        doc.info.description = Some(description);
    }
}

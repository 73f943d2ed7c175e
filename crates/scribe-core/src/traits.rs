use utoipa::openapi::path::Operation;

/// What the assembly step knows about an operation while filters run.
#[derive(Debug, Clone, Copy)]
pub struct OperationContext<'a> {
    /// Label of the document being assembled (e.g. `"v1"`).
    pub label: &'a str,
    /// The operation's `operationId`, when the generator produced one.
    pub operation_id: Option<&'a str>,
    /// Whether the catalog marks this operation as requiring authorization.
    pub requires_auth: bool,
}

/// Decides whether an operation belongs in the document for a version label.
///
/// Absence of a match is a normal `false`, never an error: an operation
/// without a resolvable id is simply excluded.
pub trait InclusionPredicate: Send + Sync {
    fn includes(&self, label: &str, operation_id: Option<&str>) -> bool;
}

/// Mutates a generated operation description before the document is frozen.
///
/// Filters run once per surviving operation per version, in registration
/// order. They must tolerate being invoked again over their own output.
pub trait OperationFilter: Send + Sync {
    fn apply(&self, operation: &mut Operation, context: &OperationContext<'_>);
}

use utoipa::Modify;
use utoipa::openapi::OpenApi;
use utoipa::openapi::path::Operation;
use utoipa::openapi::response::ResponseBuilder;
use utoipa::openapi::security::{
    HttpAuthScheme, HttpBuilder, SecurityRequirement, SecurityScheme,
};

use crate::traits::{OperationContext, OperationFilter};

/// Name of the HTTP bearer scheme advertised in every generated document.
pub const BEARER_SCHEME: &str = "bearer";

/// Registers the fixed bearer/JWT scheme on a document's components.
///
/// Runs for every generated document, whether or not any operation in it
/// requires authorization.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER_SCHEME,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Bearer token in the Authorization header"))
                    .build(),
            ),
        );
    }
}

/// Annotates operations the catalog marks as secured: inserts fixed `401`
/// and `403` response entries and one bearer security requirement.
///
/// Unsecured operations pass through untouched. Running the filter again
/// over its own output changes nothing: responses are keyed by status code
/// and the requirement is only appended when no existing requirement
/// references the bearer scheme. Responses the handler already documents
/// under `401`/`403` are kept.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizationFilter;

impl OperationFilter for AuthorizationFilter {
    fn apply(&self, operation: &mut Operation, context: &OperationContext<'_>) {
        if !context.requires_auth {
            return;
        }

        ensure_response(operation, "401", "Unauthorized");
        ensure_response(operation, "403", "Forbidden");

        let requirements = operation.security.get_or_insert_with(Vec::new);
        if !requirements
            .iter()
            .any(|requirement| references_scheme(requirement, BEARER_SCHEME))
        {
            requirements.push(SecurityRequirement::new::<_, _, &str>(BEARER_SCHEME, []));
        }
    }
}

fn ensure_response(operation: &mut Operation, status: &str, description: &str) {
    if !operation.responses.responses.contains_key(status) {
        operation.responses.responses.insert(
            status.to_string(),
            ResponseBuilder::new().description(description).build().into(),
        );
    }
}

/// A requirement serializes as a map keyed by scheme name; the map itself is
/// not exposed, so probe the serialized form.
fn references_scheme(requirement: &SecurityRequirement, scheme: &str) -> bool {
    serde_json::to_value(requirement).is_ok_and(|value| value.get(scheme).is_some())
}

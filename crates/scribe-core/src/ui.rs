use utoipa_swagger_ui::{Config, SwaggerUi};

use crate::docs::Docs;

/// Mount path of the interactive documentation UI.
pub const UI_PATH: &str = "/swagger/ui/index";

/// Convert finished documents into their HTTP surface: the Swagger UI at
/// [`UI_PATH`] plus one JSON endpoint per registered version.
///
/// The result merges into any axum `Router`. Each document is served at its
/// descriptor's endpoint path, and the UI lists one entry per version in
/// registration order. When a base path is configured, the UI is pointed at
/// the prefixed URLs instead, matching what a browser sees through the
/// reverse proxy, while the serving routes stay unprefixed. Requests for an
/// unregistered document name fall through to the router's not-found
/// response.
pub fn swagger_ui(docs: &Docs) -> SwaggerUi {
    let mut ui = SwaggerUi::new(UI_PATH);
    for (version, doc) in docs.entries() {
        tracing::debug!(
            "serving document for {} at {}",
            version.label,
            version.endpoint
        );
        ui = ui.url(version.endpoint.clone(), doc.clone());
    }

    if docs.base_path().is_some() {
        let urls: Vec<String> = docs
            .entries()
            .iter()
            .map(|(version, _)| docs.prefixed_endpoint(&version.endpoint))
            .collect();
        ui = ui.config(Config::new(urls));
    }

    ui
}

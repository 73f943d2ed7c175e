use utoipa::openapi::info::{Info, InfoBuilder};

/// Describes one published API version.
///
/// A descriptor pairs a version label (e.g. `"v1"`) with the metadata its
/// generated document carries and the endpoint path the document JSON is
/// served from. Descriptors are created during startup configuration and
/// never change afterwards.
#[derive(Clone)]
pub struct ApiVersion {
    /// Version label (e.g. `"v1"`), matched against the catalog's bare version values.
    pub label: String,
    /// Metadata written into the generated document's `info` section.
    pub info: Info,
    /// Path the document JSON is served from, relative to the service root.
    pub endpoint: String,
}

impl ApiVersion {
    /// Create a descriptor with the default endpoint
    /// `/swagger/{label}/swagger.json`.
    pub fn new(label: impl Into<String>, info: Info) -> Self {
        let label = label.into();
        let endpoint = format!("/swagger/{label}/swagger.json");
        Self {
            label,
            info,
            endpoint,
        }
    }

    /// Shorthand for a descriptor built from a title and description.
    ///
    /// The document's `info.version` is the label itself.
    pub fn titled(
        label: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let label = label.into();
        let info = InfoBuilder::new()
            .title(title)
            .version(label.clone())
            .description(Some(description))
            .build();
        Self::new(label, info)
    }

    /// Override the endpoint path the document JSON is served from.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

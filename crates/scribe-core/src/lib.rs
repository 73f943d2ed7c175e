pub mod catalog;
pub mod docs;
pub mod error;
pub mod security;
pub mod sources;
pub mod traits;
pub mod ui;
pub mod version;

pub use catalog::{OperationCatalog, OperationSpec};
pub use docs::{Docs, DocsBuilder};
pub use error::DocsError;
pub use security::{AuthorizationFilter, BEARER_SCHEME, SecurityAddon};
pub use sources::{DocSource, scan_sources};
pub use traits::{InclusionPredicate, OperationContext, OperationFilter};
pub use ui::swagger_ui;
pub use version::ApiVersion;

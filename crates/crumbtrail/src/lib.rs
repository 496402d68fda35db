pub mod anchor;
pub mod builder;
pub mod render;
pub mod template;
pub mod trail;

// Re-export key types for easier usage
pub use anchor::{AnchorFn, AnchorRender, HtmlAnchor};
pub use builder::BreadcrumbBuilder;
pub use render::ActiveMode;
pub use template::{Template, TemplateError, TemplateOverlay};
pub use trail::{CrumbTarget, CrumbValue, Item, ItemArgs};

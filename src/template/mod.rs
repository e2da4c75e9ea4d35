//! Template registry and resolution
//!
//! This module owns the fixed table of supported (document category, record
//! category) → template descriptor mappings and the single resolution
//! operation over it. The table is literal data: there is no registration
//! API and no persistence.
//!
//! # Example
//!
//! ```rust
//! use document_templates::resolve_template;
//!
//! let descriptor = resolve_template("GLPM", "LEGAL_PROSPECT").unwrap();
//! assert_eq!(descriptor.template_file, "GLPM.ftl");
//! ```

mod registry;
mod resolver;

pub use registry::{TemplateDescriptor, TemplateRegistry};
pub use resolver::resolve_template;

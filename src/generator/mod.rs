//! # Generator Module
//!
//! Renders host-supplied class models into Odoo model-layer source files using
//! minijinja templates.
//!
//! ## Architecture
//!
//! ```text
//! Class Models → Module Grouper → Dependency Resolver (host) → Template Rendering → GenerationResult
//! ```
//!
//! 1. **Grouping** - classes are partitioned by target module path
//! 2. **Resolution** - the host's [`DependencyResolver`](crate::resolver::DependencyResolver)
//!    validates and orders each module's classes
//! 3. **Rendering** - each class renders through the class or enumeration
//!    template, the module template wraps the result
//!
//! The generator performs no file I/O: each [`GenerationResult`](crate::model::GenerationResult)
//! carries the output path and source text for the host to write.
//!
//! ## Template Customization
//!
//! Three templates drive the output, compiled into the crate by default and
//! overridable via [`GeneratorConfig::with_template_dir`](crate::config::GeneratorConfig::with_template_dir):
//!
//! - `module.j2` - module wrapper (imports + body)
//! - `class.j2` - ordinary model class
//! - `enum.j2` - enumeration rendered as a selection

mod render;
mod templates;

pub use render::{group_by_module, Generator};
pub use templates::{CLASS_TEMPLATE, ENUM_TEMPLATE, MODULE_TEMPLATE};

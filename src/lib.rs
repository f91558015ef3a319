//! # odoo-modelgen
//!
//! A template-driven generator plugin that renders already-parsed schema class
//! models into the model layer of an Odoo addon, one source file per target
//! module.
//!
//! ## Overview
//!
//! This crate is not a standalone tool. A host generation framework parses the
//! schemas, builds the class models, and plans the module paths; this crate
//! only turns those models into source text:
//!
//! - classes are grouped by target module path,
//! - each module's classes are handed to the host's dependency resolver for
//!   validation and ordering,
//! - each class renders through a minijinja template (class vs enumeration),
//! - the module template wraps the concatenated bodies,
//! - one [`GenerationResult`] per module is returned for the host to write.
//!
//! ## Modules
//!
//! - **[`model`]** - class-model input types and the generation result
//! - **[`config`]** - generation settings (schema/version identifiers, template overrides)
//! - **[`resolver`]** - the dependency-resolver seam implemented by the host
//! - **[`generator`]** - grouping and template rendering
//!
//! ## Usage
//!
//! ```rust,ignore
//! use odoo_modelgen::{Generator, GeneratorConfig};
//!
//! let generator = Generator::new(GeneratorConfig::new("sale", "13"))?;
//! for result in generator.render(&classes, |packages| HostResolver::new(packages))? {
//!     std::fs::write(&result.path, &result.source)?;
//! }
//! ```
//!
//! ## Field prefix
//!
//! Generated field identifiers are namespaced with `{schema}{version}_`
//! (e.g. `sale13_partner_id`). The identifiers come from
//! [`GeneratorConfig`]; [`GeneratorConfig::from_env`] reads them from the
//! `SCHEMA` and `VERSION` environment variables for hosts that configure the
//! run through the process environment.

pub mod config;
pub mod generator;
pub mod model;
pub mod resolver;

pub use config::GeneratorConfig;
pub use generator::{group_by_module, Generator};
pub use model::{ClassKind, ClassModel, EnumMember, FieldModel, GenerationResult};
pub use resolver::{DependencyResolver, PackageMap, ResolveError};

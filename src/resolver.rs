use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::model::ClassModel;

/// Mapping from qualified class name to target module path, covering every
/// class in a generation run. Handed to the resolver so it can resolve
/// cross-module references.
pub type PackageMap = BTreeMap<String, PathBuf>;

/// Dependency ordering collaborator, implemented by the host framework.
///
/// `process` must be called once per module before `sorted_classes`; it builds
/// the resolver's internal dependency graph for that module's class list.
pub trait DependencyResolver {
    /// Register the given classes and build the dependency graph for them.
    fn process(&mut self, classes: &[ClassModel]) -> Result<(), ResolveError>;

    /// Classes from the last `process` call, in dependency-respecting order.
    fn sorted_classes(&self) -> Vec<ClassModel>;
}

/// Resolution failure reported by the host resolver
///
/// All variants are fatal for the generation run; this crate propagates them
/// unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A class participates in a dependency cycle that cannot be ordered
    CircularDependency {
        /// Qualified name of a class on the cycle
        qname: String,
    },
    /// A class references a qualified name absent from the package map
    UnknownReference {
        /// The missing qualified name
        qname: String,
        /// Qualified name of the referencing class
        referenced_by: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::CircularDependency { qname } => {
                write!(f, "unresolvable circular dependency involving '{}'", qname)
            }
            ResolveError::UnknownReference {
                qname,
                referenced_by,
            } => {
                write!(
                    f,
                    "class '{}' references unknown qualified name '{}'",
                    referenced_by, qname
                )
            }
        }
    }
}

impl std::error::Error for ResolveError {}

use std::env;
use std::path::PathBuf;

/// Generation settings threaded explicitly through the render call chain.
///
/// The schema and version identifiers combine into the field-name prefix used
/// inside the templates. Both default to empty strings, which yields the bare
/// `_` prefix.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfig {
    /// Schema identifier (e.g. `sale`)
    pub schema: String,
    /// Schema version identifier (e.g. `13`)
    pub version: String,
    /// Override directory for templates; when unset the built-in templates
    /// compiled into the crate are used
    pub template_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    pub fn new(schema: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            version: version.into(),
            template_dir: None,
        }
    }

    /// Build a config from the `SCHEMA` and `VERSION` environment variables.
    ///
    /// Unset variables default to the empty string, matching the behavior of
    /// hosts that configure the prefix through the process environment.
    pub fn from_env() -> Self {
        Self {
            schema: env::var("SCHEMA").unwrap_or_default(),
            version: env::var("VERSION").unwrap_or_default(),
            template_dir: None,
        }
    }

    /// Load templates from `dir` instead of the built-in set.
    pub fn with_template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    /// Prefix prepended to generated field identifiers: `{schema}{version}_`.
    pub fn field_prefix(&self) -> String {
        format!("{}{}_", self.schema, self.version)
    }
}

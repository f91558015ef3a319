use std::path::Path;

use minijinja::{AutoEscape, Environment};

/// Module wrapper template: receives the concatenated class bodies as `output`.
pub const MODULE_TEMPLATE: &str = "module.j2";
/// Ordinary class template: receives `obj` and `field_prefix`.
pub const CLASS_TEMPLATE: &str = "class.j2";
/// Enumeration template: receives `obj` and `field_prefix`.
pub const ENUM_TEMPLATE: &str = "enum.j2";

/// Build the template environment, either from the built-in templates or from
/// an override directory.
///
/// Auto-escaping is disabled in both cases: the output is source code, not
/// markup. With an override directory a missing template only surfaces later,
/// as minijinja's `TemplateNotFound`, when `get_template` is called.
pub(crate) fn build_environment(
    template_dir: Option<&Path>,
) -> anyhow::Result<Environment<'static>> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::None);
    match template_dir {
        Some(dir) => env.set_loader(minijinja::path_loader(dir)),
        None => {
            env.add_template(MODULE_TEMPLATE, include_str!("../../templates/module.j2"))?;
            env.add_template(CLASS_TEMPLATE, include_str!("../../templates/class.j2"))?;
            env.add_template(ENUM_TEMPLATE, include_str!("../../templates/enum.j2"))?;
        }
    }
    Ok(env)
}

use std::path::PathBuf;

use anyhow::Context;
use indexmap::IndexMap;
use minijinja::{context, Environment};
use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::generator::templates::{
    build_environment, CLASS_TEMPLATE, ENUM_TEMPLATE, MODULE_TEMPLATE,
};
use crate::model::{ClassModel, GenerationResult};
use crate::resolver::{DependencyResolver, PackageMap};

/// Partition classes by target module path, preserving encounter order of both
/// the modules and the classes within each module.
pub fn group_by_module(classes: &[ClassModel]) -> IndexMap<PathBuf, Vec<ClassModel>> {
    let mut groups: IndexMap<PathBuf, Vec<ClassModel>> = IndexMap::new();
    for class in classes {
        groups
            .entry(class.module_path.clone())
            .or_default()
            .push(class.clone());
    }
    groups
}

/// Renders class models into Odoo model-layer source files, one per target
/// module.
///
/// The generator owns the template environment and the generation settings;
/// dependency ordering stays with the host framework behind the
/// [`DependencyResolver`] seam.
pub struct Generator {
    config: GeneratorConfig,
    env: Environment<'static>,
}

impl Generator {
    /// Create a generator with the given settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a built-in template fails to parse.
    pub fn new(config: GeneratorConfig) -> anyhow::Result<Self> {
        let env = build_environment(config.template_dir.as_deref())?;
        Ok(Self { config, env })
    }

    /// Render one generation run.
    ///
    /// Builds the qname → module-path package map over the whole run, asks the
    /// host for one resolver scoped to the run via `make_resolver`, then emits
    /// one [`GenerationResult`] per module group. The host is responsible for
    /// writing the returned sources to disk.
    ///
    /// # Errors
    ///
    /// Resolver and template failures are fatal for the run and propagate
    /// unchanged.
    pub fn render<R, F>(
        &self,
        classes: &[ClassModel],
        make_resolver: F,
    ) -> anyhow::Result<Vec<GenerationResult>>
    where
        R: DependencyResolver,
        F: FnOnce(PackageMap) -> R,
    {
        let packages: PackageMap = classes
            .iter()
            .map(|c| (c.qname.clone(), c.module_path.clone()))
            .collect();
        let mut resolver = make_resolver(packages);

        let mut results = Vec::new();
        for (module, cluster) in group_by_module(classes) {
            debug!(module = %module.display(), classes = cluster.len(), "rendering module");
            let source = self
                .render_module(&mut resolver, &cluster)
                .with_context(|| format!("failed to render module {}", module.display()))?;
            results.push(GenerationResult {
                path: module.with_extension("py"),
                title: cluster[0].target_module.clone(),
                source,
            });
        }
        Ok(results)
    }

    /// Render the source for one target module.
    ///
    /// `resolver.process` must run before the classes are rendered: it builds
    /// the resolver's dependency graph for this module and rejects unresolvable
    /// inputs. The final text layout is alphabetical regardless of the order
    /// `sorted_classes` returns (see DESIGN.md).
    pub fn render_module(
        &self,
        resolver: &mut dyn DependencyResolver,
        classes: &[ClassModel],
    ) -> anyhow::Result<String> {
        resolver.process(classes)?;
        let body = self.render_classes(&resolver.sorted_classes())?;
        let tmpl = self.env.get_template(MODULE_TEMPLATE)?;
        let rendered = tmpl.render(context! { output => body })?;
        Ok(format!("{}\n", rendered.trim_end()))
    }

    /// Render the class bodies for one module, alphabetically by class name,
    /// joined by blank lines and wrapped in a leading and trailing newline.
    pub fn render_classes(&self, classes: &[ClassModel]) -> anyhow::Result<String> {
        let mut ordered: Vec<&ClassModel> = classes.iter().collect();
        ordered.sort_by(|a, b| a.name.cmp(&b.name));

        let field_prefix = self.config.field_prefix();
        debug!(%field_prefix, classes = ordered.len(), "rendering classes");

        let mut rendered = Vec::with_capacity(ordered.len());
        for obj in ordered {
            let template = if obj.is_enumeration() {
                ENUM_TEMPLATE
            } else {
                CLASS_TEMPLATE
            };
            trace!(class = %obj.name, template, "rendering class");
            let out = self
                .env
                .get_template(template)?
                .render(context! { obj, field_prefix })?;
            rendered.push(out.trim().to_string());
        }
        Ok(format!("\n{}\n", rendered.join("\n\n")))
    }
}

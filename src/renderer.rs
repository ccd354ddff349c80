//! Line template rendering.
//! Each expanded placeholder line is produced by rendering the configured
//! line template with MiniJinja.
use crate::error::Result;
use minijinja::Environment;

/// Trait for line template rendering engines.
pub trait TemplateRenderer {
    /// Renders one template once per context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `contexts` - Context variables, one set per output
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Rendered strings, in context order
    ///
    /// The template is compiled even when `contexts` is empty.
    fn render_all(&self, template: &str, contexts: &[serde_json::Value]) -> Result<Vec<String>>;
}

/// MiniJinja-based template rendering engine.
#[derive(Debug, Default)]
pub struct MiniJinjaRenderer;

impl MiniJinjaRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Line templates usually end in `\n`, which MiniJinja would strip
    /// by default.
    fn environment<'source>() -> Environment<'source> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Compiles `template` once and renders it for every context.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to compile or render
    fn render_all(&self, template: &str, contexts: &[serde_json::Value]) -> Result<Vec<String>> {
        let env = Self::environment();
        let tmpl = env.template_from_str(template)?;
        let mut rendered = Vec::with_capacity(contexts.len());
        for context in contexts {
            rendered.push(tmpl.render(context)?);
        }
        Ok(rendered)
    }
}

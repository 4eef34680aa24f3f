//! Template rendering for ggen.
//! Entry names and file contents both go through the same MiniJinja environment,
//! extended with string case and inflection filters.
use cruet::Inflector;
use minijinja::value::{Value, ValueKind};
use minijinja::{escape_formatter, Environment, Output, State};
use std::fmt::Write;

use crate::context::Vars;
use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Variables available to the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &Vars) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the string helper filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_formatter(format_value);

        env.add_filter("camel_case", |value: String| value.to_camel_case());
        env.add_filter("pascal_case", |value: String| value.to_pascal_case());
        env.add_filter("snake_case", |value: String| value.to_snake_case());
        env.add_filter("kebab_case", |value: String| value.to_kebab_case());
        env.add_filter("screaming_snake_case", |value: String| {
            value.to_screaming_snake_case()
        });
        env.add_filter("train_case", |value: String| value.to_train_case());
        env.add_filter("title_case", |value: String| value.to_title_case());
        env.add_filter("sentence_case", |value: String| value.to_sentence_case());
        env.add_filter("plural", |value: String| value.to_plural());
        env.add_filter("singular", |value: String| value.to_singular());

        Self { env }
    }
}

/// Prints values the way JavaScript string interpolation does. `none` prints nothing
/// and booleans print lowercase. Infinite numbers print as `Infinity`.
fn format_value(
    out: &mut Output<'_>,
    state: &State<'_, '_>,
    value: &Value,
) -> std::result::Result<(), minijinja::Error> {
    match value.kind() {
        ValueKind::None | ValueKind::Undefined => Ok(()),
        ValueKind::Bool => Ok(out.write_str(if value.is_true() { "true" } else { "false" })?),
        ValueKind::Number => match f64::try_from(value.clone()) {
            Ok(number) if number == f64::INFINITY => Ok(out.write_str("Infinity")?),
            Ok(number) if number == f64::NEG_INFINITY => Ok(out.write_str("-Infinity")?),
            _ => escape_formatter(out, state, value),
        },
        _ => escape_formatter(out, state, value),
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or fails to render
    fn render(&self, template: &str, context: &Vars) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }
}

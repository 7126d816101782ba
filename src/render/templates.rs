use super::{IndicatorStyle, Row};
use minijinja::{context, AutoEscape, Environment};
use thiserror::Error;

const LIST_TEMPLATE: &str = "list.html";
const PAGE_TEMPLATE: &str = "page.html";

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid template '{name}': {message}")]
    InvalidTemplate { name: &'static str, message: String },

    #[error("template '{name}' failed to render: {message}")]
    RenderFailed { name: &'static str, message: String },
}

fn environment() -> Result<Environment<'static>, RenderError> {
    let mut env = Environment::new();
    // Titles are free text; everything interpolated is HTML-escaped.
    env.set_auto_escape_callback(|_| AutoEscape::Html);
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);

    for (name, source) in [
        (LIST_TEMPLATE, include_str!("templates/list.html")),
        (PAGE_TEMPLATE, include_str!("templates/page.html")),
    ] {
        env.add_template(name, source)
            .map_err(|e| RenderError::InvalidTemplate {
                name,
                message: e.to_string(),
            })?;
    }
    Ok(env)
}

fn render(name: &'static str, ctx: minijinja::Value) -> Result<String, RenderError> {
    let env = environment()?;
    let template = env
        .get_template(name)
        .map_err(|e| RenderError::InvalidTemplate {
            name,
            message: e.to_string(),
        })?;
    template.render(ctx).map_err(|e| RenderError::RenderFailed {
        name,
        message: e.to_string(),
    })
}

pub(crate) fn list(rows: &[Row<'_>], style: IndicatorStyle) -> Result<String, RenderError> {
    render(
        LIST_TEMPLATE,
        context! {
            rows => rows,
            style => style.as_str(),
        },
    )
}

pub(crate) fn page(
    heading: &str,
    rows: &[Row<'_>],
    style: IndicatorStyle,
) -> Result<String, RenderError> {
    render(
        PAGE_TEMPLATE,
        context! {
            heading => heading,
            legend => style.legend(),
            rows => rows,
            style => style.as_str(),
        },
    )
}

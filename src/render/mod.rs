//! HTML rendering for element trees and pages.
//!
//! This module provides [`HtmlRenderer`], which compiles the built-in
//! templates once and renders [`Element`] trees and [`Page`]s with them.
//!
//! # Escaping
//!
//! Templates are registered under `.html` names, so minijinja's HTML
//! auto-escaping applies to every interpolated text node and attribute
//! value. The only unescaped content is [`Block::Markup`], which the site
//! supplies as trusted markup.

mod templates;

use minijinja::{context, Environment, Value};

use crate::document::{Block, Document, Element, Page};

/// Error returned when a template fails to compile or render.
#[derive(Debug, thiserror::Error)]
#[error("failed to render html: {0}")]
pub struct RenderError(#[from] minijinja::Error);

/// A renderer with the element and page templates pre-registered.
///
/// # Example
///
/// ```rust
/// use colorscheme::{Element, HtmlRenderer};
///
/// let renderer = HtmlRenderer::new().unwrap();
/// let html = renderer
///     .render_element(&Element::new("a").attr("href", "/?a=1&b=2").text("<Home>"))
///     .unwrap();
/// assert!(html.starts_with("<a href="));
/// assert!(html.contains("a=1&amp;b=2"));
/// assert!(html.ends_with(">&lt;Home&gt;</a>"));
/// ```
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Creates a renderer, compiling the built-in templates.
    pub fn new() -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.add_template(templates::ELEMENT_NAME, templates::ELEMENT)?;
        env.add_template(templates::PAGE_NAME, templates::PAGE)?;
        Ok(Self { env })
    }

    /// Renders a single element tree.
    pub fn render_element(&self, element: &Element) -> Result<String, RenderError> {
        let template = self.env.get_template(templates::ELEMENT_NAME)?;
        Ok(template.render(context! { root => element })?)
    }

    /// Renders a complete page, including its root `color-scheme` style.
    pub fn render_page(&self, page: &Page) -> Result<String, RenderError> {
        let body = page
            .body()
            .iter()
            .map(|block| match block {
                Block::Control { element, .. } | Block::Element(element) => {
                    self.render_element(element).map(Value::from_safe_string)
                }
                Block::Markup(markup) => Ok(Value::from_safe_string(markup.clone())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let template = self.env.get_template(templates::PAGE_NAME)?;
        Ok(template.render(context! {
            title => page.title(),
            lang => page.lang(),
            color_scheme => page.color_scheme().map(|scheme| scheme.as_str()),
            body => body,
        })?)
    }
}

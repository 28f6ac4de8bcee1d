//! In-memory page implementing [`Document`].

use super::{Document, Element};
use crate::scheme::ColorScheme;

/// A top-level block in the page body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A control mounted by id through [`Document::mount_control`].
    Control { id: String, element: Element },
    /// A structured element appended by the site.
    Element(Element),
    /// Trusted, pre-rendered site markup. It is emitted verbatim.
    Markup(String),
}

/// A static page held in memory.
///
/// `Page` plays the browser document's role for server-side rendering and
/// for tests: the controller sets its root `color-scheme` and mounts the
/// selector into its body, and [`HtmlRenderer::render_page`](crate::HtmlRenderer::render_page)
/// turns it into HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    title: String,
    lang: String,
    color_scheme: Option<ColorScheme>,
    body: Vec<Block>,
}

impl Page {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            lang: "en".to_string(),
            color_scheme: None,
            body: Vec::new(),
        }
    }

    /// Sets the document language, returning the page for chaining.
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }

    /// Appends a structured element to the body.
    pub fn push_element(&mut self, element: Element) {
        self.body.push(Block::Element(element));
    }

    /// Appends trusted markup to the body.
    pub fn push_markup(&mut self, markup: impl Into<String>) {
        self.body.push(Block::Markup(markup.into()));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn body(&self) -> &[Block] {
        &self.body
    }

    /// Returns the control mounted under `id`.
    pub fn control(&self, id: &str) -> Option<&Element> {
        self.body.iter().find_map(|block| match block {
            Block::Control { id: mounted, element } if mounted == id => Some(element),
            _ => None,
        })
    }

    /// Number of controls mounted under `id`.
    pub fn control_count(&self, id: &str) -> usize {
        self.body
            .iter()
            .filter(|block| matches!(block, Block::Control { id: mounted, .. } if mounted == id))
            .count()
    }
}

impl Document for Page {
    fn color_scheme(&self) -> Option<ColorScheme> {
        self.color_scheme
    }

    fn set_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_scheme = Some(scheme);
    }

    fn clear_color_scheme(&mut self) {
        self.color_scheme = None;
    }

    fn mount_control(&mut self, id: &str, element: Element) {
        let block = Block::Control {
            id: id.to_string(),
            element,
        };
        let existing = self
            .body
            .iter()
            .position(|b| matches!(b, Block::Control { id: mounted, .. } if mounted == id));

        match existing {
            Some(index) => self.body[index] = block,
            None => self.body.insert(0, block),
        }
    }
}

//! Document model for the theme controller.
//!
//! This module provides:
//!
//! - [`Document`]: The seam through which the controller mutates a page
//! - [`Element`] / [`Node`]: Structured markup built with a fluent builder
//! - [`Page`]: An in-memory document that renders to HTML
//!
//! Markup is never assembled by string concatenation. Text and attribute
//! values stay structured until rendering, where they are escaped.

mod element;
mod page;

pub use element::{Element, Node};
pub use page::{Block, Page};

use crate::scheme::ColorScheme;

/// A page the controller can apply a color scheme to and mount controls in.
///
/// Implement this for whatever hosts the page: the in-memory [`Page`], a
/// server-side renderer, or a browser binding.
pub trait Document {
    /// The value of the root element's `color-scheme` property, if set.
    fn color_scheme(&self) -> Option<ColorScheme>;

    /// Sets the root element's `color-scheme` property.
    fn set_color_scheme(&mut self, scheme: ColorScheme);

    /// Removes the root element's `color-scheme` property, restoring the
    /// page's default appearance.
    fn clear_color_scheme(&mut self);

    /// Mounts `element` as the first child of the body.
    ///
    /// If a control with the same `id` is already mounted, it is replaced in
    /// place instead, so remounting never duplicates a control.
    fn mount_control(&mut self, id: &str, element: Element);
}

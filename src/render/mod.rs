//! HTML rendering for portal pages.
//!
//! Three pure functions: [`render_styles`] builds the inline stylesheet,
//! [`render_footer`] the attribution line, and [`render_page`] puts both
//! around a screen's content fragment. None of them fail, allocate anything
//! shared, or read anything but the theme they are given.

mod footer;
mod page;
mod styles;

pub use footer::render_footer;
pub use page::{render_page, PageRequest};
pub use styles::render_styles;

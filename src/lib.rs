//! Captive-portal page rendering for embedded Wi-Fi setup.
//!
//! The core is [`render`]: pure functions that turn a [`ThemeConfig`] and a
//! screen's HTML fragment into one self-contained page. The rest of the
//! crate is a small portal around it (screens, credential store, device
//! status and a `tiny_http` server).

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod render;
pub mod runtime;
pub mod store;
pub mod telemetry;
pub mod theme;

pub use error::{PortalError, Result};
pub use render::{render_footer, render_page, render_styles, PageRequest};
pub use theme::{ThemeConfig, ThemePreset};

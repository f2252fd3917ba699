use crate::theme::ThemeConfig;

use super::{render_footer, render_styles};

const PAGE_LANG: &str = "en";

const FAVICON: &str = r#"<link rel='icon' href='data:image/svg+xml,<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100"><text y=".9em" font-size="90">📶</text></svg>'>"#;

/// One render call: a screen title plus its pre-rendered body fragment.
#[derive(Debug, Clone, Copy)]
pub struct PageRequest<'a> {
    pub title: &'a str,
    /// Trusted HTML, inserted as-is.
    pub body_content: &'a str,
}

impl<'a> PageRequest<'a> {
    pub fn new(title: &'a str, body_content: &'a str) -> Self {
        Self {
            title,
            body_content,
        }
    }

    pub fn render(&self, theme: &ThemeConfig) -> String {
        render_page(self.title, self.body_content, theme)
    }
}

/// Compose a complete HTML document around `body_content`.
///
/// The document title is `"{title} - {app_title}"`. `body_content` is not
/// escaped; whoever builds the fragment must escape user-supplied values.
pub fn render_page(title: &str, body_content: &str, theme: &ThemeConfig) -> String {
    format!(
        concat!(
            "<!DOCTYPE html><html lang='{lang}'><head>",
            "<meta name='viewport' content='width=device-width,user-scalable=0'>",
            "<meta charset='UTF-8'>",
            "<title>{title} - {app_title}</title>",
            "{favicon}",
            "{styles}",
            "</head><body>",
            "<div class='container'>",
            "{body_content}",
            "{footer}",
            "</div>",
            "</body></html>"
        ),
        lang = PAGE_LANG,
        title = title,
        app_title = theme.app_title,
        favicon = FAVICON,
        styles = render_styles(theme),
        body_content = body_content,
        footer = render_footer(theme),
    )
}

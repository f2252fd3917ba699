use crate::theme::ThemeConfig;

const COPYRIGHT_PREFIX: &str = "© 2025";

/// Render the attribution footer.
///
/// The author is linked (opening a new tab) only when `author_url` is set.
pub fn render_footer(theme: &ThemeConfig) -> String {
    let attribution = if theme.author_url.is_empty() {
        theme.author_name.clone()
    } else {
        format!(
            "<a href='{url}' target='_blank'>{name}</a>",
            url = theme.author_url,
            name = theme.author_name
        )
    };

    format!("<div class='footer'>{COPYRIGHT_PREFIX} {attribution}. All rights reserved.</div>")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn theme(name: &str, url: &str) -> ThemeConfig {
        ThemeConfig {
            author_name: name.to_string(),
            author_url: url.to_string(),
            ..ThemeConfig::default()
        }
    }

    #[test]
    fn test_footer_with_url_links_author() {
        let footer = render_footer(&theme("Alice", "https://example.com"));
        assert_eq!(
            footer,
            "<div class='footer'>© 2025 <a href='https://example.com' target='_blank'>Alice</a>. All rights reserved.</div>"
        );
        assert_eq!(footer.matches("<a ").count(), 1);
    }

    #[test]
    fn test_footer_without_url_is_plain_text() {
        let footer = render_footer(&theme("Alice", ""));
        assert_eq!(
            footer,
            "<div class='footer'>© 2025 Alice. All rights reserved.</div>"
        );
        assert!(!footer.contains("<a"));
    }
}

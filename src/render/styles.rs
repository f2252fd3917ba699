use crate::theme::ThemeConfig;

/// Render the inline `<style>` block for a page.
///
/// Only the theme's color and length fields are interpolated; everything else
/// is fixed. Values go in verbatim, so an empty field yields an empty
/// declaration such as `border-radius:;`.
pub fn render_styles(theme: &ThemeConfig) -> String {
    // Literal braces are doubled because `format!` uses `{}`.
    format!(
        concat!(
            "<style>",
            "body{{font-family:Arial,sans-serif;",
            "background:linear-gradient(135deg,{primary_start},{primary_end});",
            "min-height:100vh;display:flex;align-items:center;justify-content:center;",
            "margin:0;padding:20px;box-sizing:border-box;}}",
            ".container{{box-sizing:border-box;background:rgba(255,255,255,0.95);",
            "border-radius:{border_radius};padding:40px;",
            "box-shadow:0 25px 50px rgba(0,0,0,0.25);backdrop-filter:blur(10px);",
            "max-width:{container_max_width};width:100%;",
            "animation:slideIn 0.5s ease-out;}}",
            "@keyframes slideIn{{",
            "from{{opacity:0;transform:translateY(30px);}}",
            "to{{opacity:1;transform:translateY(0);}}}}",
            "h1{{text-align:center;color:#2d3748;margin-bottom:30px;",
            "font-size:28px;font-weight:bold;}}",
            ".btn{{width:100%;padding:{button_padding} 0px;",
            "background:linear-gradient(135deg,{secondary_start},{secondary_end});",
            "color:white;border:none;border-radius:12px;font-size:16px;font-weight:600;",
            "cursor:pointer;margin-top:10px;transition:all 0.3s ease;",
            "text-decoration:none;display:block;text-align:center;}}",
            ".btn:hover{{transform:translateY(-2px);box-shadow:0 8px 25px rgba(0,0,0,0.15);}}",
            ".btn-danger{{background:linear-gradient(135deg,{danger_start},{danger_end});}}",
            "input,select{{width:100%;padding:{input_padding};border:2px solid #e2e8f0;",
            "border-radius:12px;font-size:16px;margin-bottom:20px;box-sizing:border-box;",
            "transition:border-color 0.3s ease;}}",
            "input:focus,select:focus{{outline:none;border-color:{primary_start};",
            "box-shadow:0 0 0 3px rgba(102,126,234,0.1);}}",
            ".info{{background:rgba(59,130,246,0.1);border:1px solid rgba(59,130,246,0.2);",
            "border-radius:8px;padding:16px;margin:16px 0;color:#1e40af;}}",
            ".success{{background:rgba(34,197,94,0.1);border:1px solid rgba(34,197,94,0.2);",
            "border-radius:8px;padding:16px;margin:16px 0;color:#166534;}}",
            ".footer{{text-align:center;margin-top:30px;padding-top:20px;",
            "border-top:1px solid #e2e8f0;color:#64748b;font-size:14px;}}",
            ".footer a{{color:{primary_start};text-decoration:none;}}",
            "@media (max-width:600px){{",
            ".container{{padding:20px;margin:10px;}}",
            "h1{{font-size:24px;}}}}",
            "</style>"
        ),
        primary_start = theme.primary_start,
        primary_end = theme.primary_end,
        secondary_start = theme.secondary_start,
        secondary_end = theme.secondary_end,
        danger_start = theme.danger_start,
        danger_end = theme.danger_end,
        border_radius = theme.border_radius,
        container_max_width = theme.container_max_width,
        button_padding = theme.button_padding,
        input_padding = theme.input_padding,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Split the stylesheet into its top-level `(selector, body)` blocks.
    fn top_level_blocks(css: &str) -> Vec<(String, String)> {
        let inner = css
            .strip_prefix("<style>")
            .and_then(|s| s.strip_suffix("</style>"))
            .expect("stylesheet is wrapped in a style element");

        let mut blocks = Vec::new();
        let mut depth = 0usize;
        let mut selector = String::new();
        let mut body = String::new();
        for ch in inner.chars() {
            match ch {
                '{' => {
                    if depth > 0 {
                        body.push(ch);
                    }
                    depth += 1;
                }
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        blocks.push((std::mem::take(&mut selector), std::mem::take(&mut body)));
                    } else {
                        body.push(ch);
                    }
                }
                _ if depth == 0 => selector.push(ch),
                _ => body.push(ch),
            }
        }
        assert_eq!(depth, 0, "unbalanced braces");
        blocks
    }

    #[test]
    fn test_selectors_in_fixed_order() {
        let css = render_styles(&ThemeConfig::default());
        let selectors: Vec<String> = top_level_blocks(&css).into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            selectors,
            vec![
                "body",
                ".container",
                "@keyframes slideIn",
                "h1",
                ".btn",
                ".btn:hover",
                ".btn-danger",
                "input,select",
                "input:focus,select:focus",
                ".info",
                ".success",
                ".footer",
                ".footer a",
                "@media (max-width:600px)",
            ]
        );
    }

    #[test]
    fn test_theme_values_land_in_their_blocks() {
        let theme = ThemeConfig {
            primary_start: "#111111".to_string(),
            primary_end: "#222222".to_string(),
            secondary_start: "#333333".to_string(),
            secondary_end: "#444444".to_string(),
            danger_start: "#555555".to_string(),
            danger_end: "#666666".to_string(),
            container_max_width: "512px".to_string(),
            border_radius: "7px".to_string(),
            button_padding: "9px".to_string(),
            input_padding: "11px".to_string(),
            ..ThemeConfig::default()
        };
        let css = render_styles(&theme);
        let blocks = top_level_blocks(&css);
        let body_of = |sel: &str| {
            blocks
                .iter()
                .find(|(s, _)| s == sel)
                .map(|(_, b)| b.clone())
                .unwrap_or_else(|| panic!("missing block {sel}"))
        };

        assert!(body_of("body").contains("linear-gradient(135deg,#111111,#222222)"));
        assert!(body_of(".container").contains("border-radius:7px;"));
        assert!(body_of(".container").contains("max-width:512px;"));
        assert!(body_of(".btn").contains("padding:9px 0px;"));
        assert!(body_of(".btn").contains("linear-gradient(135deg,#333333,#444444)"));
        assert!(body_of(".btn-danger").contains("linear-gradient(135deg,#555555,#666666)"));
        assert!(body_of("input,select").contains("padding:11px;"));
        assert!(body_of("input:focus,select:focus").contains("border-color:#111111;"));
        assert!(body_of(".footer a").contains("color:#111111;"));
    }

    #[test]
    fn test_fixed_blocks_ignore_theme() {
        let a = top_level_blocks(&render_styles(&ThemeConfig::default()));
        let b = top_level_blocks(&render_styles(
            &ThemeConfig::default().with_preset(crate::theme::ThemePreset::PinkPurple),
        ));
        for sel in ["@keyframes slideIn", "h1", ".info", ".success", ".footer"] {
            let pick = |blocks: &[(String, String)]| {
                blocks.iter().find(|(s, _)| s == sel).cloned()
            };
            assert_eq!(pick(&a), pick(&b), "{sel} should not depend on the theme");
        }
    }

    #[test]
    fn test_empty_length_yields_empty_declaration() {
        let theme = ThemeConfig {
            border_radius: String::new(),
            ..ThemeConfig::default()
        };
        let css = render_styles(&theme);
        assert!(css.contains("border-radius:;"));
        top_level_blocks(&css);
    }

    #[test]
    fn test_render_styles_is_deterministic() {
        let theme = ThemeConfig::default();
        assert_eq!(render_styles(&theme), render_styles(&theme));
    }
}

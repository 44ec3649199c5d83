//! CSS custom properties derived from the global theme.
//!
//! Renderers apply the site palette by injecting these variables into the
//! document root; this module only produces them.

use std::fmt::Write;

use crate::document::GlobalConfig;

/// Returns `(--role, color)` pairs for every configured color role.
///
/// Theme colors come first, then functional colors, then neutral colors.
/// Within a palette roles keep their authored order.
pub fn css_variables(config: &GlobalConfig) -> Vec<(String, String)> {
    [&config.theme_color, &config.functional_color, &config.neutral_color]
        .into_iter()
        .flat_map(|palette| palette.iter())
        .map(|(role, color)| (format!("--{role}"), color.to_string()))
        .collect()
}

/// Renders the palette as a `:root` style block.
pub fn root_style(config: &GlobalConfig) -> String {
    let mut style = String::from(":root {\n");
    for (name, value) in css_variables(config) {
        // Writing to a String cannot fail.
        let _ = writeln!(style, "  {name}: {value};");
    }
    style.push('}');
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Palette;

    fn palette(pairs: &[(&str, &str)]) -> Palette {
        pairs
            .iter()
            .map(|(role, color)| (role.to_string(), color.to_string()))
            .collect()
    }

    fn config() -> GlobalConfig {
        GlobalConfig {
            theme_color: palette(&[("brand", "#0052FF"), ("hover", "#3366FF")]),
            functional_color: palette(&[("error", "#F04438")]),
            neutral_color: palette(&[("primaryText", "#101828")]),
            ..GlobalConfig::default()
        }
    }

    #[test]
    fn test_css_variables_order() {
        let names: Vec<_> = css_variables(&config())
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["--brand", "--hover", "--error", "--primaryText"]);
    }

    #[test]
    fn test_css_variables_keep_authored_role_order() {
        let config = GlobalConfig {
            theme_color: palette(&[
                ("brand", "#0052FF"),
                ("hover", "#3366FF"),
                ("normal", "#0052FF"),
                ("click", "#0041CC"),
                ("disable", "#99B9FF"),
            ]),
            ..GlobalConfig::default()
        };
        let names: Vec<_> = css_variables(&config)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(
            names,
            vec!["--brand", "--hover", "--normal", "--click", "--disable"]
        );
    }

    #[test]
    fn test_root_style() {
        assert_eq!(
            root_style(&config()),
            ":root {\n  --brand: #0052FF;\n  --hover: #3366FF;\n  --error: #F04438;\n  --primaryText: #101828;\n}"
        );
    }

    #[test]
    fn test_empty_theme() {
        let config = GlobalConfig::default();
        assert!(css_variables(&config).is_empty());
        assert_eq!(root_style(&config), ":root {\n}");
    }
}

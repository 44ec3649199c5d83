//! Pretty output formatting.

use sitecms_core::document::{Footer, GlobalConfig, Header, Module, Page, Palette, TopMenu};

fn format_palette(name: &str, palette: &Palette) -> String {
    let mut output = format!("  {} ({})", name, palette.len());
    for (role, color) in palette.iter() {
        output.push_str(&format!("\n    {}: {}", role, color));
    }
    output
}

/// Format the global config for display.
pub fn format_global_config(config: &GlobalConfig) -> String {
    let meta = &config.meta;
    let mut output = meta.title.as_deref().unwrap_or("(untitled)").to_string();
    if !meta.favicon.is_empty() {
        output.push_str(&format!("\n  Favicon: {}", meta.favicon));
    }
    if let Some(description) = &meta.description {
        output.push_str(&format!("\n  Description: {}", description));
    }
    if let Some(keywords) = &meta.keywords {
        output.push_str(&format!("\n  Keywords: {}", keywords));
    }
    output.push('\n');
    output.push_str(&format_palette("Theme colors", &config.theme_color));
    output.push('\n');
    output.push_str(&format_palette("Functional colors", &config.functional_color));
    output.push('\n');
    output.push_str(&format_palette("Neutral colors", &config.neutral_color));
    output
}

fn format_menu(menus: &[TopMenu]) -> String {
    if menus.is_empty() {
        return "  No menu entries.".to_string();
    }
    let mut output = format!("  MENU ({})", menus.len());
    for menu in menus {
        output.push_str(&format!(
            "\n  - {} [{:?}]",
            menu.entry.title, menu.entry.nav_type
        ));
        if let Some(path) = &menu.entry.path {
            output.push_str(&format!(" {}", path));
        }
        for child in &menu.children {
            output.push_str(&format!("\n      {} [{:?}]", child.title, child.nav_type));
            if let Some(path) = &child.path {
                output.push_str(&format!(" {}", path));
            }
        }
    }
    output
}

/// Format the header for display.
pub fn format_header(header: &Header) -> String {
    let mut output = format!("HEADER ({})", header.layout.as_deref().unwrap_or("default"));
    if !header.logo_url.is_empty() {
        output.push_str(&format!("\n  Logo: {}", header.logo_url));
    }
    if let Some(button) = &header.action_button {
        output.push_str(&format!(
            "\n  Action: {} -> {}",
            button.text.as_deref().unwrap_or(""),
            button.link_url.as_deref().unwrap_or("")
        ));
    }
    output.push('\n');
    output.push_str(&format_menu(&header.menu_list));
    output
}

/// Format the footer for display.
pub fn format_footer(footer: &Footer) -> String {
    let mut output = format!("FOOTER\n  Powered by: {}", footer.power_name);
    if !footer.logo_url.is_empty() {
        output.push_str(&format!("\n  Logo: {}", footer.logo_url));
    }
    output.push('\n');
    output.push_str(&format_menu(&footer.menu_list));
    for social in &footer.social_media_list {
        output.push_str(&format!(
            "\n  @ {} {}",
            social.name,
            social.link.as_deref().unwrap_or("")
        ));
    }
    output
}

/// Format a module for display.
pub fn format_module(module: &Module) -> String {
    let mut output = format!(
        "{} {}",
        module.key().as_str(),
        module.title().unwrap_or("(untitled)")
    );
    let detail = match module {
        Module::Brand(brand) => format!(
            "{} buttons, {} descriptions",
            brand.button_list.len(),
            brand.description_list.len()
        ),
        Module::GraphicText(graphic) => format!("{} descriptions", graphic.description_list.len()),
        Module::CardList(cards) => format!("{} cards", cards.data_array.len()),
        Module::Partners(partners) => format!("{} partners", partners.list.len()),
    };
    output.push_str(&format!("\n    {}", detail));
    output
}

/// Format a page lookup result for display.
pub fn format_page(key: &str, page: Option<&Page>) -> String {
    let Some(page) = page else {
        return format!("No published page found for key '{}'.", key);
    };
    let mut output = format!("PAGE {} ({} modules)\n", page.key, page.module_list.len());
    output.push_str(&"-".repeat(40));
    for module in &page.module_list {
        output.push_str(&format!("\n  {}", format_module(module)));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecms_core::document::{ModuleStyles, PartnersModule};

    #[test]
    fn test_format_page_miss() {
        assert_eq!(
            format_page("pricing", None),
            "No published page found for key 'pricing'."
        );
    }

    #[test]
    fn test_format_page() {
        let page = Page {
            key: "home".to_string(),
            status: "published".to_string(),
            module_list: vec![Module::Partners(PartnersModule {
                index: 0,
                title: Some("Partners".to_string()),
                list: Vec::new(),
                styles: ModuleStyles::default(),
            })],
        };
        let output = format_page("home", Some(&page));
        assert!(output.starts_with("PAGE home (1 modules)"));
        assert!(output.contains("PartnersModule Partners\n    0 partners"));
    }

    #[test]
    fn test_format_empty_footer() {
        let footer = Footer {
            power_name: "Example Labs".to_string(),
            logo_url: String::new(),
            menu_list: Vec::new(),
            social_media_list: Vec::new(),
            background_color: None,
            dividing_line_color: None,
        };
        assert_eq!(
            format_footer(&footer),
            "FOOTER\n  Powered by: Example Labs\n  No menu entries."
        );
    }
}

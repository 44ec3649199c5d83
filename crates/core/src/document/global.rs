use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Site-wide theme and metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    pub meta: SiteMeta,
    pub theme_color: Palette,
    pub functional_color: Palette,
    pub neutral_color: Palette,
}

/// Document head metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMeta {
    /// Absolute favicon URL, empty when none is configured.
    pub favicon: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
}

/// Mapping from a semantic color role (e.g. `brand`, `primaryText`) to a
/// color value, in the order the roles were authored.
///
/// Values are passed through as authored; roles the CMS leaves unset are
/// absent so the renderer can fall back to its own defaults. Serialized as a
/// JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette(Vec<(String, String)>);

impl Palette {
    /// Returns the color for a role.
    pub fn get(&self, role: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == role)
            .map(|(_, color)| color.as_str())
    }

    /// Iterates over `(role, color)` pairs in authored order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(role, color)| (role.as_str(), color.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Later pairs replace earlier ones for the same role, keeping its position.
impl FromIterator<(String, String)> for Palette {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut roles: Vec<(String, String)> = Vec::new();
        for (role, color) in iter {
            match roles.iter_mut().find(|(name, _)| *name == role) {
                Some(existing) => existing.1 = color,
                None => roles.push((role, color)),
            }
        }
        Self(roles)
    }
}

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (role, color) in &self.0 {
            map.serialize_entry(role, color)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PaletteVisitor;

        impl<'de> Visitor<'de> for PaletteVisitor {
            type Value = Palette;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of color roles to colors")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Palette, A::Error> {
                let mut roles = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    roles.push(entry);
                }
                Ok(roles.into_iter().collect())
            }
        }

        deserializer.deserialize_map(PaletteVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        [("brand", "#0052FF"), ("hover", "#3366FF"), ("click", "#0041CC")]
            .into_iter()
            .map(|(role, color)| (role.to_string(), color.to_string()))
            .collect()
    }

    #[test]
    fn test_palette_keeps_authored_order() {
        let palette_value = palette();
        let roles: Vec<_> = palette_value.iter().map(|(role, _)| role).collect();
        assert_eq!(roles, vec!["brand", "hover", "click"]);
        assert_eq!(palette().get("hover"), Some("#3366FF"));
        assert_eq!(palette().get("disable"), None);
    }

    #[test]
    fn test_palette_json_keeps_order() {
        let json = serde_json::to_string(&palette()).unwrap();
        assert_eq!(
            json,
            r##"{"brand":"#0052FF","hover":"#3366FF","click":"#0041CC"}"##
        );
        let back: Palette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette());
    }

    #[test]
    fn test_palette_duplicate_role_keeps_position() {
        let palette: Palette = [("brand", "#000"), ("hover", "#111"), ("brand", "#222")]
            .into_iter()
            .map(|(role, color)| (role.to_string(), color.to_string()))
            .collect();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.iter().next(), Some(("brand", "#222")));
    }
}

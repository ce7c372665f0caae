//! Organization customization (white-label theming) records.
//!
//! A [`Customization`] is authored by an administrator on the backend and
//! fetched read-only by clients. [`Customization::default`] is the built-in
//! record used whenever the backend cannot supply one, so every theme
//! variable always has a value.

use serde::{Deserialize, Serialize};

use crate::palette::normalize_hex_color;

/// The nine configurable colors, each a `#RRGGBB` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub sidebar: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub button_primary: String,
    pub button_text: String,
}

impl ThemeColors {
    /// `(name, value)` pairs in a stable order. Names use the backend's
    /// snake_case keys.
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("sidebar", &self.sidebar),
            ("text_primary", &self.text_primary),
            ("text_secondary", &self.text_secondary),
            ("button_primary", &self.button_primary),
            ("button_text", &self.button_text),
        ]
    }

    /// The three brand colors that expand into shade ramps.
    pub fn brand(&self) -> [(&'static str, &str); 3] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
        ]
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#0ea5e9".to_string(),
            secondary: "#d946ef".to_string(),
            accent: "#8b5cf6".to_string(),
            background: "#ffffff".to_string(),
            sidebar: "#ffffff".to_string(),
            text_primary: "#111827".to_string(),
            text_secondary: "#6b7280".to_string(),
            button_primary: "#0ea5e9".to_string(),
            button_text: "#ffffff".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Typography {
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default = "default_font_size_base")]
    pub font_size_base: String,
    #[serde(default = "default_font_size_heading")]
    pub font_size_heading: String,
}

fn default_font_size_base() -> String {
    "14px".to_string()
}
fn default_font_size_heading() -> String {
    "24px".to_string()
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: Some("Inter, system-ui, -apple-system, sans-serif".to_string()),
            font_size_base: default_font_size_base(),
            font_size_heading: default_font_size_heading(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default = "default_border_radius")]
    pub border_radius: String,
    #[serde(default = "default_spacing_unit")]
    pub spacing_unit: String,
}

fn default_border_radius() -> String {
    "8px".to_string()
}
fn default_spacing_unit() -> String {
    "16px".to_string()
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            border_radius: default_border_radius(),
            spacing_unit: default_spacing_unit(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub app_tagline: Option<String>,
}

/// A complete customization record as returned by
/// `GET /customization/current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(alias = "organization_id", default = "default_organization")]
    pub organization_name: String,
    pub colors: ThemeColors,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub branding: Branding,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub logo_dark_url: Option<String>,
    #[serde(default)]
    pub favicon_url: Option<String>,
    #[serde(default)]
    pub custom_settings: serde_json::Value,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_organization() -> String {
    "default".to_string()
}
fn default_active() -> bool {
    true
}

impl Default for Customization {
    fn default() -> Self {
        Self {
            id: None,
            organization_name: default_organization(),
            colors: ThemeColors::default(),
            typography: Typography::default(),
            layout: Layout::default(),
            branding: Branding {
                app_name: Some("Mentanova".to_string()),
                app_tagline: Some("AI Knowledge Assistant".to_string()),
            },
            logo_url: None,
            logo_dark_url: None,
            favicon_url: None,
            custom_settings: serde_json::json!({}),
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Partial update sent to `PUT /admin/customization`.
///
/// Only fields that are `Some` are serialized, matching the backend's
/// `exclude_unset` handling.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CustomizationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_secondary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_settings: Option<serde_json::Value>,
}

impl CustomizationUpdate {
    /// Check every supplied color and the text length limits, lowercasing
    /// colors in place.
    ///
    /// Returns the offending field name and a message on the first failure.
    pub fn normalize(&mut self) -> Result<(), (&'static str, String)> {
        let colors: [(&'static str, &mut Option<String>); 9] = [
            ("primary_color", &mut self.primary_color),
            ("secondary_color", &mut self.secondary_color),
            ("accent_color", &mut self.accent_color),
            ("background_color", &mut self.background_color),
            ("sidebar_color", &mut self.sidebar_color),
            ("text_primary_color", &mut self.text_primary_color),
            ("text_secondary_color", &mut self.text_secondary_color),
            ("button_primary_color", &mut self.button_primary_color),
            ("button_text_color", &mut self.button_text_color),
        ];
        for (field, value) in colors {
            if let Some(raw) = value.as_deref() {
                match normalize_hex_color(raw) {
                    Some(hex) => *value = Some(hex),
                    None => {
                        return Err((
                            field,
                            format!("Invalid hex color: {}. Must be in format #RRGGBB", raw),
                        ))
                    }
                }
            }
        }
        if let Some(name) = &self.organization_name {
            let len = name.chars().count();
            if !(2..=255).contains(&len) {
                return Err((
                    "organization_name",
                    "must be between 2 and 255 characters".to_string(),
                ));
            }
        }
        if self.app_name.as_ref().is_some_and(|s| s.chars().count() > 255) {
            return Err(("app_name", "must be at most 255 characters".to_string()));
        }
        if self
            .app_tagline
            .as_ref()
            .is_some_and(|s| s.chars().count() > 512)
        {
            return Err(("app_tagline", "must be at most 512 characters".to_string()));
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Which branding image a logo upload targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoKind {
    Light,
    Dark,
    Favicon,
}

impl LogoKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LogoKind::Light => "light",
            LogoKind::Dark => "dark",
            LogoKind::Favicon => "favicon",
        }
    }
}

impl std::str::FromStr for LogoKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(LogoKind::Light),
            "dark" => Ok(LogoKind::Dark),
            "favicon" => Ok(LogoKind::Favicon),
            other => Err(format!(
                "invalid logo type '{}': must be light, dark, or favicon",
                other
            )),
        }
    }
}

/// Response of `POST /admin/customization/logo`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogoUploadResponse {
    pub message: String,
    /// Origin-relative path, e.g. `/uploads/branding/default_light_20250101_120000.png`.
    pub url: String,
    pub customization: Customization,
}

/// Response of `POST /admin/customization/reset`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResetResponse {
    pub message: String,
    pub customization: Customization,
}

/// Allowed branding image extensions (lowercase, without the dot).
pub const LOGO_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "svg", "ico"];

/// Maximum branding image size accepted by the backend.
pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_payload() {
        let json = serde_json::json!({
            "id": "4b1c",
            "organization_name": "acme",
            "logo_url": "/uploads/branding/acme_light.png",
            "logo_dark_url": null,
            "favicon_url": null,
            "colors": {
                "primary": "#112233", "secondary": "#445566", "accent": "#778899",
                "background": "#ffffff", "sidebar": "#fafafa",
                "text_primary": "#111111", "text_secondary": "#666666",
                "button_primary": "#112233", "button_text": "#ffffff"
            },
            "typography": { "font_family": null, "font_size_base": "15px", "font_size_heading": "26px" },
            "layout": { "border_radius": "4px", "spacing_unit": "12px" },
            "branding": { "app_name": "Acme Docs", "app_tagline": null },
            "custom_settings": {},
            "is_active": true,
            "created_at": "2025-01-01T00:00:00",
            "updated_at": "2025-01-02T00:00:00"
        });
        let c: Customization = serde_json::from_value(json).unwrap();
        assert_eq!(c.organization_name, "acme");
        assert_eq!(c.colors.sidebar, "#fafafa");
        assert_eq!(c.typography.font_family, None);
        assert_eq!(c.layout.spacing_unit, "12px");
        assert_eq!(c.branding.app_name.as_deref(), Some("Acme Docs"));
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let json = serde_json::json!({
            "organization_id": "org-7",
            "colors": ThemeColors::default(),
        });
        let c: Customization = serde_json::from_value(json).unwrap();
        assert_eq!(c.organization_name, "org-7");
        assert_eq!(c.typography.font_size_base, "14px");
        assert_eq!(c.layout.border_radius, "8px");
        assert!(c.is_active);
    }

    #[test]
    fn test_default_record_is_fully_populated() {
        let c = Customization::default();
        for (_, value) in c.colors.entries() {
            assert!(crate::palette::parse_hex(value).is_some());
        }
        assert!(c.typography.font_family.is_some());
        assert!(c.branding.app_name.is_some());
    }

    #[test]
    fn test_update_normalizes_colors() {
        let mut update = CustomizationUpdate {
            primary_color: Some("#AABBCC".to_string()),
            ..Default::default()
        };
        update.normalize().unwrap();
        assert_eq!(update.primary_color.as_deref(), Some("#aabbcc"));

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "primary_color": "#aabbcc" }));
    }

    #[test]
    fn test_update_rejects_bad_color() {
        let mut update = CustomizationUpdate {
            accent_color: Some("purple".to_string()),
            ..Default::default()
        };
        let (field, msg) = update.normalize().unwrap_err();
        assert_eq!(field, "accent_color");
        assert!(msg.contains("purple"));
    }

    #[test]
    fn test_update_rejects_short_org_name() {
        let mut update = CustomizationUpdate {
            organization_name: Some("a".to_string()),
            ..Default::default()
        };
        assert_eq!(update.normalize().unwrap_err().0, "organization_name");
    }

    #[test]
    fn test_logo_kind_parse() {
        assert_eq!("dark".parse::<LogoKind>().unwrap(), LogoKind::Dark);
        assert!("banner".parse::<LogoKind>().is_err());
    }
}

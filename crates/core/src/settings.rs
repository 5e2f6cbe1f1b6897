//! Metrics and limits shared by every menu.
//!
//! Settings can be built in code or, with the `serde` feature, loaded from a
//! RON file:
//!
//! ```ignore
//! use perch_core::Settings;
//!
//! let settings = Settings::load("menu.ron")?;
//! ```
use std::path::Path;

/// Tunables for popup placement and list layout, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Space kept free between a popup and the viewport edges.
    pub viewport_margin: f32,
    /// Preferred maximum popup height. The viewport may cap it further.
    pub max_height: f32,
    /// Maximum popup width.
    pub max_width: f32,
    /// Minimum width of submenu popups.
    pub submenu_min_width: f32,
    /// Gap between a trigger and its top-level popup.
    pub menu_offset: f32,
    /// Horizontal gap between a submenu and the item that opened it.
    pub submenu_offset: f32,
    /// Height of an item row.
    pub item_height: f32,
    /// Height of a section header row.
    pub header_height: f32,
    /// Height of a divider row.
    pub divider_height: f32,
    /// Padding above the first and below the last row.
    pub list_padding: f32,
    /// Width of the disclosure segment of a split trigger.
    pub disclosure_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            viewport_margin: 8.0,
            max_height: 480.0,
            max_width: 280.0,
            submenu_min_width: 112.0,
            menu_offset: 4.0,
            submenu_offset: 0.0,
            item_height: 32.0,
            header_height: 28.0,
            divider_height: 9.0,
            list_padding: 8.0,
            disclosure_width: 32.0,
        }
    }
}

/// An error produced while loading or validating [`Settings`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The settings file does not exist.
    #[error("settings file not found: {0}")]
    NotFound(String),
    /// The settings file could not be read.
    #[error("failed to read settings: {0}")]
    Read(String),
    /// The settings file could not be parsed.
    #[error("failed to parse settings: {0}")]
    Parse(String),
    /// The file extension is not supported.
    #[error("unsupported settings format: {0}")]
    UnsupportedFormat(String),
    /// A value is out of range.
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        /// The offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: &'static str,
    },
}

impl Settings {
    /// Loads [`Settings`] from a file.
    ///
    /// Only RON (`.ron`) is supported. Missing fields take their default.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::NotFound(path.display().to_string()));
        }

        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "ron" => {
                let content =
                    std::fs::read_to_string(path).map_err(|e| Error::Read(e.to_string()))?;

                let settings = Self::from_ron(&content)?;
                log::debug!("Loaded menu settings from {}", path.display());

                Ok(settings)
            }
            _ => Err(Error::UnsupportedFormat(extension.to_string())),
        }
    }

    /// Parses [`Settings`] from a RON string and validates them.
    #[cfg(feature = "serde")]
    pub fn from_ron(content: &str) -> Result<Self, Error> {
        let settings: Self = ron::from_str(content).map_err(|e| Error::Parse(e.to_string()))?;

        settings.validate()
    }

    /// Parses [`Settings`] from a RON string and validates them.
    #[cfg(not(feature = "serde"))]
    pub fn from_ron(_content: &str) -> Result<Self, Error> {
        Err(Error::UnsupportedFormat(
            "RON loading requires the 'serde' feature".to_string(),
        ))
    }

    /// Checks that every value is usable, returning the settings unchanged.
    pub fn validate(self) -> Result<Self, Error> {
        let non_negative = [
            ("viewport_margin", self.viewport_margin),
            ("menu_offset", self.menu_offset),
            ("submenu_offset", self.submenu_offset),
            ("header_height", self.header_height),
            ("divider_height", self.divider_height),
            ("list_padding", self.list_padding),
            ("disclosure_width", self.disclosure_width),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Invalid {
                    field,
                    reason: "must be a finite, non-negative number",
                });
            }
        }

        let positive = [
            ("max_height", self.max_height),
            ("max_width", self.max_width),
            ("item_height", self.item_height),
        ];

        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(Error::Invalid {
                    field,
                    reason: "must be greater than zero",
                });
            }
        }

        if self.max_width < self.submenu_min_width {
            return Err(Error::Invalid {
                field: "max_width",
                reason: "must not be smaller than `submenu_min_width`",
            });
        }

        Ok(self)
    }

    /// Sets the viewport margin.
    #[must_use]
    pub fn viewport_margin(mut self, margin: f32) -> Self {
        self.viewport_margin = margin;
        self
    }

    /// Sets the preferred maximum popup height.
    #[must_use]
    pub fn max_height(mut self, max_height: f32) -> Self {
        self.max_height = max_height;
        self
    }

    /// Sets the maximum popup width.
    #[must_use]
    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = max_width;
        self
    }

    /// Sets the height of item rows.
    #[must_use]
    pub fn item_height(mut self, item_height: f32) -> Self {
        self.item_height = item_height;
        self
    }

    /// Sets the padding above the first and below the last row.
    #[must_use]
    pub fn list_padding(mut self, list_padding: f32) -> Self {
        self.list_padding = list_padding;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert_eq!(Settings::default().validate(), Ok(Settings::default()));
    }

    #[test]
    fn test_negative_margin_is_rejected() {
        let result = Settings::default().viewport_margin(-1.0).validate();

        assert!(matches!(
            result,
            Err(Error::Invalid {
                field: "viewport_margin",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_item_height_is_rejected() {
        let result = Settings::default().item_height(0.0).validate();

        assert!(matches!(
            result,
            Err(Error::Invalid {
                field: "item_height",
                ..
            })
        ));
    }

    #[test]
    fn test_max_width_below_submenu_min_is_rejected() {
        let result = Settings::default().max_width(100.0).validate();

        assert!(matches!(
            result,
            Err(Error::Invalid {
                field: "max_width",
                ..
            })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load("/definitely/not/here/menu.ron");

        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_load_unsupported_extension() {
        let path = std::env::temp_dir().join("perch-settings-test.toml");
        std::fs::write(&path, "viewport_margin = 4").expect("write temp file");

        let result = Settings::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(result, Err(Error::UnsupportedFormat("toml".to_string())));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_ron_fills_defaults() {
        let settings = Settings::from_ron("(viewport_margin: 12.0, item_height: 40.0)")
            .expect("valid settings");

        assert_eq!(settings.viewport_margin, 12.0);
        assert_eq!(settings.item_height, 40.0);
        assert_eq!(settings.max_width, Settings::default().max_width);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_ron_reports_parse_errors() {
        assert!(matches!(
            Settings::from_ron("(viewport_margin: \"wide\")"),
            Err(Error::Parse(_))
        ));
    }
}

use serde::{Deserialize, Serialize};

use super::RgbColor;

/// Character formatting shared by slide text runs and worksheet cells.
///
/// Every field is optional: `None` means "leave whatever is already there".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub name: Option<String>,
    /// Size in points
    pub size: Option<f64>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub color: Option<RgbColor>,
}

impl Font {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Overlay the fields set in `other` onto `self`.
    pub fn apply(&mut self, other: &Font) {
        if let Some(name) = &other.name {
            self.name = Some(name.clone());
        }
        if other.size.is_some() {
            self.size = other.size;
        }
        if other.bold.is_some() {
            self.bold = other.bold;
        }
        if other.italic.is_some() {
            self.italic = other.italic;
        }
        if other.color.is_some() {
            self.color = other.color;
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Font::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_only_overrides_set_fields() {
        let mut base = Font::new().name("Arial").size(10.0).bold(false);
        base.apply(&Font::new().bold(true).color(RgbColor::WHITE));
        assert_eq!(base.name.as_deref(), Some("Arial"));
        assert_eq!(base.size, Some(10.0));
        assert_eq!(base.bold, Some(true));
        assert_eq!(base.color, Some(RgbColor::WHITE));
    }

    #[test]
    fn test_is_empty() {
        assert!(Font::new().is_empty());
        assert!(!Font::new().italic(true).is_empty());
    }
}

//! Foundational color types used throughout embedkit.
//!
//! Color and gradient config types are the building blocks for all visual
//! configuration in the system. Colors round-trip through CSS string form
//! (`#rrggbb`, `#rrggbbaa`, `rgba(...)`) since that is what configs store
//! and what the exported documents consume.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// RGBA color with alpha channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: a as f64 / 255.0,
        }
    }

    pub fn to_rgba8(&self) -> (u8, u8, u8, u8) {
        (
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            (self.a * 255.0).round() as u8,
        )
    }

    /// Parse a CSS color string: `#rgb`, `#rrggbb`, `#rrggbbaa`, or
    /// `rgba(r, g, b, a)` with 0-255 channels and 0.0-1.0 alpha.
    ///
    /// Returns `None` for anything unrecognized; callers fall back to a
    /// documented default rather than erroring.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }
        if let Some(body) = s
            .strip_prefix("rgba(")
            .or_else(|| s.strip_prefix("rgb("))
            .and_then(|b| b.strip_suffix(')'))
        {
            let parts: Vec<&str> = body.split(',').map(str::trim).collect();
            if parts.len() != 3 && parts.len() != 4 {
                return None;
            }
            let r = parts[0].parse::<f64>().ok()?;
            let g = parts[1].parse::<f64>().ok()?;
            let b = parts[2].parse::<f64>().ok()?;
            let a = if parts.len() == 4 {
                parts[3].parse::<f64>().ok()?
            } else {
                1.0
            };
            return Some(Self::new(
                (r / 255.0).clamp(0.0, 1.0),
                (g / 255.0).clamp(0.0, 1.0),
                (b / 255.0).clamp(0.0, 1.0),
                a.clamp(0.0, 1.0),
            ));
        }
        None
    }

    fn parse_hex(hex: &str) -> Option<Self> {
        let expand = |c: u8| -> Option<u8> {
            let d = (c as char).to_digit(16)? as u8;
            Some(d * 16 + d)
        };
        match hex.len() {
            3 => {
                let b = hex.as_bytes();
                Some(Self::from_rgba8(
                    expand(b[0])?,
                    expand(b[1])?,
                    expand(b[2])?,
                    255,
                ))
            }
            6 | 8 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                let a = if hex.len() == 8 {
                    u8::from_str_radix(&hex[6..8], 16).ok()?
                } else {
                    255
                };
                Some(Self::from_rgba8(r, g, b, a))
            }
            _ => None,
        }
    }

    /// Render as a CSS color value: `#rrggbb` when fully opaque,
    /// `rgba(r, g, b, a)` otherwise.
    pub fn to_css(&self) -> String {
        let (r, g, b, a) = self.to_rgba8();
        if a == 255 {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", r, g, b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        // Unparseable strings degrade to the default rather than failing
        // the whole config.
        Ok(Color::parse(&s).unwrap_or_default())
    }
}

/// Color stop for gradients
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColorStop {
    pub position: f64, // 0.0 to 1.0
    pub color: Color,
}

impl ColorStop {
    pub fn new(position: f64, color: Color) -> Self {
        Self { position, color }
    }
}

/// Linear gradient configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinearGradientConfig {
    pub angle: f64, // Angle in degrees (0 = left to right, 90 = top to bottom)
    pub stops: Vec<ColorStop>,
}

impl LinearGradientConfig {
    /// Render as a CSS `linear-gradient(...)` value.
    pub fn to_css(&self) -> String {
        let stops: Vec<String> = self
            .stops
            .iter()
            .map(|s| format!("{} {:.0}%", s.color.to_css(), s.position * 100.0))
            .collect();
        format!("linear-gradient({}deg, {})", self.angle, stops.join(", "))
    }
}

impl Default for LinearGradientConfig {
    fn default() -> Self {
        Self {
            angle: 90.0,
            stops: vec![
                ColorStop::new(0.0, Color::from_rgba8(51, 51, 51, 255)),
                ColorStop::new(1.0, Color::from_rgba8(26, 26, 26, 255)),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Color::parse("#fff"), Some(Color::from_rgba8(255, 255, 255, 255)));
        assert_eq!(Color::parse("#0a0e27"), Some(Color::from_rgba8(10, 14, 39, 255)));
        assert_eq!(
            Color::parse("#00ffff80"),
            Some(Color::from_rgba8(0, 255, 255, 128))
        );
        assert_eq!(Color::parse("not a color"), None);
    }

    #[test]
    fn test_parse_rgba() {
        let c = Color::parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(c.to_rgba8().0, 255);
        assert!((c.a - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_css_round_trip() {
        let c = Color::from_rgba8(10, 14, 39, 255);
        assert_eq!(c.to_css(), "#0a0e27");
        assert_eq!(Color::parse(&c.to_css()), Some(c));
    }

    #[test]
    fn test_gradient_css() {
        let g = LinearGradientConfig {
            angle: 135.0,
            stops: vec![
                ColorStop::new(0.0, Color::from_rgba8(255, 0, 255, 255)),
                ColorStop::new(1.0, Color::from_rgba8(0, 255, 255, 255)),
            ],
        };
        assert_eq!(
            g.to_css(),
            "linear-gradient(135deg, #ff00ff 0%, #00ffff 100%)"
        );
    }
}

use std::str::FromStr;

use renderer::Color;
use thiserror::Error;
use tracing::debug;

use crate::engine::config_file::ConfigFile;

/// Highlight drawn over a pressed circle unless configured otherwise, ~20% opaque black.
pub const DEFAULT_HIGHLIGHT_COLOR: Color = Color::from_argb(0x32000000);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown attribute \"{1}\" on line {0}")]
    UnknownAttribute(usize, String),

    #[error("Missing value for \"{1}\" on line {0}")]
    MissingValue(usize, String),

    #[error("Invalid color \"{1}\" on line {0}")]
    InvalidColor(usize, String),

    #[error("Invalid dimension \"{1}\" on line {0}")]
    InvalidDimension(usize, String),

    #[error("Invalid boolean \"{1}\" on line {0}")]
    InvalidBoolean(usize, String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString)]
enum Attribute {
    #[strum(serialize = "strokeColor")]
    StrokeColor,
    #[strum(serialize = "strokeWidth")]
    StrokeWidth,
    #[strum(serialize = "highlightEnable")]
    HighlightEnable,
    #[strum(serialize = "highlightColor")]
    HighlightColor,
}

/// Declarative configuration of a circle image view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleImageConfig {
    pub stroke_color: Color,
    /// Width of the ring in pixels. Never negative.
    pub stroke_width: f32,
    pub highlight_enable: bool,
    pub highlight_color: Color,
}

impl Default for CircleImageConfig {
    fn default() -> Self {
        Self {
            stroke_color: Color::TRANSPARENT,
            stroke_width: 0.0,
            highlight_enable: true,
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
        }
    }
}

impl CircleImageConfig {
    pub fn with_stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke_color = color;
        self.stroke_width = width.max(0.0);
        self
    }

    pub fn with_highlight(mut self, enable: bool, color: Color) -> Self {
        self.highlight_enable = enable;
        self.highlight_color = color;
        self
    }

    /// Read the configuration from attribute text, one `name value` pair per line. Attributes that
    /// are not present keep their defaults. `density` converts `dp` dimensions to pixels.
    pub fn from_attributes(text: &str, density: f32) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        for line in ConfigFile::new(text) {
            let name = line.tokens[0];
            let attribute = Attribute::from_str(name)
                .map_err(|_| ConfigError::UnknownAttribute(line.number, name.to_string()))?;
            let value = *line
                .tokens
                .get(1)
                .ok_or_else(|| ConfigError::MissingValue(line.number, name.to_string()))?;

            match attribute {
                Attribute::StrokeColor => {
                    config.stroke_color = parse_color(value)
                        .ok_or_else(|| ConfigError::InvalidColor(line.number, value.to_string()))?;
                }
                Attribute::StrokeWidth => {
                    config.stroke_width = parse_dimension(value, density).ok_or_else(|| {
                        ConfigError::InvalidDimension(line.number, value.to_string())
                    })? as f32;
                }
                Attribute::HighlightEnable => {
                    config.highlight_enable = value
                        .parse()
                        .map_err(|_| ConfigError::InvalidBoolean(line.number, value.to_string()))?;
                }
                Attribute::HighlightColor => {
                    config.highlight_color = parse_color(value)
                        .ok_or_else(|| ConfigError::InvalidColor(line.number, value.to_string()))?;
                }
            }
        }

        debug!("Loaded attributes: {:?}", config);

        Ok(config)
    }
}

/// Parse `#RRGGBB`, `#AARRGGBB`, `0xAARRGGBB` or one of a few color names.
pub fn parse_color(value: &str) -> Option<Color> {
    if let Some(hex) = value.strip_prefix('#') {
        let argb = u32::from_str_radix(hex, 16).ok()?;
        return match hex.len() {
            6 => Some(Color::from_argb(0xFF000000 | argb)),
            8 => Some(Color::from_argb(argb)),
            _ => None,
        };
    }

    if let Some(hex) = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        return u32::from_str_radix(hex, 16).ok().map(Color::from_argb);
    }

    match value.to_ascii_lowercase().as_str() {
        "transparent" => Some(Color::TRANSPARENT),
        "black" => Some(Color::BLACK),
        "white" => Some(Color::WHITE),
        "red" => Some(Color::RED),
        "green" => Some(Color::GREEN),
        "blue" => Some(Color::BLUE),
        _ => None,
    }
}

/// Parse a dimension in `px` (the default) or `dp` into whole pixels. Non-zero sizes never round
/// down to zero pixels. Negative dimensions are rejected.
pub fn parse_dimension(value: &str, density: f32) -> Option<u32> {
    let (number, scale) = if let Some(number) = value.strip_suffix("dp") {
        (number, density)
    } else if let Some(number) = value.strip_suffix("px") {
        (number, 1.0)
    } else {
        (value, 1.0)
    };

    let number: f32 = number.parse().ok()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }

    let pixels = (number * scale).round() as u32;
    if pixels == 0 && number > 0.0 {
        Some(1)
    } else {
        Some(pixels)
    }
}

use anyhow::{Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::hash::{DefaultHasher, Hash, Hasher};
use std::str::FromStr;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw a grid of helper lines behind the items
    #[serde(default)]
    pub grid: bool,
    ///Distance between two grid lines
    #[serde(default = "default_grid_spacing")]
    pub grid_spacing: i32,
    ///Write the id of each item in its center
    #[serde(default)]
    pub labels: bool,
}

fn default_grid_spacing() -> i32 {
    5
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            grid: true,
            grid_spacing: default_grid_spacing(),
            labels: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub strip_fill: Color,
    pub item_fill: Color,
    pub grid_color: Color,
    pub grid_opac: f32,
    /// Items get a distinct tint derived from their id, blended into `item_fill`
    pub tint_items: bool,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        strip_fill: Color(0xCC, 0x82, 0x4A),
        item_fill: Color(0xFF, 0xC8, 0x79),
        grid_color: Color(0x00, 0x00, 0x00),
        grid_opac: 0.2,
        tint_items: true,
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        strip_fill: Color(0xD3, 0xD3, 0xD3),
        item_fill: Color(0x7A, 0x7A, 0x7A),
        grid_color: Color(0x63, 0x63, 0x63),
        grid_opac: 0.3,
        tint_items: false,
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

pub fn blend_colors(color_1: Color, color_2: Color) -> Color {
    //blend color_1 and color_2
    let Color(r_1, g_1, b_1) = color_1;
    let Color(r_2, g_2, b_2) = color_2;

    let r = ((r_1 as f32 * 0.5) + (r_2 as f32 * 0.5)) as u8;
    let g = ((g_1 as f32 * 0.5) + (g_2 as f32 * 0.5)) as u8;
    let b = ((b_1 as f32 * 0.5) + (b_2 as f32 * 0.5)) as u8;

    Color(r, g, b)
}

/// Deterministic color for an item id, so the same item has the same color in every drawing.
pub fn id_color(id: usize) -> Color {
    let mut hasher = DefaultHasher::new();
    id.hash(&mut hasher);
    let [r, g, b, ..] = hasher.finish().to_le_bytes();
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s:?}, expected #RRGGBB"
        );
        let r = u8::from_str_radix(&hex[0..2], 16)?;
        let g = u8::from_str_radix(&hex[2..4], 16)?;
        let b = u8::from_str_radix(&hex[4..6], 16)?;
        Ok(Color(r, g, b))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_hex_round_trip() {
        let color = Color::from_str("#CC824A").unwrap();
        assert_eq!(color, Color(0xCC, 0x82, 0x4A));
        assert_eq!(color.to_string(), "#CC824A");
        assert!(Color::from_str("#CC82").is_err());
        assert!(Color::from_str("#GG824A").is_err());
    }

    #[test]
    fn id_color_is_stable() {
        assert_eq!(id_color(7), id_color(7));
    }
}

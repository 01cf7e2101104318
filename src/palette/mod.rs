//! Tonal palette generation
//!
//! A single base color is spread into eleven shades that share its hue and
//! saturation. Level "50" is the base color itself; every other level sits at a
//! fixed lightness.

pub mod hls;

use hls::Hls;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;
use std::str::FromStr;

/// An 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Fallback used whenever a color cannot be parsed
    pub const DEFAULT: Self = Self(106, 116, 211);

    /// `#RRGGBB`, uppercase
    pub fn to_hex(self) -> String {
        format!("#{}", hex::encode_upper([self.0, self.1, self.2]))
    }

    /// `r, g, b` as used by CSS `rgb(var(--...))` variables
    pub fn to_rgb_string(self) -> String {
        format!("{}, {}, {}", self.0, self.1, self.2)
    }

    fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.0) / 255.0,
            f64::from(self.1) / 255.0,
            f64::from(self.2) / 255.0,
        ]
    }

    fn from_unit(c: [f64; 3]) -> Self {
        Self(to_channel(c[0]), to_channel(c[1]), to_channel(c[2]))
    }

    /// Parse a color, falling back to `fallback` when the input is not three
    /// integers in 0..=255.
    pub fn parse_or(raw: &str, fallback: Rgb) -> Rgb {
        match raw.parse() {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!("invalid color {raw:?} ({e}), using {}", fallback.to_hex());
                fallback
            }
        }
    }

    /// Read a color out of an options value: a `[r, g, b]` array or any string
    /// accepted by [`FromStr`].
    pub fn from_toml_or(value: &toml::Value, fallback: Rgb) -> Rgb {
        match value {
            toml::Value::String(s) => Self::parse_or(s, fallback),
            toml::Value::Array(items) => {
                let channels: Option<Vec<u8>> = items
                    .iter()
                    .map(|v| v.as_integer().and_then(|i| u8::try_from(i).ok()))
                    .collect();
                match channels.as_deref() {
                    Some(&[r, g, b]) => Rgb(r, g, b),
                    _ => {
                        tracing::debug!("invalid color {value}, using {}", fallback.to_hex());
                        fallback
                    }
                }
            }
            _ => {
                tracing::debug!("invalid color {value}, using {}", fallback.to_hex());
                fallback
            }
        }
    }
}

/// Round, then clamp into a channel
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Default for Rgb {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = anyhow::Error;

    /// Accepts `r, g, b` (commas and/or whitespace) or `#RRGGBB`.
    fn from_str(s: &str) -> anyhow::Result<Self> {
        let s = s.trim();
        if let Some(digits) = s.strip_prefix('#') {
            let mut buf = [0u8; 3];
            hex::decode_to_slice(digits, &mut buf)?;
            return Ok(Rgb(buf[0], buf[1], buf[2]));
        }

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 3 {
            anyhow::bail!("expected three channels, got {}", parts.len());
        }
        Ok(Rgb(parts[0].parse()?, parts[1].parse()?, parts[2].parse()?))
    }
}

/// Stored as a `[r, g, b]` array, the shape the color picker hands out.
impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(3))?;
        seq.serialize_element(&self.0)?;
        seq.serialize_element(&self.1)?;
        seq.serialize_element(&self.2)?;
        seq.end()
    }
}

/// One lightness stop of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    L05,
    L10,
    L20,
    L30,
    L40,
    L50,
    L60,
    L70,
    L80,
    L90,
    L95,
}

impl Level {
    pub const ALL: [Level; 11] = [
        Level::L05,
        Level::L10,
        Level::L20,
        Level::L30,
        Level::L40,
        Level::L50,
        Level::L60,
        Level::L70,
        Level::L80,
        Level::L90,
        Level::L95,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Level::L05 => "05",
            Level::L10 => "10",
            Level::L20 => "20",
            Level::L30 => "30",
            Level::L40 => "40",
            Level::L50 => "50",
            Level::L60 => "60",
            Level::L70 => "70",
            Level::L80 => "80",
            Level::L90 => "90",
            Level::L95 => "95",
        }
    }

    /// Target lightness; `None` keeps the base color's own lightness.
    pub fn lightness(self) -> Option<f64> {
        match self {
            Level::L05 => Some(0.05),
            Level::L10 => Some(0.10),
            Level::L20 => Some(0.20),
            Level::L30 => Some(0.30),
            Level::L40 => Some(0.40),
            Level::L50 => None,
            Level::L60 => Some(0.60),
            Level::L70 => Some(0.70),
            Level::L80 => Some(0.80),
            Level::L90 => Some(0.90),
            Level::L95 => Some(0.96),
        }
    }

    pub fn from_key(key: &str) -> Option<Level> {
        Level::ALL.into_iter().find(|l| l.key() == key)
    }
}

/// Eleven shades derived from one base color, ordered from darkest stop to lightest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    shades: [Rgb; 11],
}

impl Palette {
    pub fn get(&self, level: Level) -> Rgb {
        self.shades[level as usize]
    }

    pub fn hex(&self, level: Level) -> String {
        self.get(level).to_hex()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Level, Rgb)> + '_ {
        Level::ALL.into_iter().zip(self.shades.iter().copied())
    }
}

impl std::ops::Index<&str> for Palette {
    type Output = Rgb;

    fn index(&self, key: &str) -> &Rgb {
        match Level::from_key(key) {
            Some(level) => &self.shades[level as usize],
            None => panic!("unknown palette level {key:?}"),
        }
    }
}

/// `{"05": "#RRGGBB", ...}`
impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.shades.len()))?;
        for (level, color) in self.iter() {
            map.serialize_entry(level.key(), &color.to_hex())?;
        }
        map.end()
    }
}

pub fn generate_palette(color: Rgb) -> Palette {
    let [r, g, b] = color.to_unit();
    let base = Hls::from_rgb(r, g, b);

    let shades = Level::ALL.map(|level| {
        let hls = match level.lightness() {
            Some(l) => base.with_lightness(l),
            None => base,
        };
        Rgb::from_unit(hls.to_rgb())
    });

    Palette { shades }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_hex_color(s: &str) -> bool {
        s.len() == 7
            && s.starts_with('#')
            && s[1..]
                .chars()
                .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
    }

    fn sample_colors() -> impl Iterator<Item = Rgb> {
        let steps = [0u8, 1, 17, 64, 106, 127, 128, 200, 211, 254, 255];
        steps.into_iter().flat_map(move |r| {
            steps
                .into_iter()
                .flat_map(move |g| steps.into_iter().map(move |b| Rgb(r, g, b)))
        })
    }

    #[test]
    fn test_default_primary() {
        let p = generate_palette(Rgb(106, 116, 211));
        assert_eq!(p["50"].to_hex(), "#6A74D3");
        let expected = [
            ("05", "#060714"),
            ("10", "#0C0E27"),
            ("20", "#171D4F"),
            ("30", "#232B76"),
            ("40", "#2F399D"),
            ("50", "#6A74D3"),
            ("60", "#626CD0"),
            ("70", "#8991DC"),
            ("80", "#B0B6E8"),
            ("90", "#D8DAF3"),
            ("95", "#EFF0FA"),
        ];
        for (key, hex) in expected {
            assert_eq!(p[key].to_hex(), hex, "level {key}");
        }
    }

    #[test]
    fn test_level_50_roundtrips() {
        for c in sample_colors() {
            let got = generate_palette(c).get(Level::L50);
            for (a, b) in [(got.0, c.0), (got.1, c.1), (got.2, c.2)] {
                assert!(a.abs_diff(b) <= 1, "{c:?} -> {got:?}");
            }
        }
    }

    #[test]
    fn test_hex_format() {
        for c in sample_colors() {
            let p = generate_palette(c);
            for (level, _) in p.iter() {
                let hex = p.hex(level);
                assert!(is_hex_color(&hex), "{c:?} {} -> {hex}", level.key());
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = generate_palette(Rgb(12, 200, 99));
        let b = generate_palette(Rgb(12, 200, 99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_gray_ramp() {
        let p = generate_palette(Rgb(0, 0, 0));
        assert_eq!(p["50"], Rgb(0, 0, 0));
        assert_eq!(p["20"], Rgb(51, 51, 51));
        assert_eq!(p["95"].to_hex(), "#F5F5F5");
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!("106, 116, 211".parse::<Rgb>().unwrap(), Rgb(106, 116, 211));
        assert_eq!("1 2 3".parse::<Rgb>().unwrap(), Rgb(1, 2, 3));
        assert_eq!("#6a74d3".parse::<Rgb>().unwrap(), Rgb(106, 116, 211));
        assert!("1, 2".parse::<Rgb>().is_err());
        assert!("1, 2, 300".parse::<Rgb>().is_err());
        assert!("#12345".parse::<Rgb>().is_err());
    }

    #[test]
    fn test_malformed_falls_back() {
        assert_eq!(Rgb::parse_or("abc", Rgb::DEFAULT), Rgb(106, 116, 211));
        assert_eq!(Rgb::parse_or("", Rgb(1, 2, 3)), Rgb(1, 2, 3));
    }

    fn int_array(items: &[i64]) -> toml::Value {
        toml::Value::Array(items.iter().map(|i| toml::Value::Integer(*i)).collect())
    }

    #[test]
    fn test_from_toml() {
        let arr = int_array(&[10, 20, 30]);
        assert_eq!(Rgb::from_toml_or(&arr, Rgb::DEFAULT), Rgb(10, 20, 30));

        let too_big = int_array(&[10, 20, 300]);
        assert_eq!(Rgb::from_toml_or(&too_big, Rgb::DEFAULT), Rgb::DEFAULT);

        let short = int_array(&[10]);
        assert_eq!(Rgb::from_toml_or(&short, Rgb::DEFAULT), Rgb::DEFAULT);

        let s = toml::Value::String("200, 50, 50".into());
        assert_eq!(Rgb::from_toml_or(&s, Rgb::DEFAULT), Rgb(200, 50, 50));

        assert_eq!(Rgb::from_toml_or(&toml::Value::Boolean(true), Rgb::DEFAULT), Rgb::DEFAULT);
    }

    #[test]
    fn test_palette_json() {
        let v = serde_json::to_value(generate_palette(Rgb::DEFAULT)).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 11);
        assert_eq!(obj["50"], "#6A74D3");
        assert_eq!(obj["95"], "#EFF0FA");
    }
}

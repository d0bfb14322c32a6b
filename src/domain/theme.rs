//! Color conversion used by the theming color picker.
//!
//! Hue is in degrees (0..360), saturation/lightness in percent (0..100),
//! alpha in 0..=1. Hex output uses `#rrggbb`, or `#rrggbbaa` when alpha is
//! below 1.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self {
            h: h.rem_euclid(360.0),
            s: s.clamp(0.0, 100.0),
            l: l.clamp(0.0, 100.0),
            a: a.clamp(0.0, 1.0),
        }
    }
}

fn channel_to_hex(value: f64) -> String {
    format!("{:02x}", (value.clamp(0.0, 255.0)).round() as u8)
}

/// Converts HSL(A) to a hex string.
pub fn hsla_to_hex(color: &Hsla) -> String {
    let h = color.h.rem_euclid(360.0);
    let s = (color.s / 100.0).clamp(0.0, 1.0);
    let l = (color.l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let r = channel_to_hex((r1 + m) * 255.0);
    let g = channel_to_hex((g1 + m) * 255.0);
    let b = channel_to_hex((b1 + m) * 255.0);

    if color.a < 1.0 {
        let a = channel_to_hex(color.a * 255.0);
        format!("#{r}{g}{b}{a}")
    } else {
        format!("#{r}{g}{b}")
    }
}

fn parse_channel(hex: &str, at: usize) -> Result<f64, ColorParseError> {
    u8::from_str_radix(&hex[at..at + 2], 16)
        .map(f64::from)
        .map_err(|_| ColorParseError::InvalidHex(hex.to_string()))
}

/// Parses `#rgb`, `#rrggbb` or `#rrggbbaa` into HSL(A).
pub fn hex_to_hsla(hex: &str) -> Result<Hsla, ColorParseError> {
    let raw = hex.trim().trim_start_matches('#');
    let expanded: String = match raw.len() {
        3 => raw.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => raw.to_string(),
        _ => return Err(ColorParseError::InvalidHex(hex.to_string())),
    };
    if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHex(hex.to_string()));
    }

    let r = parse_channel(&expanded, 0)? / 255.0;
    let g = parse_channel(&expanded, 2)? / 255.0;
    let b = parse_channel(&expanded, 4)? / 255.0;
    let a = if expanded.len() == 8 {
        parse_channel(&expanded, 6)? / 255.0
    } else {
        1.0
    };

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let l = (max + min) / 2.0;
    let s = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * l - 1.0).abs())
    };
    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Ok(Hsla {
        h,
        s: s * 100.0,
        l: l * 100.0,
        a,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &Hsla, expected: &Hsla) {
        let hue_diff = (actual.h - expected.h).abs().min(360.0 - (actual.h - expected.h).abs());
        assert!(hue_diff <= 1.5, "hue {} vs {}", actual.h, expected.h);
        assert!((actual.s - expected.s).abs() <= 1.5, "sat {} vs {}", actual.s, expected.s);
        assert!((actual.l - expected.l).abs() <= 1.5, "lig {} vs {}", actual.l, expected.l);
        assert!((actual.a - expected.a).abs() <= 0.01, "alpha {} vs {}", actual.a, expected.a);
    }

    #[test]
    fn known_colors_convert() {
        assert_eq!(hsla_to_hex(&Hsla::new(0.0, 100.0, 50.0, 1.0)), "#ff0000");
        assert_eq!(hsla_to_hex(&Hsla::new(120.0, 100.0, 50.0, 1.0)), "#00ff00");
        assert_eq!(hsla_to_hex(&Hsla::new(240.0, 100.0, 50.0, 1.0)), "#0000ff");
        assert_eq!(hsla_to_hex(&Hsla::new(0.0, 0.0, 100.0, 1.0)), "#ffffff");
        assert_eq!(hsla_to_hex(&Hsla::new(0.0, 0.0, 0.0, 1.0)), "#000000");
    }

    #[test]
    fn alpha_is_appended_when_translucent() {
        let hex = hsla_to_hex(&Hsla::new(0.0, 100.0, 50.0, 0.5));
        assert_eq!(hex, "#ff000080");
    }

    #[test]
    fn round_trip_stays_within_tolerance() {
        let samples = [
            Hsla::new(12.0, 87.0, 43.0, 1.0),
            Hsla::new(200.5, 33.0, 66.0, 0.25),
            Hsla::new(359.0, 10.0, 90.0, 0.8),
            Hsla::new(72.0, 55.0, 12.0, 1.0),
            Hsla::new(300.0, 1.0, 50.0, 0.05),
        ];
        for sample in samples {
            let parsed = hex_to_hsla(&hsla_to_hex(&sample)).unwrap();
            assert_close(&parsed, &sample);
        }
    }

    #[test]
    fn short_hex_expands() {
        let parsed = hex_to_hsla("#f00").unwrap();
        assert_close(&parsed, &Hsla::new(0.0, 100.0, 50.0, 1.0));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(hex_to_hsla("#12345").is_err());
        assert!(hex_to_hsla("zzzzzz").is_err());
        assert!(hex_to_hsla("").is_err());
    }
}

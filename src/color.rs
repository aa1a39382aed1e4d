//! Color naming for legend-mapped values.
//!
//! Maps a hex color through HSL to the nearest of 12 named colors in 3
//! shades (light/plain/dark). The winner is picked by squared distance over
//! a fixed candidate table in a fixed order, so identical input always
//! yields the identical tag.

use std::fmt;

/// The 12 color names, with the single-character codes used in span tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
    Magenta,
    Pink,
    Black,
    Gray,
    White,
}

impl ColorName {
    pub const ALL: [ColorName; 12] = [
        ColorName::Red,
        ColorName::Orange,
        ColorName::Yellow,
        ColorName::Green,
        ColorName::Cyan,
        ColorName::Blue,
        ColorName::Purple,
        ColorName::Magenta,
        ColorName::Pink,
        ColorName::Black,
        ColorName::Gray,
        ColorName::White,
    ];

    pub fn word(&self) -> &'static str {
        match self {
            ColorName::Red => "red",
            ColorName::Orange => "orange",
            ColorName::Yellow => "yellow",
            ColorName::Green => "green",
            ColorName::Cyan => "cyan",
            ColorName::Blue => "blue",
            ColorName::Purple => "purple",
            ColorName::Magenta => "magenta",
            ColorName::Pink => "pink",
            ColorName::Black => "black",
            ColorName::Gray => "gray",
            ColorName::White => "white",
        }
    }

    /// Single-character tag code. Lowercase codes disambiguate blue/black,
    /// pink/purple and gray/green.
    pub fn code(&self) -> char {
        match self {
            ColorName::Red => 'R',
            ColorName::Orange => 'O',
            ColorName::Yellow => 'Y',
            ColorName::Green => 'G',
            ColorName::Cyan => 'C',
            ColorName::Blue => 'b',
            ColorName::Purple => 'P',
            ColorName::Magenta => 'M',
            ColorName::Pink => 'p',
            ColorName::Black => 'B',
            ColorName::Gray => 'g',
            ColorName::White => 'W',
        }
    }

    /// Hue anchor in degrees for chromatic names, `None` for the
    /// achromatic three.
    fn hue(&self) -> Option<f64> {
        match self {
            ColorName::Red => Some(0.0),
            ColorName::Orange => Some(30.0),
            ColorName::Yellow => Some(60.0),
            ColorName::Green => Some(120.0),
            ColorName::Cyan => Some(180.0),
            ColorName::Blue => Some(240.0),
            ColorName::Purple => Some(270.0),
            ColorName::Magenta => Some(300.0),
            ColorName::Pink => Some(330.0),
            ColorName::Black | ColorName::Gray | ColorName::White => None,
        }
    }

    fn base_lightness(&self) -> f64 {
        match self {
            ColorName::Black => 0.0,
            ColorName::White => 1.0,
            _ => 0.5,
        }
    }
}

/// Shade prefix of a named color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Plain,
    Dark,
}

impl Shade {
    pub const ALL: [Shade; 3] = [Shade::Light, Shade::Plain, Shade::Dark];

    /// Code character used in span tags (`-` marks the plain shade).
    pub fn code(&self) -> char {
        match self {
            Shade::Light => 'L',
            Shade::Plain => '-',
            Shade::Dark => 'D',
        }
    }

    /// Spoken prefix, including the trailing space for non-plain shades.
    pub fn prefix(&self) -> &'static str {
        match self {
            Shade::Light => "light ",
            Shade::Plain => "",
            Shade::Dark => "dark ",
        }
    }

    fn lightness_offset(&self) -> f64 {
        match self {
            Shade::Light => 0.25,
            Shade::Plain => 0.0,
            Shade::Dark => -0.25,
        }
    }
}

/// A shade + hue pair attached to a value span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorTag {
    pub shade: Shade,
    pub name: ColorName,
}

impl ColorTag {
    /// Nearest tag to the given color, by squared distance in HSL.
    pub fn nearest(color: Hsl) -> ColorTag {
        let mut best = ColorTag {
            shade: Shade::Plain,
            name: ColorName::Red,
        };
        let mut best_dist = f64::INFINITY;
        for name in ColorName::ALL {
            for shade in Shade::ALL {
                let anchor = anchor_for(name, shade);
                let dist = distance(&color, &anchor);
                if dist < best_dist {
                    best_dist = dist;
                    best = ColorTag { shade, name };
                }
            }
        }
        best
    }

    /// Tag code as it appears in span tags, e.g. `C-R`, `CDb`, `CLp`.
    pub fn code(&self) -> String {
        format!("C{}{}", self.shade.code(), self.name.code())
    }

    /// Spoken form with a mark noun, e.g. "the dark red bar".
    pub fn phrase(&self, mark: &str) -> String {
        format!("the {}{} {}", self.shade.prefix(), self.name.word(), mark)
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.shade.prefix(), self.name.word())
    }
}

fn anchor_for(name: ColorName, shade: Shade) -> Hsl {
    match name.hue() {
        Some(h) => Hsl {
            h,
            s: 1.0,
            l: 0.5 + shade.lightness_offset(),
        },
        None => Hsl {
            h: 0.0,
            s: 0.0,
            l: (name.base_lightness() + shade.lightness_offset() / 2.0).clamp(0.0, 1.0),
        },
    }
}

fn distance(color: &Hsl, anchor: &Hsl) -> f64 {
    let dl = color.l - anchor.l;
    let ds = color.s - anchor.s;
    if anchor.s == 0.0 {
        // Hue is meaningless against an achromatic anchor
        ds * ds + dl * dl
    } else {
        let raw = (color.h - anchor.h).abs() % 360.0;
        let dh = raw.min(360.0 - raw) / 180.0;
        dh * dh + 0.25 * ds * ds + dl * dl
    }
}

/// A color in sRGB, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Parse `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb { r, g, b })
    }

    pub fn to_hsl(self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let delta = max - min;
        if delta == 0.0 {
            return Hsl { h: 0.0, s: 0.0, l };
        }
        let s = delta / (1.0 - (2.0 * l - 1.0).abs());
        let h = if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        Hsl { h, s, l }
    }
}

/// Hue in degrees, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

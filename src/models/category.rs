//! This file defines the `Category` type and its display color.
//!
//! A category labels a transaction with a name, an icon glyph and a color.
//! The color spec is stored as a string that is either a symbolic name from a
//! small fixed palette or a `#RRGGBB` hex triple.

use std::fmt::Display;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A newtype wrapper for string category IDs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
    /// Wrap an existing ID string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random ID.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// An RGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// The symbolic palette color `red`.
    pub const RED: Rgb = Rgb::new(255, 59, 48);
    /// The symbolic palette color `green`.
    pub const GREEN: Rgb = Rgb::new(52, 199, 89);
    /// The symbolic palette color `blue`, also the fallback color.
    pub const BLUE: Rgb = Rgb::new(0, 122, 255);
    /// The symbolic palette color `yellow`.
    pub const YELLOW: Rgb = Rgb::new(255, 204, 0);
    /// The symbolic palette color `purple`.
    pub const PURPLE: Rgb = Rgb::new(175, 82, 222);
    /// The symbolic palette color `orange`.
    pub const ORANGE: Rgb = Rgb::new(255, 149, 0);
    /// The symbolic palette color `pink`.
    pub const PINK: Rgb = Rgb::new(255, 45, 85);
    /// The symbolic palette color `gray`.
    pub const GRAY: Rgb = Rgb::new(142, 142, 147);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Resolve a color spec string to a display color.
///
/// Symbolic palette names are checked first, then `#RRGGBB` hex. Anything
/// else falls back to [Rgb::BLUE].
pub(crate) fn resolve_color(spec: &str) -> Rgb {
    match spec.to_lowercase().as_str() {
        "red" => Rgb::RED,
        "green" => Rgb::GREEN,
        "blue" => Rgb::BLUE,
        "yellow" => Rgb::YELLOW,
        "purple" => Rgb::PURPLE,
        "orange" => Rgb::ORANGE,
        "pink" => Rgb::PINK,
        "gray" => Rgb::GRAY,
        _ => parse_hex(spec).unwrap_or(Rgb::BLUE),
    }
}

fn parse_hex(spec: &str) -> Option<Rgb> {
    let hex = spec.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let value = u32::from_str_radix(hex, 16).ok()?;

    Some(Rgb::new(
        ((value & 0xFF0000) >> 16) as u8,
        ((value & 0x00FF00) >> 8) as u8,
        (value & 0x0000FF) as u8,
    ))
}

/// A category for expenses and income, e.g., 'Їжа', 'Розробка'.
///
/// Equality and hashing are identity-based: two categories are the same
/// category if and only if their IDs match, regardless of name or appearance.
/// Name collisions across categories are permitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: CategoryId,
    name: String,
    icon: String,
    color_hex: String,
}

impl Category {
    /// Create a new category with a fresh ID.
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        color_hex: impl Into<String>,
    ) -> Self {
        Self {
            id: CategoryId::random(),
            name: name.into(),
            icon: icon.into(),
            color_hex: color_hex.into(),
        }
    }

    /// The ID of the category.
    pub fn id(&self) -> &CategoryId {
        &self.id
    }

    /// The name of the category.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The icon glyph shown next to the category.
    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// The raw color spec: a symbolic palette name or a `#RRGGBB` triple.
    pub fn color_spec(&self) -> &str {
        &self.color_hex
    }

    /// The display color resolved from the color spec.
    pub fn color(&self) -> Rgb {
        resolve_color(&self.color_hex)
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

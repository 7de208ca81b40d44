//! Font descriptors carried by the `Font` text attribute.
//!
//! A [`Font`] names a family, a [`FontWeight`] on the CSS 100..=900 scale, a
//! point size, and a set of [`FontTraits`]. Nothing here loads or measures
//! glyphs; a font is a plain value compared by its fields.
//!
//! # Examples
//!
//! ```
//! use richstr::{Font, FontTraits, FontWeight};
//!
//! let body = Font::new("Inter", 14.0);
//! let heading = Font::new("Inter", 20.0).with_weight(FontWeight::BOLD);
//! let code = Font::monospace(12.0).with_traits(FontTraits::ITALIC);
//!
//! assert!(heading.is_bold());
//! assert!(!body.is_bold());
//! assert!(code.traits.contains(FontTraits::MONOSPACE | FontTraits::ITALIC));
//! ```

use bitflags::bitflags;
use std::fmt;
use std::sync::Arc;

bitflags! {
    /// Symbolic font traits.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct FontTraits: u8 {
        /// Slanted glyphs.
        const ITALIC    = 0x01;
        /// Fixed advance width.
        const MONOSPACE = 0x02;
        /// Narrow glyph widths.
        const CONDENSED = 0x04;
        /// Wide glyph widths.
        const EXPANDED  = 0x08;
    }
}

/// Font weight on the CSS numeric scale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontWeight(u16);

impl FontWeight {
    pub const THIN: Self = Self(100);
    pub const EXTRA_LIGHT: Self = Self(200);
    pub const LIGHT: Self = Self(300);
    pub const REGULAR: Self = Self(400);
    pub const MEDIUM: Self = Self(500);
    pub const SEMIBOLD: Self = Self(600);
    pub const BOLD: Self = Self(700);
    pub const EXTRA_BOLD: Self = Self(800);
    pub const BLACK: Self = Self(900);

    /// Create a weight, clamped to 1..=1000.
    #[must_use]
    pub const fn new(value: u16) -> Self {
        let value = if value < 1 {
            1
        } else if value > 1000 {
            1000
        } else {
            value
        };
        Self(value)
    }

    /// Numeric weight value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

/// Family name used by [`Font::system`].
pub const SYSTEM_FAMILY: &str = "system-ui";
/// Family name used by [`Font::monospace`].
pub const MONOSPACE_FAMILY: &str = "monospace";

/// Font descriptor: family, weight, size, and traits.
///
/// The family name is reference counted, so cloning a font for every run is
/// cheap.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Family name (e.g. "Inter", "Helvetica Neue").
    pub family: Arc<str>,
    /// Weight.
    pub weight: FontWeight,
    /// Size in points.
    pub size: f32,
    /// Symbolic traits.
    pub traits: FontTraits,
}

impl Font {
    /// Create a regular-weight font of the given family and point size.
    #[must_use]
    pub fn new(family: impl Into<Arc<str>>, size: f32) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::REGULAR,
            size,
            traits: FontTraits::empty(),
        }
    }

    /// The platform UI font at the given size.
    #[must_use]
    pub fn system(size: f32) -> Self {
        Self::new(SYSTEM_FAMILY, size)
    }

    /// The platform UI font in bold.
    #[must_use]
    pub fn bold_system(size: f32) -> Self {
        Self::system(size).with_weight(FontWeight::BOLD)
    }

    /// A generic monospace font.
    #[must_use]
    pub fn monospace(size: f32) -> Self {
        Self::new(MONOSPACE_FAMILY, size).with_traits(FontTraits::MONOSPACE)
    }

    /// Return a copy with a different weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Return a copy with a different point size.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Return a copy with additional traits.
    #[must_use]
    pub fn with_traits(mut self, traits: FontTraits) -> Self {
        self.traits |= traits;
        self
    }

    /// Semibold or heavier.
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.weight >= FontWeight::SEMIBOLD
    }

    #[must_use]
    pub fn is_italic(&self) -> bool {
        self.traits.contains(FontTraits::ITALIC)
    }

    /// Field-wise identity, comparing the size by bit pattern.
    #[must_use]
    pub fn identical(&self, other: &Self) -> bool {
        self.family == other.family
            && self.weight == other.weight
            && self.size.to_bits() == other.size.to_bits()
            && self.traits == other.traits
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}pt", self.family, self.weight.value(), self.size)?;
        if self.is_italic() {
            f.write_str(" italic")?;
        }
        Ok(())
    }
}

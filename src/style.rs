//! Text attributes and styles.
//!
//! This module provides the vocabulary the attributed text buffer stores:
//!
//! - [`AttributeKey`] / [`AttributeValue`]: one named display attribute
//! - [`AttributeSet`]: the attributes in effect over one run
//! - [`TextStyle`]: a font plus an optional foreground color, the unit the
//!   run builder appends with
//!
//! # Examples
//!
//! ```
//! use richstr::{AttributeKey, Font, Rgba, TextStyle};
//!
//! let plain = TextStyle::new(Font::system(12.0));
//! let warning = TextStyle::new(Font::bold_system(12.0)).with_foreground(Rgba::RED);
//!
//! // No color means no foreground attribute is written at all.
//! assert!(!plain.attributes().contains(AttributeKey::ForegroundColor));
//! assert_eq!(warning.attributes().foreground(), Some(Rgba::RED));
//! ```

use crate::color::Rgba;
use crate::font::Font;
use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::sync::Arc;

/// Name of a display attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    Font,
    ForegroundColor,
    BackgroundColor,
    Underline,
    Link,
}

impl AttributeKey {
    /// Stable lowercase name used in debug dumps.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Font => "font",
            Self::ForegroundColor => "foreground",
            Self::BackgroundColor => "background",
            Self::Underline => "underline",
            Self::Link => "link",
        }
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Underline decoration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum UnderlineStyle {
    #[default]
    Single,
    Double,
    Thick,
}

/// Value of a display attribute. Each variant belongs to exactly one key.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    Font(Font),
    ForegroundColor(Rgba),
    BackgroundColor(Rgba),
    Underline(UnderlineStyle),
    Link(Arc<str>),
}

impl AttributeValue {
    /// The key this value is stored under.
    #[must_use]
    pub const fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::BackgroundColor(_) => AttributeKey::BackgroundColor,
            Self::Underline(_) => AttributeKey::Underline,
            Self::Link(_) => AttributeKey::Link,
        }
    }

    /// Value identity: like `==`, but floats compare by bit pattern.
    #[must_use]
    pub fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Font(a), Self::Font(b)) => a.identical(b),
            (Self::ForegroundColor(a), Self::ForegroundColor(b))
            | (Self::BackgroundColor(a), Self::BackgroundColor(b)) => a.bits_eq(*b),
            (Self::Underline(a), Self::Underline(b)) => a == b,
            (Self::Link(a), Self::Link(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font(font) => write!(f, "{font}"),
            Self::ForegroundColor(color) | Self::BackgroundColor(color) => write!(f, "{color}"),
            Self::Underline(style) => write!(f, "{style:?}"),
            Self::Link(url) => f.write_str(url),
        }
    }
}

impl From<Font> for AttributeValue {
    fn from(font: Font) -> Self {
        Self::Font(font)
    }
}

/// Attributes in effect over one run of text.
///
/// Keys are kept in [`AttributeKey`] order, so two sets holding the same
/// values compare and print the same regardless of insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    values: BTreeMap<AttributeKey, AttributeValue>,
}

impl AttributeSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value under its key, returning the value it replaced.
    pub fn insert(&mut self, value: AttributeValue) -> Option<AttributeValue> {
        self.values.insert(value.key(), value)
    }

    /// Remove the value stored under `key`.
    pub fn remove(&mut self, key: AttributeKey) -> Option<AttributeValue> {
        self.values.remove(&key)
    }

    /// Get the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.values.get(&key)
    }

    /// Check if a value is stored under `key`.
    #[must_use]
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.values.contains_key(&key)
    }

    /// Number of attributes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the set holds no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate values in key order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeValue> {
        self.values.values()
    }

    /// The font attribute, if set.
    #[must_use]
    pub fn font(&self) -> Option<&Font> {
        match self.values.get(&AttributeKey::Font) {
            Some(AttributeValue::Font(font)) => Some(font),
            _ => None,
        }
    }

    /// The foreground color attribute, if set.
    #[must_use]
    pub fn foreground(&self) -> Option<Rgba> {
        match self.values.get(&AttributeKey::ForegroundColor) {
            Some(AttributeValue::ForegroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    /// The background color attribute, if set.
    #[must_use]
    pub fn background(&self) -> Option<Rgba> {
        match self.values.get(&AttributeKey::BackgroundColor) {
            Some(AttributeValue::BackgroundColor(color)) => Some(*color),
            _ => None,
        }
    }

    /// The link target, if set.
    #[must_use]
    pub fn link(&self) -> Option<&str> {
        match self.values.get(&AttributeKey::Link) {
            Some(AttributeValue::Link(url)) => Some(&**url),
            _ => None,
        }
    }

    /// Value identity across every key.
    #[must_use]
    pub fn identical(&self, other: &Self) -> bool {
        self.values.len() == other.values.len()
            && self
                .values
                .values()
                .zip(other.values.values())
                .all(|(a, b)| a.identical(b))
    }
}

impl FromIterator<AttributeValue> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = AttributeValue>>(iter: I) -> Self {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a AttributeValue;
    type IntoIter = btree_map::Values<'a, AttributeKey, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.values()
    }
}

impl fmt::Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

/// A font paired with an optional foreground color.
///
/// `None` for the color means "use the ambient default"; appending with such
/// a style writes no color attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: Font,
    pub foreground: Option<Rgba>,
}

impl TextStyle {
    /// Style with a font and no color override.
    #[must_use]
    pub fn new(font: Font) -> Self {
        Self {
            font,
            foreground: None,
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub fn with_foreground(mut self, color: Rgba) -> Self {
        self.foreground = Some(color);
        self
    }

    /// Return a new style without a foreground color.
    #[must_use]
    pub fn without_foreground(mut self) -> Self {
        self.foreground = None;
        self
    }

    /// The attribute set this style writes over a run.
    #[must_use]
    pub fn attributes(&self) -> AttributeSet {
        let mut set = AttributeSet::new();
        set.insert(AttributeValue::Font(self.font.clone()));
        if let Some(color) = self.foreground {
            set.insert(AttributeValue::ForegroundColor(color));
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_same_key() {
        let mut set = AttributeSet::new();
        assert!(set.insert(AttributeValue::ForegroundColor(Rgba::RED)).is_none());
        let old = set.insert(AttributeValue::ForegroundColor(Rgba::BLUE));
        assert_eq!(old, Some(AttributeValue::ForegroundColor(Rgba::RED)));
        assert_eq!(set.len(), 1);
        assert_eq!(set.foreground(), Some(Rgba::BLUE));
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let font = Font::system(12.0);
        let a: AttributeSet = [
            AttributeValue::Font(font.clone()),
            AttributeValue::Link("https://example.com".into()),
        ]
        .into_iter()
        .collect();
        let b: AttributeSet = [
            AttributeValue::Link("https://example.com".into()),
            AttributeValue::Font(font),
        ]
        .into_iter()
        .collect();
        assert_eq!(a, b);
        assert!(a.identical(&b));
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_typed_accessors() {
        let set: AttributeSet = [
            AttributeValue::BackgroundColor(Rgba::BLACK),
            AttributeValue::Underline(UnderlineStyle::Double),
            AttributeValue::Link("https://example.com".into()),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.background(), Some(Rgba::BLACK));
        assert_eq!(set.link(), Some("https://example.com"));
        assert!(set.font().is_none());
        assert!(set.foreground().is_none());
        assert!(set.contains(AttributeKey::Underline));
    }

    #[test]
    fn test_style_attributes() {
        let style = TextStyle::new(Font::system(12.0));
        let attrs = style.attributes();
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.font(), Some(&Font::system(12.0)));

        let colored = style.with_foreground(Rgba::GREEN);
        assert_eq!(colored.attributes().foreground(), Some(Rgba::GREEN));
        assert!(colored.without_foreground().foreground.is_none());
    }

    #[test]
    fn test_display() {
        let set: AttributeSet = [
            AttributeValue::ForegroundColor(Rgba::RED),
            AttributeValue::Font(Font::new("Inter", 12.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.to_string(), "{font: Inter 400 12pt, foreground: #FF0000}");
        assert_eq!(AttributeSet::new().to_string(), "{}");
    }

    #[test]
    fn test_identical_distinguishes_float_bits() {
        let a = AttributeValue::ForegroundColor(Rgba::rgb(0.0, 0.0, 0.0));
        let b = AttributeValue::ForegroundColor(Rgba::rgb(-0.0, 0.0, 0.0));
        assert_eq!(a, b);
        assert!(!a.identical(&b));
        assert!(!a.identical(&AttributeValue::BackgroundColor(Rgba::BLACK)));
    }
}

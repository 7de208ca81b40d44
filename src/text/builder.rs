//! Run builder: append a span with font and optional color.
//!
//! Appending is strictly additive. The new text goes at the end with no
//! attributes, then the font (and the color, when given) is written over
//! exactly the inserted range, so earlier runs keep value-identical
//! attribute sets.

use crate::color::Rgba;
use crate::font::Font;
use crate::style::{AttributeValue, TextStyle};
use crate::text::attributed::{AttributedString, TextAttributeStore};
use std::ops::Range;

/// Append `text` to `store` as a run with `font` and an optional foreground
/// `color`, returning the inserted char range.
///
/// With `color == None` no color attribute is written, so renderers fall
/// back to their default. Empty `text` writes nothing and returns an empty
/// range at the end of the buffer.
pub fn append_run<S>(store: &mut S, text: &str, font: &Font, color: Option<Rgba>) -> Range<usize>
where
    S: TextAttributeStore + ?Sized,
{
    let at = store.len();
    if text.is_empty() {
        return at..at;
    }

    let range = store.insert_plain(at, text);
    store.add_attribute(range.clone(), AttributeValue::Font(font.clone()));
    if let Some(color) = color {
        store.add_attribute(range.clone(), AttributeValue::ForegroundColor(color));
    }
    range
}

impl AttributedString {
    /// Append a run with `font` and an optional foreground `color`.
    ///
    /// See [`append_run`].
    pub fn append_run(&mut self, text: &str, font: &Font, color: Option<Rgba>) -> Range<usize> {
        append_run(self, text, font, color)
    }

    /// Append a run styled with `style`.
    pub fn append_styled(&mut self, text: &str, style: &TextStyle) -> Range<usize> {
        append_run(self, text, &style.font, style.foreground)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::AttributeKey;

    #[test]
    fn test_append_run_scenario() {
        let font_x = Font::new("X", 12.0);
        let font_y = Font::new("Y", 14.0);

        let mut text = AttributedString::new();
        assert_eq!(text.append_run("AB", &font_x, Some(Rgba::RED)), 0..2);
        assert_eq!(text.append_run("CD", &font_y, None), 2..4);

        assert_eq!(text.to_string(), "ABCD");
        let runs = text.runs();
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].range, 0..2);
        assert_eq!(runs[0].attributes.font(), Some(&font_x));
        assert_eq!(runs[0].attributes.foreground(), Some(Rgba::RED));
        assert_eq!(runs[0].attributes.len(), 2);
        assert_eq!(runs[1].range, 2..4);
        assert_eq!(runs[1].attributes.font(), Some(&font_y));
        assert_eq!(runs[1].attributes.len(), 1);
    }

    #[test]
    fn test_empty_text_is_noop() {
        let mut text = AttributedString::from("ab");
        let revision = text.revision();
        let range = text.append_run("", &Font::system(12.0), Some(Rgba::RED));
        assert_eq!(range, 2..2);
        assert_eq!(text.revision(), revision);
        assert!(text.attributes_at(1).is_some_and(|a| a.is_empty()));
    }

    #[test]
    fn test_no_color_does_not_inherit_previous_color() {
        let font = Font::system(12.0);
        let mut text = AttributedString::new();
        text.append_run("red", &font, Some(Rgba::RED));
        text.append_run("plain", &font, None);
        assert!(text.attribute_at(3, AttributeKey::ForegroundColor).is_none());
        assert_eq!(text.runs().len(), 2);
    }

    #[test]
    fn test_same_style_runs_merge() {
        let style = TextStyle::new(Font::system(12.0)).with_foreground(Rgba::BLUE);
        let mut text = AttributedString::new();
        text.append_styled("foo", &style);
        text.append_styled("bar", &style);
        assert_eq!(text.runs().len(), 1);
        assert_eq!(text.runs()[0].range, 0..6);
    }

    #[test]
    fn test_append_run_through_trait_object() {
        let mut text = AttributedString::new();
        let store: &mut dyn TextAttributeStore = &mut text;
        append_run(store, "xyz", &Font::monospace(9.0), None);
        assert_eq!(text.len(), 3);
        assert!(text.attribute_at(0, AttributeKey::Font).is_some());
    }
}

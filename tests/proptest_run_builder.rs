//! Property-based tests for the attributed-text run builder.
//!
//! Uses proptest to verify that appending is strictly additive across
//! arbitrary sequences of runs.

use proptest::prelude::*;
use richstr::text::append_run;
use richstr::{AttributeKey, AttributeRun, AttributedString, Font, FontWeight, Rgba};

// ============================================================================
// Strategies
// ============================================================================

fn fonts() -> Vec<Font> {
    vec![
        Font::new("Inter", 12.0),
        Font::new("Inter", 12.0).with_weight(FontWeight::BOLD),
        Font::monospace(11.0),
        Font::system(18.5),
    ]
}

fn colors() -> Vec<Rgba> {
    vec![Rgba::RED, Rgba::BLUE, Rgba::from_rgb_u8(12, 34, 56), Rgba::WHITE.with_alpha(0.5)]
}

/// A run to append: text, font index, optional color index.
fn run_spec() -> impl Strategy<Value = (String, usize, Option<usize>)> {
    ("\\PC{0,12}", 0..4usize, prop::option::of(0..4usize))
}

fn runs_identical(a: &[AttributeRun], b: &[AttributeRun]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| x.range == y.range && x.attributes.identical(&y.attributes))
}

// ============================================================================
// Append Properties
// ============================================================================

proptest! {
    /// Earlier ranges keep value-identical attributes after every append.
    #[test]
    fn append_is_non_destructive(specs in prop::collection::vec(run_spec(), 0..12)) {
        let fonts = fonts();
        let colors = colors();
        let mut text = AttributedString::new();

        for (s, font, color) in &specs {
            let prev_len = text.len();
            let before = text.runs_in(0..prev_len);

            append_run(&mut text, s, &fonts[*font], color.map(|c| colors[c]));

            let after = text.runs_in(0..prev_len);
            prop_assert!(runs_identical(&before, &after),
                "runs over 0..{} changed: {:?} -> {:?}", prev_len, before, after);
        }
    }

    /// Buffer length is the sum of the appended lengths.
    #[test]
    fn lengths_accumulate(specs in prop::collection::vec(run_spec(), 0..12)) {
        let fonts = fonts();
        let mut text = AttributedString::new();
        let mut expected = 0usize;
        let mut content = String::new();

        for (s, font, _) in &specs {
            let range = append_run(&mut text, s, &fonts[*font], None);
            prop_assert_eq!(range.len(), s.chars().count());
            expected += s.chars().count();
            content.push_str(s);
        }

        prop_assert_eq!(text.len(), expected);
        prop_assert_eq!(text.to_string(), content);
    }

    /// The color attribute is written iff a color was given, over exactly
    /// the appended range, and the font always is.
    #[test]
    fn color_written_only_when_given(specs in prop::collection::vec(run_spec(), 1..8)) {
        let fonts = fonts();
        let colors = colors();
        let mut text = AttributedString::new();

        for (s, font, color) in &specs {
            let range = append_run(&mut text, s, &fonts[*font], color.map(|c| colors[c]));
            for pos in range {
                let attrs = text.attributes_at(pos).cloned().unwrap_or_default();
                prop_assert_eq!(attrs.font(), Some(&fonts[*font]));
                match color {
                    Some(c) => prop_assert!(
                        attrs.foreground().is_some_and(|fg| fg.bits_eq(colors[*c]))
                    ),
                    None => prop_assert!(!attrs.contains(AttributeKey::ForegroundColor)),
                }
            }
        }
    }

    /// Runs always tile the buffer and neighbours always differ.
    #[test]
    fn runs_stay_minimal(specs in prop::collection::vec(run_spec(), 0..12)) {
        let fonts = fonts();
        let colors = colors();
        let mut text = AttributedString::new();
        for (s, font, color) in &specs {
            text.append_run(s, &fonts[*font], color.map(|c| colors[c]));
        }

        let mut next = 0;
        for run in text.runs() {
            prop_assert_eq!(run.range.start, next);
            prop_assert!(!run.is_empty());
            next = run.range.end;
        }
        prop_assert_eq!(next, text.len());
        for pair in text.runs().windows(2) {
            prop_assert!(!pair[0].attributes.identical(&pair[1].attributes));
        }
    }
}

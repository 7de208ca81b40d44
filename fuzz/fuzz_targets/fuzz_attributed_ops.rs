//! Fuzz target for attributed string mutations.
//!
//! Applies arbitrary inserts and attribute edits and checks that the run
//! table still tiles the buffer.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use richstr::{AttributeKey, AttributeValue, AttributedString, Font, Rgba};

#[derive(Arbitrary, Debug)]
enum Op {
    Append { text: String, bold: bool, red: bool },
    Insert { at: usize, text: String },
    Color { start: usize, end: usize },
    Uncolor { start: usize, end: usize },
}

fuzz_target!(|ops: Vec<Op>| {
    let mut text = AttributedString::new();
    for op in ops {
        match op {
            Op::Append { text: s, bold, red } => {
                let font = if bold { Font::bold_system(12.0) } else { Font::system(12.0) };
                text.append_run(&s, &font, red.then_some(Rgba::RED));
            }
            Op::Insert { at, text: s } => {
                text.insert_plain(at, &s);
            }
            Op::Color { start, end } => {
                text.add_attribute(start..end, AttributeValue::ForegroundColor(Rgba::BLUE));
            }
            Op::Uncolor { start, end } => {
                text.remove_attribute(start..end, AttributeKey::ForegroundColor);
            }
        }
    }

    let mut next = 0;
    for run in text.runs() {
        assert_eq!(run.range.start, next);
        assert!(!run.is_empty());
        next = run.range.end;
    }
    assert_eq!(next, text.len());
});

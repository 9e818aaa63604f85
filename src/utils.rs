// src/utils.rs
use crate::types::Field;

/// A piece of a template string: literal text or a field placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Field(Field),
}

/// Splits a template into literal text and placeholders.
///
/// Only the first occurrence of each token is a placeholder; placeholders are
/// ordered by their position in the template, not by field. Later repeats of
/// a token stay literal text.
pub fn tokenize(template: &str) -> Vec<Segment<'_>> {
    let mut found: Vec<(usize, Field)> = Field::ALL
        .into_iter()
        .filter_map(|field| template.find(field.token()).map(|pos| (pos, field)))
        .collect();
    found.sort_by_key(|(pos, _)| *pos);

    let mut segments = Vec::with_capacity(found.len() * 2 + 1);
    let mut cursor = 0;
    for (pos, field) in found {
        if pos > cursor {
            segments.push(Segment::Literal(&template[cursor..pos]));
        }
        segments.push(Segment::Field(field));
        cursor = pos + field.token().len();
    }
    if cursor < template.len() {
        segments.push(Segment::Literal(&template[cursor..]));
    }
    segments
}

// Left-pads with zeros; never truncates.
pub fn pad_start(digits: &str, width: usize) -> String {
    let mut padded = "0".repeat(width.saturating_sub(digits.chars().count()));
    padded.push_str(digits);
    padded
}

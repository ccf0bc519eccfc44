// src/core/render.rs
use crate::error::FormatError;
use crate::models::Placeholder;

/// How the renderer treats placeholders that are missing or repeated.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Substitution {
    /// Replace every occurrence, ignore tokens that never appear.
    #[default]
    Permissive,
    /// Every token must appear exactly once.
    Strict,
}

/// Replaces placeholder tokens in `template` in a single left-to-right pass.
///
/// Inserted values are never scanned again, so a value that itself contains
/// a token (a source listing mentioning `CLOC`, say) is copied verbatim.
///
/// # Errors
///
/// In `Substitution::Strict` mode, returns `FormatError::MissingPlaceholder`
/// or `FormatError::RepeatedPlaceholder` when a token does not appear exactly
/// once.
#[inline]
pub fn substitute(
    template: &str,
    values: &[(Placeholder, &str)],
    mode: Substitution,
) -> Result<String, FormatError> {
    let mut output = String::with_capacity(template.len());
    let mut counts = vec![0_usize; values.len()];
    let mut rest = template;

    while let Some((offset, index)) = next_token(rest, values) {
        let (placeholder, value) = values[index];
        output.push_str(&rest[..offset]);
        output.push_str(value);
        counts[index] = counts[index].saturating_add(1);
        rest = &rest[offset + placeholder.token().len()..];
    }
    output.push_str(rest);

    if mode == Substitution::Strict {
        for ((placeholder, _), count) in values.iter().zip(counts) {
            match count {
                0 => return Err(FormatError::MissingPlaceholder(placeholder.token())),
                1 => {}
                _ => {
                    return Err(FormatError::RepeatedPlaceholder {
                        token: placeholder.token(),
                        count,
                    });
                }
            }
        }
    }

    Ok(output)
}

// Earliest token in `text`; the longer token wins when two start together.
fn next_token(text: &str, values: &[(Placeholder, &str)]) -> Option<(usize, usize)> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, (placeholder, _))| {
            text.find(placeholder.token())
                .map(|offset| (offset, index, placeholder.token().len()))
        })
        .min_by(|a, b| a.0.cmp(&b.0).then_with(|| b.2.cmp(&a.2)))
        .map(|(offset, index, _)| (offset, index))
}

//! Identifier rules shared by components, wires, and port references.
//!
//! Identifiers are opaque strings. They are written verbatim into the text
//! format, so they must not contain whitespace or any grammar delimiter.

use crate::error::LayoutError;

/// Characters with grammatical meaning in a wire-schema line.
pub const DELIMITERS: [char; 6] = [',', '|', ':', '[', ']', '/'];

/// Returns `true` if `ch` may appear inside an identifier.
pub fn is_id_char(ch: char) -> bool {
    !ch.is_whitespace() && !DELIMITERS.contains(&ch)
}

/// Checks that `id` can be written to and read back from the text format.
///
/// # Examples
///
/// ```
/// # use wireschema_core::identifier::validate;
/// assert!(validate("insFetch").is_ok());
/// assert!(validate("alu/rhs").is_err());
/// assert!(validate("").is_err());
/// ```
///
/// # Errors
///
/// Returns [`LayoutError::EmptyId`] for an empty string and
/// [`LayoutError::InvalidIdChar`] naming the first offending character.
pub fn validate(id: &str) -> Result<(), LayoutError> {
    if id.is_empty() {
        return Err(LayoutError::EmptyId);
    }

    match id.chars().find(|&ch| !is_id_char(ch)) {
        Some(ch) => Err(LayoutError::InvalidIdChar {
            id: id.to_string(),
            ch,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_plain_ids() {
        for id in ["ram", "3", "insFetch", "reg_a", "-7", "a.b"] {
            assert!(validate(id).is_ok(), "{id} should be valid");
        }
    }

    #[test]
    fn test_validate_rejects_delimiters() {
        for ch in DELIMITERS {
            let id = format!("a{ch}b");
            assert_eq!(
                validate(&id),
                Err(LayoutError::InvalidIdChar { id: id.clone(), ch })
            );
        }
    }

    #[test]
    fn test_validate_rejects_whitespace_and_empty() {
        assert_eq!(validate(""), Err(LayoutError::EmptyId));
        assert!(matches!(
            validate("a b"),
            Err(LayoutError::InvalidIdChar { ch: ' ', .. })
        ));
        assert!(matches!(
            validate("a\tb"),
            Err(LayoutError::InvalidIdChar { ch: '\t', .. })
        ));
    }
}

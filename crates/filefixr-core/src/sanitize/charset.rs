/// Character sets used by the name sanitizer.
///
/// Both sets are fixed. Anything outside [`is_allowed`] is stripped from
/// names; the characters in [`SUBSTITUTED`] are turned into a hyphen first
/// so that separators like `a:b` stay readable as `a-b`.

/// Characters replaced by [`REPLACEMENT`] before filtering.
pub const SUBSTITUTED: [char; 4] = [':', '/', '\\', '~'];

/// The character substituted for every member of [`SUBSTITUTED`].
pub const REPLACEMENT: char = '-';

/// Punctuation that survives filtering (space included).
const PUNCTUATION: &str = "&-_.() ";

/// Latin-extended letters used in Nordic and other European orthographies.
const EXTENDED_LETTERS: &str = "åäöüøÅÄÖÜØéáíóúÉÁÍÓÚñÑçÇ";

/// `true` if `c` may appear in a sanitized name.
#[inline]
pub fn is_allowed(c: char) -> bool {
    c.is_ascii_alphanumeric() || PUNCTUATION.contains(c) || EXTENDED_LETTERS.contains(c)
}

/// Map a substituted character to the replacement, leave others alone.
#[inline]
pub fn substitute(c: char) -> char {
    if SUBSTITUTED.contains(&c) {
        REPLACEMENT
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_alphanumerics_allowed() {
        assert!("azAZ09".chars().all(is_allowed));
    }

    #[test]
    fn test_punctuation_allowed() {
        assert!("&-_.() ".chars().all(is_allowed));
    }

    #[test]
    fn test_nordic_letters_allowed() {
        assert!("åäöÅÄÖøØüÜ".chars().all(is_allowed));
        assert!("éáíóúÉÁÍÓÚñÑçÇ".chars().all(is_allowed));
    }

    #[test]
    fn test_unsafe_characters_rejected() {
        for c in ['?', '*', '"', '<', '>', '|', '#', '%', '\t', '\n', 'è', 'ß', '€'] {
            assert!(!is_allowed(c), "{c:?} should not be allowed");
        }
    }

    #[test]
    fn test_substituted_characters_become_hyphen() {
        for c in SUBSTITUTED {
            assert_eq!(substitute(c), '-');
            assert!(!is_allowed(c));
        }
        assert_eq!(substitute('a'), 'a');
    }
}

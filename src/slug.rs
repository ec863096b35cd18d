//! Text slugification for note directory names.
//!
//! Turns arbitrary text into a filename-safe slug: punctuation is stripped,
//! whitespace and underscores become hyphens, hyphen runs collapse, and the
//! result is lowercased. The output alphabet is lowercase alphanumerics and
//! single internal hyphens, with no leading or trailing hyphen.

/// Characters always stripped from text before slugification.
pub const EXCLUDED_PUNCTUATION: &str = "[]{}!@#$%^&*()=+'\"?,.|;:~`’“”/";

/// Converts text to a filename-safe slug.
///
/// Passes, in order:
/// 1. Drop characters in [`EXCLUDED_PUNCTUATION`] plus `extra_punctuation`.
/// 2. Turn runs of whitespace, underscores and hyphens into one hyphen;
///    drop any other non-alphanumeric character.
/// 3. Trim leading/trailing hyphens and lowercase.
///
/// When `allow_multi_word` is false, all hyphens are removed afterwards so
/// the words join with no separator.
///
/// Empty input, or input consisting entirely of stripped characters, yields
/// an empty string. Idempotent: slugifying a slug returns it unchanged.
pub fn slugify(text: &str, allow_multi_word: bool, extra_punctuation: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for c in text.chars() {
        if EXCLUDED_PUNCTUATION.contains(c) || extra_punctuation.contains(c) {
            continue;
        }
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = true;
        } else if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(c.to_lowercase());
        }
        // any other character is dropped without acting as a separator
    }

    if allow_multi_word {
        slug
    } else {
        slug.replace('-', "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(text: &str) -> String {
        slugify(text, true, "")
    }

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(slug("My Cool Idea!"), "my-cool-idea");
        assert_eq!(slug("What's up?"), "whats-up");
        assert_eq!(slug("a.b,c;d"), "abcd");
    }

    #[test]
    fn whitespace_and_underscores_become_single_hyphens() {
        assert_eq!(slug("foo_bar baz"), "foo-bar-baz");
        assert_eq!(slug("foo \t _ bar"), "foo-bar");
        assert_eq!(slug("foo---bar"), "foo-bar");
    }

    #[test]
    fn trims_leading_and_trailing_hyphens() {
        assert_eq!(slug("  hello  "), "hello");
        assert_eq!(slug("-hello-"), "hello");
        assert_eq!(slug("--x--"), "x");
    }

    #[test]
    fn empty_and_all_punctuation_inputs_yield_empty() {
        assert_eq!(slug(""), "");
        assert_eq!(slug("!!! ??? ..."), "");
        assert_eq!(slug("   "), "");
    }

    #[test]
    fn single_word_mode_removes_hyphens() {
        assert_eq!(slugify("3D Models", false, ""), "3dmodels");
        assert_eq!(slugify("a-b c", false, ""), "abc");
    }

    #[test]
    fn extra_punctuation_extends_the_stripped_set() {
        assert_eq!(slugify("v1.2", true, ""), "v12");
        assert_eq!(slugify("v1x2", true, "x"), "v12");
        assert_eq!(slugify("red<>blue", true, "<>"), "redblue");
    }

    #[test]
    fn output_alphabet_holds_for_awkward_input() {
        let out = slug("héllo <wörld> \\ 42");
        for c in out.chars() {
            assert!(
                c == '-' || (c.is_alphanumeric() && !c.is_uppercase()),
                "unexpected char {:?} in {:?}",
                c,
                out
            );
        }
        assert!(!out.starts_with('-') && !out.ends_with('-'));
        assert!(!out.contains("--"));
    }

    #[test]
    fn slugify_is_idempotent() {
        for text in ["My Cool Idea!", "foo_bar  baz", "--x--", "", "3D Models"] {
            let once = slug(text);
            assert_eq!(slug(&once), once);
        }
    }
}

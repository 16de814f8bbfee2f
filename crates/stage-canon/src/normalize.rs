//! Funding-stage label normalization helpers.

use std::sync::LazyLock;

use regex::Regex;

/// Code points pasted in from spreadsheets that render as nothing or as a space.
const INVISIBLE_CHARS: [char; 2] = ['\u{200B}', '\u{00A0}'];

static GRANT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bgrant\b").unwrap());
static PRE_SEED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bpre\s+seed\b").unwrap());

/// Reduce a raw funding-stage label to its lookup key.
///
/// The steps run in a fixed order:
/// 1. trim and lower-case
/// 2. drop zero-width and no-break spaces
/// 3. pad `/` with spaces, turn `-` into a space
/// 4. read `grant` as `seed`, collapse `pre seed` to `seed`
/// 5. collapse whitespace runs
///
/// The result may be empty.
pub fn normalize_stage_input(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let visible: String = lowered
        .chars()
        .filter(|c| !INVISIBLE_CHARS.contains(c))
        .collect();

    let separated = visible.replace('/', " / ").replace('-', " ");

    let substituted = GRANT_RE.replace_all(&separated, "seed");
    let substituted = PRE_SEED_RE.replace_all(&substituted, "seed");

    collapse_whitespace(&substituted)
}

/// Collapse runs of whitespace to a single space and trim the ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Upper-case the first character of every space-separated word.
///
/// A first character whose upper-case form is more than one character
/// (`ß` → `SS`) is left as-is, so canonicalizing the output again gives the
/// same label.
pub fn title_case(cleaned: &str) -> String {
    cleaned
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut out = String::with_capacity(word.len());
                    out.push(upper_single(first));
                    out.extend(chars);
                    out
                }
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn upper_single(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_lowercases() {
        assert_eq!(normalize_stage_input("  SEED  "), "seed");
        assert_eq!(normalize_stage_input("Series A"), "series a");
    }

    #[test]
    fn test_strips_invisible_characters() {
        assert_eq!(normalize_stage_input("se\u{200B}ed"), "seed");
        assert_eq!(normalize_stage_input("series\u{00A0}a"), "seriesa");
        assert_eq!(normalize_stage_input("\u{200B}acquired\u{200B}"), "acquired");
    }

    #[test]
    fn test_separators() {
        assert_eq!(normalize_stage_input("public/private"), "public / private");
        assert_eq!(normalize_stage_input("Public  /  Private"), "public / private");
        assert_eq!(normalize_stage_input("series-b"), "series b");
    }

    #[test]
    fn test_grant_and_pre_seed_become_seed() {
        assert_eq!(normalize_stage_input("grant"), "seed");
        assert_eq!(normalize_stage_input("seed/grant"), "seed / seed");
        assert_eq!(normalize_stage_input("pre-seed"), "seed");
        assert_eq!(normalize_stage_input("Pre Seed"), "seed");
    }

    #[test]
    fn test_grant_only_replaced_as_a_word() {
        assert_eq!(normalize_stage_input("grants"), "grants");
        assert_eq!(normalize_stage_input("immigrant fund"), "immigrant fund");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_stage_input(""), "");
        assert_eq!(normalize_stage_input("   \t "), "");
        assert_eq!(normalize_stage_input("\u{200B}"), "");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t b\n c "), "a b c");
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("bridge round"), "Bridge Round");
        assert_eq!(title_case("series d"), "Series D");
        assert_eq!(title_case("seed / other"), "Seed / Other");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_title_case_keeps_multi_char_uppercase() {
        assert_eq!(title_case("ßeta round"), "ßeta Round");
        assert_eq!(title_case("éclair"), "Éclair");
    }
}

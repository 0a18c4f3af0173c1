//! Deterministic slug generation for schema field identifiers.
//!
//! Titles are transliterated to a base-Latin form. Titles with no Latin
//! content at all (non-Latin scripts) fall back to a vowel-stripped
//! rendering of the field's type path. Colliding candidates chain a literal
//! `_2` suffix — `x`, `x_2`, `x_2_2` — rather than counting upward.

use std::collections::HashSet;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Generate a unique slug for `title`, registering the result in `used`.
///
/// `fallback_path` is the field's type path string (empty for plain
/// measures); it is only consulted when the title transliterates to
/// nothing.
pub fn slugify(title: &str, fallback_path: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = transliterate(title);
    if !candidate.chars().any(|c| c.is_ascii_alphanumeric()) {
        candidate = path_slug(fallback_path);
    }
    while !used.insert(candidate.clone()) {
        candidate.push_str("_2");
    }
    candidate
}

/// Strip diacritics, lowercase, and squeeze every run of non-alphanumeric
/// characters into a single underscore, trimming the ends.
fn transliterate(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    let mut gap = false;

    for c in title.nfkd() {
        if is_combining_mark(c) {
            continue;
        }
        if c.is_ascii_alphanumeric() {
            if gap && !out.is_empty() {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
            gap = false;
        } else {
            gap = true;
        }
    }

    out
}

/// Render a type path as an identifier: separators become underscores,
/// vowels drop out to keep it short, repeated underscores collapse.
fn path_slug(path: &str) -> String {
    let mut out = String::with_capacity(path.len());

    for c in path.chars() {
        let c = if c == ':' || c == '-' { '_' } else { c };
        if matches!(c, 'a' | 'e' | 'i' | 'o' | 'u') {
            continue;
        }
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slug(title: &str, fallback: &str) -> String {
        slugify(title, fallback, &mut HashSet::new())
    }

    #[test]
    fn underscores_hyphens_and_spaces_normalize() {
        assert_eq!(slug("hello_world", ""), "hello_world");
        assert_eq!(slug("hello-world", ""), "hello_world");
        assert_eq!(slug("hello world", ""), "hello_world");
    }

    #[test]
    fn diacritics_strip_to_base_letters() {
        assert_eq!(slug("héllô₪wörld", ""), "hello_world");
    }

    #[test]
    fn runs_of_punctuation_squeeze_and_trim() {
        assert_eq!(slug("  -- Net!! Amount ??", ""), "net_amount");
    }

    #[test]
    fn uppercase_lowers() {
        assert_eq!(slug("Net Amount", ""), "net_amount");
    }

    #[test]
    fn non_latin_titles_fall_back_to_the_type_path() {
        assert_eq!(
            slug("שלום עולם", "programm-classification:dimension:code:full"),
            "prgrmm_clssfctn_dmnsn_cd_fll"
        );
        assert_eq!(
            slug("אכלת פלפל", "functional-classification:dimension:level3:code:full"),
            "fnctnl_clssfctn_dmnsn_lvl3_cd_fll"
        );
        assert_eq!(
            slug("שתה מיץ", "administrative-classification:dimension:level4:code:full"),
            "dmnstrtv_clssfctn_dmnsn_lvl4_cd_fll"
        );
    }

    #[test]
    fn collisions_chain_the_suffix() {
        let mut used = HashSet::new();
        assert_eq!(slugify("taxes", "", &mut used), "taxes");
        assert_eq!(slugify("taxes", "", &mut used), "taxes_2");
        assert_eq!(slugify("taxes", "", &mut used), "taxes_2_2");
        assert_eq!(slugify("taxes", "", &mut used), "taxes_2_2_2");
    }

    #[test]
    fn fallback_slugs_collide_and_chain_too() {
        let mut used = HashSet::new();
        let path = "programm-classification:dimension:code:full";
        assert_eq!(slugify("שלום עולם", path, &mut used), "prgrmm_clssfctn_dmnsn_cd_fll");
        assert_eq!(
            slugify("prgrmm_clssfctn_dmnsn_cd_fll", path, &mut used),
            "prgrmm_clssfctn_dmnsn_cd_fll_2"
        );
        assert_eq!(
            slugify("prgrmm_clssfctn_dmnsn_cd_fll_2", path, &mut used),
            "prgrmm_clssfctn_dmnsn_cd_fll_2_2"
        );
    }

    #[test]
    fn same_title_same_slug_without_collisions() {
        assert_eq!(slug("Budget line", ""), slug("Budget line", ""));
    }
}

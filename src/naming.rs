//! Slug normalization and validation.
//!
//! Slugs show up in two places: a project's `website_url` (used as a path
//! prefix) and each page's `slug` (its route inside the project). Both use the
//! same alphabet: lowercase ASCII letters, digits, `-` and `_`.
//!
//! ## Normalization
//!
//! [`slugify`] turns arbitrary user text into that alphabet:
//! - `"My Great Site"` → `"my-great-site"`
//! - `"Über Uns!"` → `"ber-uns"`
//! - `"  pricing  "` → `"pricing"`
//!
//! Its output is always a fixed point: `slugify(slugify(x)) == slugify(x)`.
//!
//! ## Validation
//!
//! Page slugs are additionally checked by [`validate_page_slug`]: non-empty,
//! at least two characters, and unused by any other page in the project.
//! The error messages are the ones shown to the user.

use thiserror::Error;

/// Slug reserved for every project's home page.
pub const HOME_SLUG: &str = "home";

/// Minimum page slug length.
pub const MIN_SLUG_LEN: usize = 2;

/// User input rejected before it reaches the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a project name")]
    EmptyProjectName,
    #[error("Please enter a page name")]
    EmptyPageName,
    #[error("Page URL is required")]
    SlugRequired,
    #[error("URL can only contain lowercase letters, numbers, hyphens, and underscores")]
    SlugInvalidChars,
    #[error("URL must be at least 2 characters long")]
    SlugTooShort,
    #[error("This page URL is already taken")]
    SlugTaken,
    #[error("The home page URL cannot be changed")]
    HomeSlugLocked,
    #[error("Section content is for template '{found}', expected '{expected}'")]
    TemplateMismatch { expected: String, found: String },
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_'
}

/// Normalize free text into slug form.
///
/// Trims, lowercases, collapses each run of whitespace into a single `-`,
/// then drops every character outside `[a-z0-9-_]`.
pub fn slugify(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut in_space = false;
    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
            continue;
        }
        in_space = false;
        if is_slug_char(c) {
            out.push(c);
        }
    }
    out
}

/// Check the shape of a slug, without looking at siblings.
pub fn validate_slug_format(slug: &str) -> Result<(), ValidationError> {
    if slug.is_empty() {
        return Err(ValidationError::SlugRequired);
    }
    if !slug.chars().all(is_slug_char) {
        return Err(ValidationError::SlugInvalidChars);
    }
    if slug.chars().count() < MIN_SLUG_LEN {
        return Err(ValidationError::SlugTooShort);
    }
    Ok(())
}

/// Validate a page slug against its siblings.
///
/// `taken` yields the slugs of the other pages in the project; pass the
/// project's pages minus the page being edited.
pub fn validate_page_slug<'a>(
    slug: &str,
    mut taken: impl Iterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    validate_slug_format(slug)?;
    if taken.any(|s| s == slug) {
        return Err(ValidationError::SlugTaken);
    }
    Ok(())
}

/// Pick a free slug for a copy of `base`.
///
/// Tries `base-copy`, then `base-copy-2`, `base-copy-3`, ... until one is
/// not claimed by `is_taken`.
pub fn copy_slug(base: &str, is_taken: impl Fn(&str) -> bool) -> String {
    let first = format!("{base}-copy");
    if !is_taken(&first) {
        return first;
    }
    let mut n = 2u32;
    loop {
        let candidate = format!("{base}-copy-{n}");
        if !is_taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("My Great Site"), "my-great-site");
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("a   b\t c"), "a-b-c");
    }

    #[test]
    fn slugify_trims_outer_whitespace() {
        assert_eq!(slugify("  pricing  "), "pricing");
    }

    #[test]
    fn slugify_drops_foreign_chars() {
        assert_eq!(slugify("Über Uns!"), "ber-uns");
        assert_eq!(slugify("a.b/c"), "abc");
    }

    #[test]
    fn slugify_keeps_underscores_and_digits() {
        assert_eq!(slugify("plan_2024"), "plan_2024");
    }

    #[test]
    fn format_requires_value() {
        assert_eq!(validate_slug_format(""), Err(ValidationError::SlugRequired));
    }

    #[test]
    fn format_rejects_uppercase() {
        assert_eq!(
            validate_slug_format("About"),
            Err(ValidationError::SlugInvalidChars)
        );
    }

    #[test]
    fn format_rejects_single_char() {
        assert_eq!(validate_slug_format("a"), Err(ValidationError::SlugTooShort));
    }

    #[test]
    fn format_accepts_two_chars() {
        assert_eq!(validate_slug_format("ab"), Ok(()));
    }

    #[test]
    fn page_slug_must_be_unique() {
        let taken = ["home", "about"];
        assert_eq!(
            validate_page_slug("about", taken.iter().copied()),
            Err(ValidationError::SlugTaken)
        );
        assert_eq!(validate_page_slug("contact", taken.iter().copied()), Ok(()));
    }

    #[test]
    fn copy_slug_first_choice() {
        assert_eq!(copy_slug("about", |_| false), "about-copy");
    }

    #[test]
    fn copy_slug_counts_past_collisions() {
        let taken = ["about-copy", "about-copy-2"];
        assert_eq!(copy_slug("about", |s| taken.contains(&s)), "about-copy-3");
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(
            ValidationError::SlugTaken.to_string(),
            "This page URL is already taken"
        );
    }

    proptest! {
        #[test]
        fn slugify_is_idempotent(input in ".{0,40}") {
            let once = slugify(&input);
            prop_assert_eq!(slugify(&once), once.clone());
        }

        #[test]
        fn slugify_output_uses_slug_alphabet(input in ".{0,40}") {
            prop_assert!(slugify(&input).chars().all(is_slug_char));
        }
    }
}

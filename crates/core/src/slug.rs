//! URL-safe slug derivation.
//!
//! Slugs are derived from display names for categories and products. The
//! backend enforces uniqueness; a clash comes back as a conflict error on the
//! write, not from this module.

/// Derive a URL-safe slug from a display name.
///
/// Lowercases, drops everything except ASCII alphanumerics, underscores,
/// whitespace and hyphens, then collapses each run of whitespace, underscores
/// and hyphens into a single hyphen. Leading and trailing hyphens are
/// trimmed. Already-slugified input is a fixed point:
/// `generate_slug(generate_slug(x)) == generate_slug(x)`.
#[must_use]
pub fn generate_slug(name: &str) -> String {
    let lowered = name.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut pending_separator = false;

    for c in lowered.trim().chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            // Separator runs collapse to one hyphen, and never lead.
            pending_separator = !slug.is_empty();
        } else if c.is_ascii_alphanumeric() {
            if pending_separator {
                slug.push('-');
                pending_separator = false;
            }
            slug.push(c);
        }
        // Anything else (punctuation, symbols) is dropped outright.
    }

    slug
}

/// A slug input that follows its name until manually edited.
///
/// Mirrors the admin form behavior: the slug auto-fills from the name while
/// it is empty or still equal to the auto-derived slug of the previous name;
/// once an operator types their own slug, name edits leave it alone.
#[derive(Debug, Clone, Default)]
pub struct SlugField {
    value: String,
}

impl SlugField {
    /// Start with an empty slug.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume editing an existing record's slug.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Current slug value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Operator typed a slug directly.
    pub fn set_manual(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// The name changed from `previous_name` to `name`; re-derive the slug
    /// unless it has been manually overridden.
    pub fn follow_name(&mut self, previous_name: &str, name: &str) {
        if self.value.is_empty() || self.value == generate_slug(previous_name) {
            self.value = generate_slug(name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slugs() {
        assert_eq!(generate_slug("Classic T-Shirt"), "classic-t-shirt");
        assert_eq!(generate_slug("  Summer  Sale!  "), "summer-sale");
        assert_eq!(generate_slug("Hats & Caps"), "hats-caps");
        assert_eq!(generate_slug("snake_case_name"), "snake-case-name");
    }

    #[test]
    fn test_slug_is_idempotent() {
        // P5: already-slugified input is a fixed point.
        for input in ["Classic T-Shirt", "--odd--input--", "MiXeD CaSe 99", "", "!!!"] {
            let once = generate_slug(input);
            assert_eq!(generate_slug(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("!!!"), "");
        assert_eq!(generate_slug("---"), "");
    }

    #[test]
    fn test_slug_field_follows_name_until_overridden() {
        let mut field = SlugField::new();
        field.follow_name("", "Winter Coats");
        assert_eq!(field.value(), "winter-coats");

        // Still auto-derived, so it keeps following.
        field.follow_name("Winter Coats", "Winter Jackets");
        assert_eq!(field.value(), "winter-jackets");

        // Manual edit sticks.
        field.set_manual("outerwear");
        field.follow_name("Winter Jackets", "Spring Jackets");
        assert_eq!(field.value(), "outerwear");
    }
}

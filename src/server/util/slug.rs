use rand::distr::Alphanumeric;
use rand::Rng;

/// Lowercases a name and collapses every run of non-alphanumeric
/// characters into a single hyphen.
///
/// # Arguments
/// - `name` - Display name to derive the slug fragment from
///
/// # Returns
/// URL-safe fragment with no leading or trailing hyphen
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Generates a unique slug for a product name.
///
/// Appends the current timestamp in milliseconds and a short random suffix
/// so that products sharing a display name still get distinct slugs.
///
/// # Arguments
/// - `name` - Product display name
///
/// # Returns
/// Slug of the form `{slugified-name}-{timestamp}-{suffix}`
pub fn generate_slug(name: &str) -> String {
    let suffix: String = rand::rng()
        .sample_iter(Alphanumeric)
        .take(4)
        .map(|b| (b as char).to_ascii_lowercase())
        .collect();

    format!(
        "{}-{}-{}",
        slugify(name),
        chrono::Utc::now().timestamp_millis(),
        suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_lowercases_and_hyphenates() {
        assert_eq!(slugify("Fresh Cow Milk"), "fresh-cow-milk");
    }

    #[test]
    fn slugify_collapses_symbol_runs() {
        assert_eq!(slugify("  A2  Desi--Ghee! (500ml)  "), "a2-desi-ghee-500ml");
    }

    #[test]
    fn generated_slugs_start_with_the_name_fragment() {
        let slug = generate_slug("Paneer Block");
        assert!(slug.starts_with("paneer-block-"));
    }

    #[test]
    fn identical_names_get_distinct_slugs() {
        let first = generate_slug("Milk");
        let second = generate_slug("Milk");
        assert_ne!(first, second);
    }
}

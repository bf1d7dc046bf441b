use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Category names in display order.
pub const CATEGORIES: &[&str] = &[
    "Face Care",
    "Tan Removal",
    "Hair Care",
    "Teeth Whitening",
    "Dark Circles",
    "Lip Care",
    "Body Care",
    "Acne Treatment",
    "Health Drinks",
    "Beauty Tips",
];

/// One home-remedy recipe. The catalog is static and read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Remedy {
    pub title: String,
    pub category: String,
    pub problems: Vec<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub duration: String,
    pub frequency: String,
}

static REMEDIES: Lazy<Vec<Remedy>> = Lazy::new(|| {
    serde_json::from_str(include_str!("../../assets/remedies.json"))
        .expect("embedded remedy catalog is valid JSON")
});

pub fn all() -> &'static [Remedy] {
    &REMEDIES
}

/// Filter the catalog by category and search term.
///
/// `category` of `None` or `"all"` keeps every category. The term matches
/// case-insensitively against the title, any problem, or any ingredient; an
/// empty term matches everything. Declared catalog order is preserved.
pub fn search(term: &str, category: Option<&str>) -> Vec<&'static Remedy> {
    let term = term.trim().to_lowercase();

    REMEDIES
        .iter()
        .filter(|remedy| match category {
            None => true,
            Some(selected) => {
                selected.eq_ignore_ascii_case("all") || remedy.category == selected
            }
        })
        .filter(|remedy| {
            if term.is_empty() {
                return true;
            }
            remedy.title.to_lowercase().contains(&term)
                || remedy
                    .problems
                    .iter()
                    .any(|problem| problem.to_lowercase().contains(&term))
                || remedy
                    .ingredients
                    .iter()
                    .any(|ingredient| ingredient.to_lowercase().contains(&term))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads_and_is_complete() {
        assert_eq!(all().len(), 69);
        for remedy in all() {
            assert!(!remedy.title.is_empty());
            assert!(
                CATEGORIES.contains(&remedy.category.as_str()),
                "unknown category {}",
                remedy.category
            );
            assert!(!remedy.problems.is_empty());
            assert!(!remedy.ingredients.is_empty());
            assert!(!remedy.instructions.is_empty());
            assert!(!remedy.duration.is_empty());
            assert!(!remedy.frequency.is_empty());
        }
    }

    #[test]
    fn empty_search_returns_everything() {
        assert_eq!(search("", None).len(), all().len());
        assert_eq!(search("  ", Some("all")).len(), all().len());
    }

    #[test]
    fn category_filter_is_exact() {
        let hair = search("", Some("Hair Care"));
        assert_eq!(hair.len(), 4);
        assert!(hair.iter().all(|remedy| remedy.category == "Hair Care"));

        assert!(search("", Some("Nail Care")).is_empty());
    }

    #[test]
    fn term_matches_title_problems_and_ingredients() {
        // Title hit.
        assert!(search("coconut oil pulling", None)
            .iter()
            .any(|remedy| remedy.title == "Coconut Oil Pulling"));

        // Problem hit, case-insensitive.
        let dark_circles = search("dark circles", None);
        assert!(!dark_circles.is_empty());
        assert!(dark_circles.iter().any(|remedy| remedy
            .problems
            .iter()
            .any(|problem| problem.eq_ignore_ascii_case("dark circles"))));

        // Ingredient hit.
        let turmeric = search("TURMERIC", None);
        assert!(turmeric.len() > 5);
    }

    #[test]
    fn term_and_category_compose() {
        let results = search("honey", Some("Lip Care"));
        assert!(!results.is_empty());
        assert!(results.iter().all(|remedy| remedy.category == "Lip Care"));
        assert!(results.iter().all(|remedy| {
            remedy.title.to_lowercase().contains("honey")
                || remedy
                    .problems
                    .iter()
                    .any(|problem| problem.to_lowercase().contains("honey"))
                || remedy
                    .ingredients
                    .iter()
                    .any(|ingredient| ingredient.to_lowercase().contains("honey"))
        }));
    }

    #[test]
    fn unmatched_term_returns_empty_not_error() {
        assert!(search("xyzzy", None).is_empty());
    }
}

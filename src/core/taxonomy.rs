use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use crate::core::normalize::normalize;

/// Errors raised while building a taxonomy from configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxonomyError {
    #[error("Category name must not be empty")]
    EmptyCategoryName,

    #[error("Category '{0}' has no keywords")]
    NoKeywords(String),

    #[error("Category '{0}' contains a blank keyword")]
    BlankKeyword(String),

    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("Taxonomy must declare at least one category")]
    Empty,
}

/// One domain category and its keyword substrings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub keywords: Vec<String>,
}

impl Category {
    /// A normalized skill belongs to the category if it contains any keyword
    #[inline]
    pub fn contains(&self, normalized_skill: &str) -> bool {
        self.keywords.iter().any(|k| normalized_skill.contains(k.as_str()))
    }
}

/// Ordered category → keyword mapping used for related-skill detection
///
/// Categories are tested in declaration order. When a skill pair shares more
/// than one category the first declared one is reported; the order carries no
/// other meaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<Category>,
}

const BUILTIN: &[(&str, &[&str])] = &[
    ("programming", &["javascript", "python", "java", "react", "node", "html", "css", "typescript", "vue", "angular"]),
    ("design", &["ui", "ux", "figma", "photoshop", "illustrator", "design", "graphic"]),
    ("languages", &["english", "spanish", "french", "german", "chinese", "japanese"]),
    ("music", &["guitar", "piano", "violin", "drums", "music", "singing"]),
    ("business", &["marketing", "sales", "management", "entrepreneurship", "finance"]),
    ("cooking", &["cooking", "baking", "culinary", "recipe"]),
    ("fitness", &["yoga", "fitness", "gym", "workout", "running", "cycling"]),
];

impl Taxonomy {
    /// Build a taxonomy from ordered categories
    ///
    /// Keywords are normalized the same way skills are, so membership tests
    /// compare like with like.
    pub fn new(categories: Vec<Category>) -> Result<Self, TaxonomyError> {
        if categories.is_empty() {
            return Err(TaxonomyError::Empty);
        }

        let mut seen = HashSet::new();
        let mut built = Vec::with_capacity(categories.len());

        for category in categories {
            let name = category.name.trim().to_string();
            if name.is_empty() {
                return Err(TaxonomyError::EmptyCategoryName);
            }
            if !seen.insert(normalize(&name)) {
                return Err(TaxonomyError::DuplicateCategory(name));
            }
            if category.keywords.is_empty() {
                return Err(TaxonomyError::NoKeywords(name));
            }

            let mut keywords = Vec::with_capacity(category.keywords.len());
            for keyword in &category.keywords {
                let keyword = normalize(keyword);
                if keyword.is_empty() {
                    return Err(TaxonomyError::BlankKeyword(name));
                }
                keywords.push(keyword);
            }

            built.push(Category { name, keywords });
        }

        Ok(Self { categories: built })
    }

    /// The built-in seven-category taxonomy
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(name, keywords)| Category {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// First category (in declaration order) containing both skills
    pub fn shared_category(&self, normalized_a: &str, normalized_b: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.contains(normalized_a) && c.contains(normalized_b))
    }

    /// All categories a skill belongs to, in declaration order
    pub fn categories_of<'t>(&'t self, normalized_skill: &'t str) -> impl Iterator<Item = &'t Category> + 't {
        self.categories.iter().filter(move |c| c.contains(normalized_skill))
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, keywords: &[&str]) -> Category {
        Category {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_builtin_has_seven_categories_in_order() {
        let taxonomy = Taxonomy::builtin();
        let names: Vec<_> = taxonomy.categories().iter().map(|c| c.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["programming", "design", "languages", "music", "business", "cooking", "fitness"]
        );
    }

    #[test]
    fn test_substring_membership() {
        let taxonomy = Taxonomy::builtin();
        let programming = &taxonomy.categories()[0];

        assert!(programming.contains("advanced python programming"));
        assert!(programming.contains("react native"));
        assert!(!programming.contains("piano"));
    }

    #[test]
    fn test_shared_category_first_declared_wins() {
        let taxonomy = Taxonomy::new(vec![
            category("first", &["web"]),
            category("second", &["web", "design"]),
        ])
        .unwrap();

        let shared = taxonomy.shared_category("web design", "web apps").unwrap();
        assert_eq!(shared.name, "first");
    }

    #[test]
    fn test_shared_category_none() {
        let taxonomy = Taxonomy::builtin();

        assert!(taxonomy.shared_category("python", "baking").is_none());
    }

    #[test]
    fn test_skill_in_multiple_categories() {
        let taxonomy = Taxonomy::builtin();
        // "ui" is a design keyword and also a substring of "guitar"
        let names: Vec<_> = taxonomy.categories_of("guitar").map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["design", "music"]);
    }

    #[test]
    fn test_new_normalizes_keywords() {
        let taxonomy = Taxonomy::new(vec![category(" Crafts ", &[" Knitting", "POTTERY"])]).unwrap();
        let crafts = &taxonomy.categories()[0];

        assert_eq!(crafts.name, "Crafts");
        assert_eq!(crafts.keywords, vec!["knitting", "pottery"]);
    }

    #[test]
    fn test_new_rejects_invalid_input() {
        assert_eq!(Taxonomy::new(vec![]), Err(TaxonomyError::Empty));
        assert_eq!(
            Taxonomy::new(vec![category("  ", &["x"])]),
            Err(TaxonomyError::EmptyCategoryName)
        );
        assert_eq!(
            Taxonomy::new(vec![category("music", &[])]),
            Err(TaxonomyError::NoKeywords("music".to_string()))
        );
        assert_eq!(
            Taxonomy::new(vec![category("music", &["piano", " "])]),
            Err(TaxonomyError::BlankKeyword("music".to_string()))
        );
        assert_eq!(
            Taxonomy::new(vec![category("music", &["piano"]), category("Music", &["drums"])]),
            Err(TaxonomyError::DuplicateCategory("Music".to_string()))
        );
    }
}

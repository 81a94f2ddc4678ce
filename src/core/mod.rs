// Core algorithm exports
pub mod explain;
pub mod finders;
pub mod matcher;
pub mod normalize;
pub mod scoring;
pub mod search;
pub mod taxonomy;

pub use explain::{generate_explanation, generate_recommendations};
pub use finders::{find_exact, find_related, find_related_both};
pub use matcher::Matcher;
pub use normalize::{normalize, ProfileSkills, SkillSet};
pub use scoring::{calculate_compatibility_score, calculate_match_score, SkillCounts};
pub use search::search_directory;
pub use taxonomy::{Category, Taxonomy, TaxonomyError};

use serde::{Deserialize, Serialize};

/// One entry of the trivia API's category list. Identity is `id`; the
/// name only feeds slug generation and matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesResponse {
    pub trivia_categories: Vec<Category>,
}

use axum::extract::Query;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog::remedies::{self, Remedy, CATEGORIES};

#[derive(Debug, Default, Deserialize)]
pub struct RemedyQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RemedyListResponse {
    pub count: usize,
    pub remedies: Vec<&'static Remedy>,
}

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub categories: &'static [&'static str],
}

/// Search the remedy catalog by free text and/or category.
pub async fn list_remedies(Query(query): Query<RemedyQuery>) -> Json<RemedyListResponse> {
    let term = query.search.as_deref().unwrap_or("");
    let matches = remedies::search(term, query.category.as_deref());
    Json(RemedyListResponse {
        count: matches.len(),
        remedies: matches,
    })
}

/// The fixed category list, in display order.
pub async fn list_categories() -> Json<CategoryListResponse> {
    Json(CategoryListResponse {
        categories: CATEGORIES,
    })
}

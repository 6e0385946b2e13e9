use hm_core::{TopicFilter, TopicSort};
use serde::Deserialize;

use crate::error::ApiError;

/// Longest accepted search string
pub const MAX_SEARCH_LEN: usize = 200;

/// Query parameters of `GET /api/topics`
#[derive(Debug, Default, Deserialize)]
pub struct TopicListQuery {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub sort: Option<TopicSort>,
}

impl TopicListQuery {
    /// Reject an over-long search string
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(search) = &self.search
            && search.chars().count() > MAX_SEARCH_LEN
        {
            return Err(ApiError::Validation(format!(
                "search must be at most {MAX_SEARCH_LEN} characters"
            )));
        }
        Ok(())
    }

    /// Filter carrying the search, difficulty and category parameters
    pub fn filter(&self) -> TopicFilter {
        TopicFilter {
            search: self.search.clone(),
            difficulty: self.difficulty.clone(),
            category: self.category.clone(),
        }
    }
}

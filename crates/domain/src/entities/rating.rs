//! Rating entity - a user's score for something they consumed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::impl_entity;
use crate::error::DomainError;
use crate::RatingId;

/// A 0-5 score with an optional comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    id: Option<RatingId>,
    title: String,
    created_at: DateTime<Utc>,
    score: u8,
    comment: Option<String>,
}

impl Rating {
    pub const MAX_SCORE: u8 = 5;

    /// Create a rating; fails when `score` exceeds [`Rating::MAX_SCORE`]
    pub fn new(
        title: impl Into<String>,
        score: u8,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if score > Self::MAX_SCORE {
            return Err(DomainError::validation(format!(
                "Rating score must be at most {}, got {}",
                Self::MAX_SCORE,
                score
            )));
        }
        Ok(Self {
            id: None,
            title: title.into(),
            created_at: now,
            score,
            comment: None,
        })
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn score(&self) -> u8 {
        self.score
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }
}

impl_entity!(Rating, RatingId);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn rejects_scores_above_maximum() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(Rating::new("Great", 5, now).is_ok());
        assert!(matches!(
            Rating::new("Too great", 6, now),
            Err(DomainError::Validation(_))
        ));
    }
}

//! Testimonials: the shipped seed list plus user-submitted reviews.

use genora_core::Review;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::keys::USER_REVIEWS_KEY;
use crate::kv::{read_json, write_json, SharedStore};
use crate::validation::{validate_name, validate_rating, validate_review_text, ValidationError};
use crate::StoreError;

/// Name used when a reviewer leaves the name blank.
pub const ANONYMOUS_NAME: &str = "Anonymous Creator";

/// Errors that can occur when submitting a review.
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("invalid review: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A review as entered in the feedback form.
#[derive(Debug, Clone, Default)]
pub struct ReviewDraft {
    pub name: Option<String>,
    pub rating: u8,
    pub text: String,
}

fn avatar_for(seed: &str) -> String {
    format!("https://i.pravatar.cc/48?u={}", seed)
}

/// The testimonials shipped with the app.
pub fn seed_reviews() -> Vec<Review> {
    [
        (
            "@TechVibes",
            "GENORA is a game-changer! The YouTube Title Generator is pure magic. My CTR has skyrocketed since I started using it.",
        ),
        (
            "@DesignBuddy",
            "As a designer, the Slogan Generator is my secret weapon for branding projects. The results are always creative and on point.",
        ),
        (
            "@MarketingMaven",
            "The SEO Optimizer is insanely powerful. It gives me a full package that actually ranks. This is a must-have for any digital marketer.",
        ),
        (
            "@CreatorFlow",
            "I love how fluid and beautiful the whole website is. Using the tools feels futuristic and inspiring. Plus, the hashtag tool is brilliant!",
        ),
    ]
    .into_iter()
    .map(|(username, text)| Review {
        avatar: avatar_for(username.trim_start_matches('@')),
        username: username.to_string(),
        rating: 5,
        text: text.to_string(),
    })
    .collect()
}

/// Persisted list of user-submitted reviews. Unbounded.
#[derive(Clone)]
pub struct ReviewStore {
    store: SharedStore,
}

impl ReviewStore {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Reviews submitted by users, oldest first.
    pub fn user_reviews(&self) -> Vec<Review> {
        read_json(self.store.as_ref(), USER_REVIEWS_KEY).unwrap_or_default()
    }

    /// Seed reviews followed by user reviews.
    pub fn load_all(&self) -> Vec<Review> {
        let mut reviews = seed_reviews();
        reviews.extend(self.user_reviews());
        reviews
    }

    /// Validate and append a review.
    pub fn submit(&self, draft: ReviewDraft) -> Result<Review, ReviewError> {
        validate_review_text(&draft.text)?;
        validate_rating(draft.rating)?;

        let name = draft
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty());
        if let Some(name) = name {
            validate_name(name)?;
        }

        let review = Review {
            avatar: avatar_for(&Uuid::new_v4().to_string()),
            username: name.unwrap_or(ANONYMOUS_NAME).to_string(),
            rating: draft.rating,
            text: draft.text.trim().to_string(),
        };

        let mut saved = self.user_reviews();
        saved.push(review.clone());
        if let Err(e) = write_json(self.store.as_ref(), USER_REVIEWS_KEY, &saved) {
            warn!("Failed to save review: {}", e);
            return Err(e.into());
        }

        info!(rating = review.rating, "Review submitted");
        Ok(review)
    }
}

//! User reviews shown in the testimonial carousel.

use serde::{Deserialize, Serialize};

/// A testimonial, either shipped with the app or submitted by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Avatar image URI.
    pub avatar: String,
    pub username: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
    pub text: String,
}

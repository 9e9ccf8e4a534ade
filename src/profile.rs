use serde::Deserialize;

/// Raw profile payload returned by the backend.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserProfileBackendDict {
    pub username_of_viewed_profile: String,
    pub user_bio: String,
    pub subject_interests: Vec<String>,
    pub first_contribution_msec: Option<f64>,
    pub user_impact_score: f64,
    pub is_already_subscribed: bool,
    pub is_user_visiting_own_profile: bool,
    pub profile_picture_data_url: Option<String>,
}

/// Domain-level profile built from the backend payload.
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub bio: String,
    pub subject_interests: Vec<String>,
    pub first_contribution_msec: Option<f64>,
    pub impact_score: f64,
    pub is_already_subscribed: bool,
    pub is_own_profile: bool,
    pub profile_picture_data_url: Option<String>,
}

impl UserProfile {
    pub fn from_backend_dict(dict: UserProfileBackendDict) -> UserProfile {
        UserProfile {
            username: dict.username_of_viewed_profile,
            bio: dict.user_bio,
            subject_interests: dict.subject_interests,
            first_contribution_msec: dict.first_contribution_msec,
            impact_score: dict.user_impact_score,
            is_already_subscribed: dict.is_already_subscribed,
            is_own_profile: dict.is_user_visiting_own_profile,
            profile_picture_data_url: dict.profile_picture_data_url,
        }
    }
}

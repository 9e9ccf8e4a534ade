mod client;
mod error;
mod profile;
mod urls;

pub use client::{ProfileApi, ProfileClient};
pub use error::ApiError;
pub use profile::{UserProfile, UserProfileBackendDict};
pub use urls::{interpolate_url, username_from_profile_url};

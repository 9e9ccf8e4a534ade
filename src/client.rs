use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{ApiError, ErrorResponse};
use crate::profile::{UserProfile, UserProfileBackendDict};
use crate::urls::{
    self, PROFILE_DATA_URL_TEMPLATE, PROFILE_SUBSCRIBE_URL, PROFILE_UNSUBSCRIBE_URL,
};

#[async_trait]
pub trait ProfileApi {
    async fn subscribe(&self, creator_username: &str) -> Result<(), ApiError>;
    async fn unsubscribe(&self, creator_username: &str) -> Result<(), ApiError>;
    async fn fetch_profile_data(&self) -> Result<UserProfile, ApiError>;
}

#[derive(Serialize)]
struct SubscriptionRequest<'a> {
    creator_username: &'a str,
}

pub struct ProfileClient {
    client: reqwest::Client,
    base_url: String,
    page_url: String,
}

impl ProfileClient {
    /// `base_url` is the backend origin, `page_url` the profile page the
    /// caller is on, from which the viewed username is derived.
    pub fn new(base_url: &str, page_url: &str) -> Result<ProfileClient, ApiError> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(120))
            .timeout(Duration::from_secs(5))
            .build()?;

        Ok(ProfileClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            page_url: page_url.to_string(),
        })
    }

    async fn post_subscription(
        &self,
        endpoint: &str,
        creator_username: &str,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, endpoint))
            .json(&SubscriptionRequest { creator_username })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        Ok(())
    }

    async fn handle_error_response(response: reqwest::Response) -> ApiError {
        let status_code = response.status();

        match response.json::<ErrorResponse>().await {
            Ok(body) => {
                tracing::error!("backend reported an error: {}", body.error.error);
                ApiError::RequestFailed(body.error.error)
            }
            // Non-contractual error body, keep the status code at least.
            Err(_) => {
                tracing::error!("request failed with status code {}", status_code);
                ApiError::RequestFailed(format!(
                    "request failed with status code {}",
                    status_code
                ))
            }
        }
    }
}

#[async_trait]
impl ProfileApi for ProfileClient {
    async fn subscribe(&self, creator_username: &str) -> Result<(), ApiError> {
        tracing::info!("subscribing to creator: {}", creator_username);
        self.post_subscription(PROFILE_SUBSCRIBE_URL, creator_username)
            .await
    }

    async fn unsubscribe(&self, creator_username: &str) -> Result<(), ApiError> {
        tracing::info!("unsubscribing from creator: {}", creator_username);
        self.post_subscription(PROFILE_UNSUBSCRIBE_URL, creator_username)
            .await
    }

    async fn fetch_profile_data(&self) -> Result<UserProfile, ApiError> {
        let username = urls::username_from_profile_url(&self.page_url)?;
        let endpoint =
            urls::interpolate_url(PROFILE_DATA_URL_TEMPLATE, &[("username", &username)])?;

        tracing::info!("fetching profile data, username: {}", username);
        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        let dict = response.json::<UserProfileBackendDict>().await?;
        Ok(UserProfile::from_backend_dict(dict))
    }
}

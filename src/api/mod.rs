//! Backend calls consumed by the UI.

mod http;
mod types;

pub use http::HttpBackend;
pub use types::{created_user_id, MatchPage, NotificationRecord, NotificationType, ProfileSummary};

use crate::error::ApiError;
use crate::principal::Principal;
use crate::wizard::SubmissionPayload;

/// The remote profile service. Every call either returns data or fails;
/// callers never retry.
#[allow(async_fn_in_trait)]
pub trait ProfileBackend {
    async fn add_user_profile(&self, profile: &SubmissionPayload) -> Result<String, ApiError>;

    async fn get_profile(&self, id: &str) -> Result<ProfileSummary, ApiError>;

    async fn retrieve_notifications_for_user(
        &self,
        principal: &Principal,
    ) -> Result<Vec<NotificationRecord>, ApiError>;

    async fn get_rightswiped_matches(
        &self,
        user_id: &str,
        page: usize,
        size: usize,
    ) -> Result<MatchPage, ApiError>;
}

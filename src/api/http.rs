use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::types::{decode_reply, MatchPage, MatchResultWire, NotificationRecord, ProfileRecord, ProfileSummary};
use super::ProfileBackend;
use crate::error::ApiError;
use crate::principal::Principal;
use crate::wizard::SubmissionPayload;

/// Talks to the profile service through its JSON gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpBackend {
    base: String,
}

fn segment(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

async fn read_reply<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    decode_reply(&body)
}

impl HttpBackend {
    pub fn new(base: &str) -> Self {
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_reply(resp).await
    }
}

impl ProfileBackend for HttpBackend {
    async fn add_user_profile(&self, profile: &SubmissionPayload) -> Result<String, ApiError> {
        let resp = Request::post(&self.url("add_user_profile"))
            .json(profile)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        read_reply(resp).await
    }

    async fn get_profile(&self, id: &str) -> Result<ProfileSummary, ApiError> {
        let record: ProfileRecord = self.get(&format!("get_profile/{}", segment(id))).await?;
        Ok(record.into())
    }

    async fn retrieve_notifications_for_user(
        &self,
        principal: &Principal,
    ) -> Result<Vec<NotificationRecord>, ApiError> {
        self.get(&format!(
            "retrieve_notifications_for_user/{}",
            segment(principal.as_str())
        ))
        .await
    }

    async fn get_rightswiped_matches(
        &self,
        user_id: &str,
        page: usize,
        size: usize,
    ) -> Result<MatchPage, ApiError> {
        let wire: MatchResultWire = self
            .get(&format!(
                "get_rightswiped_matches/{}?page={page}&size={size}",
                segment(user_id)
            ))
            .await?;
        Ok(wire.into())
    }
}

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationType {
    Like,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub sender_id: String,
    pub receiver_id: String,
    pub notification_type: NotificationType,
}

impl NotificationRecord {
    pub fn describe(&self, sender_name: &str) -> String {
        match self.notification_type {
            NotificationType::Like => format!("{sender_name} liked your profile"),
        }
    }
}

/// The parts of a stored profile the UI shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProfileSummary {
    pub user_id: String,
    pub name: Option<String>,
    pub age: Option<u64>,
    pub gender: Option<String>,
    pub location: Option<String>,
    pub introduction: Option<String>,
    pub images: Vec<String>,
}

impl ProfileSummary {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Someone")
    }

    pub fn avatar(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// "Ada, 28 · Pune" style headline, skipping missing parts.
    pub fn headline(&self) -> String {
        let mut out = self.display_name().to_string();
        if let Some(age) = self.age {
            out.push_str(&format!(", {age}"));
        }
        if let Some(loc) = &self.location {
            out.push_str(&format!(" · {loc}"));
        }
        out
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProfileParamsWire {
    name: Option<String>,
    age: Option<u64>,
    gender: Option<String>,
    location: Option<String>,
    introduction: Option<String>,
    images: Option<Vec<String>>,
}

/// A stored profile as the backend returns it.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileRecord {
    user_id: String,
    #[serde(default)]
    params: ProfileParamsWire,
}

impl From<ProfileRecord> for ProfileSummary {
    fn from(r: ProfileRecord) -> Self {
        let p = r.params;
        Self {
            user_id: r.user_id,
            name: p.name,
            age: p.age,
            gender: p.gender,
            location: p.location,
            introduction: p.introduction,
            images: p.images.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchResultWire {
    pub total_matches: usize,
    #[serde(default)]
    pub paginated_profiles: Vec<ProfileRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchPage {
    pub total_matches: usize,
    pub profiles: Vec<ProfileSummary>,
}

impl From<MatchResultWire> for MatchPage {
    fn from(w: MatchResultWire) -> Self {
        Self {
            total_matches: w.total_matches,
            profiles: w.paginated_profiles.into_iter().map(Into::into).collect(),
        }
    }
}

/// Id in a "User profile created with id: ..." receipt.
pub fn created_user_id(receipt: &str) -> Option<&str> {
    let (_, id) = receipt.rsplit_once("id:")?;
    let id = id.trim();
    (!id.is_empty()).then_some(id)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Reply<T> {
    Wrapped(Result<T, String>),
    Plain(T),
}

/// Decodes a backend body that is either the value itself or the
/// `{"Ok": value}` / `{"Err": message}` result envelope.
pub fn decode_reply<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    match serde_json::from_str::<Reply<T>>(body) {
        Ok(Reply::Wrapped(Ok(v)) | Reply::Plain(v)) => Ok(v),
        Ok(Reply::Wrapped(Err(msg))) => Err(ApiError::Rejected(msg)),
        Err(e) => Err(ApiError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"{
        "user_id": "u-42",
        "created_at": 1717200000,
        "creator_principal": "2vxsx-fae",
        "params": {
            "name": "Ada",
            "age": 28,
            "gender": "Woman",
            "location": "Pune",
            "images": ["https://img/1.png"],
            "hobbies": ["Reading"]
        },
        "notifications": [],
        "matched_profiles": [],
        "status": true
    }"#;

    #[test]
    fn decodes_plain_and_wrapped_values() {
        let plain: String = decode_reply("\"created\"").unwrap();
        assert_eq!(plain, "created");
        let wrapped: String = decode_reply(r#"{"Ok":"created"}"#).unwrap();
        assert_eq!(wrapped, "created");
    }

    #[test]
    fn err_envelope_is_a_rejection() {
        let err = decode_reply::<String>(r#"{"Err":"Profile not found"}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected("Profile not found".into()));
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(
            decode_reply::<Vec<NotificationRecord>>("<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn profile_record_flattens_into_summary() {
        let record: ProfileRecord = decode_reply(PROFILE).unwrap();
        let s = ProfileSummary::from(record);
        assert_eq!(s.user_id, "u-42");
        assert_eq!(s.headline(), "Ada, 28 · Pune");
        assert_eq!(s.avatar(), Some("https://img/1.png"));
    }

    #[test]
    fn wrapped_profile_decodes() {
        let body = format!(r#"{{"Ok": {PROFILE}}}"#);
        let record: ProfileRecord = decode_reply(&body).unwrap();
        assert_eq!(ProfileSummary::from(record).display_name(), "Ada");
    }

    #[test]
    fn notifications_decode_with_like_type() {
        let list: Vec<NotificationRecord> = decode_reply(
            r#"[{"sender_id":"u-1","receiver_id":"u-2","notification_type":"Like"}]"#,
        )
        .unwrap();
        assert_eq!(list[0].notification_type, NotificationType::Like);
        assert_eq!(list[0].describe("Ada"), "Ada liked your profile");
    }

    #[test]
    fn match_result_maps_profiles() {
        let body = format!(
            r#"{{"total_matches": 3, "paginated_profiles": [{PROFILE}], "error_message": null}}"#
        );
        let page: MatchPage = decode_reply::<MatchResultWire>(&body).unwrap().into();
        assert_eq!(page.total_matches, 3);
        assert_eq!(page.profiles.len(), 1);
        assert_eq!(page.profiles[0].user_id, "u-42");
    }

    #[test]
    fn receipt_yields_created_id() {
        assert_eq!(
            created_user_id("User profile created with id: 9f86d081"),
            Some("9f86d081")
        );
        assert_eq!(created_user_id("ok"), None);
        assert_eq!(created_user_id("created with id:  "), None);
    }

    #[test]
    fn sparse_profile_still_renders() {
        let record: ProfileRecord = decode_reply(r#"{"user_id":"u-7"}"#).unwrap();
        let s = ProfileSummary::from(record);
        assert_eq!(s.headline(), "Someone");
        assert_eq!(s.avatar(), None);
    }
}

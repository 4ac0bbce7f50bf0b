use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{de, Deserialize, Deserializer, Serialize};

/// Reviewer name sent along every status change.
pub const REVIEWER: &str = "admin";

/// Identifier of a verification record. The backend issues UUID strings but
/// numeric ids are accepted too, both are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Helper {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }
        match Helper::deserialize(deserializer) {
            Ok(Helper::Text(s)) => Ok(RecordId(s)),
            Ok(Helper::Unsigned(n)) => Ok(RecordId(n.to_string())),
            Ok(Helper::Signed(n)) => Ok(RecordId(n.to_string())),
            Err(_) => Err(de::Error::custom(
                "invalid value for record id: expected a string or an integer",
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Pending,
    Approved,
    Rejected,
}

impl VerificationStatus {
    pub const ALL: [VerificationStatus; 3] = [Self::Pending, Self::Approved, Self::Rejected];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A verification request as returned by the backend. Owned by the backend,
/// the client only keeps the last fetched copy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VerificationRecord {
    pub id: RecordId,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub status: VerificationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub reviewed_by: Option<String>,
    #[serde(default)]
    pub reviewed_at: Option<String>,
    #[serde(default)]
    pub id_image_url: Option<String>,
    #[serde(default)]
    pub selfie_image_url: Option<String>,
}

impl VerificationRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn is_pending(&self) -> bool {
        self.status == VerificationStatus::Pending
    }

    /// Creation day as `dd.mm.yyyy`.
    pub fn created_date(&self) -> Option<String> {
        self.created_at.as_deref().and_then(format_date)
    }

    pub fn reviewed_date(&self) -> Option<String> {
        self.reviewed_at.as_deref().and_then(format_date)
    }
}

/// Formats an RFC 3339 or naive ISO 8601 timestamp as `dd.mm.yyyy`.
pub fn format_date(timestamp: &str) -> Option<String> {
    const FORMAT: &str = "%d.%m.%Y";
    if let Ok(dt) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(dt.format(FORMAT).to_string());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.format(FORMAT).to_string());
    }
    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d")
        .ok()
        .map(|d| d.format(FORMAT).to_string())
}

/// Body of `GET /api/verifications`. Pagination fields the backend may add are
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerificationList {
    #[serde(default)]
    pub items: Vec<VerificationRecord>,
}

/// Body of `PATCH /api/verifications/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusUpdate<'a> {
    pub status: VerificationStatus,
    pub reviewed_by: &'a str,
}

impl StatusUpdate<'static> {
    pub fn new(status: VerificationStatus) -> Self {
        Self {
            status,
            reviewed_by: REVIEWER,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl Counts {
    pub fn of(records: &[VerificationRecord]) -> Self {
        let count = |status| records.iter().filter(|r| r.status == status).count();
        Self {
            total: records.len(),
            pending: count(VerificationStatus::Pending),
            approved: count(VerificationStatus::Approved),
            rejected: count(VerificationStatus::Rejected),
        }
    }
}

/// Client-side narrowing of the fetched list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub status: Option<VerificationStatus>,
    pub search: String,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.search.trim().is_empty()
    }

    /// Status must match exactly, search is a case-insensitive substring of
    /// username, email, first name or last name.
    pub fn matches(&self, record: &VerificationRecord) -> bool {
        if let Some(status) = self.status {
            if record.status != status {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || [
                &record.username,
                &record.email,
                &record.first_name,
                &record.last_name,
            ]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_list_with_mixed_ids() {
        let list: VerificationList = serde_json::from_value(json!({
            "items": [
                {"id": 1, "status": "pending", "first_name": "Ayse", "last_name": "Yilmaz"},
                {
                    "id": "550e8400-e29b-41d4-a716-446655440000",
                    "username": "mehmet",
                    "first_name": "Mehmet",
                    "last_name": "Kaya",
                    "email": "mehmet@example.com",
                    "phone": "+905551112233",
                    "status": "approved",
                    "created_at": "2024-03-05T10:15:00.123456",
                    "updated_at": "2024-03-06T08:00:00Z",
                    "reviewed_by": "admin",
                    "reviewed_at": "2024-03-06T08:00:00+03:00",
                    "id_image_url": "https://cdn.example.com/id.jpg",
                    "selfie_image_url": null
                }
            ],
            "total": 2,
            "page": 1,
            "per_page": 10,
            "has_next": false,
            "has_prev": false
        }))
        .unwrap();

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].id, RecordId::from(1));
        assert_eq!(list.items[0].id.as_str(), "1");
        assert_eq!(list.items[0].email, "");
        assert_eq!(list.items[0].created_date(), None);

        let second = &list.items[1];
        assert_eq!(second.id.as_str(), "550e8400-e29b-41d4-a716-446655440000");
        assert_eq!(second.status, VerificationStatus::Approved);
        assert_eq!(second.full_name(), "Mehmet Kaya");
        assert_eq!(second.created_date().as_deref(), Some("05.03.2024"));
        assert_eq!(second.reviewed_date().as_deref(), Some("06.03.2024"));
        assert_eq!(second.selfie_image_url, None);
        assert!(!second.is_pending());
    }

    #[test]
    fn missing_items_is_empty_list() {
        let list: VerificationList = serde_json::from_value(json!({})).unwrap();
        assert!(list.items.is_empty());
        let list: VerificationList = serde_json::from_value(json!({"total": 0})).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let res: Result<VerificationRecord, _> =
            serde_json::from_value(json!({"id": 3, "status": "archived"}));
        assert!(res.is_err());
        let res: Result<VerificationRecord, _> =
            serde_json::from_value(json!({"id": [1], "status": "pending"}));
        assert!(res.is_err());
    }

    #[test]
    fn status_update_body() {
        let body = serde_json::to_value(StatusUpdate::new(VerificationStatus::Rejected)).unwrap();
        assert_eq!(body, json!({"status": "rejected", "reviewed_by": "admin"}));
    }

    #[test]
    fn counts_by_status() {
        let list: VerificationList = serde_json::from_value(json!({
            "items": [
                {"id": 1, "status": "pending"},
                {"id": 2, "status": "approved"}
            ]
        }))
        .unwrap();
        assert_eq!(
            Counts::of(&list.items),
            Counts {
                total: 2,
                pending: 1,
                approved: 1,
                rejected: 0
            }
        );
        assert_eq!(Counts::of(&[]), Counts::default());
    }

    #[test]
    fn filter_by_status_and_search() {
        let records: Vec<VerificationRecord> = serde_json::from_value(json!([
            {"id": 1, "status": "pending", "username": "ayse", "email": "ayse@example.com"},
            {"id": 2, "status": "approved", "first_name": "Mehmet", "email": "m@example.com"},
            {"id": 3, "status": "rejected", "last_name": "Demir"}
        ]))
        .unwrap();

        let filter = ListFilter::default();
        assert!(filter.is_empty());
        assert!(records.iter().all(|r| filter.matches(r)));

        let filter = ListFilter {
            status: Some(VerificationStatus::Approved),
            search: String::new(),
        };
        let ids: Vec<_> = records
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);

        let filter = ListFilter {
            status: None,
            search: "  DEMIR ".to_string(),
        };
        let ids: Vec<_> = records
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["3"]);

        let filter = ListFilter {
            status: Some(VerificationStatus::Pending),
            search: "example.com".to_string(),
        };
        let ids: Vec<_> = records
            .iter()
            .filter(|r| filter.matches(r))
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn date_formats() {
        assert_eq!(format_date("2024-12-31").as_deref(), Some("31.12.2024"));
        assert_eq!(format_date("2024-01-02T03:04:05").as_deref(), Some("02.01.2024"));
        assert_eq!(format_date("yesterday"), None);
    }
}

use serde::{Deserialize, Serialize};

/// Client-submitted event fields. The same shape is accepted on create
/// and update, and produced by the form controller on submission; the
/// validator turns it into a normalized record or rejects it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventBody {
    pub title: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub reminder: Option<bool>,
    pub reminder_time: Option<String>,
}

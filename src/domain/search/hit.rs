use serde::Serialize;

pub type HitList = Vec<Hit>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum HitType {
    #[default]
    #[serde(rename = "dash-db")]
    Dashboard,
    #[serde(rename = "dash-folder")]
    Folder,
}

/// A single search result. Owned by the store; the orchestrator only ever
/// touches `is_starred` and the ordering of `tags` on its local copy.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Hit {
    pub id: i64,
    pub uid: String,
    pub title: String,
    pub uri: String,
    pub url: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: HitType,
    pub tags: Vec<String>,
    pub is_starred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_title: Option<String>,
}

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::search::hit::HitList;
use crate::domain::users::user::{PermissionLevel, SignedInUser};

/// Inbound search request. `result` stays empty until a handler completes
/// successfully.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub title: String,
    pub tags: Vec<String>,
    pub org_id: i64,
    pub signed_in_user: SignedInUser,
    pub limit: i64,
    pub page: i64,
    pub is_starred: bool,
    pub kind: String,
    pub dashboard_ids: Vec<i64>,
    pub folder_ids: Vec<i64>,
    pub permission: PermissionLevel,
    pub sort: String,
    pub result: HitList,
}

#[async_trait]
pub trait SearchHandler: Send + Sync {
    async fn search(&self, query: &mut SearchQuery) -> anyhow::Result<()>;
}

/// Registration contract for the host's dispatch mechanism. The service
/// registers itself here and never sees the dispatcher's internals.
pub trait SearchDispatch: Send + Sync {
    fn add_search_handler(&mut self, handler: Arc<dyn SearchHandler>);
}

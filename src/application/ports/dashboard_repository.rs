use async_trait::async_trait;

use crate::domain::search::hit::HitList;
use crate::domain::search::sort::SortOption;
use crate::domain::users::user::{PermissionLevel, SignedInUser};

/// Query shape handed to the search store. Full-text matching, permission
/// filtering and pagination all happen on the store side. The org scope
/// comes from `signed_in_user`, not a separate field.
#[derive(Debug, Clone, Default)]
pub struct FindDashboardsQuery {
    pub title: String,
    pub tags: Vec<String>,
    pub signed_in_user: SignedInUser,
    pub is_starred: bool,
    pub dashboard_ids: Vec<i64>,
    pub kind: String,
    pub folder_ids: Vec<i64>,
    pub limit: i64,
    pub page: i64,
    pub permission: PermissionLevel,
    // None means the store applies no explicit ordering
    pub sort: Option<SortOption>,
}

#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn find_dashboards(&self, query: &FindDashboardsQuery) -> anyhow::Result<HitList>;
}

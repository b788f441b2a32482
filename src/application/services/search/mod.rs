use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::dashboard_repository::{DashboardRepository, FindDashboardsQuery};
use crate::application::ports::search_handler::{SearchDispatch, SearchHandler, SearchQuery};
use crate::application::ports::star_repository::StarRepository;
use crate::bootstrap::config::Config;
use crate::domain::search::hit::{Hit, HitList};
use crate::domain::search::sort::{self, SortOption};

/// Orchestrates a dashboard search: maps the request onto the store's
/// query shape, lets the store do the filtering, then applies the default
/// ordering and starred annotation on the way back.
pub struct SearchService {
    cfg: Config,
    dashboards: Arc<dyn DashboardRepository>,
    stars: Arc<dyn StarRepository>,
}

impl SearchService {
    pub fn new(
        cfg: Config,
        dashboards: Arc<dyn DashboardRepository>,
        stars: Arc<dyn StarRepository>,
    ) -> Self {
        Self {
            cfg,
            dashboards,
            stars,
        }
    }

    /// Builds the service and registers it with the host's dispatch.
    pub fn provide(
        cfg: Config,
        dashboards: Arc<dyn DashboardRepository>,
        stars: Arc<dyn StarRepository>,
        dispatch: &mut dyn SearchDispatch,
    ) -> Arc<Self> {
        let service = Arc::new(Self::new(cfg, dashboards, stars));
        dispatch.add_search_handler(service.clone());
        service
    }

    /// The supported sort strategies, for discovery by callers.
    pub fn sort_options(&self) -> Vec<SortOption> {
        sort::sort_options()
    }

    pub async fn execute(&self, query: &mut SearchQuery) -> anyhow::Result<()> {
        let limit = if query.limit > 0 {
            query.limit.min(self.cfg.max_limit)
        } else {
            self.cfg.default_limit
        };

        let find = FindDashboardsQuery {
            title: query.title.clone(),
            tags: query.tags.clone(),
            signed_in_user: query.signed_in_user.clone(),
            is_starred: query.is_starred,
            dashboard_ids: query.dashboard_ids.clone(),
            kind: query.kind.clone(),
            folder_ids: query.folder_ids.clone(),
            limit,
            page: query.page,
            permission: query.permission,
            sort: sort::sort_option(&query.sort).cloned(),
        };

        debug!(
            title = %find.title,
            sort = %query.sort,
            limit = find.limit,
            "searching dashboards"
        );
        let mut hits = self.dashboards.find_dashboards(&find).await?;

        // The store is trusted to order results when a strategy was
        // resolved; otherwise fall back to the default title order.
        if find.sort.is_none() {
            hits = sorted_hits(hits);
        }

        self.set_starred_hits(query.signed_in_user.user_id, &mut hits)
            .await?;

        query.result = hits;
        Ok(())
    }

    async fn set_starred_hits(&self, user_id: i64, hits: &mut [Hit]) -> anyhow::Result<()> {
        let starred = self.stars.starred_dashboard_ids(user_id).await?;
        for hit in hits.iter_mut() {
            if starred.contains(&hit.id) {
                hit.is_starred = true;
            }
        }
        Ok(())
    }
}

// Default ordering: non-decreasing by title (stable, so ties keep the
// store's order), tags lexicographic within each hit.
fn sorted_hits(mut hits: HitList) -> HitList {
    hits.sort_by(|a, b| a.title.cmp(&b.title));
    for hit in &mut hits {
        hit.tags.sort_unstable();
    }
    hits
}

#[async_trait]
impl SearchHandler for SearchService {
    async fn search(&self, query: &mut SearchQuery) -> anyhow::Result<()> {
        self.execute(query).await
    }
}

use std::sync::Arc;

use crate::application::ports::dashboard_repository::DashboardRepository;
use crate::application::ports::search_handler::SearchDispatch;
use crate::application::ports::star_repository::StarRepository;
use crate::application::services::search::SearchService;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    dashboard_repo: Arc<dyn DashboardRepository>,
    star_repo: Arc<dyn StarRepository>,
    search: Arc<SearchService>,
}

impl AppServices {
    /// Wires the store adapters into the search service and registers the
    /// service with the host's dispatch.
    pub fn new(
        cfg: Config,
        dashboard_repo: Arc<dyn DashboardRepository>,
        star_repo: Arc<dyn StarRepository>,
        dispatch: &mut dyn SearchDispatch,
    ) -> Self {
        let search =
            SearchService::provide(cfg, dashboard_repo.clone(), star_repo.clone(), dispatch);
        Self {
            dashboard_repo,
            star_repo,
            search,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn dashboard_repo(&self) -> Arc<dyn DashboardRepository> {
        self.services.dashboard_repo.clone()
    }

    pub fn star_repo(&self) -> Arc<dyn StarRepository> {
        self.services.star_repo.clone()
    }

    pub fn search(&self) -> Arc<SearchService> {
        self.services.search.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::dashboard_repository::FindDashboardsQuery;
    use crate::application::ports::search_handler::{SearchHandler, SearchQuery};
    use crate::domain::search::hit::HitList;

    #[derive(Default)]
    struct RecordingDispatch {
        handlers: Vec<Arc<dyn SearchHandler>>,
    }

    impl SearchDispatch for RecordingDispatch {
        fn add_search_handler(&mut self, handler: Arc<dyn SearchHandler>) {
            self.handlers.push(handler);
        }
    }

    struct EmptyDashboards;

    #[async_trait]
    impl DashboardRepository for EmptyDashboards {
        async fn find_dashboards(&self, _query: &FindDashboardsQuery) -> anyhow::Result<HitList> {
            Ok(Vec::new())
        }
    }

    struct NoStars;

    #[async_trait]
    impl StarRepository for NoStars {
        async fn starred_dashboard_ids(&self, _user_id: i64) -> anyhow::Result<HashSet<i64>> {
            Ok(HashSet::new())
        }
    }

    #[tokio::test]
    async fn startup_registers_the_search_handler() {
        let cfg = Config {
            default_limit: 1000,
            max_limit: 5000,
        };
        let mut dispatch = RecordingDispatch::default();
        let services = AppServices::new(
            cfg.clone(),
            Arc::new(EmptyDashboards),
            Arc::new(NoStars),
            &mut dispatch,
        );
        let ctx = AppContext::new(cfg, services);

        assert_eq!(dispatch.handlers.len(), 1);

        let mut query = SearchQuery::default();
        dispatch.handlers[0].search(&mut query).await.unwrap();
        assert!(query.result.is_empty());

        let names: Vec<&str> = ctx.search().sort_options().iter().map(|o| o.name).collect();
        assert_eq!(names, vec!["alpha-asc", "alpha-desc"]);
    }
}

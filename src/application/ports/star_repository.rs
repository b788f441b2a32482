use std::collections::HashSet;

use async_trait::async_trait;

#[async_trait]
pub trait StarRepository: Send + Sync {
    async fn starred_dashboard_ids(&self, user_id: i64) -> anyhow::Result<HashSet<i64>>;
}

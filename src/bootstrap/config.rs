use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub default_limit: i64,
    pub max_limit: i64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let default_limit = env::var("SEARCH_DEFAULT_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1000);
        let max_limit = env::var("SEARCH_MAX_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        if default_limit <= 0 {
            anyhow::bail!("SEARCH_DEFAULT_LIMIT must be positive");
        }
        if max_limit < default_limit {
            anyhow::bail!("SEARCH_MAX_LIMIT must be at least SEARCH_DEFAULT_LIMIT");
        }

        Ok(Self {
            default_limit,
            max_limit,
        })
    }
}

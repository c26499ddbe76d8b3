use std::sync::Arc;

use crate::app::Result;
use crate::config::Config;
use crate::fetcher::{ChapterSource, HttpFetcher};
use crate::store::StaticContentStore;

/// Everything a command or the TUI needs, wired once at startup.
pub struct AppContext {
    pub config: Arc<Config>,
    pub store: StaticContentStore,
    pub source: Arc<dyn ChapterSource + Send + Sync>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let base = config.general.api_base()?;
        let fetcher = HttpFetcher::new(base, config.general.request_timeout())?;
        Ok(Self::with_source(config, Arc::new(fetcher)))
    }

    pub fn with_source(config: Config, source: Arc<dyn ChapterSource + Send + Sync>) -> Self {
        Self {
            config: Arc::new(config),
            store: StaticContentStore,
            source,
        }
    }
}

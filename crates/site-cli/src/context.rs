use anyhow::Context;
use site_api::ApiClient;
use site_board::BoardStore;
use site_config::SitelineConfig;

use crate::cli::GlobalFlags;
use crate::sinks::ConsoleNotifier;

pub type Board = BoardStore<ApiClient, ConsoleNotifier>;

/// Shared state for command handlers.
pub struct AppContext {
    pub config: SitelineConfig,
    pub api: ApiClient,
    pub flags: GlobalFlags,
}

impl AppContext {
    pub fn init(config: SitelineConfig, flags: GlobalFlags) -> anyhow::Result<Self> {
        let api_config = config.require_api()?;
        let api = ApiClient::new(api_config).context("failed to build API client")?;
        Ok(Self { config, api, flags })
    }

    pub fn board(&self) -> Board {
        BoardStore::new(
            self.api.clone(),
            ConsoleNotifier {
                quiet: self.flags.quiet,
            },
            self.config.board.page_size,
        )
    }
}

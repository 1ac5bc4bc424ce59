pub mod analyze;
pub mod claims;
pub mod config;
pub mod schema;

use anyhow::Context;
use triad_config::TriadConfig;
use triad_semantic::{OfflineService, SemanticService};

use crate::cli::{Commands, GlobalFlags};

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: &Commands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => analyze::handle(args, flags),
        Commands::Claims(args) => claims::handle(args, flags),
        Commands::Schema => schema::handle(flags),
        Commands::Config => config::handle(flags),
    }
}

pub(crate) fn load_config() -> anyhow::Result<TriadConfig> {
    TriadConfig::load_with_dotenv().context("failed to load triad configuration")
}

/// The collaborator for this run: offline when asked to, configured otherwise.
pub(crate) fn semantic_service(config: &TriadConfig, offline: bool) -> Box<dyn SemanticService> {
    if offline {
        tracing::debug!("--offline: semantic service disabled");
        return Box::new(OfflineService);
    }
    triad_semantic::from_config(&config.semantic)
}

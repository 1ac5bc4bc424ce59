use crate::cli::GlobalFlags;
use crate::commands::load_config;
use crate::output::output;

/// Handle `triad config`: the merged configuration with the API key redacted.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = load_config()?;
    output(&config.redacted(), flags.format)
}

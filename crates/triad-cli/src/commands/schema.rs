use schemars::schema_for;
use triad_engine::ProcessResult;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `triad schema`: the JSON Schema of `triad analyze --format json`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for!(ProcessResult), flags.format)
}

use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Cross-check artifacts and report behavioral units.
    Analyze(AnalyzeArgs),
    /// Extract evidence and generate claims only, with the rejection audit trail.
    Claims(ClaimsArgs),
    /// Print the JSON Schema of the analysis output.
    Schema,
    /// Print the effective configuration (secrets redacted).
    Config,
}

/// Artifact selection shared by `analyze` and `claims`.
#[derive(Clone, Debug, Args)]
pub struct ArtifactArgs {
    /// Files or directories to scan; kinds are detected from file names.
    pub paths: Vec<PathBuf>,

    /// Treat this file as a README regardless of its name.
    #[arg(long = "readme", value_name = "FILE")]
    pub readme: Vec<PathBuf>,

    /// Treat this file as an API contract regardless of its name.
    #[arg(long = "spec", value_name = "FILE")]
    pub spec: Vec<PathBuf>,

    /// Treat this file as test source regardless of its name.
    #[arg(long = "test", value_name = "FILE")]
    pub test: Vec<PathBuf>,

    /// Never call the semantic service; README sections use the fallback extractor.
    #[arg(long)]
    pub offline: bool,

    /// Extract artifacts and analyse buckets in parallel.
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Expand scores, risk band, and recommendations in text output.
    #[arg(long)]
    pub show_context: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ClaimsArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,
}

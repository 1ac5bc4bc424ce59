use anyhow::Context;
use triad_display::{FormatOptions, format_report};
use triad_engine::{Pipeline, PipelineOptions, ProcessResult};

use crate::cli::root_commands::AnalyzeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::{load_config, semantic_service};
use crate::discover;
use crate::output::output;

/// Handle `triad analyze`.
pub fn handle(args: &AnalyzeArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = load_config()?;
    let artifacts = discover::collect(&args.artifacts)?;
    let service = semantic_service(&config, args.artifacts.offline);

    let result = Pipeline::new(&config, service.as_ref())
        .with_options(PipelineOptions {
            parallel: args.artifacts.parallel,
        })
        .run(&artifacts)
        .context("analysis failed")?;

    match flags.format {
        OutputFormat::Text => {
            print!(
                "{}",
                render_text(&result, args.show_context, flags.quiet)
            );
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&result, flags.format),
    }
}

fn render_text(result: &ProcessResult, show_context: bool, quiet: bool) -> String {
    let mut out = format_report(&result.display, FormatOptions { show_context });
    if !quiet {
        let s = &result.stats;
        out.push_str(&format!(
            "\n{} artifacts, {} evidence, {} claims, {} rejected, {} units\n",
            s.artifacts, s.evidence, s.claims, s.rejections, s.behavioral_units
        ));
    }
    out
}

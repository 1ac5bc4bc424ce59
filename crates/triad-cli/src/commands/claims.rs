use anyhow::Context;
use triad_engine::{ClaimReport, Pipeline, PipelineOptions};

use crate::cli::root_commands::ClaimsArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::{load_config, semantic_service};
use crate::discover;
use crate::output::{output, table::render_table, term_width};

/// Handle `triad claims`.
pub fn handle(args: &ClaimsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = load_config()?;
    let artifacts = discover::collect(&args.artifacts)?;
    let service = semantic_service(&config, args.artifacts.offline);

    let report = Pipeline::new(&config, service.as_ref())
        .with_options(PipelineOptions {
            parallel: args.artifacts.parallel,
        })
        .claims(&artifacts)
        .context("claim generation failed")?;

    match flags.format {
        OutputFormat::Text => {
            println!("{}", render_text(&report, term_width()));
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format),
    }
}

fn render_text(report: &ClaimReport, max_width: Option<usize>) -> String {
    let claims: Vec<Vec<String>> = report
        .claims
        .claims
        .iter()
        .map(|c| {
            vec![
                c.endpoint.clone(),
                c.category.to_string(),
                c.condition.clone().unwrap_or_else(|| "-".into()),
                c.assertion.clone(),
                c.source.to_string(),
                format!("{:.2}", c.confidence),
            ]
        })
        .collect();
    let rejections: Vec<Vec<String>> = report
        .claims
        .rejections
        .iter()
        .map(|r| {
            vec![
                r.evidence_id.clone(),
                r.phase.to_string(),
                r.reason.to_string(),
                r.raw_data.clone(),
            ]
        })
        .collect();

    let mut out = format!("Claims ({})\n", claims.len());
    out.push_str(&render_table(
        &["endpoint", "category", "condition", "assertion", "source", "confidence"],
        &claims,
        max_width,
    ));
    out.push_str(&format!("\n\nRejections ({})\n", rejections.len()));
    out.push_str(&render_table(
        &["evidence", "phase", "reason", "raw_data"],
        &rejections,
        max_width,
    ));
    out
}

//! Plain-text three-tier report.

use std::fmt::Write as _;

use triad_core::enums::RiskLevel;

use crate::model::{BehaviorUnitCard, CoverageView, DisplayContext, RiskDrivenView};

const RULE_WIDTH: usize = 60;

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Expand tier-3 context (scores, risk band, recommendations).
    pub show_context: bool,
}

fn title_case(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Critical => "Critical",
        RiskLevel::High => "High",
        RiskLevel::Medium => "Medium",
        RiskLevel::Low => "Low",
    }
}

fn heading(out: &mut String, title: &str, underline: char) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", underline.to_string().repeat(title.chars().count()));
}

// ── Summary ────────────────────────────────────────────────────────

fn summary(out: &mut String, ctx: &DisplayContext) {
    let _ = writeln!(out, "Total behaviors:      {}", ctx.total_behaviors());
    let _ = writeln!(out, "Total contradictions: {}", ctx.total_contradictions());
    let _ = writeln!(out, "Unique endpoints:     {}", ctx.endpoint_summaries.len());

    let view = &ctx.risk_driven_view;
    let bands = [
        (RiskLevel::Critical, view.critical_behaviors.len()),
        (RiskLevel::High, view.high_risk_behaviors.len()),
        (RiskLevel::Medium, view.medium_risk_behaviors.len()),
        (RiskLevel::Low, view.low_risk_behaviors.len()),
    ];
    let _ = writeln!(out);
    let _ = writeln!(out, "Risk distribution:");
    for (level, n) in bands.into_iter().filter(|(_, n)| *n > 0) {
        let _ = writeln!(out, "  {}: {n}", title_case(level));
    }
}

// ── Unit cards ─────────────────────────────────────────────────────

/// Render one card: header, assertions, warnings, then context.
#[must_use]
pub fn format_unit_card(card: &BehaviorUnitCard, options: FormatOptions) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", card.endpoint, card.category);
    let _ = writeln!(
        out,
        "Condition: {}",
        card.condition.as_deref().unwrap_or("(none)")
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "Assertions");
    for info in &card.assertion_state.assertions {
        let marker = if info.is_conflicted { "[x]" } else { "[ok]" };
        let sources: Vec<&str> = info.sources.iter().map(|s| s.label()).collect();
        let _ = writeln!(out, "  {marker} {} <- {}", info.assertion, sources.join(", "));
    }

    if !card.structural_warnings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Findings");
        for kind in &card.structural_warnings {
            let _ = writeln!(out, "  ! {}", kind.label());
        }
    }

    if let Some(description) = &card.semantic_description {
        let _ = writeln!(out);
        let _ = writeln!(out, "Explanation");
        for line in description.lines() {
            let _ = writeln!(out, "  {line}");
        }
    }

    let _ = writeln!(out);
    if options.show_context {
        let _ = writeln!(out, "  Coverage:   {:.2}", card.coverage_score);
        let _ = writeln!(out, "  Confidence: {:.2}", card.confidence_score);
        let _ = writeln!(out, "  Risk:       {}", title_case(card.risk_band));
        let missing = card.source_coverage.missing_sources();
        if !missing.is_empty() {
            let _ = writeln!(out, "  Missing:    {}", missing.join(", "));
        }
        for rec in &card.recommendations {
            let _ = writeln!(out, "  - {rec}");
        }
    } else {
        let _ = writeln!(out, "  Context: collapsed (use --show-context)");
    }
    out
}

// ── Aggregated views ───────────────────────────────────────────────

fn unit_line(unit: &BehaviorUnitCard) -> String {
    let mut line = format!("  {}", unit.endpoint);
    if let Some(condition) = &unit.condition {
        let _ = write!(line, " | {condition}");
    }
    line
}

fn section(out: &mut String, title: &str, units: &[BehaviorUnitCard], mark_conflicts: bool) {
    if units.is_empty() {
        return;
    }
    let _ = writeln!(out);
    heading(out, &format!("{title} ({})", units.len()), '-');
    for unit in units {
        let mut line = unit_line(unit);
        if mark_conflicts && unit.contradiction_count() > 0 {
            line.push_str(" (contradiction)");
        }
        let _ = writeln!(out, "{line}");
    }
}

fn risk_view(out: &mut String, view: &RiskDrivenView) {
    heading(out, "Risk-driven priority view", '=');
    section(out, "CRITICAL", &view.critical_behaviors, true);
    section(out, "HIGH RISK", &view.high_risk_behaviors, true);
    section(out, "MEDIUM RISK", &view.medium_risk_behaviors, true);
    section(out, "LOW RISK", &view.low_risk_behaviors, true);
}

fn coverage_view(out: &mut String, view: &CoverageView) {
    heading(out, "Coverage gap analysis", '=');
    section(out, "NO TESTS", &view.no_tests, false);
    section(out, "NO API SPEC", &view.no_spec, false);
    section(out, "NO README", &view.no_readme, false);
    section(out, "FULL COVERAGE", &view.full_coverage, false);
}

/// Render the whole report: summary, unit cards, risk view, coverage view.
#[must_use]
pub fn format_report(ctx: &DisplayContext, options: FormatOptions) -> String {
    let mut out = String::new();
    summary(&mut out, ctx);
    let _ = writeln!(out);

    heading(&mut out, "Behavioral units", '=');
    for (i, unit) in ctx.behavioral_units.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(out, "[{}] {}", i + 1, "-".repeat(RULE_WIDTH - 6));
        out.push_str(&format_unit_card(unit, options));
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    risk_view(&mut out, &ctx.risk_driven_view);
    let _ = writeln!(out);
    coverage_view(&mut out, &ctx.coverage_view);
    out
}

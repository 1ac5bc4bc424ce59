//! Phase 2 assertion templates.
//!
//! Each category owns an ordered rule list; the first rule whose pattern
//! matches the raw observation produces the canonical token. The category is
//! the namespace: the same text yields `OUT_HTTP_404` under output
//! guarantees and `ERR_HTTP_404` under error semantics.
//!
//! Error-semantics status rules only accept 4xx/5xx codes, so a success
//! status never becomes an error claim.

use std::sync::OnceLock;

use regex::{Captures, Regex};
use triad_core::enums::ClaimCategory;

/// How a matching rule turns its captures into a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// `{prefix}{capture 1}`, e.g. `OUT_HTTP_` + `404`.
    Status(&'static str),
    /// A constant token.
    Fixed(&'static str),
    /// `OUT_SCHEMA_` + the `$ref` with `/` → `_` and `#` → `COMPONENTS`.
    SchemaRef,
    /// `PRE_REQ_PARAM_` + upper-cased capture 1.
    Parameter,
}

impl Transform {
    fn apply(self, caps: &Captures<'_>) -> String {
        let group = || caps.get(1).map_or("", |m| m.as_str());
        match self {
            Self::Status(prefix) => format!("{prefix}{}", group()),
            Self::Fixed(token) => token.to_string(),
            Self::SchemaRef => format!(
                "OUT_SCHEMA_{}",
                group().replace('/', "_").replace('#', "COMPONENTS")
            ),
            Self::Parameter => format!("PRE_REQ_PARAM_{}", group().to_uppercase()),
        }
    }
}

/// One `(pattern, transform)` rule. Patterns are matched case-insensitively.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub pattern: &'static str,
    pub transform: Transform,
}

const fn rule(pattern: &'static str, transform: Transform) -> Template {
    Template { pattern, transform }
}

pub const OUTPUT_GUARANTEE: &[Template] = &[
    rule(r"returns (?:HTTP )?(\d{3})", Transform::Status("OUT_HTTP_")),
    rule(r"observed HTTP (\d{3}) in test", Transform::Status("OUT_HTTP_")),
    rule(r"documents possible response (\d{3})", Transform::Status("OUT_HTTP_")),
    rule(r"defines response (\d{3})", Transform::Status("OUT_HTTP_")),
    rule(r"json body", Transform::Fixed("OUT_RETURNS_JSON")),
    rule(r"schema references (#/.*)", Transform::SchemaRef),
    rule(r"request body", Transform::Fixed("OUT_REQ_BODY_DEFINED")),
    rule(r"user data", Transform::Fixed("OUT_USER_DATA")),
];

pub const ERROR_SEMANTICS: &[Template] = &[
    rule(r"observed HTTP ([45]\d{2}) in test", Transform::Status("ERR_HTTP_")),
    rule(r"documents possible response ([45]\d{2})", Transform::Status("ERR_HTTP_")),
    rule(r"defines response ([45]\d{2})", Transform::Status("ERR_HTTP_")),
    rule(r"returns (?:HTTP )?([45]\d{2})", Transform::Status("ERR_HTTP_")),
    rule(r"\b([45]\d{2})\b", Transform::Status("ERR_HTTP_")),
    rule(r"not found", Transform::Fixed("ERR_TYPE_NOT_FOUND")),
    rule(r"unauthorized", Transform::Fixed("ERR_TYPE_UNAUTHORIZED")),
    rule(r"invalid", Transform::Fixed("ERR_TYPE_INVALID_INPUT")),
    rule(r"lacks permission", Transform::Fixed("ERR_TYPE_FORBIDDEN")),
    rule(r"already exists", Transform::Fixed("ERR_TYPE_CONFLICT")),
];

pub const INPUT_PRECONDITION: &[Template] = &[
    rule(r"requires auth", Transform::Fixed("PRE_AUTH_REQUIRED")),
    rule(r"parameter (\w+)", Transform::Parameter),
    rule(
        r"(?:defines|uses path-level) parameter '([^']+)' in \w+",
        Transform::Parameter,
    ),
    rule(r"request body", Transform::Fixed("PRE_REQ_BODY")),
    rule(r"authentication", Transform::Fixed("PRE_AUTH_REQUIRED")),
    rule(r"security requirements", Transform::Fixed("PRE_AUTH_REQUIRED")),
];

/// The rule list a category owns. Categories without rules reject everything.
#[must_use]
pub const fn templates_for(category: ClaimCategory) -> &'static [Template] {
    match category {
        ClaimCategory::OutputGuarantee => OUTPUT_GUARANTEE,
        ClaimCategory::ErrorSemantics => ERROR_SEMANTICS,
        ClaimCategory::InputPrecondition => INPUT_PRECONDITION,
        ClaimCategory::EndpointExists | ClaimCategory::Idempotency => &[],
    }
}

type Compiled = Vec<(Regex, Transform)>;

fn compile(templates: &[Template]) -> Compiled {
    templates
        .iter()
        .map(|t| {
            let regex = Regex::new(&format!("(?i){}", t.pattern))
                .expect("assertion template regex must compile");
            (regex, t.transform)
        })
        .collect()
}

fn compiled_for(category: ClaimCategory) -> &'static [(Regex, Transform)] {
    static OUTPUT: OnceLock<Compiled> = OnceLock::new();
    static ERROR: OnceLock<Compiled> = OnceLock::new();
    static PRECONDITION: OnceLock<Compiled> = OnceLock::new();

    let cell = match category {
        ClaimCategory::OutputGuarantee => &OUTPUT,
        ClaimCategory::ErrorSemantics => &ERROR,
        ClaimCategory::InputPrecondition => &PRECONDITION,
        ClaimCategory::EndpointExists | ClaimCategory::Idempotency => return &[],
    };
    cell.get_or_init(|| compile(templates_for(category)))
}

/// Canonical assertion token for `observation` under `category`, if any rule matches.
#[must_use]
pub fn canonicalize(category: ClaimCategory, observation: &str) -> Option<String> {
    compiled_for(category)
        .iter()
        .find_map(|(regex, transform)| regex.captures(observation).map(|c| transform.apply(&c)))
}

//! API contract (OpenAPI / Swagger) evidence extraction.
//!
//! Deterministic traversal of `paths → path → method → operation`. Nothing
//! is inferred: every evidence item points at the exact document location it
//! was read from.

use std::collections::HashSet;

use serde_yaml::{Mapping, Value};
use triad_core::entities::Evidence;
use triad_core::enums::EvidenceType;

use crate::error::ExtractError;

const HTTP_METHODS: &[&str] = &["get", "post", "put", "delete", "patch", "head", "options"];

/// Parse a contract document, YAML first and JSON as the fallback.
///
/// # Errors
///
/// Returns [`ExtractError::ContractParse`] if neither parser accepts the
/// text or the top level is not a mapping.
pub fn parse_contract(content: &str) -> Result<Mapping, ExtractError> {
    let value = match serde_yaml::from_str::<Value>(content) {
        Ok(value) => value,
        Err(yaml_err) => serde_json::from_str::<Value>(content).map_err(|json_err| {
            ExtractError::ContractParse(format!("yaml: {yaml_err}; json: {json_err}"))
        })?,
    };
    match value {
        Value::Mapping(map) => Ok(map),
        _ => Err(ExtractError::ContractParse(
            "top-level document is not a mapping".into(),
        )),
    }
}

/// Extract contract evidence. An unparseable document yields no evidence.
#[must_use]
pub fn extract_spec(source_file: &str, content: &str) -> Vec<Evidence> {
    let document = match parse_contract(content) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(file = source_file, %e, "skipping unparseable API contract");
            return Vec::new();
        }
    };
    let Some(paths) = document.get("paths").and_then(Value::as_mapping) else {
        tracing::debug!(file = source_file, "API contract has no paths mapping");
        return Vec::new();
    };

    let mut emitter = Emitter::new(source_file);
    for (path_key, path_item) in paths {
        let (Some(path), Some(path_item)) = (key_string(path_key), path_item.as_mapping()) else {
            continue;
        };
        emitter.path_item(&path, path_item);
    }
    emitter.into_evidence()
}

/// Mapping keys as strings; numeric status codes are stringified.
fn key_string(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn dump(value: &Value) -> Option<String> {
    serde_yaml::to_string(value).ok()
}

fn schema_ref(holder: &Mapping) -> Option<&str> {
    holder
        .get("schema")
        .and_then(Value::as_mapping)
        .and_then(|schema| schema.get("$ref"))
        .and_then(Value::as_str)
}

/// `(name, location)` of a parameter object, when both are present.
fn parameter_identity(param: &Mapping) -> Option<(&str, &str)> {
    let name = param.get("name").and_then(Value::as_str)?;
    let location = param.get("in").and_then(Value::as_str)?;
    (!name.is_empty() && !location.is_empty()).then_some((name, location))
}

fn sequence<'a>(holder: &'a Mapping, key: &str) -> &'a [Value] {
    holder
        .get(key)
        .and_then(Value::as_sequence)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

struct Emitter<'a> {
    source_file: &'a str,
    seen: HashSet<(EvidenceType, String, String, String)>,
    evidence: Vec<Evidence>,
}

impl<'a> Emitter<'a> {
    fn new(source_file: &'a str) -> Self {
        Self {
            source_file,
            seen: HashSet::new(),
            evidence: Vec::new(),
        }
    }

    fn into_evidence(self) -> Vec<Evidence> {
        self.evidence
    }

    /// Emit once per `(type, endpoint, location, observation)`.
    fn emit(
        &mut self,
        kind: EvidenceType,
        endpoint: &str,
        observation: String,
        source_location: String,
        raw_snippet: Option<String>,
    ) {
        let key = (
            kind,
            endpoint.to_string(),
            source_location.clone(),
            observation.clone(),
        );
        if !self.seen.insert(key) {
            return;
        }
        self.evidence.push(Evidence {
            kind,
            endpoint: endpoint.to_string(),
            observation,
            source_file: self.source_file.to_string(),
            source_location,
            raw_snippet,
        });
    }

    fn path_item(&mut self, path: &str, path_item: &Mapping) {
        let path_parameters = sequence(path_item, "parameters");

        for (method_key, operation) in path_item {
            let Some(method) = method_key.as_str().map(str::to_lowercase) else {
                continue;
            };
            if !HTTP_METHODS.contains(&method.as_str()) {
                continue;
            }
            let Some(operation) = operation.as_mapping() else {
                continue;
            };

            let endpoint = format!("{} {path}", method.to_uppercase());
            let base = format!("paths.{path}.{method}");

            // A referenced operation replaces the inline definition.
            if let Some(reference) = operation.get("$ref").and_then(Value::as_str) {
                self.emit(
                    EvidenceType::SpecSchemaRef,
                    &endpoint,
                    format!("operation references {reference}"),
                    format!("{base}.$ref"),
                    Some(reference.to_string()),
                );
                continue;
            }

            self.path_parameters(path, &endpoint, path_parameters);
            self.operation_parameters(&endpoint, &base, operation);
            self.responses(&endpoint, &base, operation);
            if method != "head" {
                self.request_body(&endpoint, &base, operation);
            }
            if let Some(security) = operation.get("security").filter(|s| s.is_sequence()) {
                self.emit(
                    EvidenceType::SpecSecurity,
                    &endpoint,
                    "defines security requirements".into(),
                    format!("{base}.security"),
                    dump(security),
                );
            }
        }
    }

    fn path_parameters(&mut self, path: &str, endpoint: &str, parameters: &[Value]) {
        for (i, param) in parameters.iter().enumerate() {
            let Some(param_map) = param.as_mapping() else {
                continue;
            };
            if let Some((name, location)) = parameter_identity(param_map) {
                self.emit(
                    EvidenceType::SpecParameter,
                    endpoint,
                    format!("uses path-level parameter '{name}' in {location}"),
                    format!("paths.{path}.parameters[{i}]"),
                    dump(param),
                );
            }
        }
    }

    fn operation_parameters(&mut self, endpoint: &str, base: &str, operation: &Mapping) {
        for (i, param) in sequence(operation, "parameters").iter().enumerate() {
            let Some(param_map) = param.as_mapping() else {
                continue;
            };
            let Some((name, location)) = parameter_identity(param_map) else {
                continue;
            };
            self.emit(
                EvidenceType::SpecParameter,
                endpoint,
                format!("defines parameter '{name}' in {location}"),
                format!("{base}.parameters[{i}]"),
                dump(param),
            );
            if let Some(reference) = schema_ref(param_map) {
                self.emit(
                    EvidenceType::SpecSchemaRef,
                    endpoint,
                    format!("parameter '{name}' schema references {reference}"),
                    format!("{base}.parameters[{i}].schema.$ref"),
                    Some(reference.to_string()),
                );
            }
        }
    }

    fn responses(&mut self, endpoint: &str, base: &str, operation: &Mapping) {
        let Some(responses) = operation.get("responses").and_then(Value::as_mapping) else {
            return;
        };
        for (code_key, response) in responses {
            let (Some(code), Some(response_map)) = (key_string(code_key), response.as_mapping())
            else {
                continue;
            };
            let location = format!("{base}.responses.{code}");

            let observation = match response_map
                .get("description")
                .and_then(Value::as_str)
                .filter(|d| !d.is_empty())
            {
                Some(description) => format!("documents possible response {code}: {description}"),
                None => format!("documents possible response {code}"),
            };
            self.emit(
                EvidenceType::SpecResponse,
                endpoint,
                observation,
                location.clone(),
                dump(response),
            );

            // OpenAPI 3: content → media type → schema
            for (mime, media) in media_types(response_map) {
                if let Some(reference) = schema_ref(media) {
                    self.emit(
                        EvidenceType::SpecSchemaRef,
                        endpoint,
                        format!("response {code} schema references {reference}"),
                        format!("{location}.content.{mime}.schema.$ref"),
                        Some(reference.to_string()),
                    );
                }
            }

            // OpenAPI 2: schema directly under the response
            if let Some(reference) = schema_ref(response_map) {
                self.emit(
                    EvidenceType::SpecSchemaRef,
                    endpoint,
                    format!("response {code} schema references {reference}"),
                    format!("{location}.schema.$ref"),
                    Some(reference.to_string()),
                );
            }
        }
    }

    fn request_body(&mut self, endpoint: &str, base: &str, operation: &Mapping) {
        let Some(body) = operation.get("requestBody") else {
            return;
        };
        let Some(body_map) = body.as_mapping() else {
            return;
        };
        self.emit(
            EvidenceType::SpecRequestBody,
            endpoint,
            "defines request body".into(),
            format!("{base}.requestBody"),
            dump(body),
        );
        for (mime, media) in media_types(body_map) {
            if let Some(reference) = schema_ref(media) {
                self.emit(
                    EvidenceType::SpecSchemaRef,
                    endpoint,
                    format!("request body schema references {reference}"),
                    format!("{base}.requestBody.content.{mime}.schema.$ref"),
                    Some(reference.to_string()),
                );
            }
        }
    }
}

/// `(mime, media object)` pairs under a `content` mapping.
fn media_types(holder: &Mapping) -> Vec<(String, &Mapping)> {
    holder
        .get("content")
        .and_then(Value::as_mapping)
        .map(|content| {
            content
                .iter()
                .filter_map(|(mime, media)| Some((key_string(mime)?, media.as_mapping()?)))
                .collect()
        })
        .unwrap_or_default()
}

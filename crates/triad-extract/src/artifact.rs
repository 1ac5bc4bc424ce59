//! Artifact kind detection from file names.
//!
//! Used by the CLI walker to decide which extractor a discovered file goes
//! to. Order matters: README names first, then API contracts, then test
//! naming conventions, then any code file defaults to test source.

use std::path::Path;

use triad_core::enums::ArtifactSource;

const README_EXTENSIONS: &[&str] = &["md", "txt", "rst"];

/// Substrings marking a YAML/JSON file as an API contract.
const CONTRACT_MARKERS: &[&str] = &["openapi", "swagger", "api-spec", "api_spec", "spec"];

const CONTRACT_EXTENSIONS: &[&str] = &["yaml", "yml", "json"];

/// Substrings marking a file as test source. `_test`, `.spec` and friends
/// are covered by `test` and `spec`.
const TEST_MARKERS: &[&str] = &["test", "spec"];

/// Extensions of code files that default to test source.
const CODE_EXTENSIONS: &[&str] = &["py", "java", "cs", "js", "ts", "go", "rs", "cpp", "c"];

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| ext.eq_ignore_ascii_case(e)))
}

/// Returns `true` if any ancestor directory name mentions `test`.
fn in_test_directory(path: &Path) -> bool {
    path.parent().is_some_and(|parent| {
        parent.components().any(|c| {
            c.as_os_str()
                .to_str()
                .is_some_and(|name| name.to_lowercase().contains("test"))
        })
    })
}

/// Detect the artifact kind of `path`, or `None` if it is not an artifact.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use triad_core::enums::ArtifactSource;
/// use triad_extract::detect_kind;
///
/// assert_eq!(detect_kind(Path::new("README.md")), Some(ArtifactSource::Readme));
/// assert_eq!(detect_kind(Path::new("openapi.yaml")), Some(ArtifactSource::ApiSpec));
/// assert_eq!(detect_kind(Path::new("test_orders.py")), Some(ArtifactSource::Test));
/// assert_eq!(detect_kind(Path::new("logo.png")), None);
/// ```
#[must_use]
pub fn detect_kind(path: &Path) -> Option<ArtifactSource> {
    let name = path.file_name()?.to_str()?.to_lowercase();

    if name == "readme" || (name.contains("readme") && has_extension(path, README_EXTENSIONS)) {
        return Some(ArtifactSource::Readme);
    }

    let is_contract_format = has_extension(path, CONTRACT_EXTENSIONS);
    if is_contract_format
        && (CONTRACT_MARKERS.iter().any(|m| name.contains(m)) || name.contains("api"))
    {
        return Some(ArtifactSource::ApiSpec);
    }

    if TEST_MARKERS.iter().any(|m| name.contains(m)) || in_test_directory(path) {
        return Some(ArtifactSource::Test);
    }

    if has_extension(path, CODE_EXTENSIONS) {
        return Some(ArtifactSource::Test);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("README.md", Some(ArtifactSource::Readme))]
    #[case("readme", Some(ArtifactSource::Readme))]
    #[case("API_README.txt", Some(ArtifactSource::Readme))]
    #[case("openapi.yaml", Some(ArtifactSource::ApiSpec))]
    #[case("swagger.json", Some(ArtifactSource::ApiSpec))]
    #[case("orders-api.yml", Some(ArtifactSource::ApiSpec))]
    #[case("users.spec.ts", Some(ArtifactSource::Test))]
    #[case("test_orders.py", Some(ArtifactSource::Test))]
    #[case("orders_test.go", Some(ArtifactSource::Test))]
    #[case("client.py", Some(ArtifactSource::Test))]
    #[case("config.yaml", None)]
    #[case("logo.png", None)]
    #[case("notes.md", None)]
    fn detects_kind_from_name(#[case] name: &str, #[case] expected: Option<ArtifactSource>) {
        assert_eq!(detect_kind(Path::new(name)), expected);
    }

    #[test]
    fn test_directory_marks_test_source() {
        assert_eq!(
            detect_kind(Path::new("tests/fixtures/orders.txt")),
            Some(ArtifactSource::Test)
        );
    }

    #[test]
    fn readme_beats_test_directory() {
        assert_eq!(
            detect_kind(Path::new("tests/README.md")),
            Some(ArtifactSource::Readme)
        );
    }
}

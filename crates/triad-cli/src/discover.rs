//! Artifact discovery: explicit overrides, then files and walked directories.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use ignore::WalkBuilder;
use triad_core::enums::ArtifactSource;
use triad_engine::Artifact;
use triad_extract::detect_kind;

use crate::cli::root_commands::ArtifactArgs;

fn read_artifact(kind: ArtifactSource, path: &Path) -> anyhow::Result<Artifact> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(Artifact::new(kind, path.display().to_string(), content))
}

/// Files under `dir`, gitignore-aware, in file-name order.
fn walk(dir: &Path) -> Vec<PathBuf> {
    WalkBuilder::new(dir)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!(%e, "skipping unreadable entry");
                None
            }
        })
        .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
        .map(ignore::DirEntry::into_path)
        .collect()
}

/// Resolve the command-line selection into artifacts.
///
/// Explicit `--readme/--spec/--test` files come first and keep their forced
/// kind. Remaining files are classified by name; files of no known kind are
/// skipped. Walked files that are not UTF-8 text are skipped too.
pub fn collect(args: &ArtifactArgs) -> anyhow::Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for (kind, paths) in [
        (ArtifactSource::Readme, &args.readme),
        (ArtifactSource::ApiSpec, &args.spec),
        (ArtifactSource::Test, &args.test),
    ] {
        for path in paths {
            if seen.insert(path.clone()) {
                artifacts.push(read_artifact(kind, path)?);
            }
        }
    }

    for root in &args.paths {
        if root.is_dir() {
            for path in walk(root) {
                let Some(kind) = detect_kind(&path) else {
                    continue;
                };
                if !seen.insert(path.clone()) {
                    continue;
                }
                match read_artifact(kind, &path) {
                    Ok(artifact) => artifacts.push(artifact),
                    Err(e) => tracing::debug!("{e:#}, skipping"),
                }
            }
        } else if root.is_file() {
            let Some(kind) = detect_kind(root) else {
                tracing::warn!(path = %root.display(), "unrecognized artifact kind, skipping");
                continue;
            };
            if seen.insert(root.clone()) {
                artifacts.push(read_artifact(kind, root)?);
            }
        } else {
            bail!("path does not exist: {}", root.display());
        }
    }

    if artifacts.is_empty() {
        bail!("no artifacts found; pass files, directories, or --readme/--spec/--test");
    }
    tracing::debug!(artifacts = artifacts.len(), "collected artifacts");
    Ok(artifacts)
}

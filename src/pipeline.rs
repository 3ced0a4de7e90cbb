use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use uuid::Uuid;
use walkdir::WalkDir;

use crate::export::{Export, MediaKind};
use crate::generate::{MetadataRecord, generate_record};
use crate::settings::GenerationSettings;

/// Collect supported media files from the given paths.
///
/// Accepts a mix of file and directory paths. Directories are walked
/// recursively (following symlinks) and only files with a known media
/// extension are kept. Unsupported files and missing paths are skipped with
/// a warning.
pub fn collect_media(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut media = Vec::new();

    for path in paths {
        if path.is_file() {
            if is_supported_media(path) {
                media.push(path.clone());
            } else {
                log::warn!("Skipping unsupported file: {}", path.display());
            }
        } else if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
                .map(|e| e.into_path())
                .filter(|p| p.is_file() && is_supported_media(p))
                .collect();
            found.sort();
            media.extend(found);
        } else {
            log::warn!("Path does not exist: {}", path.display());
        }
    }

    media
}

fn is_supported_media(path: &Path) -> bool {
    MediaKind::from_path(path).is_some()
}

/// The bare file name of a path, as used for generation and export.
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Filenames to generate for, from command-line style input paths.
///
/// With `names_only` the paths are taken as bare filenames and the
/// filesystem is never touched. Otherwise they go through [`collect_media`].
/// Fails when there is no input or nothing supported was found.
pub fn input_names(paths: &[PathBuf], names_only: bool) -> Result<Vec<String>> {
    if paths.is_empty() {
        anyhow::bail!("No input files or directories specified. Use --help for usage.");
    }

    let names: Vec<String> = if names_only {
        paths.iter().map(|p| file_name_of(p)).collect()
    } else {
        collect_media(paths).iter().map(|p| file_name_of(p)).collect()
    };

    if names.is_empty() {
        anyhow::bail!("No supported media files found in the specified paths.");
    }
    Ok(names)
}

/// Stable id for the file at `index` within a batch.
///
/// Name-based (UUID v5), so generating the same batch twice yields the same
/// ids while repeated filenames in one batch still get distinct ones.
pub fn record_id(index: usize, filename: &str) -> String {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, format!("{index}:{filename}").as_bytes()).to_string()
}

/// Generate a record for every filename, in input order.
///
/// Files are processed in parallel; each one depends only on its own name and
/// the shared settings, so the output equals a sequential run.
///
/// # Example
///
/// ```rust
/// use stock_meta::pipeline::generate_batch;
/// use stock_meta::settings::GenerationSettings;
///
/// let names = vec!["sunset.jpg".to_string(), "logo.svg".to_string()];
/// let records = generate_batch(&names, &GenerationSettings::default(), true);
/// assert_eq!(records[0].title, "Sunset");
/// assert_eq!(records[1].title, "Logo");
/// ```
pub fn generate_batch<S>(
    filenames: &[S],
    settings: &GenerationSettings,
    include_prompts: bool,
) -> Vec<MetadataRecord>
where
    S: AsRef<str> + Sync,
{
    log::info!("Generating metadata for {} file(s)", filenames.len());

    filenames
        .par_iter()
        .enumerate()
        .map(|(i, name)| {
            let name = name.as_ref();
            let record = generate_record(record_id(i, name), name, settings, include_prompts);
            log::debug!(
                "[{}/{}] {name}: \"{}\" ({} keywords)",
                i + 1,
                filenames.len(),
                record.title,
                record.keywords.len()
            );
            record
        })
        .collect()
}

/// Write an export into `dir` under its suggested file name.
///
/// Returns the path written.
pub fn save_export(export: &Export, dir: &Path) -> Result<PathBuf> {
    if !dir.exists() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let path = dir.join(&export.file_name);
    std::fs::write(&path, &export.body)
        .with_context(|| format!("Failed to write export to {}", path.display()))?;
    log::info!("Export written to {}", path.display());
    Ok(path)
}

//! Loader module - read shape records from disk or text
//!
//! Loading fails fast: the first malformed record aborts with an error naming
//! the file or line it came from.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};

use fallblocks_core::{GameConfig, ShapeQueue, ShapeTemplate};

use crate::record::ShapeRecord;

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}

/// Load one record file; the file stem names shapes without a `"name"`
pub fn load_file(path: &Path) -> Result<ShapeTemplate> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read shape file {}", path.display()))?;
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("shape");

    let template = ShapeRecord::parse(&text)
        .and_then(|record| record.into_template(stem))
        .with_context(|| format!("invalid shape file {}", path.display()))?;
    debug!("loaded shape '{}' from {}", template.name(), path.display());
    Ok(template)
}

/// Load every `*.json` file in `dir`, sorted by file name.
///
/// Other entries are skipped with a warning. An empty directory yields an
/// empty list.
pub fn load_dir(dir: &Path) -> Result<Vec<ShapeTemplate>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read shape directory {}", dir.display()))?;

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("failed to list {}", dir.display()))?
            .path();
        if path.is_file() && is_json(&path) {
            paths.push(path);
        } else {
            warn!("skipping non-shape entry {}", path.display());
        }
    }
    paths.sort();

    let templates = paths
        .iter()
        .map(|p| load_file(p))
        .collect::<Result<Vec<_>>>()?;
    info!("loaded {} shapes from {}", templates.len(), dir.display());
    Ok(templates)
}

/// Parse line-delimited records. Blank lines are skipped; unnamed shapes are
/// called `shape-<line>`.
pub fn parse_lines(text: &str) -> Result<Vec<ShapeTemplate>> {
    let mut templates = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let fallback = format!("shape-{line_no}");
        let template = ShapeRecord::parse(line)
            .and_then(|record| record.into_template(&fallback))
            .with_context(|| format!("invalid shape record on line {line_no}"))?;
        templates.push(template);
    }
    Ok(templates)
}

/// Load a directory and build a queue over it, seeded by `config.seed`
pub fn load_queue(dir: &Path, config: &GameConfig) -> Result<ShapeQueue> {
    let templates = load_dir(dir)?;
    match ShapeQueue::new(templates, config.seed) {
        Some(queue) => Ok(queue),
        None => bail!("no shapes found in {}", dir.display()),
    }
}

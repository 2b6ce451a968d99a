//! Checks that generated sidecars all share the template's shape.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::descriptor::SpriteDescriptor;
use crate::error::{ScanError, VerifyError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mismatch {
    /// Parsed, but a field other than `path` differs from the template.
    Shape(PathBuf),
    /// Not a readable descriptor.
    Unreadable { path: PathBuf, reason: String },
}

impl Mismatch {
    pub fn path(&self) -> &Path {
        match self {
            Mismatch::Shape(p) => p,
            Mismatch::Unreadable { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    pub checked: Vec<PathBuf>,
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool { self.mismatches.is_empty() }
}

/// Compare every `*.json` directly inside `dir` against `template`.
///
/// Sidecars are checked as raw JSON: a string `path` plus exactly the
/// template's other keys and values. Missing or extra keys are mismatches.
pub fn verify_dir(dir: &Path, template: &SpriteDescriptor) -> Result<VerifyReport, VerifyError> {
    let read_err = |source| ScanError::ReadDir { path: dir.to_path_buf(), source };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let path = entry.map_err(read_err)?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    let expected = match serde_json::to_value(template)? {
        Value::Object(mut map) => {
            map.remove("path");
            map
        }
        _ => Map::new(),
    };

    let mut report = VerifyReport::default();
    for path in paths {
        match matches_template(&path, &expected) {
            Ok(true) => {}
            Ok(false) => {
                log::warn!("{} differs from the template", path.display());
                report.mismatches.push(Mismatch::Shape(path.clone()));
            }
            Err(reason) => {
                log::warn!("{} is not a sprite descriptor: {}", path.display(), reason);
                report.mismatches.push(Mismatch::Unreadable { path: path.clone(), reason });
            }
        }
        report.checked.push(path);
    }
    Ok(report)
}

fn matches_template(path: &Path, expected: &Map<String, Value>) -> Result<bool, String> {
    let data = fs::read_to_string(path).map_err(|e| e.to_string())?;
    let Value::Object(mut found) = serde_json::from_str::<Value>(&data).map_err(|e| e.to_string())? else {
        return Err("not a JSON object".to_string());
    };
    if !matches!(found.remove("path"), Some(Value::String(_))) {
        return Ok(false);
    }
    Ok(found == *expected)
}

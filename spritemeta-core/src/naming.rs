//! Output file naming.

use std::path::{Path, PathBuf};

use crate::error::NamingError;

/// Characters dropped from the end of a file name under [`StemRule::FixedSuffix`] by default.
pub const LEGACY_SUFFIX_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StemRule {
    /// Drop exactly this many trailing characters (`apple.png` -> `apple`).
    FixedSuffix(usize),
    /// Drop the real extension, whatever its length (`cake.jpeg` -> `cake`).
    Extension,
}

impl Default for StemRule {
    fn default() -> Self { StemRule::FixedSuffix(LEGACY_SUFFIX_LEN) }
}

impl StemRule {
    pub fn base_name<'a>(&self, file_name: &'a str) -> Result<&'a str, NamingError> {
        match *self {
            StemRule::FixedSuffix(len) => {
                let count = file_name.chars().count();
                if count < len {
                    return Err(NamingError::TooShort { name: file_name.to_string(), len });
                }
                let cut = file_name
                    .char_indices()
                    .nth(count - len)
                    .map(|(i, _)| i)
                    .unwrap_or(file_name.len());
                Ok(&file_name[..cut])
            }
            StemRule::Extension => match file_name.rfind('.') {
                Some(i) if i > 0 => Ok(&file_name[..i]),
                _ => Ok(file_name),
            },
        }
    }
}

/// UTF-8 file name of `path`.
pub fn file_name_str(path: &Path) -> Result<&str, NamingError> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| NamingError::NotUtf8(path.to_path_buf()))
}

pub fn output_path(output_dir: &Path, base_name: &str) -> PathBuf {
    output_dir.join(format!("{}.json", base_name))
}

/// `<prefix>/<file_name>`; a trailing slash on the prefix is not doubled.
pub fn asset_path(prefix: &str, file_name: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() { file_name.to_string() } else { format!("{}/{}", prefix, file_name) }
}

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::DomainSet;
use crate::error::{DomainError, InitErrorKind, Result};

/// JSON array of domain names. `null` entries are tolerated and dropped.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
struct RawDomainList(Vec<Option<String>>);

/// Parse a JSON domain list into a normalized [`DomainSet`].
pub fn parse_domains(json: &str) -> Result<DomainSet> {
    let raw: Option<RawDomainList> = serde_json::from_str(json).map_err(|e| {
        DomainError::init(
            InitErrorKind::InvalidData,
            format!("Failed to parse domain list: {}", e),
        )
    })?;

    let entries = match raw {
        Some(RawDomainList(entries)) if !entries.is_empty() => entries,
        Some(_) => {
            return Err(DomainError::init(
                InitErrorKind::Empty,
                "Domain list is empty",
            ))
        }
        None => {
            return Err(DomainError::init(
                InitErrorKind::Empty,
                "Domain list is null",
            ))
        }
    };

    let total = entries.len();
    let set: DomainSet = entries.iter().flatten().collect();
    if set.is_empty() {
        return Err(DomainError::init(
            InitErrorKind::Empty,
            format!("Domain list has no usable entries ({} blank)", total),
        ));
    }

    debug!(
        "Parsed domain list: {} domains from {} entries ({} blank or duplicate)",
        set.len(),
        total,
        total - set.len()
    );

    Ok(set)
}

/// Read a JSON domain list from disk.
pub fn load_domains_from_path(path: impl AsRef<Path>) -> Result<DomainSet> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::init(
            InitErrorKind::NotFound,
            format!("Domain list not found: '{}'", path.display()),
        ),
        _ => DomainError::init(
            InitErrorKind::FileError,
            format!("Failed to read domain list '{}': {}", path.display(), e),
        ),
    })?;

    debug!("Loading domain list from '{}'", path.display());
    parse_domains(&text)
}

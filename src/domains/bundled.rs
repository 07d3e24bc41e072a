use log::error;
use once_cell::sync::Lazy;

use super::{parse_domains, DomainSet};
use crate::error::Result;

/// Domain list compiled into the crate.
const BUNDLED_DOMAINS_JSON: &str = include_str!("../../data/domains.json");

/// Parsed once on first access. A failed parse is kept and returned to every caller.
static BUNDLED_DOMAINS: Lazy<Result<DomainSet>> =
    Lazy::new(|| init_bundled(BUNDLED_DOMAINS_JSON));

fn init_bundled(json: &str) -> Result<DomainSet> {
    let result = parse_domains(json);
    if let Err(e) = &result {
        error!("Bundled free email domain list is unusable: {}", e);
    }
    result
}

fn shared(cell: &'static Lazy<Result<DomainSet>>) -> Result<&'static DomainSet> {
    cell.as_ref().map_err(Clone::clone)
}

/// The process-wide bundled domain set.
pub fn bundled() -> Result<&'static DomainSet> {
    shared(&BUNDLED_DOMAINS)
}

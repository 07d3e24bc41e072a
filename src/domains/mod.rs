mod bundled;
pub mod loader;

pub use bundled::bundled;
use loader::{load_domains_from_path, parse_domains};

use std::collections::hash_set;
use std::collections::HashSet;
use std::path::Path;

use crate::error::Result;

/// Read-only set of free email domains.
///
/// Entries are trimmed, non-empty and lowercase. The type exposes no way to
/// insert or remove entries, so a shared `&DomainSet` can be handed out freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainSet {
    domains: HashSet<String>,
}

impl DomainSet {
    /// Parse a JSON array of domain names.
    ///
    /// Fails if the document is not an array of strings, or if no usable
    /// entry remains after normalization.
    pub fn from_json(json: &str) -> Result<Self> {
        parse_domains(json)
    }

    /// Read and parse a JSON domain list file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        load_domains_from_path(path)
    }

    /// Exact lookup of an already-normalized (lowercase) domain.
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Iterate over the domains in unspecified order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.domains.iter(),
        }
    }

    /// All domains in lexical order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = self.iter().collect();
        domains.sort_unstable();
        domains
    }
}

/// Normalize one raw list entry: trim, drop blanks, lowercase.
pub(crate) fn normalize_entry(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

impl<S: AsRef<str>> FromIterator<S> for DomainSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            domains: iter
                .into_iter()
                .filter_map(|d| normalize_entry(d.as_ref()))
                .collect(),
        }
    }
}

/// Borrowing iterator over a [`DomainSet`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: hash_set::Iter<'a, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(String::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DomainSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_iter_normalizes_entries() {
        let set: DomainSet = ["Gmail.COM", "  yahoo.com ", "", "   ", "gmail.com"]
            .into_iter()
            .collect();

        assert_eq!(set.len(), 2);
        assert!(set.contains("gmail.com"));
        assert!(set.contains("yahoo.com"));
        assert!(!set.contains("Gmail.COM"));
    }

    #[test]
    fn test_normalize_entry() {
        assert_eq!(normalize_entry("  Mail.RU\t"), Some("mail.ru".to_string()));
        assert_eq!(normalize_entry(" \n "), None);
        assert_eq!(normalize_entry(""), None);
    }

    #[test]
    fn test_normalize_entry_is_locale_independent() {
        // ASCII "I" must never fold to the Turkish dotless "ı"
        assert_eq!(normalize_entry("MAIL.TR"), Some("mail.tr".to_string()));
        assert_eq!(normalize_entry("IIII.COM"), Some("iiii.com".to_string()));
    }

    #[test]
    fn test_sorted_is_lexical() {
        let set: DomainSet = ["yandex.ru", "aol.com", "mail.com"].into_iter().collect();
        assert_eq!(set.sorted(), vec!["aol.com", "mail.com", "yandex.ru"]);
    }

    #[test]
    fn test_iter_len_matches_set_len() {
        let set: DomainSet = ["a.com", "b.com", "c.com"].into_iter().collect();
        assert_eq!(set.iter().len(), 3);
        assert_eq!((&set).into_iter().count(), 3);
    }

    #[test]
    fn test_empty_iterator_builds_empty_set() {
        let set: DomainSet = Vec::<String>::new().into_iter().collect();
        assert!(set.is_empty());
    }
}

//! Free Email Domains - Identify free consumer email providers
//!
//! This library checks whether an email address or domain belongs to a free
//! email provider (Gmail, Yahoo, Outlook, ...) rather than a private or
//! business domain:
//! - Domain extraction from an email address or bare domain
//! - Case-insensitive lookup against a bundled list of free providers
//! - Read-only access to the bundled list
//! - Custom lists loaded from JSON with the same normalization
//!
//! The bundled list is parsed once, on first use, and shared by every caller.
//! All lookups are synchronous and safe to call from any number of threads.
//!
//! # Example
//!
//! ```rust
//! use free_email_domains::{extract_domain, is_free};
//!
//! assert!(is_free("user@gmail.com").unwrap());
//! assert!(is_free("  YAHOO.COM ").unwrap());
//! assert!(!is_free("user@company.com").unwrap());
//!
//! assert_eq!(extract_domain("user@Example.COM").unwrap(), "Example.COM");
//! assert!(is_free("user@").is_err());
//! ```
//!
//! # Custom Lists
//!
//! ```rust
//! use free_email_domains::DomainSet;
//!
//! let domains = DomainSet::from_json(r#"["Mail.Example", " other.example "]"#).unwrap();
//! assert!(domains.is_free("someone@MAIL.example").unwrap());
//! assert_eq!(domains.sorted(), vec!["mail.example", "other.example"]);
//! ```

pub mod classifier;
pub mod domains;
pub mod error;

// Re-export commonly used items
pub use classifier::extract_domain;
pub use domains::DomainSet;
pub use error::{DomainError, InitErrorKind, Result};

/// Check if an email address or domain belongs to a free email provider.
///
/// Accepts either `user@domain.com` or `domain.com`. The comparison is
/// case-insensitive and surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`DomainError::InvalidArgument`] if the input is empty or whitespace-only
/// - [`DomainError::InvalidFormat`] if the input ends with `@`
/// - [`DomainError::Initialization`] if the bundled list could not be loaded
pub fn is_free(email_or_domain: &str) -> Result<bool> {
    let domain = extract_domain(email_or_domain.trim())?;
    Ok(domains::bundled()?.contains_folded(domain))
}

/// Split inputs into free and non-free against the bundled list.
pub fn partition_free<I, S>(inputs: I) -> Result<(Vec<S>, Vec<S>)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    domains::bundled()?.partition_free(inputs)
}

/// The bundled set of free email domains, all lowercase.
///
/// Every call returns the same instance.
///
/// # Panics
///
/// Panics if the bundled list could not be loaded. Use [`try_all`] to handle
/// that case instead.
pub fn all() -> &'static DomainSet {
    match domains::bundled() {
        Ok(domains) => domains,
        Err(e) => panic!("{}", e),
    }
}

/// Like [`all`], but returns the initialization error instead of panicking.
pub fn try_all() -> Result<&'static DomainSet> {
    domains::bundled()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_workflow() {
        // Bare domains and full addresses
        assert!(is_free("gmail.com").unwrap());
        assert!(is_free("someone@outlook.com").unwrap());
        assert!(!is_free("employee@corporation.net").unwrap());

        // Extraction keeps case, lookup folds it
        assert_eq!(extract_domain("user@Gmail.Com").unwrap(), "Gmail.Com");
        assert!(is_free("user@Gmail.Com").unwrap());

        // Invalid input
        assert_eq!(is_free(""), Err(DomainError::InvalidArgument));
        assert!(matches!(
            is_free("user@"),
            Err(DomainError::InvalidFormat { .. })
        ));

        // Shared set
        assert!(all().contains("gmail.com"));
        assert!(std::ptr::eq(all(), try_all().unwrap()));
    }

    #[test]
    fn test_is_free_reports_trimmed_input() {
        assert_eq!(
            is_free("  user@  "),
            Err(DomainError::InvalidFormat {
                input: "user@".into()
            })
        );
        // extract_domain keeps reporting the argument as given
        assert_eq!(
            extract_domain("  user@  "),
            Err(DomainError::InvalidFormat {
                input: "  user@  ".into()
            })
        );
    }

    #[test]
    fn test_is_free_without_dot() {
        assert!(!is_free("localhost").unwrap());
        assert!(!is_free("root@localhost").unwrap());
    }

    #[test]
    fn test_partition_free_bundled() {
        let (free, other) =
            partition_free(["a@gmail.com", "b@company.com", "aol.com"]).unwrap();
        assert_eq!(free, vec!["a@gmail.com", "aol.com"]);
        assert_eq!(other, vec!["b@company.com"]);
    }
}

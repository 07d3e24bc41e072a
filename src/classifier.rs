use crate::domains::DomainSet;
use crate::error::{DomainError, Result};

/// Extract the domain part of an email address, or return the input if it is
/// already a bare domain.
///
/// Surrounding whitespace is ignored and the last `@` wins, so
/// `"a@b@final.com"` yields `"final.com"`. Case is preserved.
///
/// # Errors
///
/// - [`DomainError::InvalidArgument`] if the input is empty or whitespace-only
/// - [`DomainError::InvalidFormat`] if nothing follows the last `@`
pub fn extract_domain(email_or_domain: &str) -> Result<&str> {
    let trimmed = email_or_domain.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidArgument);
    }

    match trimmed.rfind('@') {
        None => Ok(trimmed),
        Some(at) if at + 1 == trimmed.len() => Err(DomainError::InvalidFormat {
            input: email_or_domain.to_string(),
        }),
        Some(at) => Ok(&trimmed[at + 1..]),
    }
}

impl DomainSet {
    /// Check whether an email address or domain belongs to this set.
    ///
    /// The comparison is case-insensitive; see [`extract_domain`] for the
    /// accepted input forms and errors.
    pub fn is_free(&self, email_or_domain: &str) -> Result<bool> {
        let domain = extract_domain(email_or_domain.trim())?;
        Ok(self.contains_folded(domain))
    }

    /// Split inputs into free and non-free, in input order.
    ///
    /// Stops at the first invalid input and returns its error.
    pub fn partition_free<I, S>(&self, inputs: I) -> Result<(Vec<S>, Vec<S>)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut free = Vec::new();
        let mut other = Vec::new();
        for input in inputs {
            if self.is_free(input.as_ref())? {
                free.push(input);
            } else {
                other.push(input);
            }
        }
        Ok((free, other))
    }

    pub(crate) fn contains_folded(&self, domain: &str) -> bool {
        self.contains(&domain.to_lowercase())
    }
}

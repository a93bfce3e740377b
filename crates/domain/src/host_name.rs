use crate::errors::DomainError;
use std::fmt;
use std::str::FromStr;

/// Maximum length of a domain name, excluding the root dot (RFC 1035 §2.3.4).
const MAX_NAME_LEN: usize = 253;

/// Maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

/// A fully-qualified host name the responder is authoritative for.
///
/// Always stored dot-terminated; a missing trailing dot is appended on
/// parse so that lookups against wire-format question names (which are
/// always fully qualified) are a plain string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostName(String);

impl HostName {
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == "." {
            return Err(DomainError::InvalidHostName("empty name".to_string()));
        }

        let without_root = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if without_root.len() > MAX_NAME_LEN {
            return Err(DomainError::InvalidHostName(format!(
                "'{}' exceeds {} characters",
                trimmed, MAX_NAME_LEN
            )));
        }

        for label in without_root.split('.') {
            validate_label(trimmed, label)?;
        }

        let mut name = without_root.to_string();
        name.push('.');
        Ok(Self(name))
    }

    /// The dot-terminated name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn validate_label(name: &str, label: &str) -> Result<(), DomainError> {
    if label.is_empty() {
        return Err(DomainError::InvalidHostName(format!(
            "'{}' contains an empty label",
            name
        )));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(DomainError::InvalidHostName(format!(
            "label '{}' exceeds {} characters",
            label, MAX_LABEL_LEN
        )));
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(DomainError::InvalidHostName(format!(
            "label '{}' contains characters outside [a-zA-Z0-9-_]",
            label
        )));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(DomainError::InvalidHostName(format!(
            "label '{}' starts or ends with a hyphen",
            label
        )));
    }
    Ok(())
}

impl FromStr for HostName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HostName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Lets a `HashSet<HostName>` be probed with the borrowed question name.
// Sound because the derived `Hash` hashes the inner `String` exactly as
// `str` hashes itself.
impl std::borrow::Borrow<str> for HostName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HostName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;

/// RFC 5321 path limit.
const MAX_EMAIL_LEN: usize = 254;

/// A syntactically valid email address. The address is trusted as supplied;
/// no ownership verification happens here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let candidate = raw.trim();
        if is_valid_email(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(AppError::Validation(format!(
                "'{raw}' is not a valid email address"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for EmailAddress {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        EmailAddress::parse(&raw).map_err(serde::de::Error::custom)
    }
}

fn is_valid_email(candidate: &str) -> bool {
    if candidate.is_empty() || candidate.len() > MAX_EMAIL_LEN {
        return false;
    }
    if candidate
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return false;
    }

    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs at least two labels, none empty, none edged by a hyphen.
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2
        && labels.iter().all(|label| {
            !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_addresses() {
        for addr in ["user@x.com", "first.last+tag@sub.example.org", "a@b.io"] {
            assert!(EmailAddress::parse(addr).is_ok(), "{addr} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for addr in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            "user@@example.com",
            "user@exa mple.com",
            "user@example..com",
            "user@-example.com",
            "user@example.com.",
        ] {
            assert!(
                EmailAddress::parse(addr).is_err(),
                "{addr:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let email = EmailAddress::parse("  user@x.com \n").unwrap();
        assert_eq!(email.as_str(), "user@x.com");
    }

    #[test]
    fn test_rejects_overlong_address() {
        let addr = format!("{}@example.com", "a".repeat(250));
        assert!(EmailAddress::parse(&addr).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<EmailAddress, _> = serde_json::from_str("\"user@x.com\"");
        assert!(ok.is_ok());
        let bad: Result<EmailAddress, _> = serde_json::from_str("\"not-an-email\"");
        assert!(bad.is_err());
    }
}

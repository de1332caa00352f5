// file: src/models/lookup.rs
// description: outcome of a single directory lookup
// reference: internal data structures

use serde::Serialize;
use std::fmt;

/// Value written in place of an address when a lookup yields nothing.
pub const NOT_FOUND: &str = "Not found";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "mail", rename_all = "snake_case")]
pub enum LookupResult {
    Found(String),
    NotFound,
}

impl LookupResult {
    /// Joins addresses with a newline, keeping their order.
    pub fn from_addresses<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = addresses
            .into_iter()
            .map(|a| a.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        if joined.is_empty() {
            Self::NotFound
        } else {
            Self::Found(joined)
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn as_field(&self) -> &str {
        match self {
            Self::Found(mail) => mail,
            Self::NotFound => NOT_FOUND,
        }
    }
}

impl fmt::Display for LookupResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_field())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_multiple_addresses_joined_in_order() {
        let result = LookupResult::from_addresses(["a@x.com", "b@x.com"]);
        assert_eq!(result, LookupResult::Found("a@x.com\nb@x.com".to_string()));
    }

    #[test]
    fn test_no_addresses_is_not_found() {
        let result = LookupResult::from_addresses(Vec::<String>::new());
        assert_eq!(result, LookupResult::NotFound);
        assert_eq!(result.as_field(), "Not found");
    }

    #[test]
    fn test_display_uses_field_value() {
        let found = LookupResult::Found("jane@ex.com".to_string());
        assert_eq!(found.to_string(), "jane@ex.com");
        assert_eq!(LookupResult::NotFound.to_string(), NOT_FOUND);
    }

    #[test]
    fn test_json_shape() {
        let found = serde_json::to_value(LookupResult::Found("a@x.com".to_string())).unwrap();
        assert_eq!(found["status"], "found");
        assert_eq!(found["mail"], "a@x.com");

        let missing = serde_json::to_value(LookupResult::NotFound).unwrap();
        assert_eq!(missing["status"], "not_found");
    }
}

// file: src/directory/response.rs
// description: json body returned by the directory's byjson endpoint

use crate::models::LookupResult;
use serde::Deserialize;
use serde_json::Value;

const MAIL_ATTRIBUTE: &str = "mail";

/// Only the path to the first entry is typed. Entries and attributes are kept
/// as raw json so unrelated attributes can carry any value shape.
#[derive(Debug, Deserialize)]
pub struct DirectoryResponse {
    #[serde(default)]
    search: Option<Search>,
}

#[derive(Debug, Deserialize)]
struct Search {
    #[serde(default)]
    entry: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct MailAttribute {
    #[serde(default)]
    value: Vec<String>,
}

/// Reads `search.entry[0].attribute[name == "mail"].value` from the response.
///
/// Fails only when the `mail` attribute itself is malformed.
pub fn extract_mail(response: &DirectoryResponse) -> Result<LookupResult, serde_json::Error> {
    let attribute = response
        .search
        .as_ref()
        .and_then(|search| search.entry.first())
        .and_then(|entry| entry.get("attribute"))
        .and_then(Value::as_array)
        .and_then(|attributes| {
            attributes.iter().find(|attribute| {
                attribute.get("name").and_then(Value::as_str) == Some(MAIL_ATTRIBUTE)
            })
        });

    match attribute {
        Some(attribute) => {
            let mail = MailAttribute::deserialize(attribute)?;
            Ok(LookupResult::from_addresses(&mail.value))
        }
        None => Ok(LookupResult::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extract(body: &str) -> LookupResult {
        let response: DirectoryResponse = serde_json::from_str(body).unwrap();
        extract_mail(&response).unwrap()
    }

    #[test]
    fn test_single_mail() {
        assert_eq!(
            extract(
                r#"{"search":{"entry":[{"attribute":[{"name":"mail","value":["jane@ex.com"]}]}]}}"#
            ),
            LookupResult::Found("jane@ex.com".to_string())
        );
    }

    #[test]
    fn test_multiple_mail_values() {
        assert_eq!(
            extract(
                r#"{"search":{"entry":[{"attribute":[
                    {"name":"cn","value":["Jane Doe"]},
                    {"name":"mail","value":["a@x.com","b@x.com"]}
                ]}]}}"#
            ),
            LookupResult::Found("a@x.com\nb@x.com".to_string())
        );
    }

    #[test]
    fn test_only_first_entry_is_used() {
        let body = r#"{"search":{"entry":[
            {"attribute":[{"name":"cn","value":["Jane Doe"]}]},
            {"attribute":[{"name":"mail","value":["other@ex.com"]}]}
        ]}}"#;
        assert_eq!(extract(body), LookupResult::NotFound);
    }

    #[test]
    fn test_missing_paths_are_not_found() {
        for body in [
            r#"{}"#,
            r#"{"search":null}"#,
            r#"{"search":{}}"#,
            r#"{"search":{"entry":[]}}"#,
            r#"{"search":{"entry":[{}]}}"#,
            r#"{"search":{"entry":[{"attribute":[]}]}}"#,
            r#"{"search":{"entry":[{"attribute":[{"name":"uid","value":["123"]}]}]}}"#,
            r#"{"search":{"entry":[{"attribute":"none"}]}}"#,
            r#"{"search":{"entry":[null]}}"#,
        ] {
            assert_eq!(extract(body), LookupResult::NotFound, "{body}");
        }
    }

    #[test]
    fn test_empty_mail_value_is_not_found() {
        assert_eq!(
            extract(r#"{"search":{"entry":[{"attribute":[{"name":"mail","value":[]}]}]}}"#),
            LookupResult::NotFound
        );
    }

    #[test]
    fn test_other_attributes_may_hold_any_value() {
        assert_eq!(
            extract(
                r#"{"search":{"entry":[{"attribute":[
                    {"name":"mail","value":["a@x.com"]},
                    {"name":"floor","value":[3]},
                    {"name":"manager","value":{"cn":"Boss"}},
                    {"value":["no name"]}
                ]}]}}"#
            ),
            LookupResult::Found("a@x.com".to_string())
        );
    }

    #[test]
    fn test_later_entries_are_not_validated() {
        assert_eq!(
            extract(
                r#"{"search":{"entry":[
                    {"attribute":[{"name":"mail","value":["a@x.com"]}]},
                    {"attribute":[{"value":[1,2,3]}]},
                    "garbage"
                ]}}"#
            ),
            LookupResult::Found("a@x.com".to_string())
        );
    }

    #[test]
    fn test_non_string_mail_value_rejected() {
        let response: DirectoryResponse = serde_json::from_str(
            r#"{"search":{"entry":[{"attribute":[{"name":"mail","value":[42]}]}]}}"#,
        )
        .unwrap();
        assert!(extract_mail(&response).is_err());
    }
}

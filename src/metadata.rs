use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;

/// Name of the descriptor entry stored in every extension archive
pub const INNER_FILE_NAME: &str = "plugin.json";

/// Descriptor text extracted from (or stored into) an extension archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPayload {
    pub payload: String,
}

/// The part of the descriptor the packager understands
#[derive(Debug, Deserialize)]
pub struct ExtensionMetadata {
    pub name: String,
}

impl ExtensionMetadata {
    /// Parse the descriptor, ignoring every field except `name`
    ///
    /// The descriptor must be a JSON object with a string `name`. The key is
    /// matched exactly; if it is repeated, the last value wins.
    pub fn parse(payload: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)?;
        if !value.is_object() {
            let err = serde_json::Error::custom("extension descriptor must be a JSON object");
            return Err(err.into());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// File name of the archive produced for this extension
    ///
    /// The name must be a single path component: separators and control
    /// characters are rejected. An empty name is accepted and yields `.zip`.
    pub fn archive_file_name(&self) -> Result<String> {
        let invalid = |reason| Error::InvalidName {
            name: self.name.clone(),
            reason,
        };

        if self.name.contains(['/', '\\']) {
            return Err(invalid("must not contain path separators"));
        }
        if self.name.chars().any(char::is_control) {
            return Err(invalid("must not contain control characters"));
        }

        Ok(format!("{}.zip", self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_other_fields() {
        let metadata =
            ExtensionMetadata::parse(r#"{"name": "custom.remote.python.demo", "version": "1.0"}"#)
                .unwrap();
        assert_eq!(metadata.name, "custom.remote.python.demo");
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        assert!(matches!(
            ExtensionMetadata::parse("not json"),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_parse_requires_string_name() {
        assert!(matches!(
            ExtensionMetadata::parse(r#"{"version": "1.0"}"#),
            Err(Error::Parse(_))
        ));
        assert!(matches!(
            ExtensionMetadata::parse(r#"{"name": 42}"#),
            Err(Error::Parse(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        for payload in [r#"["evil"]"#, r#""evil""#, "42", "null"] {
            assert!(
                matches!(ExtensionMetadata::parse(payload), Err(Error::Parse(_))),
                "{payload} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_name_is_required() {
        for payload in ["{}", r#"{"name": null}"#, r#"{"NAME": "x"}"#, r#"{"Name": "x"}"#] {
            assert!(
                matches!(ExtensionMetadata::parse(payload), Err(Error::Parse(_))),
                "{payload} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_duplicate_name_last_wins() {
        let metadata = ExtensionMetadata::parse(r#"{"name": "a", "name": "b"}"#).unwrap();
        assert_eq!(metadata.name, "b");
    }

    #[test]
    fn test_archive_file_name() {
        let metadata = ExtensionMetadata::parse(r#"{"name": "myext"}"#).unwrap();
        assert_eq!(metadata.archive_file_name().unwrap(), "myext.zip");
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let metadata = ExtensionMetadata::parse(r#"{"name": ""}"#).unwrap();
        assert_eq!(metadata.archive_file_name().unwrap(), ".zip");
    }

    #[test]
    fn test_unsafe_names_are_rejected() {
        for name in ["../evil", "a/b", r"a\b", "tab\there", "nul\u{0}"] {
            let metadata = ExtensionMetadata {
                name: name.to_string(),
            };
            assert!(
                matches!(metadata.archive_file_name(), Err(Error::InvalidName { .. })),
                "{name:?} should be rejected"
            );
        }
    }
}

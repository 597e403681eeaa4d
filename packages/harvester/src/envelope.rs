//! Validation of the XZuFi message envelope.
//!
//! Runs before any record is decoded. A failure here rejects the whole
//! message.

use roxmltree::Document;

use crate::config::{validate_version, VERSION_ATTRIBUTE};
use crate::error::{EnvelopeError, Result};
use crate::xml::find_children;

/// Local name of the message header.
pub const HEADER_TAG: &str = "nachrichtenkopf";

/// Validate the document-level invariants of a message.
///
/// Checks that the root declares a supported `xzufiVersion` and has exactly
/// one `nachrichtenkopf` child.
///
/// # Errors
/// Returns `HarvesterError::Envelope` with `UnsupportedVersion` or
/// `HeaderCardinalityViolation`.
pub fn validate_envelope(doc: &Document<'_>) -> Result<()> {
    let root = doc.root_element();

    validate_version(root.attribute(VERSION_ATTRIBUTE))?;

    let headers = find_children(root, HEADER_TAG).count();
    if headers != 1 {
        return Err(EnvelopeError::HeaderCardinalityViolation { found: headers }.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarvesterError;

    fn message(version: Option<&str>, body: &str) -> String {
        let version = version
            .map(|v| format!(r#" xzufiVersion="{v}""#))
            .unwrap_or_default();
        format!(
            r#"<xzufi:transfer.operation.040102 xmlns:xzufi="http://xoev.de/schemata/xzufi/2_2_0"{version}>{body}</xzufi:transfer.operation.040102>"#
        )
    }

    fn validate(xml: &str) -> Result<()> {
        let doc = Document::parse(xml).unwrap();
        validate_envelope(&doc)
    }

    #[test]
    fn test_accepts_both_version_spellings() {
        for version in ["2.2", "2.2.0"] {
            let xml = message(Some(version), "<xzufi:nachrichtenkopf/>");
            assert!(validate(&xml).is_ok(), "{version}");
        }
    }

    #[test]
    fn test_rejects_other_versions() {
        let xml = message(Some("2.1.0"), "<xzufi:nachrichtenkopf/>");
        assert!(matches!(
            validate(&xml),
            Err(HarvesterError::Envelope(EnvelopeError::UnsupportedVersion { found: Some(v) })) if v == "2.1.0"
        ));
    }

    #[test]
    fn test_rejects_missing_version() {
        let xml = message(None, "<xzufi:nachrichtenkopf/>");
        assert!(matches!(
            validate(&xml),
            Err(HarvesterError::Envelope(EnvelopeError::UnsupportedVersion { found: None }))
        ));
    }

    #[test]
    fn test_rejects_missing_header() {
        let xml = message(Some("2.2.0"), "<xzufi:schreibe/>");
        assert!(matches!(
            validate(&xml),
            Err(HarvesterError::Envelope(
                EnvelopeError::HeaderCardinalityViolation { found: 0 }
            ))
        ));
    }

    #[test]
    fn test_rejects_duplicate_header() {
        let xml = message(
            Some("2.2"),
            "<xzufi:nachrichtenkopf/><xzufi:nachrichtenkopf/>",
        );
        assert!(matches!(
            validate(&xml),
            Err(HarvesterError::Envelope(
                EnvelopeError::HeaderCardinalityViolation { found: 2 }
            ))
        ));
    }

    #[test]
    fn test_header_in_foreign_namespace_does_not_count() {
        let xml = message(Some("2.2"), r#"<nachrichtenkopf/>"#);
        assert!(validate(&xml).is_err());
    }

    #[test]
    fn test_version_checked_before_header() {
        let xml = message(Some("1.0"), "");
        assert!(matches!(
            validate(&xml),
            Err(HarvesterError::Envelope(EnvelopeError::UnsupportedVersion { .. }))
        ));
    }
}

//! Configuration constants and validation functions for the harvester.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{EnvelopeError, HarvesterError, Result};

/// Namespace of XZuFi 2.2 messages.
pub const XZUFI_NAMESPACE: &str = "http://xoev.de/schemata/xzufi/2_2_0";

/// Root attribute carrying the XZuFi format version.
pub const VERSION_ATTRIBUTE: &str = "xzufiVersion";

/// Accepted spellings of the supported format version.
pub const SUPPORTED_VERSIONS: [&str; 2] = ["2.2", "2.2.0"];

/// The only accepted online service link type (`listURI:code`).
pub const ONLINEDIENST_LINK_TYPE: &str = "urn:xoev-de:fim:codeliste:onlinedienstlinktyp:01";

/// LeiKa text module code of the service description (Leistungsbezeichnung).
pub const DESCRIPTION_TEXT_MODULE: &str = "02";

/// Default file the harvest command appends links to.
pub const DEFAULT_OUTPUT_FILE: &str = "onlineservicelinks.txt";

/// Index file pattern: `index*.txt`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static INDEX_FILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^index.*\.txt$").expect("valid regex"));

/// Validate the format version declared on the message root.
///
/// # Arguments
/// * `version` - Value of the `xzufiVersion` attribute, `None` if absent
///
/// # Returns
/// * `Ok(())` if the version is one of [`SUPPORTED_VERSIONS`]
/// * `Err(HarvesterError::Envelope)` otherwise
///
/// # Examples
/// ```
/// use xzufi_harvester::config::validate_version;
///
/// assert!(validate_version(Some("2.2")).is_ok());
/// assert!(validate_version(Some("2.2.0")).is_ok());
/// assert!(validate_version(Some("2.1.0")).is_err());
/// assert!(validate_version(None).is_err());
/// ```
pub fn validate_version(version: Option<&str>) -> Result<()> {
    match version {
        Some(v) if SUPPORTED_VERSIONS.contains(&v) => Ok(()),
        _ => Err(HarvesterError::Envelope(EnvelopeError::UnsupportedVersion {
            found: version.map(String::from),
        })),
    }
}

/// Check whether a file name denotes a document index.
///
/// # Examples
/// ```
/// use xzufi_harvester::config::is_index_file;
///
/// assert!(is_index_file("index.txt"));
/// assert!(is_index_file("index_0001.txt"));
/// assert!(!is_index_file("data.xml"));
/// ```
#[must_use]
pub fn is_index_file(file_name: &str) -> bool {
    INDEX_FILE_PATTERN.is_match(file_name)
}

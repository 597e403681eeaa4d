//! Main harvester service that ties all components together.

use std::fs;
use std::io;
use std::path::Path;

use roxmltree::Document;

use crate::error::Result;
use crate::types::Message;
use crate::walker::MessageWalker;

/// Parse, validate and decode one XZuFi message.
///
/// # Arguments
/// * `xml` - The complete message
///
/// # Returns
/// All records of the message in document order
pub fn parse_message(xml: &str) -> Result<Message> {
    let doc = Document::parse(xml)?;
    MessageWalker::new().walk(&doc)
}

/// Extract the online service link URLs of one message.
///
/// Either every link of the message is returned or an error; there is no
/// partial result.
///
/// # Examples
/// ```
/// use xzufi_harvester::extract_links;
///
/// let xml = r#"<xzufi:transfer.operation.040102
///         xmlns:xzufi="http://xoev.de/schemata/xzufi/2_2_0" xzufiVersion="2.2.0">
///     <xzufi:nachrichtenkopf/>
///     <xzufi:schreibe>
///         <xzufi:onlinedienst>
///             <xzufi:id>OD_1</xzufi:id>
///             <xzufi:bezeichnung>Wohngeld online</xzufi:bezeichnung>
///             <xzufi:link>
///                 <xzufi:typ listURI="urn:xoev-de:fim:codeliste:onlinedienstlinktyp"><code>01</code></xzufi:typ>
///                 <xzufi:link>https://example.org/wohngeld</xzufi:link>
///             </xzufi:link>
///         </xzufi:onlinedienst>
///     </xzufi:schreibe>
/// </xzufi:transfer.operation.040102>"#;
///
/// assert_eq!(extract_links(xml).unwrap(), vec!["https://example.org/wohngeld"]);
/// ```
pub fn extract_links(xml: &str) -> Result<Vec<String>> {
    let message = parse_message(xml)?;
    Ok(message.links().map(String::from).collect())
}

/// Read a message file into a string.
///
/// A leading byte order mark is dropped.
///
/// # Errors
/// `Io` with `InvalidData` if the file is not valid UTF-8. Text is never
/// decoded lossily.
pub fn read_document(path: &Path) -> Result<String> {
    let text = String::from_utf8(fs::read(path)?)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.utf8_error()))?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Read and decode one message file.
///
/// Errors are attributed to `path`.
pub fn parse_file(path: &Path) -> Result<Message> {
    let message = read_document(path)
        .and_then(|xml| parse_message(&xml))
        .map_err(|e| e.in_document(path))?;
    tracing::debug!(
        path = %path.display(),
        records = message.record_count(),
        "Decoded message"
    );
    Ok(message)
}

/// Read one message file and extract its link URLs.
///
/// Errors are attributed to `path`.
pub fn extract_file(path: &Path) -> Result<Vec<String>> {
    let links = parse_file(path)?
        .links()
        .map(String::from)
        .collect::<Vec<_>>();
    tracing::debug!(path = %path.display(), links = links.len(), "Extracted links");
    Ok(links)
}

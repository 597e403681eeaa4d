//! Online service (`onlinedienst`) and link (`link`) parsers.

use roxmltree::Node;

use super::{parse_identifier, read_code, record_context};
use crate::config::ONLINEDIENST_LINK_TYPE;
use crate::error::{HarvesterError, Result};
use crate::types::{LinkEntry, OnlineServiceRecord};
use crate::xml::{describe, find_children, get_raw_text, require_attribute, require_path};

/// Local name of an online service record.
pub const ONLINE_SERVICE_TAG: &str = "onlinedienst";

/// Decode an `onlinedienst` element including all of its links.
///
/// An online service without links is valid.
pub fn parse_online_service(node: Node<'_, '_>) -> Result<OnlineServiceRecord> {
    let id = parse_identifier(require_path(node, "id", &describe(node))?);
    let context = record_context(ONLINE_SERVICE_TAG, &id.id);

    let label = get_raw_text(require_path(node, "bezeichnung", &context)?);

    let links = find_children(node, "link")
        .map(|link| parse_link(link, &context))
        .collect::<Result<Vec<_>>>()?;

    Ok(OnlineServiceRecord { id, label, links })
}

/// Decode one `link` child of an online service.
///
/// The link type is the composite `listURI:code` of the `typ` child and must
/// equal [`ONLINEDIENST_LINK_TYPE`].
///
/// Neither the code nor the URL is trimmed.
///
/// # Errors
/// `UnexpectedLinkType` for any other link type.
pub fn parse_link(node: Node<'_, '_>, context: &str) -> Result<LinkEntry> {
    let link_type_node = require_path(node, "typ", context)?;
    let list_uri = require_attribute(link_type_node, "listURI")?;
    let code = read_code(link_type_node, context)?;

    let link_type = format!("{list_uri}:{code}");
    if link_type != ONLINEDIENST_LINK_TYPE {
        return Err(HarvesterError::UnexpectedLinkType(link_type));
    }

    let url = get_raw_text(require_path(node, "link", context)?);

    Ok(LinkEntry { link_type, url })
}

//! Identifier parser.

use roxmltree::Node;

use crate::types::Identifier;
use crate::xml::get_raw_text;

/// Decode a generic identifier element.
///
/// The `schemeAgencyID` and `schemeDataURI` attributes are copied when
/// present; their absence is not an error.
pub fn parse_identifier(node: Node<'_, '_>) -> Identifier {
    Identifier {
        id: get_raw_text(node),
        scheme_agency_id: node.attribute("schemeAgencyID").map(String::from),
        scheme_data_uri: node.attribute("schemeDataURI").map(String::from),
    }
}

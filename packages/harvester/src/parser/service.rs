//! Service record (`leistung`) parser.

use roxmltree::Node;

use super::{parse_identifier, read_code, record_context};
use crate::config::DESCRIPTION_TEXT_MODULE;
use crate::error::{HarvesterError, Result};
use crate::types::ServiceRecord;
use crate::xml::{find_children, get_raw_text, require_path};

/// Local name of a service record.
pub const SERVICE_TAG: &str = "leistung";

/// Decode a `leistung` element.
///
/// The description is the `inhalt` of the single `modulText` whose
/// `leikaTextmodul` code is `02`.
///
/// # Errors
/// `Cardinality` if zero or several description modules are present,
/// `MissingElement` if a required child is absent.
pub fn parse_service(node: Node<'_, '_>) -> Result<ServiceRecord> {
    let id = parse_identifier(require_path(node, "id", "<leistung>")?);
    let context = record_context(SERVICE_TAG, &id.id);

    let leika_id = read_code(require_path(node, "referenzLeiKa", &context)?, &context)?;

    let mut descriptions = Vec::new();
    for module in find_children(node, "modulText") {
        let code = read_code(require_path(module, "leikaTextmodul", &context)?, &context)?;
        if code == DESCRIPTION_TEXT_MODULE {
            descriptions.push(module);
        }
    }

    let description = match descriptions.as_slice() {
        [module] => get_raw_text(require_path(*module, "inhalt", &context)?),
        _ => {
            return Err(HarvesterError::Cardinality {
                element: format!("modulText (leikaTextmodul {DESCRIPTION_TEXT_MODULE})"),
                context,
                found: descriptions.len(),
            })
        }
    };

    Ok(ServiceRecord {
        id,
        leika_id,
        description,
    })
}

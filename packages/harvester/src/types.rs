//! Core data types for the harvester.
//!
//! These types represent the XZuFi records decoded from a message. They are
//! plain values: produced once per parse and never mutated afterwards.

use serde::Serialize;

/// A generic XZuFi identifier (`xzufi:Identifikator`).
///
/// The scheme attributes are only present when the source element carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    /// Identifier text.
    pub id: String,

    /// Agency that issued the identifier (`schemeAgencyID`).
    #[serde(rename = "schemeAgencyID", skip_serializing_if = "Option::is_none")]
    pub scheme_agency_id: Option<String>,

    /// URI of the identifier scheme (`schemeDataURI`).
    #[serde(rename = "schemeDataURI", skip_serializing_if = "Option::is_none")]
    pub scheme_data_uri: Option<String>,
}

impl Identifier {
    /// Create an identifier without scheme attributes.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            scheme_agency_id: None,
            scheme_data_uri: None,
        }
    }

    /// Set the issuing agency.
    #[must_use]
    pub fn with_scheme_agency_id(mut self, agency: impl Into<String>) -> Self {
        self.scheme_agency_id = Some(agency.into());
        self
    }

    /// Set the scheme data URI.
    #[must_use]
    pub fn with_scheme_data_uri(mut self, uri: impl Into<String>) -> Self {
        self.scheme_data_uri = Some(uri.into());
        self
    }
}

/// A described administrative service (`Leistung`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceRecord {
    pub id: Identifier,

    /// LeiKa catalogue key (`referenzLeiKa/code`).
    pub leika_id: String,

    /// Service name, taken from the text module with code `02`.
    pub description: String,
}

/// Binding of one service to the regions an organizational unit serves it in
/// (`Zustaendigkeit`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompetencyAssignment {
    pub service_id: Identifier,

    /// Region identifiers in document order, duplicates kept.
    pub region_ids: Vec<Identifier>,
}

/// An administrative body (`Organisationseinheit`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationalUnit {
    /// Identifier; `scheme_agency_id` is always present.
    pub id: Identifier,
    pub name: String,
    pub competencies: Vec<CompetencyAssignment>,
}

/// A typed link to the entry point of an online service (`OnlinedienstLink`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    /// Composite `listURI:code` of the link type.
    #[serde(rename = "type")]
    pub link_type: String,
    pub url: String,
}

/// A digital service descriptor (`OnlinedienstErweitert`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnlineServiceRecord {
    pub id: Identifier,
    pub label: String,
    pub links: Vec<LinkEntry>,
}

impl OnlineServiceRecord {
    /// Link URLs in document order.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.links.iter().map(|link| link.url.as_str())
    }
}

/// A specialization (`Spezialisierung`).
///
/// Recognized but not decoded; the element is accepted without inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpecializationRecord {}

/// All records decoded from one message, each list in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    pub services: Vec<ServiceRecord>,
    pub organizational_units: Vec<OrganizationalUnit>,
    pub online_services: Vec<OnlineServiceRecord>,
    pub specializations: Vec<SpecializationRecord>,
}

impl Message {
    /// Link URLs of all online services, in document order.
    pub fn links(&self) -> impl Iterator<Item = &str> {
        self.online_services.iter().flat_map(|service| service.urls())
    }

    /// Total number of decoded records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.services.len()
            + self.organizational_units.len()
            + self.online_services.len()
            + self.specializations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn online_service(id: &str, urls: &[&str]) -> OnlineServiceRecord {
        OnlineServiceRecord {
            id: Identifier::new(id),
            label: format!("Dienst {id}"),
            links: urls
                .iter()
                .map(|url| LinkEntry {
                    link_type: crate::config::ONLINEDIENST_LINK_TYPE.to_string(),
                    url: (*url).to_string(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_identifier_builder() {
        let id = Identifier::new("L100")
            .with_scheme_agency_id("S1")
            .with_scheme_data_uri("urn:x");

        assert_eq!(id.id, "L100");
        assert_eq!(id.scheme_agency_id.as_deref(), Some("S1"));
        assert_eq!(id.scheme_data_uri.as_deref(), Some("urn:x"));
    }

    #[test]
    fn test_message_links_order() {
        let message = Message {
            online_services: vec![
                online_service("1", &["https://a", "https://b"]),
                online_service("2", &[]),
                online_service("3", &["https://c"]),
            ],
            ..Message::default()
        };

        let links: Vec<_> = message.links().collect();
        assert_eq!(links, vec!["https://a", "https://b", "https://c"]);
        assert_eq!(message.record_count(), 3);
    }

    #[test]
    fn test_identifier_serialization_omits_absent_attributes() {
        let yaml = serde_yaml_ng::to_string(&Identifier::new("X1")).unwrap();
        assert_eq!(yaml.trim(), "id: X1");

        let yaml =
            serde_yaml_ng::to_string(&Identifier::new("X1").with_scheme_agency_id("S1")).unwrap();
        assert!(yaml.contains("schemeAgencyID: S1"));
    }
}

//! Message walker: classifies the elements of a validated message and
//! dispatches them to the record parsers.
//!
//! The schema is treated as closed. Any element the walker does not know,
//! at top level or inside a `schreibe` block, aborts the whole message.

use roxmltree::{Document, Node};

use crate::config::XZUFI_NAMESPACE;
use crate::envelope::{validate_envelope, HEADER_TAG};
use crate::error::{HarvesterError, Result};
use crate::parser::{
    parse_online_service, parse_organizational_unit, parse_service, parse_specialization,
    ONLINE_SERVICE_TAG, ORGANIZATIONAL_UNIT_TAG, SERVICE_TAG, SPECIALIZATION_TAG,
};
use crate::types::Message;
use crate::xml::{describe, element_children, get_tag_name, qualified_name};

/// Local name of a write block.
pub const WRITE_TAG: &str = "schreibe";

/// Kinds of elements directly below the message root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopLevelKind {
    /// `nachrichtenkopf`, already checked by the envelope validator.
    Header,
    /// `transaktionID`.
    TransactionId,
    /// `transaktionPosition`.
    TransactionPosition,
    /// `schreibe`, holding the records.
    Write,
    Unknown,
}

/// Kinds of elements inside a `schreibe` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Service,
    Specialization,
    OrganizationalUnit,
    OnlineService,
    Unknown,
}

/// Local name of an element in the XZuFi namespace, `None` for any other.
fn xzufi_local_name<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    (node.tag_name().namespace() == Some(XZUFI_NAMESPACE)).then(|| get_tag_name(node))
}

/// Classify a child of the message root.
pub fn classify_top_level(node: Node<'_, '_>) -> TopLevelKind {
    match xzufi_local_name(node) {
        Some(HEADER_TAG) => TopLevelKind::Header,
        Some("transaktionID") => TopLevelKind::TransactionId,
        Some("transaktionPosition") => TopLevelKind::TransactionPosition,
        Some(WRITE_TAG) => TopLevelKind::Write,
        _ => TopLevelKind::Unknown,
    }
}

/// Classify a child of a `schreibe` block.
pub fn classify_entity(node: Node<'_, '_>) -> EntityKind {
    match xzufi_local_name(node) {
        Some(SERVICE_TAG) => EntityKind::Service,
        Some(SPECIALIZATION_TAG) => EntityKind::Specialization,
        Some(ORGANIZATIONAL_UNIT_TAG) => EntityKind::OrganizationalUnit,
        Some(ONLINE_SERVICE_TAG) => EntityKind::OnlineService,
        _ => EntityKind::Unknown,
    }
}

/// Progress of a walk over one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// Nothing checked yet.
    AtEnvelope,
    /// Envelope valid, children being dispatched.
    ScanningChildren,
    /// Every element was decoded.
    Done,
    /// The message was rejected.
    Fatal,
}

/// Walks one message at a time and collects its records.
#[derive(Debug)]
pub struct MessageWalker {
    state: WalkState,
}

impl MessageWalker {
    /// Create a walker positioned at the envelope.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: WalkState::AtEnvelope,
        }
    }

    /// Current state of the walker.
    #[must_use]
    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Validate and decode a message.
    ///
    /// Returns every record in document order. On error nothing is returned
    /// and the walker ends in [`WalkState::Fatal`].
    ///
    /// # Errors
    /// Envelope violations, record parse errors, and `UnknownElement` for
    /// any element outside the known schema.
    pub fn walk(&mut self, doc: &Document<'_>) -> Result<Message> {
        self.state = WalkState::AtEnvelope;

        let result = self.scan(doc);
        self.state = if result.is_ok() {
            WalkState::Done
        } else {
            WalkState::Fatal
        };
        result
    }

    fn scan(&mut self, doc: &Document<'_>) -> Result<Message> {
        validate_envelope(doc)?;
        self.state = WalkState::ScanningChildren;

        let root = doc.root_element();
        let mut message = Message::default();

        for child in element_children(root) {
            match classify_top_level(child) {
                TopLevelKind::Header
                | TopLevelKind::TransactionId
                | TopLevelKind::TransactionPosition => {}
                TopLevelKind::Write => walk_write_block(child, &mut message)?,
                TopLevelKind::Unknown => return Err(unknown_element(child)),
            }
        }

        Ok(message)
    }
}

impl Default for MessageWalker {
    fn default() -> Self {
        Self::new()
    }
}

fn walk_write_block(block: Node<'_, '_>, message: &mut Message) -> Result<()> {
    for record in element_children(block) {
        let kind = classify_entity(record);
        tracing::debug!(?kind, element = get_tag_name(record), "Dispatching record");

        match kind {
            EntityKind::Service => message.services.push(parse_service(record)?),
            EntityKind::Specialization => {
                message.specializations.push(parse_specialization(record));
            }
            EntityKind::OrganizationalUnit => {
                message
                    .organizational_units
                    .push(parse_organizational_unit(record)?);
            }
            EntityKind::OnlineService => {
                message.online_services.push(parse_online_service(record)?);
            }
            EntityKind::Unknown => return Err(unknown_element(record)),
        }
    }
    Ok(())
}

fn unknown_element(node: Node<'_, '_>) -> HarvesterError {
    HarvesterError::UnknownElement {
        tag_name: qualified_name(node),
        context: node.parent_element().map(describe),
    }
}

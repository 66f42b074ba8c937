//! Commit Message Parser
//!
//! Structural matching only: decides whether a message has the
//! `type(scope)!: description` shape and extracts its fields.
//! Whether those fields are acceptable is the validator's business.

pub mod grammar;
pub mod header;

pub use grammar::build_pattern;
pub use header::Header;

use grammar::CONVENTIONAL_COMMIT;

/// Match a whole commit message against the grammar
///
/// Returns `None` when the message does not have the required shape.
pub fn parse_header(message: &str) -> Option<Header<'_>> {
    log::trace!("Matching {} bytes against commit grammar", message.len());

    let header = CONVENTIONAL_COMMIT
        .captures(message)
        .and_then(|caps| Header::from_captures(&caps));

    match &header {
        Some(h) => log::debug!(
            "Parsed header: type={:?} scope={:?} breaking={} summary={:?}",
            h.commit_type,
            h.scope,
            h.breaking,
            h.summary()
        ),
        None => log::debug!("Message does not match the commit grammar"),
    }

    header
}

//! Registry of diagnostic codes emitted by `bundle-dts`.
//!
//! Codes are stable string identifiers so downstream tooling and tests can
//! match on them without parsing messages.

/// An export resolved to a symbol with no declarations; the export is
/// skipped. The message names the symbol.
pub const MISSING_DECLARATION: &str = "COLLECT0001";

/// An export's original declaration order could not be restored from the
/// entry file; ordering degrades to an arbitrary tie-break for that symbol.
/// The message names the symbol.
pub const MISSING_EXPORT_POSITION: &str = "COLLECT0002";

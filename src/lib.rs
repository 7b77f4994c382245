//! Symbol collection for bundling TypeScript declarations.
//!
//! Given one entry module and a type-checking oracle over a whole program,
//! [`SymbolCollector::collect`] reconstructs the closed, deduplicated,
//! order-stable symbol set a single bundled declaration output must contain:
//! the entry module's exports in original source order, the type-level
//! reference tree each export's declarations reach, the external-library
//! star exports to pass through untouched, and the global-scope names a
//! later renaming stage must avoid. Rendering the result to text is a
//! separate concern.
//!
//! The oracle is consumed through the [`Checker`] capability trait, so the
//! collector can be driven by an in-memory fixture graph in tests instead of
//! a live compiler.

mod api;
mod checker;
pub mod codes;
mod collect;
mod diagnostic;
mod error;

pub use api::{
  DeclId, ExportEntry, FileId, Mention, MentionKind, NodeId, Reference, ResolvedModule, SymbolId,
};
pub use checker::Checker;
pub use collect::SymbolCollector;
pub use diagnostic::{Diagnostic, Severity};
pub use error::CollectError;

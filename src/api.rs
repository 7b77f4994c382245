//! Stable identifiers and the public data model of the collector.
//!
//! All IDs are cheap `Copy` newtypes supplied by the [`Checker`](crate::Checker)
//! and remain stable within the lifetime of one program snapshot. The core
//! never mints symbol identities of its own; two symbols denote the same
//! program entity iff their IDs are equal.

use serde::Deserialize;
use serde::Serialize;

/// Opaque identity of a named program entity (a declared type, value, or
/// namespace), as assigned by the checker.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// Handle to one declaration (source location) of a symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DeclId(pub u32);

/// Handle to a syntax node inside a declaration.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Stable identifier for a file in the program.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(pub u32);

/// Type-level mention shapes recognized inside declaration syntax.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MentionKind {
  /// A direct type reference.
  TypeReference,
  /// An `extends`/`implements` heritage clause.
  Heritage,
  /// A computed member name expression.
  ComputedName,
  /// A `typeof`-of-value query.
  TypeQuery,
  /// An inline module-qualified type mention with no separate identifier
  /// target.
  ImportType,
}

/// A recorded mention site inside a declaration.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Mention {
  /// An identifier node, resolvable to a symbol through the checker.
  Ident(NodeId),
  /// An inline module-qualified type mention, recorded verbatim; it names a
  /// module path rather than a symbol to recurse into.
  ImportType(NodeId),
}

impl Mention {
  /// The underlying syntax node of the mention.
  pub fn node(&self) -> NodeId {
    match self {
      Mention::Ident(node) => *node,
      Mention::ImportType(node) => *node,
    }
  }
}

/// A type-level mention of one symbol inside another's declaration.
///
/// Symbols with multiple declarations can have different references per
/// declaration, so each reference tracks the declaration it was found in.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Reference {
  /// Index into the owning symbol's declaration list.
  pub decl_index: usize,
  /// The mention site.
  pub mention: Mention,
  /// References found transitively inside the mentioned symbol's own
  /// declarations. Empty for cycles and for mentions that do not resolve.
  pub subrefs: Vec<Reference>,
}

/// Value of the export map: the terminal symbol behind an export, with the
/// references its declarations make.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ExportEntry {
  /// Terminal (non-alias) symbol the export resolves to.
  pub original: SymbolId,
  /// Top-level references found in the terminal symbol's declarations.
  pub refs: Vec<Reference>,
}

/// Resolution of a module specifier, as answered by the checker.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ResolvedModule {
  /// File the specifier resolved to.
  pub file: FileId,
  /// Module symbol of that file.
  pub module: SymbolId,
  /// Whether the module lies outside the project.
  pub is_external: bool,
}

//! The type-checking oracle consumed by the collector.

use crate::api::DeclId;
use crate::api::FileId;
use crate::api::MentionKind;
use crate::api::NodeId;
use crate::api::ResolvedModule;
use crate::api::SymbolId;

/// Type-checking oracle for [`SymbolCollector`](crate::SymbolCollector).
///
/// The collector consumes the checker purely through these queries and never
/// re-implements them; implementations are expected to be deterministic,
/// synchronous, and side-effect-free for the lifetime of one program
/// snapshot. Tests drive the collector against an in-memory fixture
/// implementation built from literal graphs.
pub trait Checker {
  /// Name of a symbol, used in diagnostics and name indexes.
  fn symbol_name(&self, symbol: SymbolId) -> String;

  /// Whether the symbol stands for another symbol (e.g. a re-export
  /// binding).
  fn is_alias(&self, symbol: SymbolId) -> bool;

  /// Terminal symbol behind an alias. Resolving an already-terminal symbol
  /// returns it unchanged.
  fn resolve_alias(&self, symbol: SymbolId) -> SymbolId;

  /// All exported symbols of a module, star-derived exports last (the
  /// checker's natural order, which the collector re-sorts).
  fn exports_of(&self, module: SymbolId) -> Vec<SymbolId>;

  /// The module's own export table, excluding the internal star-export
  /// marker. Used to restore declaration order for directly declared or
  /// aliased exports.
  fn own_exports_of(&self, module: SymbolId) -> Vec<SymbolId>;

  /// Whether the module symbol is the implicit global scope itself.
  fn is_global_scope(&self, module: SymbolId) -> bool;

  /// Module symbol of a file, if the file is a module.
  fn module_symbol_of_file(&self, file: FileId) -> Option<SymbolId>;

  /// Every symbol visible in scope at the start of a file, with unrestricted
  /// meaning.
  fn symbols_in_scope(&self, file: FileId) -> Vec<SymbolId>;

  /// Declarations of a symbol. Merged and overloaded declarations of one
  /// symbol always share a source file.
  fn declarations_of(&self, symbol: SymbolId) -> Vec<DeclId>;

  /// File containing a declaration.
  fn decl_file(&self, decl: DeclId) -> FileId;

  /// Text offset of a declaration's start.
  fn decl_start(&self, decl: DeclId) -> u32;

  /// Whether the declaration is an entire source file.
  fn decl_is_source_file(&self, decl: DeclId) -> bool;

  /// All descendant syntax nodes of a declaration, in preorder. Mentions may
  /// be nested arbitrarily deep inside type syntax, so this must cover every
  /// depth, not only direct children.
  fn decl_descendants(&self, decl: DeclId) -> Vec<NodeId>;

  /// Classify a node as one of the recognized mention shapes.
  fn classify_node(&self, node: NodeId) -> Option<MentionKind>;

  /// First identifier child of a mention node.
  fn identifier_of(&self, node: NodeId) -> Option<NodeId>;

  /// Symbol an identifier node resolves to.
  fn symbol_at(&self, node: NodeId) -> Option<SymbolId>;

  /// Wildcard re-export declarations of a module.
  fn star_reexports_of(&self, module: SymbolId) -> Vec<DeclId>;

  /// Module specifier text of a wildcard re-export declaration.
  fn module_specifier(&self, decl: DeclId) -> Option<String>;

  /// Resolve a module specifier relative to `from`.
  fn resolve_module(&self, from: FileId, specifier: &str) -> Option<ResolvedModule>;

  /// Whether the symbol is a real importable value module.
  fn is_value_module(&self, module: SymbolId) -> bool;

  /// Whether the file comes from an external library.
  fn is_external_file(&self, file: FileId) -> bool;

  /// Whether the file is part of the built-in default library.
  fn is_default_lib_file(&self, file: FileId) -> bool;

  /// Every source file of the program, in program order.
  fn source_files(&self) -> Vec<FileId>;

  /// Whether the file opts out of the implicit default library.
  fn file_has_no_default_lib(&self, file: FileId) -> bool;

  /// Whether the file is treated as a module (rather than a script
  /// contributing to the global scope).
  fn file_is_module(&self, file: FileId) -> bool;
}

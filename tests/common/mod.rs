//! In-memory checker fixture built from literal symbol graphs, so collector
//! behavior can be asserted without a live compiler.

#![allow(dead_code)]

use bundle_dts::Checker;
use bundle_dts::DeclId;
use bundle_dts::FileId;
use bundle_dts::MentionKind;
use bundle_dts::NodeId;
use bundle_dts::ResolvedModule;
use bundle_dts::SymbolId;
use std::collections::HashMap;

#[derive(Default)]
struct SymbolData {
  name: String,
  alias_of: Option<SymbolId>,
  decls: Vec<DeclId>,
  exports: Vec<SymbolId>,
  own_exports: Vec<SymbolId>,
  star_reexports: Vec<DeclId>,
  is_global_scope: bool,
  is_value_module: bool,
}

struct DeclData {
  file: FileId,
  start: u32,
  is_source_file: bool,
  descendants: Vec<NodeId>,
  specifier: Option<String>,
}

#[derive(Default)]
struct NodeData {
  kind: Option<MentionKind>,
  identifier: Option<NodeId>,
  symbol: Option<SymbolId>,
}

#[derive(Default)]
struct FileData {
  is_external: bool,
  is_default_lib: bool,
  no_default_lib: bool,
  is_module: bool,
  module_symbol: Option<SymbolId>,
  scope_symbols: Vec<SymbolId>,
}

/// Builder-style fake oracle. IDs index straight into the backing vectors.
#[derive(Default)]
pub struct Fixture {
  symbols: Vec<SymbolData>,
  decls: Vec<DeclData>,
  nodes: Vec<NodeData>,
  files: Vec<FileData>,
  resolutions: HashMap<(FileId, String), ResolvedModule>,
}

impl Fixture {
  pub fn new() -> Fixture {
    Fixture::default()
  }

  /// A project-internal module file.
  pub fn file(&mut self) -> FileId {
    self.files.push(FileData {
      is_module: true,
      ..FileData::default()
    });
    FileId(self.files.len() as u32 - 1)
  }

  pub fn mark_external(&mut self, file: FileId) {
    self.file_mut(file).is_external = true;
  }

  pub fn mark_default_lib(&mut self, file: FileId) {
    self.file_mut(file).is_default_lib = true;
  }

  pub fn mark_no_default_lib(&mut self, file: FileId) {
    self.file_mut(file).no_default_lib = true;
  }

  pub fn mark_script(&mut self, file: FileId) {
    self.file_mut(file).is_module = false;
  }

  pub fn set_scope_symbols(&mut self, file: FileId, symbols: &[SymbolId]) {
    self.file_mut(file).scope_symbols = symbols.to_vec();
  }

  /// Module symbol of a file. Value-module by default.
  pub fn module(&mut self, file: FileId, name: &str) -> SymbolId {
    let symbol = self.symbol(name);
    self.symbol_mut(symbol).is_value_module = true;
    self.file_mut(file).module_symbol = Some(symbol);
    symbol
  }

  pub fn mark_global_scope(&mut self, module: SymbolId) {
    self.symbol_mut(module).is_global_scope = true;
  }

  pub fn set_value_module(&mut self, module: SymbolId, is_value_module: bool) {
    self.symbol_mut(module).is_value_module = is_value_module;
  }

  pub fn symbol(&mut self, name: &str) -> SymbolId {
    self.symbols.push(SymbolData {
      name: name.to_string(),
      ..SymbolData::default()
    });
    SymbolId(self.symbols.len() as u32 - 1)
  }

  pub fn alias(&mut self, name: &str, target: SymbolId) -> SymbolId {
    let symbol = self.symbol(name);
    self.symbol_mut(symbol).alias_of = Some(target);
    symbol
  }

  pub fn decl(&mut self, symbol: SymbolId, file: FileId, start: u32) -> DeclId {
    let decl = self.push_decl(DeclData {
      file,
      start,
      is_source_file: false,
      descendants: Vec::new(),
      specifier: None,
    });
    self.symbol_mut(symbol).decls.push(decl);
    decl
  }

  /// A declaration that is an entire source file.
  pub fn source_file_decl(&mut self, symbol: SymbolId, file: FileId) -> DeclId {
    let decl = self.decl(symbol, file, 0);
    self.decl_mut(decl).is_source_file = true;
    decl
  }

  /// A mention node with an identifier child resolving to `target` (or to
  /// nothing when `target` is `None`).
  pub fn mention(&mut self, decl: DeclId, kind: MentionKind, target: Option<SymbolId>) -> NodeId {
    let ident = self.push_node(NodeData {
      symbol: target,
      ..NodeData::default()
    });
    let node = self.push_node(NodeData {
      kind: Some(kind),
      identifier: Some(ident),
      ..NodeData::default()
    });
    self.decl_mut(decl).descendants.push(node);
    node
  }

  /// A mention node with no identifier child.
  pub fn bare_mention(&mut self, decl: DeclId, kind: MentionKind) -> NodeId {
    let node = self.push_node(NodeData {
      kind: Some(kind),
      ..NodeData::default()
    });
    self.decl_mut(decl).descendants.push(node);
    node
  }

  /// An inline module-qualified type mention.
  pub fn import_type_mention(&mut self, decl: DeclId) -> NodeId {
    self.bare_mention(decl, MentionKind::ImportType)
  }

  pub fn set_exports(&mut self, module: SymbolId, exports: &[SymbolId]) {
    self.symbol_mut(module).exports = exports.to_vec();
  }

  pub fn set_own_exports(&mut self, module: SymbolId, own_exports: &[SymbolId]) {
    self.symbol_mut(module).own_exports = own_exports.to_vec();
  }

  /// A wildcard re-export statement of `module`, located in `file`.
  pub fn star_reexport(
    &mut self,
    module: SymbolId,
    file: FileId,
    start: u32,
    specifier: &str,
  ) -> DeclId {
    let decl = self.push_decl(DeclData {
      file,
      start,
      is_source_file: false,
      descendants: Vec::new(),
      specifier: Some(specifier.to_string()),
    });
    self.symbol_mut(module).star_reexports.push(decl);
    decl
  }

  /// A wildcard re-export whose specifier the oracle cannot extract.
  pub fn star_reexport_no_specifier(&mut self, module: SymbolId, file: FileId, start: u32) -> DeclId {
    let decl = self.push_decl(DeclData {
      file,
      start,
      is_source_file: false,
      descendants: Vec::new(),
      specifier: None,
    });
    self.symbol_mut(module).star_reexports.push(decl);
    decl
  }

  /// Make `specifier` resolve from `from` to `target`'s module symbol.
  pub fn link(&mut self, from: FileId, specifier: &str, target: FileId) {
    let module = self.files[target.0 as usize]
      .module_symbol
      .expect("link target must have a module symbol");
    let resolved = ResolvedModule {
      file: target,
      module,
      is_external: self.files[target.0 as usize].is_external,
    };
    self.resolutions.insert((from, specifier.to_string()), resolved);
  }

  fn push_decl(&mut self, data: DeclData) -> DeclId {
    self.decls.push(data);
    DeclId(self.decls.len() as u32 - 1)
  }

  fn push_node(&mut self, data: NodeData) -> NodeId {
    self.nodes.push(data);
    NodeId(self.nodes.len() as u32 - 1)
  }

  fn symbol_mut(&mut self, symbol: SymbolId) -> &mut SymbolData {
    &mut self.symbols[symbol.0 as usize]
  }

  fn decl_mut(&mut self, decl: DeclId) -> &mut DeclData {
    &mut self.decls[decl.0 as usize]
  }

  fn file_mut(&mut self, file: FileId) -> &mut FileData {
    &mut self.files[file.0 as usize]
  }

  fn sym(&self, symbol: SymbolId) -> &SymbolData {
    &self.symbols[symbol.0 as usize]
  }

  fn d(&self, decl: DeclId) -> &DeclData {
    &self.decls[decl.0 as usize]
  }

  fn n(&self, node: NodeId) -> &NodeData {
    &self.nodes[node.0 as usize]
  }

  fn f(&self, file: FileId) -> &FileData {
    &self.files[file.0 as usize]
  }
}

impl Checker for Fixture {
  fn symbol_name(&self, symbol: SymbolId) -> String {
    self.sym(symbol).name.clone()
  }

  fn is_alias(&self, symbol: SymbolId) -> bool {
    self.sym(symbol).alias_of.is_some()
  }

  fn resolve_alias(&self, mut symbol: SymbolId) -> SymbolId {
    while let Some(target) = self.sym(symbol).alias_of {
      symbol = target;
    }
    symbol
  }

  fn exports_of(&self, module: SymbolId) -> Vec<SymbolId> {
    self.sym(module).exports.clone()
  }

  fn own_exports_of(&self, module: SymbolId) -> Vec<SymbolId> {
    self.sym(module).own_exports.clone()
  }

  fn is_global_scope(&self, module: SymbolId) -> bool {
    self.sym(module).is_global_scope
  }

  fn module_symbol_of_file(&self, file: FileId) -> Option<SymbolId> {
    self.f(file).module_symbol
  }

  fn symbols_in_scope(&self, file: FileId) -> Vec<SymbolId> {
    self.f(file).scope_symbols.clone()
  }

  fn declarations_of(&self, symbol: SymbolId) -> Vec<DeclId> {
    self.sym(symbol).decls.clone()
  }

  fn decl_file(&self, decl: DeclId) -> FileId {
    self.d(decl).file
  }

  fn decl_start(&self, decl: DeclId) -> u32 {
    self.d(decl).start
  }

  fn decl_is_source_file(&self, decl: DeclId) -> bool {
    self.d(decl).is_source_file
  }

  fn decl_descendants(&self, decl: DeclId) -> Vec<NodeId> {
    self.d(decl).descendants.clone()
  }

  fn classify_node(&self, node: NodeId) -> Option<MentionKind> {
    self.n(node).kind
  }

  fn identifier_of(&self, node: NodeId) -> Option<NodeId> {
    self.n(node).identifier
  }

  fn symbol_at(&self, node: NodeId) -> Option<SymbolId> {
    self.n(node).symbol
  }

  fn star_reexports_of(&self, module: SymbolId) -> Vec<DeclId> {
    self.sym(module).star_reexports.clone()
  }

  fn module_specifier(&self, decl: DeclId) -> Option<String> {
    self.d(decl).specifier.clone()
  }

  fn resolve_module(&self, from: FileId, specifier: &str) -> Option<ResolvedModule> {
    self.resolutions.get(&(from, specifier.to_string())).copied()
  }

  fn is_value_module(&self, module: SymbolId) -> bool {
    self.sym(module).is_value_module
  }

  fn is_external_file(&self, file: FileId) -> bool {
    self.f(file).is_external
  }

  fn is_default_lib_file(&self, file: FileId) -> bool {
    self.f(file).is_default_lib
  }

  fn source_files(&self) -> Vec<FileId> {
    (0..self.files.len() as u32).map(FileId).collect()
  }

  fn file_has_no_default_lib(&self, file: FileId) -> bool {
    self.f(file).no_default_lib
  }

  fn file_is_module(&self, file: FileId) -> bool {
    self.f(file).is_module
  }
}

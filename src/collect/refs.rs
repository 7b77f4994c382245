use super::*;

impl<'a, C: Checker> CollectPass<'a, C> {
  /// Top-level references of a terminal symbol: every type-level mention in
  /// its declarations, each with transitively discovered subreferences.
  pub(super) fn references_of(&self, symbol: SymbolId) -> Vec<Reference> {
    // The in-progress set spans one top-level computation, so reference
    // cycles through any number of intermediate symbols terminate, not just
    // direct self-reference.
    let mut in_progress = HashSet::new();
    self.collect_references(symbol, &mut in_progress)
  }

  fn collect_references(
    &self,
    symbol: SymbolId,
    in_progress: &mut HashSet<SymbolId>,
  ) -> Vec<Reference> {
    let decls = self.checker.declarations_of(symbol);
    // The first declaration decides locality: merged and overloaded
    // declarations of one symbol share a source file.
    let Some(first) = decls.first() else {
      return Vec::new();
    };
    let file = self.checker.decl_file(*first);
    // External declarations are never expanded.
    if self.checker.is_external_file(file) || self.checker.is_default_lib_file(file) {
      return Vec::new();
    }

    in_progress.insert(symbol);
    let mut refs = Vec::new();
    for (decl_index, decl) in decls.iter().enumerate() {
      if self.checker.decl_is_source_file(*decl) {
        continue;
      }
      for node in self.checker.decl_descendants(*decl) {
        let Some(kind) = self.checker.classify_node(node) else {
          continue;
        };
        if kind == MentionKind::ImportType {
          // Denotes a module path, not a symbol to recurse into.
          refs.push(Reference {
            decl_index,
            mention: Mention::ImportType(node),
            subrefs: Vec::new(),
          });
          continue;
        }
        let Some(ident) = self.checker.identifier_of(node) else {
          continue;
        };
        let subrefs = self.subreferences(symbol, ident, in_progress);
        refs.push(Reference {
          decl_index,
          mention: Mention::Ident(ident),
          subrefs,
        });
      }
    }
    in_progress.remove(&symbol);
    refs
  }

  fn subreferences(
    &self,
    owner: SymbolId,
    ident: NodeId,
    in_progress: &mut HashSet<SymbolId>,
  ) -> Vec<Reference> {
    let Some(mut target) = self.checker.symbol_at(ident) else {
      return Vec::new();
    };
    // Direct self-reference stops before alias resolution.
    if target == owner {
      return Vec::new();
    }
    if self.checker.is_alias(target) {
      target = self.checker.resolve_alias(target);
    }
    if in_progress.contains(&target) {
      return Vec::new();
    }
    if self.checker.declarations_of(target).is_empty() {
      return Vec::new();
    }
    self.collect_references(target, in_progress)
  }
}

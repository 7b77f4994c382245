use super::*;

impl<'a, C: Checker> CollectPass<'a, C> {
  /// Text position of each export in the entry file, restoring original
  /// declaration order: the checker enumerates a module's exports with all
  /// star-derived exports moved to the end.
  pub(super) fn export_positions(&self) -> Result<HashMap<SymbolId, u32>, CollectError> {
    let mut positions = HashMap::new();
    self.own_export_positions(&mut positions);
    let mut visited = HashSet::new();
    self.star_export_positions(self.entry_module, None, &mut visited, &mut positions)?;
    Ok(positions)
  }

  /// Pass 1: exports directly declared or aliased in the entry module take
  /// the offset of their first declaration.
  fn own_export_positions(&self, positions: &mut HashMap<SymbolId, u32>) {
    for symbol in self.checker.own_exports_of(self.entry_module) {
      let Some(first) = self.checker.declarations_of(symbol).first().copied() else {
        // Surfaces later as a missing-position warning.
        continue;
      };
      positions.insert(symbol, self.checker.decl_start(first));
    }
  }

  /// Pass 2: symbols exposed through internal wildcard re-exports take the
  /// offset of the anchoring entry-file statement. Nested re-exports inherit
  /// the outer anchor, so arbitrarily deep chains keep a flat, stable total
  /// order. A symbol already positioned keeps its first offset.
  fn star_export_positions(
    &self,
    module: SymbolId,
    anchor: Option<DeclId>,
    visited: &mut HashSet<SymbolId>,
    positions: &mut HashMap<SymbolId, u32>,
  ) -> Result<(), CollectError> {
    if !visited.insert(module) {
      return Ok(());
    }
    for decl in self.checker.star_reexports_of(module) {
      let (_, resolved) = self.resolve_star_target(decl)?;
      if resolved.is_external {
        continue;
      }
      let anchor = anchor.unwrap_or(decl);
      let start = self.checker.decl_start(anchor);
      for symbol in self.checker.exports_of(resolved.module) {
        positions.entry(symbol).or_insert(start);
      }
      self.star_export_positions(resolved.module, Some(anchor), visited, positions)?;
    }
    Ok(())
  }
}

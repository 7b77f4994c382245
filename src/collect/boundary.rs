use super::*;

/// Symbols and module names that cross the project boundary through wildcard
/// re-export chains. Membership is fixed before export discovery runs.
#[derive(Default)]
pub(super) struct ExternalBoundary {
  pub(super) symbols: HashSet<SymbolId>,
  pub(super) module_names: BTreeSet<String>,
}

impl<'a, C: Checker> CollectPass<'a, C> {
  /// Symbols star-exported from external libraries, found by recursively
  /// flattening internal wildcard re-exports. These are not manipulated
  /// later; the downstream printer re-emits them as `export * from "lib"`.
  pub(super) fn external_star_exports(&self) -> Result<ExternalBoundary, CollectError> {
    let mut boundary = ExternalBoundary::default();
    let mut visited = HashSet::new();
    self.classify_star_exports(self.entry_module, &mut visited, &mut boundary)?;
    Ok(boundary)
  }

  fn classify_star_exports(
    &self,
    module: SymbolId,
    visited: &mut HashSet<SymbolId>,
    boundary: &mut ExternalBoundary,
  ) -> Result<(), CollectError> {
    // Internal modules may star re-export each other to arbitrary depth, so
    // a fully processed module is never revisited.
    if !visited.insert(module) {
      return Ok(());
    }
    for decl in self.checker.star_reexports_of(module) {
      let (specifier, resolved) = self.resolve_star_target(decl)?;
      if resolved.is_external {
        boundary.module_names.insert(specifier);
        for symbol in self.checker.exports_of(resolved.module) {
          boundary.symbols.insert(symbol);
        }
      } else {
        // Internal wildcard re-exports are flattened, not boundary-marked.
        self.classify_star_exports(resolved.module, visited, boundary)?;
      }
    }
    Ok(())
  }

  /// Resolve the target module of a wildcard re-export declaration. Every
  /// such declaration carries a module specifier; a missing one, a specifier
  /// the checker cannot resolve, or a target that is not a value module all
  /// mean the program graph is malformed, and abort the pass.
  pub(super) fn resolve_star_target(
    &self,
    decl: DeclId,
  ) -> Result<(String, ResolvedModule), CollectError> {
    let specifier = self
      .checker
      .module_specifier(decl)
      .ok_or(CollectError::MissingModuleSpecifier { decl })?;
    let from = self.checker.decl_file(decl);
    let resolved = self
      .checker
      .resolve_module(from, &specifier)
      .ok_or_else(|| CollectError::UnresolvedModule {
        specifier: specifier.clone(),
      })?;
    if !self.checker.is_value_module(resolved.module) {
      return Err(CollectError::NotAModule { specifier });
    }
    Ok((specifier, resolved))
  }
}

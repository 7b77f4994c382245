use super::*;

impl<'a, C: Checker> CollectPass<'a, C> {
  /// Symbols visible in the implicit global scope, for name-collision
  /// avoidance by a downstream renaming stage.
  ///
  /// There is no fully reliable "truly global" signal: the chosen file is the
  /// one without an implicit default-library dependency, else the first file
  /// not treated as a module. This can also surface ambient symbols injected
  /// by test or runtime globals, a known imprecision left uncorrected.
  pub(super) fn global_symbols(&self) -> Vec<SymbolId> {
    let files = self.checker.source_files();
    let global_file = files
      .iter()
      .copied()
      .find(|file| self.checker.file_has_no_default_lib(*file))
      .or_else(|| {
        files
          .iter()
          .copied()
          .find(|file| !self.checker.file_is_module(*file))
      });
    match global_file {
      Some(file) => self.checker.symbols_in_scope(file),
      None => Vec::new(),
    }
  }
}

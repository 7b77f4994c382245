use crate::api::DeclId;
use crate::api::ExportEntry;
use crate::api::FileId;
use crate::api::Mention;
use crate::api::MentionKind;
use crate::api::NodeId;
use crate::api::Reference;
use crate::api::ResolvedModule;
use crate::api::SymbolId;
use crate::checker::Checker;
use crate::codes;
use crate::diagnostic::Diagnostic;
use crate::error::CollectError;
use ahash::HashMap;
use ahash::HashMapExt;
use ahash::HashSet;
use ahash::HashSetExt;
use itertools::Itertools;
use std::collections::BTreeSet;
use tracing::debug_span;
use tracing::warn;

mod boundary;
mod globals;
mod order;
mod refs;

/// `export default` bindings are keyed under this internal name; it is not a
/// usable identifier, so the name index leaves it out.
const DEFAULT_EXPORT_NAME: &str = "default";

/// Collected symbol graph for one entry module: everything a bundled
/// declaration output must contain, and in what order.
///
/// All fields are read-only artifacts of a single pass over one immutable
/// program snapshot.
#[derive(Debug)]
pub struct SymbolCollector {
  /// Export symbols of the entry module, in restored declaration order.
  /// Exports without a resolvable declaration are absent.
  pub exports: Vec<SymbolId>,
  /// Export symbol to its terminal symbol and reference tree.
  pub entries: HashMap<SymbolId, ExportEntry>,
  /// Terminal symbols backing the entries, for reverse membership checks.
  pub orig_symbols: HashSet<SymbolId>,
  /// Names of the exports, excluding the internal default name.
  pub export_names: HashSet<String>,
  /// Symbols star-exported from external libraries; never bundled, passed
  /// through untouched.
  pub external_symbols: HashSet<SymbolId>,
  /// Module names to re-emit as wildcard re-exports, left unbundled.
  pub external_module_names: BTreeSet<String>,
  /// Symbols visible in the implicit global scope, used only for collision
  /// checks downstream.
  pub global_symbols: Vec<SymbolId>,
  /// Names of the global symbols, in scope-lookup order.
  pub global_names: Vec<String>,
  /// Warnings accumulated during the pass, in emission order.
  pub diagnostics: Vec<Diagnostic>,
}

impl SymbolCollector {
  /// Run one collection pass over the program reachable from `entry_file`.
  pub fn collect<C: Checker>(
    checker: &C,
    entry_file: FileId,
  ) -> Result<SymbolCollector, CollectError> {
    let span = debug_span!("bundle_dts.collect", file = entry_file.0);
    let _guard = span.enter();

    let entry_module = checker
      .module_symbol_of_file(entry_file)
      .ok_or(CollectError::NoModuleSymbol { file: entry_file })?;

    let mut pass = CollectPass {
      checker,
      entry_file,
      entry_module,
      diagnostics: Vec::new(),
    };

    let boundary = pass.external_star_exports()?;
    let discovered = pass.module_exports(&boundary.symbols)?;
    let (exports, entries) = pass.export_entries(discovered);
    let global_symbols = pass.global_symbols();

    // Derived indexes for cheap membership checks by downstream stages.
    let orig_symbols = entries.values().map(|entry| entry.original).collect();
    let export_names = exports
      .iter()
      .map(|symbol| checker.symbol_name(*symbol))
      .filter(|name| name.as_str() != DEFAULT_EXPORT_NAME)
      .collect();
    let global_names = global_symbols
      .iter()
      .map(|symbol| checker.symbol_name(*symbol))
      .collect();

    Ok(SymbolCollector {
      exports,
      entries,
      orig_symbols,
      export_names,
      external_symbols: boundary.symbols,
      external_module_names: boundary.module_names,
      global_symbols,
      global_names,
      diagnostics: pass.diagnostics,
    })
  }
}

/// Mutable state of one collection pass. The analysis methods are split
/// across the submodules of this directory.
struct CollectPass<'a, C: Checker> {
  checker: &'a C,
  entry_file: FileId,
  entry_module: SymbolId,
  diagnostics: Vec<Diagnostic>,
}

impl<'a, C: Checker> CollectPass<'a, C> {
  /// Exports of the entry module in restored source order, with
  /// external-boundary symbols dropped.
  fn module_exports(
    &mut self,
    excludes: &HashSet<SymbolId>,
  ) -> Result<Vec<SymbolId>, CollectError> {
    // The implicit global scope has no export boundary; the result is
    // everything visible at the entry file.
    if self.checker.is_global_scope(self.entry_module) {
      return Ok(self.checker.symbols_in_scope(self.entry_file));
    }

    let positions = self.export_positions()?;
    let mut sorted = self
      .checker
      .exports_of(self.entry_module)
      .into_iter()
      .filter(|symbol| !excludes.contains(symbol))
      .collect_vec();
    for symbol in sorted.iter() {
      if !positions.contains_key(symbol) {
        let name = self.checker.symbol_name(*symbol);
        self.warn(
          codes::MISSING_EXPORT_POSITION,
          format!("export position not found for {name}"),
        );
      }
    }
    // Unknown positions sort last; the stable sort keeps their relative
    // checker order.
    sorted.sort_by_key(|symbol| positions.get(symbol).copied().unwrap_or(u32::MAX));
    Ok(sorted)
  }

  /// Map each discovered export to its terminal symbol and reference tree.
  /// Alias chains resolve to a single terminal symbol; exports whose terminal
  /// symbol has no declarations carry no structural content to bundle and are
  /// skipped with a warning.
  fn export_entries(
    &mut self,
    discovered: Vec<SymbolId>,
  ) -> (Vec<SymbolId>, HashMap<SymbolId, ExportEntry>) {
    let mut exports = Vec::with_capacity(discovered.len());
    let mut entries = HashMap::with_capacity(discovered.len());

    for export in discovered {
      let original = if self.checker.is_alias(export) {
        self.checker.resolve_alias(export)
      } else {
        export
      };

      if self.checker.declarations_of(original).is_empty() {
        let name = self.checker.symbol_name(original);
        self.warn(
          codes::MISSING_DECLARATION,
          format!("symbol {name} does not have any declaration"),
        );
        continue;
      }

      let refs = self.references_of(original);
      exports.push(export);
      entries.insert(export, ExportEntry { original, refs });
    }

    (exports, entries)
  }

  fn warn(&mut self, code: &'static str, message: String) {
    warn!(code, "{message}");
    self.diagnostics.push(Diagnostic::warning(code, message));
  }
}

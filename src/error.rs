use crate::api::DeclId;
use crate::api::FileId;
use std::error::Error;
use std::fmt;

/// Unrecoverable failures that abort a collection pass.
///
/// These indicate the program graph is malformed relative to the bundler's
/// assumptions and cannot be safely worked around. The checker is assumed
/// deterministic, so there is no transient-failure class to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectError {
  /// The entry file has no module symbol.
  NoModuleSymbol { file: FileId },
  /// A wildcard re-export statement without a resolvable module specifier.
  MissingModuleSpecifier { decl: DeclId },
  /// A module specifier the checker could not resolve.
  UnresolvedModule { specifier: String },
  /// A specifier that resolved to something other than a value module.
  NotAModule { specifier: String },
}

impl fmt::Display for CollectError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      CollectError::NoModuleSymbol { file } => {
        write!(f, "no module symbol for entry file {}", file.0)
      }
      CollectError::MissingModuleSpecifier { decl } => {
        write!(
          f,
          "could not get module specifier from re-export declaration {}",
          decl.0
        )
      }
      CollectError::UnresolvedModule { specifier } => {
        write!(f, "could not resolve module: {specifier}")
      }
      CollectError::NotAModule { specifier } => {
        write!(f, "could not resolve symbol of module: {specifier}")
      }
    }
  }
}

impl Error for CollectError {}

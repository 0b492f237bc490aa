use {
  crate::config::ArtifactPaths,
  predicate_primitives::{Abi, AbiError, Bytecode},
  std::{future::Future, io, path::PathBuf},
  thiserror::Error,
  tokio::fs,
  tracing::debug,
};

#[derive(Debug, Error)]
pub enum ArtifactError {
  #[error("failed to read predicate bytecode from {path}: {source}")]
  Bytecode { path: PathBuf, source: io::Error },

  #[error("failed to read predicate ABI from {path}: {source}")]
  AbiFile { path: PathBuf, source: io::Error },

  #[error("malformed predicate ABI in {path}: {source}")]
  AbiFormat { path: PathBuf, source: AbiError },
}

/// Compiled predicate as produced by the compiler.
#[derive(Debug, Clone)]
pub struct PredicateArtifacts {
  pub bytecode: Bytecode,
  pub abi: Abi,
}

impl PredicateArtifacts {
  /// Reads the bytecode and the ABI concurrently. Fails if either one
  /// is missing or the ABI isn't valid JSON of the expected shape.
  pub async fn load(paths: &ArtifactPaths) -> Result<Self, ArtifactError> {
    Self::load_from(
      paths,
      fs::read(&paths.bytecode),
      fs::read_to_string(&paths.abi),
    )
    .await
  }

  /// Same as [`Self::load`] with the two reads supplied by the caller.
  /// `paths` is only used to describe failures.
  pub async fn load_from(
    paths: &ArtifactPaths,
    bytecode: impl Future<Output = io::Result<Vec<u8>>>,
    abi: impl Future<Output = io::Result<String>>,
  ) -> Result<Self, ArtifactError> {
    let (bytecode, abi) = tokio::try_join!(
      async {
        bytecode.await.map_err(|source| ArtifactError::Bytecode {
          path: paths.bytecode.clone(),
          source,
        })
      },
      async {
        abi.await.map_err(|source| ArtifactError::AbiFile {
          path: paths.abi.clone(),
          source,
        })
      }
    )?;

    let abi = Abi::from_json(&abi).map_err(|source| ArtifactError::AbiFormat {
      path: paths.abi.clone(),
      source,
    })?;

    let bytecode = Bytecode::new(bytecode);
    debug!(
      "loaded predicate artifacts: {} bytes of code, {} ABI functions",
      bytecode.len(),
      abi.functions.len()
    );

    Ok(Self { bytecode, abi })
  }
}

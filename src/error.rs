use thiserror::Error;

/// Errors raised while constructing or mutating a corpus.
///
/// Queries never produce these: an out-of-range document index yields an
/// empty result, and degenerate numeric cases (zero norms, zero document
/// frequency, rank-deficient matrices) resolve to defined fallback values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    /// The input list was empty. A model requires at least one document.
    #[error("corpus requires at least one document")]
    EmptyCorpus,

    /// Two inputs carried the same document name.
    /// Names are identifiers; de-duplication is the caller's job.
    #[error("duplicate document name: {0}")]
    DuplicateName(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

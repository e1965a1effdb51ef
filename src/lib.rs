/// This crate is a Document Similarity Engine built on TF-IDF weighting.
///
/// It turns a small corpus of plain-text documents into sparse TF-IDF
/// vectors, compares them with cosine similarity, and projects the
/// resulting similarity structure into 2D coordinates with classical
/// multidimensional scaling (MDS).
///
/// The pipeline is strictly synchronous and in-memory:
/// tokenize → count → weight → compare → project.
pub mod error;
pub mod model;
pub mod projection;
pub mod tokenizer;

/// Crate error type, raised only at corpus-construction time.
/// Query operations never fail; out-of-range lookups return empty results
/// and numeric edge cases resolve to defined fallback values.
pub use error::{ModelError, Result};

/// TF-IDF model over an ordered document corpus.
/// The top-level struct of this crate. Construction eagerly computes term
/// counts, the shared vocabulary, and every document's sparse TF-IDF vector.
/// Mutating the corpus (add/remove) triggers a full rebuild; there is no
/// incremental update path.
pub use model::{Document, DocumentInput, TfIdfModel};

/// Sparse cosine similarity and symmetric similarity matrix assembly.
pub use model::similarity::{build_similarity_matrix, cosine_similarity};

/// Classical MDS projection of a similarity matrix into 2D points.
/// Power iteration with deflation extracts the top two eigenvectors of the
/// double-centered Gram matrix. The random initialization is injectable so
/// callers can pin coordinates for reproducible output.
pub use projection::{project_2d, project_2d_seeded, project_2d_with_rng, Point2D};

/// Word tokenization and term counting.
pub use tokenizer::{count_terms, tokenize, TermCounts};

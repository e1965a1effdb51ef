pub mod similarity;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::error::{ModelError, Result};
use crate::tokenizer::{count_terms, tokenize, TermCounts};

/// Raw input for one document: a unique name and its plain-text content.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DocumentInput {
    pub name: String,
    pub content: String,
}

impl DocumentInput {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        DocumentInput {
            name: name.into(),
            content: content.into(),
        }
    }
}

/// One document in the corpus.
///
/// `counts` is derived once from the tokenized content and never changes.
/// `tfidf` is derived state: a sparse term → weight map, fully recomputed
/// whenever the owning model changes. Zero weights are omitted, not stored.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Document {
    pub name: String,
    pub counts: TermCounts,
    pub tfidf: IndexMap<String, f64>,
}

/// TfIdfModel struct
/// Holds an ordered document corpus, its shared vocabulary, and the sparse
/// TF-IDF vector of every document.
///
/// Construction tokenizes and counts each input, collects the vocabulary
/// (union of all per-document term sets), and computes all weights eagerly
/// with the log-weighting scheme of Manning/Raghavan/Schütze Eq. 6.12/6.13:
///
/// - `tf(t, d) = 1 + log10(count(t, d))` when the count is positive, else 0
/// - `idf(t) = log10(N / df(t))` when `df(t) > 0`, else 0
///
/// Base-10 logarithms are part of the contract, not a free choice.
///
/// # Examples
/// ```
/// use docsim::{DocumentInput, TfIdfModel};
/// let model = TfIdfModel::new(vec![
///     DocumentInput::new("fruit", "apple banana apple"),
///     DocumentInput::new("trees", "banana palm"),
/// ])?;
/// let matrix = model.similarity_matrix();
/// assert_eq!(matrix[0][0], 1.0);
/// # Ok::<(), docsim::ModelError>(())
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TfIdfModel {
    documents: Vec<Document>,
    vocabulary: IndexSet<String>,
}

impl TfIdfModel {
    /// Build a model from an ordered list of inputs.
    ///
    /// Document order is preserved; it defines matrix row/column order and
    /// label order, but never influences the weights themselves.
    ///
    /// # Errors
    /// * [`ModelError::EmptyCorpus`] if `inputs` is empty
    /// * [`ModelError::DuplicateName`] if two inputs share a name
    pub fn new(inputs: Vec<DocumentInput>) -> Result<Self> {
        if inputs.is_empty() {
            return Err(ModelError::EmptyCorpus);
        }
        let mut seen: HashSet<&str> = HashSet::with_capacity(inputs.len());
        for input in &inputs {
            if !seen.insert(input.name.as_str()) {
                return Err(ModelError::DuplicateName(input.name.clone()));
            }
        }

        let documents = inputs
            .into_iter()
            .map(|input| Document {
                name: input.name,
                counts: count_terms(tokenize(&input.content)),
                tfidf: IndexMap::new(),
            })
            .collect();

        let mut model = TfIdfModel {
            documents,
            vocabulary: IndexSet::new(),
        };
        model.rebuild();
        Ok(model)
    }

    /// Add a document and rebuild all derived state.
    ///
    /// # Errors
    /// * [`ModelError::DuplicateName`] if a document with that name exists
    pub fn add_document(&mut self, input: DocumentInput) -> Result<()> {
        if self.documents.iter().any(|d| d.name == input.name) {
            return Err(ModelError::DuplicateName(input.name));
        }
        self.documents.push(Document {
            name: input.name,
            counts: count_terms(tokenize(&input.content)),
            tfidf: IndexMap::new(),
        });
        self.rebuild();
        Ok(())
    }

    /// Remove a document by name and rebuild all derived state.
    /// Returns the removed document, or `None` if the name is unknown.
    /// Removing the last document leaves an empty model; queries on it
    /// return empty results.
    pub fn remove_document(&mut self, name: &str) -> Option<Document> {
        let index = self.documents.iter().position(|d| d.name == name)?;
        let removed = self.documents.remove(index);
        self.rebuild();
        Some(removed)
    }

    /// Recompute vocabulary and every document's tfidf map from the
    /// retained per-document counts. There is no incremental path: any
    /// corpus change invalidates every idf value, so everything is redone.
    fn rebuild(&mut self) {
        let mut vocabulary: IndexSet<String> = IndexSet::new();
        for doc in &self.documents {
            for term in doc.counts.terms() {
                vocabulary.insert(term.to_string());
            }
        }

        // Document frequency per term, one pass over the corpus.
        // Observably identical to scanning all documents per term lookup.
        let mut doc_freq: IndexMap<String, usize> =
            vocabulary.iter().map(|t| (t.clone(), 0)).collect();
        for doc in &self.documents {
            for term in doc.counts.terms() {
                if let Some(df) = doc_freq.get_mut(term) {
                    *df += 1;
                }
            }
        }

        let doc_count = self.documents.len();
        for doc in &mut self.documents {
            let mut tfidf = IndexMap::new();
            for (term, &df) in &doc_freq {
                let weight = tf_weight(doc.counts.count(term)) * idf_weight(doc_count, df);
                if weight > 0.0 {
                    tfidf.insert(term.clone(), weight);
                }
            }
            doc.tfidf = tfidf;
        }
        self.vocabulary = vocabulary;

        debug!(
            documents = self.documents.len(),
            vocabulary = self.vocabulary.len(),
            "rebuilt tf-idf model"
        );
    }

    /// Number of documents whose counts contain the term
    pub fn df(&self, term: &str) -> usize {
        self.documents
            .iter()
            .filter(|d| d.counts.contains(term))
            .count()
    }

    /// `log10(N / df(t))`, or 0 when the term occurs in no document
    pub fn idf(&self, term: &str) -> f64 {
        idf_weight(self.documents.len(), self.df(term))
    }

    /// The `n` highest-weight terms of one document, descending by weight.
    /// Ties are broken lexicographically so output is reproducible.
    /// An out-of-range index yields an empty list; the caller may query
    /// speculatively.
    pub fn top_terms(&self, doc_index: usize, n: usize) -> Vec<(String, f64)> {
        let Some(doc) = self.documents.get(doc_index) else {
            return Vec::new();
        };
        let mut entries: Vec<(String, f64)> = doc
            .tfidf
            .iter()
            .map(|(term, &weight)| (term.clone(), weight))
            .collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(n);
        entries
    }

    /// Per-term weight vectors across the corpus, in document order.
    /// Absent terms contribute 0. Terms with no positive weight anywhere
    /// are dropped.
    pub fn term_vectors(&self) -> IndexMap<String, Vec<f64>> {
        let mut result = IndexMap::new();
        for term in &self.vocabulary {
            let vector: Vec<f64> = self
                .documents
                .iter()
                .map(|doc| doc.tfidf.get(term).copied().unwrap_or(0.0))
                .collect();
            if vector.iter().any(|&v| v > 0.0) {
                result.insert(term.clone(), vector);
            }
        }
        result
    }

    /// Pairwise cosine similarity matrix of the corpus.
    /// Square, symmetric, diagonal exactly 1, entries in `[0, 1]`.
    pub fn similarity_matrix(&self) -> Vec<Vec<f64>> {
        similarity::build_similarity_matrix(&self.documents)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn document(&self, doc_index: usize) -> Option<&Document> {
        self.documents.get(doc_index)
    }

    /// Document names in corpus order, for use as projection labels
    pub fn names(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.name.clone()).collect()
    }

    pub fn vocabulary(&self) -> &IndexSet<String> {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// `1 + log10(count)` for a positive count, else 0 (Eq. 6.12)
#[inline]
fn tf_weight(count: u32) -> f64 {
    if count > 0 {
        1.0 + (count as f64).log10()
    } else {
        0.0
    }
}

/// `log10(N / df)` for a positive document frequency, else 0 (Eq. 6.13)
#[inline]
fn idf_weight(doc_count: usize, doc_freq: usize) -> f64 {
    if doc_freq > 0 {
        (doc_count as f64 / doc_freq as f64).log10()
    } else {
        0.0
    }
}

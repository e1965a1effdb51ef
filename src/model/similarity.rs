use crate::model::Document;

/// Cosine similarity between two sparse TF-IDF vectors.
///
/// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
///
/// The dot product iterates only the smaller of the two maps and probes the
/// other by key, so cost is bounded by the smaller entry count rather than
/// the vocabulary size. Norms sum the squared weights of each full map.
/// A zero denominator (a document with no positive-weight terms) yields
/// exactly 0, including against itself; matrix assembly forces the diagonal.
///
/// All weights are non-negative, so the result lies in `[0, 1]`.
pub fn cosine_similarity(doc1: &Document, doc2: &Document) -> f64 {
    let (smaller, larger) = if doc1.tfidf.len() <= doc2.tfidf.len() {
        (&doc1.tfidf, &doc2.tfidf)
    } else {
        (&doc2.tfidf, &doc1.tfidf)
    };

    let mut dot_product = 0.0;
    for (term, &v1) in smaller {
        if let Some(&v2) = larger.get(term) {
            dot_product += v1 * v2;
        }
    }

    let norm1: f64 = doc1.tfidf.values().map(|v| v * v).sum();
    let norm2: f64 = doc2.tfidf.values().map(|v| v * v).sum();

    let denominator = norm1.sqrt() * norm2.sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        dot_product / denominator
    }
}

/// Pairwise cosine similarity matrix over the documents, in order.
///
/// The diagonal is forced to exactly 1 regardless of the cosine formula's
/// zero-norm edge case. Off-diagonal entries are computed once per unordered
/// pair and mirrored, so the matrix is symmetric by construction.
pub fn build_similarity_matrix(documents: &[Document]) -> Vec<Vec<f64>> {
    let n = documents.len();
    let mut matrix = vec![vec![0.0; n]; n];

    for i in 0..n {
        matrix[i][i] = 1.0;
        for j in (i + 1)..n {
            let s = cosine_similarity(&documents[i], &documents[j]);
            matrix[i][j] = s;
            matrix[j][i] = s;
        }
    }

    matrix
}

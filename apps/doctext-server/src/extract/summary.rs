//! Result aggregation

use super::types::{BatchSummary, ExtractionResponse, ExtractionResult};

impl BatchSummary {
    /// Summarize a batch in a single pass
    ///
    /// Formats are counted for successful files only, so files that failed
    /// (including those whose format never resolved) appear in `failed` but
    /// in no format bucket.
    pub fn from_results(results: &[ExtractionResult]) -> Self {
        let mut summary = Self::default();

        for result in results {
            summary.total += 1;
            if result.is_success() {
                summary.successful += 1;
                if let Some(format) = &result.format {
                    *summary.formats_processed.entry(format.clone()).or_insert(0) += 1;
                }
            } else {
                summary.failed += 1;
            }
        }

        summary
    }
}

impl ExtractionResponse {
    /// Envelope for a batch that was accepted and fully processed
    ///
    /// `success` is true for every accepted batch; individual failures are
    /// reported per document and counted in the summary.
    pub fn from_results(documents: Vec<ExtractionResult>) -> Self {
        let summary = BatchSummary::from_results(&documents);
        Self {
            success: true,
            documents,
            summary,
        }
    }
}

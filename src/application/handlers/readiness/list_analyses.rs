//! ListAnalysesHandler - Query handler listing the available analyses.

use std::sync::Arc;

use crate::ports::AnalysisSource;

use super::ReadinessQueryError;

/// Keys of the analyses a source can serve, sorted.
pub type ListAnalysesResult = Vec<String>;

pub struct ListAnalysesHandler {
    source: Arc<dyn AnalysisSource>,
}

impl ListAnalysesHandler {
    pub fn new(source: Arc<dyn AnalysisSource>) -> Self {
        Self { source }
    }

    pub fn handle(&self) -> Result<ListAnalysesResult, ReadinessQueryError> {
        let keys = self.source.keys()?;
        tracing::debug!(count = keys.len(), "listed analyses");
        Ok(keys)
    }
}

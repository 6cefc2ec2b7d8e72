use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use docdash_contract::ReportRow;
use tracing::info;

use crate::filters::ReportFilters;
use crate::fixtures::sample_report_rows;
use crate::ReportError;

#[async_trait]
pub trait ReportSource: Send + Sync {
    async fn fetch(&self, filters: &ReportFilters) -> Result<Vec<ReportRow>, ReportError>;
}

/// Returns the canned activity rows after a fixed delay. Filters are accepted
/// but do not narrow the rows.
#[derive(Debug, Clone)]
pub struct FixtureReportSource {
    pub delay: Duration,
}

impl FixtureReportSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixtureReportSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500))
    }
}

#[async_trait]
impl ReportSource for FixtureReportSource {
    async fn fetch(&self, _filters: &ReportFilters) -> Result<Vec<ReportRow>, ReportError> {
        tokio::time::sleep(self.delay).await;
        Ok(sample_report_rows())
    }
}

#[derive(Clone)]
pub struct ReportGenerator {
    source: Arc<dyn ReportSource>,
    generating: Arc<AtomicBool>,
}

struct GeneratingGuard(Arc<AtomicBool>);

impl Drop for GeneratingGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl ReportGenerator {
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        Self {
            source,
            generating: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_generating(&self) -> bool {
        self.generating.load(Ordering::SeqCst)
    }

    /// Only one generation runs at a time; a second request while one is in
    /// flight is rejected.
    pub async fn generate(&self, filters: &ReportFilters) -> Result<Vec<ReportRow>, ReportError> {
        filters.date_range()?;

        if self
            .generating
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(ReportError::AlreadyGenerating);
        }
        let _guard = GeneratingGuard(Arc::clone(&self.generating));

        let rows = self.source.fetch(filters).await?;
        info!(rows = rows.len(), "report generated");
        Ok(rows)
    }
}

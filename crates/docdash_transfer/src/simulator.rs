use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use futures::stream::{Stream, StreamExt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::{broadcast, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tracing::{debug, info, warn};

use crate::{TransferError, UploadEvent, UploadFile, UploadId, UploadStatus, UploadTask};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatorConfig {
    pub tick_interval: Duration,
    /// Upper bound (exclusive) of the random increment added per tick.
    pub max_increment: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(200),
            max_increment: 20.0,
        }
    }
}

impl SimulatorConfig {
    pub fn validate(&self) -> Result<(), TransferError> {
        if self.tick_interval.is_zero() {
            return Err(TransferError::InvalidConfig(
                "tick interval must be positive".to_string(),
            ));
        }
        if !self.max_increment.is_finite() || self.max_increment <= 0.0 {
            return Err(TransferError::InvalidConfig(format!(
                "max increment must be a positive number, got {}",
                self.max_increment
            )));
        }
        Ok(())
    }
}

struct Inner {
    config: SimulatorConfig,
    tasks: RwLock<Vec<UploadTask>>,
    tickers: Mutex<HashMap<UploadId, JoinHandle<()>>>,
    rng: Mutex<StdRng>,
    events: broadcast::Sender<UploadEvent>,
}

impl Inner {
    fn next_increment(&self) -> f64 {
        lock(&self.rng).random_range(0.0..self.config.max_increment)
    }

    fn emit(&self, event: UploadEvent) {
        let _ = self.events.send(event);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Drives fake upload progress: one ticker task per file, each bumping only
/// its own entry until it reaches 100%.
#[derive(Clone)]
pub struct UploadSimulator {
    inner: Arc<Inner>,
}

impl UploadSimulator {
    pub fn new(config: SimulatorConfig) -> Result<Self, TransferError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_seed(config: SimulatorConfig, seed: u64) -> Result<Self, TransferError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: SimulatorConfig, rng: StdRng) -> Result<Self, TransferError> {
        config.validate()?;
        let (events, _) = broadcast::channel(1024);
        Ok(Self {
            inner: Arc::new(Inner {
                config,
                tasks: RwLock::new(Vec::new()),
                tickers: Mutex::new(HashMap::new()),
                rng: Mutex::new(rng),
                events,
            }),
        })
    }

    pub fn config(&self) -> SimulatorConfig {
        self.inner.config
    }

    pub fn subscribe(&self) -> broadcast::Receiver<UploadEvent> {
        self.inner.events.subscribe()
    }

    /// Event stream for render loops. A consumer that falls behind gets
    /// `TransferError::Lagged` and should resync from `snapshot()` or `unfinished()`.
    pub fn events(&self) -> impl Stream<Item = Result<UploadEvent, TransferError>> {
        BroadcastStream::new(self.subscribe()).map(|item| {
            item.map_err(|BroadcastStreamRecvError::Lagged(skipped)| {
                TransferError::Lagged(skipped)
            })
        })
    }

    /// Queues `files` at 0% and starts a ticker for each. A file whose id is
    /// already queued is skipped. Returns the ids actually queued. Must be
    /// called inside a tokio runtime.
    pub async fn add_files(&self, files: Vec<UploadFile>) -> Vec<UploadId> {
        let mut ids = Vec::with_capacity(files.len());
        {
            let mut tasks = self.inner.tasks.write().await;
            for file in files {
                if tasks.iter().any(|task| task.file.id == file.id) {
                    warn!(
                        upload_id = %file.id,
                        file = %file.name,
                        "upload already queued, skipping"
                    );
                    continue;
                }
                info!(upload_id = %file.id, file = %file.name, "upload started");
                self.inner.emit(UploadEvent::Added {
                    id: file.id,
                    name: file.name.clone(),
                });
                ids.push(file.id);
                tasks.push(UploadTask::new(file));
            }
        }

        let mut tickers = lock(&self.inner.tickers);
        for id in &ids {
            let inner = Arc::clone(&self.inner);
            let id = *id;
            tickers.insert(id, tokio::spawn(run_ticker(inner, id)));
        }
        ids
    }

    /// Drops the file from the list and stops its ticker. Returns whether it existed.
    pub async fn remove_file(&self, id: UploadId) -> bool {
        let ticker = lock(&self.inner.tickers).remove(&id);
        if let Some(handle) = ticker {
            handle.abort();
        }

        let removed = {
            let mut tasks = self.inner.tasks.write().await;
            let before = tasks.len();
            tasks.retain(|task| task.file.id != id);
            tasks.len() != before
        };

        if removed {
            info!(upload_id = %id, "upload removed");
            self.inner.emit(UploadEvent::Removed { id });
        }
        removed
    }

    pub async fn snapshot(&self) -> Vec<UploadTask> {
        self.inner.tasks.read().await.clone()
    }

    pub async fn get(&self, id: UploadId) -> Option<UploadTask> {
        self.inner
            .tasks
            .read()
            .await
            .iter()
            .find(|task| task.file.id == id)
            .cloned()
    }

    /// Ids of tasks still uploading, in insertion order.
    pub async fn unfinished(&self) -> Vec<UploadId> {
        self.inner
            .tasks
            .read()
            .await
            .iter()
            .filter(|task| task.status == UploadStatus::Uploading)
            .map(|task| task.file.id)
            .collect()
    }

    pub fn active_tickers(&self) -> usize {
        lock(&self.inner.tickers).len()
    }
}

async fn run_ticker(inner: Arc<Inner>, id: UploadId) {
    let period = inner.config.tick_interval;
    let mut ticks = interval_at(Instant::now() + period, period);

    loop {
        ticks.tick().await;
        let increment = inner.next_increment();

        let outcome = {
            let mut tasks = inner.tasks.write().await;
            tasks
                .iter_mut()
                .find(|task| task.file.id == id)
                .map(|task| (task.advance(increment), task.progress))
        };

        match outcome {
            Some((UploadStatus::Uploading, progress)) => {
                debug!(upload_id = %id, progress, "upload tick");
                inner.emit(UploadEvent::Progress { id, progress });
            }
            Some((UploadStatus::Completed, progress)) => {
                inner.emit(UploadEvent::Progress { id, progress });
                inner.emit(UploadEvent::Completed { id });
                info!(upload_id = %id, "upload completed");
                break;
            }
            Some((UploadStatus::Error, _)) | None => break,
        }
    }

    lock(&inner.tickers).remove(&id);
}

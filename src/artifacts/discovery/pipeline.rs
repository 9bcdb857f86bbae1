use crate::artifacts::discovery::record::RepositoryRecord;
use crate::artifacts::status::collector::collect_status;
use crate::artifacts::walk::walker::RepoWalker;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// One record in flight at a time: the producer blocks after classifying a
/// dirty repository until the consumer drains the previous one.
const HANDOFF_CAPACITY: usize = 1;

/// A failure that invalidates a whole discovery run.
///
/// Per-candidate failures (an unreadable subtree entry, a failing status
/// query) are logged and skipped instead; only the root being unusable is
/// fatal.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("cannot scan {}: {source}", .path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Deliveries of one discovery run. Exactly one terminal event
/// (`Completed` or `Failed`) follows the per-repository deliveries.
#[derive(Debug)]
pub enum DiscoveryEvent {
    Repository(RepositoryRecord),
    Completed,
    Failed(DiscoveryError),
}

/// Starts discovery runs over a fixed root, one active run at a time.
///
/// Each run is tagged with a generation identifier; starting a new run
/// retires the previous one, so records from a stale generation can never
/// interleave with a fresh scan.
pub struct Scanner {
    root: PathBuf,
    generation: u64,
    active: Option<Arc<AtomicBool>>,
}

impl Scanner {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            generation: 0,
            active: None,
        }
    }

    /// Starts a new run, cancelling any in-flight one first.
    pub fn scan(&mut self) -> DiscoveryRun {
        if let Some(retired) = self.active.take() {
            retired.store(true, Ordering::Relaxed);
        }
        self.generation += 1;

        let retire = Arc::new(AtomicBool::new(false));
        self.active = Some(retire.clone());

        let (deliveries, events) = mpsc::channel(HANDOFF_CAPACITY);
        let root = self.root.clone();
        let generation = self.generation;
        let flag = retire.clone();
        let worker =
            tokio::task::spawn_blocking(move || produce(root, generation, flag, deliveries));

        DiscoveryRun {
            generation,
            events,
            retire,
            _worker: worker,
        }
    }
}

/// The consumer half of one run: a pull-based stream of events.
///
/// Dropping the run retires its producer: the cancellation flag is set
/// and the channel closes, unblocking a producer stuck at the handoff.
pub struct DiscoveryRun {
    generation: u64,
    events: mpsc::Receiver<DiscoveryEvent>,
    retire: Arc<AtomicBool>,
    _worker: tokio::task::JoinHandle<()>,
}

impl DiscoveryRun {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pulls the next event. `None` only after the terminal event has been
    /// consumed or the run has been retired.
    pub async fn next_event(&mut self) -> Option<DiscoveryEvent> {
        self.events.recv().await
    }
}

impl Drop for DiscoveryRun {
    fn drop(&mut self) {
        self.retire.store(true, Ordering::Relaxed);
    }
}

// The producer drives Walker -> Collector -> Parser sequentially on a
// blocking task. Send errors mean the consumer is gone; the run just ends.
fn produce(
    root: PathBuf,
    generation: u64,
    retired: Arc<AtomicBool>,
    deliveries: mpsc::Sender<DiscoveryEvent>,
) {
    let root = match root.canonicalize() {
        Ok(root) => root,
        Err(source) => {
            let _ = deliveries.blocking_send(DiscoveryEvent::Failed(DiscoveryError::Root {
                path: root,
                source,
            }));
            return;
        }
    };

    debug!(root = %root.display(), generation, "discovery run started");

    for candidate in RepoWalker::new(&root) {
        if retired.load(Ordering::Relaxed) {
            debug!(generation, "discovery run retired");
            return;
        }

        let path = match candidate {
            Ok(path) => path,
            Err(error) => {
                warn!(%error, "skipping unreadable directory");
                continue;
            }
        };

        let facts = match collect_status(&path) {
            Ok(facts) => facts,
            Err(error) => {
                warn!(path = %path.display(), %error, "skipping candidate with failing status query");
                continue;
            }
        };

        if facts.is_clean() {
            continue;
        }

        let record = RepositoryRecord::new(path, facts.summary());
        if deliveries
            .blocking_send(DiscoveryEvent::Repository(record))
            .is_err()
        {
            return;
        }
    }

    debug!(generation, "discovery run completed");
    let _ = deliveries.blocking_send(DiscoveryEvent::Completed);
}

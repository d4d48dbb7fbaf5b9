use std::path::PathBuf;
use std::sync::mpsc;

use super::run_batch;

/// Where the shell stands with respect to a batch. Owned by the caller,
/// not the core; the core assumes single-flight invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Done,
    Failed,
}

/// Inputs for one extraction run, cloned into the worker thread.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub descriptor: PathBuf,
    pub sheet: PathBuf,
    pub output_dir: PathBuf,
}

/// Handle to a batch running on a background thread. The worker
/// publishes exactly one terminal status: a success message or an
/// error message.
pub struct BatchTask {
    receiver: mpsc::Receiver<Result<String, String>>,
}

impl BatchTask {
    /// Non-blocking poll for the terminal status
    pub fn poll(&self) -> Option<Result<String, String>> {
        self.receiver.try_recv().ok()
    }

    /// Block until the worker publishes its terminal status
    pub fn wait(self) -> Result<String, String> {
        self.receiver
            .recv()
            .unwrap_or_else(|_| Err("worker thread terminated without a status".to_string()))
    }
}

/// Submit the whole batch as one unit of work on a single worker
/// thread. There is no cancellation: the batch runs to completion or
/// to its first error.
pub fn start_batch(request: BatchRequest) -> BatchTask {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let result = run_batch(&request.descriptor, &request.sheet, &request.output_dir)
            .map_err(|e| e.to_string());
        let _ = tx.send(result);
    });

    BatchTask { receiver: rx }
}

//! # Runtime
//!
//! Builds [Tokio](https://tokio.rs) runtimes from named profiles.
//!
//! ## Profiles
//! * **Current thread** (default): one cooperative scheduler thread.
//! * **Multi thread**: work-stealing scheduler sized from available parallelism
//!   (or `TOKIO_WORKER_THREADS`).
//!
//! ## Example
//!
//! ```rust,ignore
//! #[ncraft_runtime::main(current_thread)]
//! async fn main() -> anyhow::Result<()> {
//!     Ok(())
//! }
//! ```

pub use anyhow::Result;
pub use ncraft_derive::main;

use anyhow::anyhow;
use std::{sync::OnceLock, thread::available_parallelism, time::Duration};
use tokio::runtime::{Builder, Runtime};
use tracing::debug;

/// The default number of worker threads if detection fails.
const DEFAULT_WORKER_THREADS: usize = 4;
/// The default stack size for threads (2 `MiB`).
const DEFAULT_STACK_SIZE: usize = 2 * 1024 * 1024;
/// Minimum allowed stack size (1 `MiB`).
const MIN_STACK_SIZE: usize = 1024 * 1024;
/// Maximum allowed stack size (16 `MiB`).
const MAX_STACK_SIZE: usize = 16 * 1024 * 1024;
const MAX_WORKER_THREADS: usize = 1024;
const THREAD_KEEP_ALIVE: Duration = Duration::from_secs(60);
const DEFAULT_THREAD_NAME: &str = "ncraft-worker";

static WORKER_THREADS: OnceLock<usize> = OnceLock::new();

fn detected_worker_threads() -> usize {
    *WORKER_THREADS.get_or_init(|| {
        std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0 && n <= MAX_WORKER_THREADS)
            .unwrap_or_else(|| {
                available_parallelism().map(std::num::NonZero::get).unwrap_or(DEFAULT_WORKER_THREADS)
            })
    })
}

/// Scheduler flavor of a [`RuntimeProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    CurrentThread,
    MultiThread { worker_threads: usize },
}

/// Runtime construction parameters.
#[derive(Debug, Clone)]
pub struct RuntimeProfile {
    pub flavor: Flavor,
    pub stack_size: usize,
    pub thread_name: String,
    pub thread_keep_alive: Duration,
}

impl Default for RuntimeProfile {
    fn default() -> Self {
        Self::current_thread()
    }
}

impl RuntimeProfile {
    /// Single-threaded cooperative scheduler.
    #[must_use]
    pub fn current_thread() -> Self {
        Self {
            flavor: Flavor::CurrentThread,
            stack_size: DEFAULT_STACK_SIZE,
            thread_name: DEFAULT_THREAD_NAME.to_owned(),
            thread_keep_alive: THREAD_KEEP_ALIVE,
        }
    }

    /// Work-stealing scheduler with one worker per available core.
    #[must_use]
    pub fn multi_thread() -> Self {
        Self {
            flavor: Flavor::MultiThread { worker_threads: detected_worker_threads() },
            ..Self::current_thread()
        }
    }
}

/// Creates a Tokio runtime for `profile` with I/O and timers enabled.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the OS refuses to create the runtime threads or
/// the I/O driver.
pub fn build_runtime(profile: &RuntimeProfile) -> Result<Runtime> {
    debug!(profile = ?profile, "Building tokio runtime");

    let mut builder = match profile.flavor {
        Flavor::CurrentThread => Builder::new_current_thread(),
        Flavor::MultiThread { worker_threads } => {
            let mut builder = Builder::new_multi_thread();
            builder.worker_threads(worker_threads.clamp(1, MAX_WORKER_THREADS));
            builder
        },
    };

    builder
        .thread_name(&profile.thread_name)
        .thread_stack_size(profile.stack_size.clamp(MIN_STACK_SIZE, MAX_STACK_SIZE))
        .thread_keep_alive(profile.thread_keep_alive)
        .enable_all();

    builder.build().map_err(|e| anyhow!("Failed to initialize runtime: {e}"))
}

//! Parallel batch processing.

use anyhow::{Result, bail};
use log::error;
use rayon::prelude::*;

/// Outcome of a batch: the outputs of the items that succeeded, and how many
/// failed.
#[derive(Debug)]
pub struct BatchResult<R> {
    pub outputs: Vec<R>,
    pub failed: usize,
}

impl<R> BatchResult<R> {
    pub fn total(&self) -> usize {
        self.outputs.len() + self.failed
    }

    /// The outputs, or an error if any item failed.
    pub fn into_outputs(self, operation: &str) -> Result<Vec<R>> {
        if self.failed > 0 {
            bail!("{operation}: {} of {} inputs failed", self.failed, self.total());
        }
        Ok(self.outputs)
    }
}

/// Run `op` over `items` on the rayon pool.
///
/// A failing item is logged and counted; the others still run.
pub fn run_batch<T, R, F>(label: &str, items: Vec<T>, op: F) -> BatchResult<R>
where
    T: Send,
    R: Send,
    F: Fn(T) -> Result<R> + Sync,
{
    let results: Vec<Result<R>> = items.into_par_iter().map(&op).collect();

    let mut batch = BatchResult { outputs: Vec::with_capacity(results.len()), failed: 0 };
    for result in results {
        match result {
            Ok(output) => batch.outputs.push(output),
            Err(e) => {
                error!("{e:#}");
                batch.failed += 1;
            }
        }
    }

    eprintln!("{label}: {}/{} succeeded", batch.outputs.len(), batch.total());
    batch
}

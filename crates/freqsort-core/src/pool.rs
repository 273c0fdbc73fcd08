/// Fixed-size worker pool for the parallel pipeline stages.
///
/// One pool is built per pipeline and reused by the map and reduce stages.
/// Each call to [`WorkerPool::map`] is a barrier: it returns only after
/// every item has been processed, so the next stage always sees complete
/// input. Dropping the pool (or calling [`WorkerPool::shutdown`]) releases
/// its threads, which also covers early returns.
use crate::error::Result;
use rayon::prelude::*;
use tracing::debug;

pub struct WorkerPool {
    pool: rayon::ThreadPool,
    size: usize,
}

impl WorkerPool {
    /// Build a pool with `size` worker threads. `0` means one per logical CPU.
    pub fn new(size: usize) -> Result<Self> {
        let size = if size == 0 { num_cpus::get() } else { size };
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(size)
            .thread_name(|i| format!("freqsort-worker-{i}"))
            .build()?;
        debug!("Worker pool started with {size} threads");
        Ok(Self { pool, size })
    }

    /// Number of worker threads.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Apply `f` to every item on the pool's workers and collect the results.
    ///
    /// Work is dispatched out of order, but the output keeps input order.
    pub fn map<T, U, F>(&self, items: Vec<T>, f: F) -> Vec<U>
    where
        T: Send,
        U: Send,
        F: Fn(T) -> U + Sync + Send,
    {
        if items.is_empty() {
            return Vec::new();
        }
        self.pool.install(|| items.into_par_iter().map(f).collect())
    }

    /// Release the worker threads now rather than at end of scope.
    pub fn shutdown(self) {}
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        debug!("Worker pool with {} threads released", self.size);
    }
}

/// One-shot form of [`WorkerPool::map`]: build a pool of `pool_size`
/// threads, map `items` through `f`, and release the pool.
pub fn parallel_map<T, U, F>(items: Vec<T>, f: F, pool_size: usize) -> Result<Vec<U>>
where
    T: Send,
    U: Send,
    F: Fn(T) -> U + Sync + Send,
{
    let pool = WorkerPool::new(pool_size)?;
    let out = pool.map(items, f);
    pool.shutdown();
    Ok(out)
}

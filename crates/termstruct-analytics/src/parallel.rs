//! Per-date fan-out.
//!
//! Dates are independent, so curve construction maps over them with rayon
//! when the `parallel` feature is enabled and sequentially otherwise. Output
//! order always matches input order.

/// Maps `f` over `items`, in parallel when the `parallel` feature is enabled.
pub fn maybe_parallel_map<T, U, F>(items: &[T], f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        items.par_iter().map(f).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        items.iter().map(f).collect()
    }
}

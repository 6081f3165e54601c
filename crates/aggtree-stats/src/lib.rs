//! aggtree-stats records operation latencies for aggtree when the `profiler` feature is on.
//!
//! Latencies are kept in [DDSketch](https://arxiv.org/abs/1908.10693) sketches so that
//! percentiles can be reported without storing every sample.

use core::cell::RefCell;
use minstant::Instant;
use sketches_ddsketch::{Config, DDSketch};
use std::rc::Rc;

/// Records the time from this point until the end of the enclosing scope into a [Sketch].
#[macro_export]
macro_rules! profile_scope {
    ($sketch:expr) => {
        let _measure = $crate::Measure::new($sketch);
    };
}

/// Latency percentiles in nanoseconds, all zero for an empty sketch
#[derive(Default, Clone, Copy, PartialEq)]
pub struct Percentiles {
    /// Number of recorded samples
    pub count: usize,
    /// Smallest sample
    pub min: f64,
    /// Median
    pub p50: f64,
    /// 90th percentile
    pub p90: f64,
    /// 99th percentile
    pub p99: f64,
    /// Largest sample
    pub max: f64,
}

impl std::fmt::Debug for Percentiles {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ns = |v: f64| format!("{v:.2}ns");
        f.debug_struct("Percentiles")
            .field("count", &self.count)
            .field("min", &ns(self.min))
            .field("p50", &ns(self.p50))
            .field("p90", &ns(self.p90))
            .field("p99", &ns(self.p99))
            .field("max", &ns(self.max))
            .finish()
    }
}

/// A shared latency sketch
///
/// Clones share the same underlying sketch.
#[derive(Clone)]
pub struct Sketch {
    inner: Rc<RefCell<DDSketch>>,
}

impl Default for Sketch {
    fn default() -> Self {
        // 1% relative accuracy
        let config = Config::new(0.01, 2048, 1.0e-9);
        Self {
            inner: Rc::new(RefCell::new(DDSketch::new(config))),
        }
    }
}

impl Sketch {
    /// Adds a sample to the sketch
    #[inline]
    pub fn add(&self, data: f64) {
        self.inner.borrow_mut().add(data)
    }
    /// Returns the number of recorded samples
    pub fn count(&self) -> usize {
        self.inner.borrow().count()
    }
    /// Returns the current percentiles of the sketch
    pub fn percentiles(&self) -> Percentiles {
        let sketch = self.inner.borrow();
        let quantile = |q: f64| sketch.quantile(q).ok().flatten().unwrap_or(0.0);
        Percentiles {
            count: sketch.count(),
            min: sketch.min().unwrap_or(0.0),
            p50: quantile(0.5),
            p90: quantile(0.9),
            p99: quantile(0.99),
            max: sketch.max().unwrap_or(0.0),
        }
    }
}

/// Scope guard that records its lifetime into a [Sketch] on drop
// Inspired by https://github.com/spacejam/sled/blob/main/src/metrics.rs
pub struct Measure {
    start: Instant,
    sketch: Sketch,
}

impl Measure {
    /// Starts a new measurement
    #[inline]
    pub fn new(sketch: &Sketch) -> Measure {
        Measure {
            sketch: sketch.clone(), // clones Rc
            start: Instant::now(),
        }
    }
}

impl Drop for Measure {
    #[inline]
    fn drop(&mut self) {
        self.sketch.add(self.start.elapsed().as_nanos() as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_records_on_drop() {
        let sketch = Sketch::default();
        {
            profile_scope!(&sketch);
        }
        {
            let _m = Measure::new(&sketch);
        }
        assert_eq!(sketch.count(), 2);
        assert_eq!(sketch.percentiles().count, 2);
    }

    #[test]
    fn empty_sketch_percentiles() {
        let p = Sketch::default().percentiles();
        assert_eq!(p, Percentiles::default());
    }

    #[test]
    fn clones_share_samples() {
        let sketch = Sketch::default();
        let other = sketch.clone();
        other.add(10.0);
        sketch.add(20.0);
        assert_eq!(sketch.count(), 2);
        let p = other.percentiles();
        assert_eq!(p.count, 2);
        assert_eq!(p.min, 10.0);
        assert_eq!(p.max, 20.0);
    }
}

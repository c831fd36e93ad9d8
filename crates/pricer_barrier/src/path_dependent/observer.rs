//! PathObserver: streaming extremum accumulation for a single path.
//!
//! Barrier payoffs only need the running maximum, running minimum and the
//! terminal price, so a path is reduced to those three numbers in one pass.

/// Streaming path statistics.
///
/// # Example
///
/// ```
/// use pricer_barrier::path_dependent::PathObserver;
///
/// let observer = PathObserver::from_path(&[100.0, 105.0, 110.0, 95.0]);
///
/// assert_eq!(observer.maximum(), 110.0);
/// assert_eq!(observer.minimum(), 95.0);
/// assert_eq!(observer.terminal(), 95.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathObserver {
    running_max: f64,
    running_min: f64,
    terminal: f64,
}

impl PathObserver {
    /// Creates a new empty observer.
    #[inline]
    pub fn new() -> Self {
        Self {
            running_max: f64::NEG_INFINITY,
            running_min: f64::INFINITY,
            terminal: 0.0,
        }
    }

    /// Observes every price of `path` in order.
    #[inline]
    pub fn from_path(path: &[f64]) -> Self {
        let mut observer = Self::new();
        for &price in path {
            observer.observe(price);
        }
        observer
    }

    /// Observes a new price. The latest observation becomes the terminal price.
    #[inline]
    pub fn observe(&mut self, price: f64) {
        self.running_max = self.running_max.max(price);
        self.running_min = self.running_min.min(price);
        self.terminal = price;
    }

    /// Running maximum; `-inf` before the first observation.
    #[inline]
    pub fn maximum(&self) -> f64 {
        self.running_max
    }

    /// Running minimum; `+inf` before the first observation.
    #[inline]
    pub fn minimum(&self) -> f64 {
        self.running_min
    }

    /// Last observed price.
    #[inline]
    pub fn terminal(&self) -> f64 {
        self.terminal
    }
}

impl Default for PathObserver {
    fn default() -> Self {
        Self::new()
    }
}

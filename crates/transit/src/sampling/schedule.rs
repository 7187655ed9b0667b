use serde::{Deserialize, Serialize};

/// Adaptation window layout for [`super::AdaptiveMetropolis`].
///
/// Tuning runs for `n_tune` steps split into an initial warmup on the
/// starting proposal, a sequence of doubling windows after each of which
/// the proposal covariance is re-estimated, and a final stretch on the
/// frozen proposal so the last windows' statistics settle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TuningSchedule {
    n_tune: usize,
    window_closes: Vec<usize>,
}

impl TuningSchedule {
    const DEFAULT_INITIAL: usize = 75;
    const DEFAULT_WINDOW: usize = 25;
    const DEFAULT_FINAL: usize = 50;

    /// The standard layout: 75 warmup steps, doubling windows starting at
    /// 25 steps, 50 frozen steps at the end. Short budgets scale the
    /// segments down proportionally.
    pub fn new(n_tune: usize) -> Self {
        let scale = |x: usize| (x * n_tune / 500).clamp(1, x);
        Self::with_layout(
            n_tune,
            scale(Self::DEFAULT_INITIAL),
            scale(Self::DEFAULT_WINDOW),
            scale(Self::DEFAULT_FINAL),
        )
    }

    /// Explicit window layout; all segments are clipped to fit `n_tune`.
    pub fn with_layout(n_tune: usize, initial: usize, window: usize, last: usize) -> Self {
        let mut window_closes = Vec::new();
        let adapt_end = n_tune.saturating_sub(last);
        let mut close = initial.max(1);
        let mut width = window.max(1);

        while close < adapt_end {
            window_closes.push(close);
            close += width;
            width *= 2;
        }
        if adapt_end > 0 && window_closes.last() != Some(&adapt_end) {
            window_closes.push(adapt_end);
        }

        Self { n_tune, window_closes }
    }

    pub fn n_tune(&self) -> usize {
        self.n_tune
    }

    /// Whether `step` (zero-based) is still inside the tuning phase.
    pub fn is_tuning(&self, step: usize) -> bool {
        step < self.n_tune
    }

    /// Whether an adaptation window closes after `step`, meaning the
    /// proposal should be re-estimated from the samples gathered so far.
    pub fn window_closes_at(&self, step: usize) -> bool {
        self.window_closes.binary_search(&step).is_ok()
    }

    /// Steps at which adaptation windows close.
    pub fn window_closes(&self) -> &[usize] {
        &self.window_closes
    }
}

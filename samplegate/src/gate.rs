use crate::{Config, ConfigurationError, Interval, RangeMode};
use log::{debug, trace};

/// The outcome of classifying a single sample against a gate's ranges.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Accepted,
    Rejected,
    NaN,
    Absent,
}

impl Classification {
    pub fn is_accepted(&self) -> bool {
        *self == Classification::Accepted
    }
}

/// A single configuration step recorded by the `Builder`.
#[derive(Copy, Clone, Debug)]
enum Step {
    Mode(RangeMode),
    Range(Interval),
    RangeWithMode(Interval, RangeMode),
}

/// Records gate configuration and applies it in order when built.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    steps: Vec<Step>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the range mode. See `SampleGate::set_mode`.
    pub fn mode(mut self, mode: RangeMode) -> Self {
        self.steps.push(Step::Mode(mode));
        self
    }

    /// Add a range. See `SampleGate::add_range`.
    pub fn range(mut self, interval: impl Into<Interval>) -> Self {
        self.steps.push(Step::Range(interval.into()));
        self
    }

    /// Add a range with a required mode. See
    /// `SampleGate::add_range_with_mode`.
    pub fn range_with_mode(mut self, interval: impl Into<Interval>, mode: RangeMode) -> Self {
        self.steps.push(Step::RangeWithMode(interval.into(), mode));
        self
    }

    /// Replays the recorded steps against a new gate, stopping at the first
    /// one that fails.
    pub fn build(self) -> Result<SampleGate, ConfigurationError> {
        let mut gate = SampleGate::new();

        for step in self.steps {
            match step {
                Step::Mode(mode) => gate.set_mode(mode)?,
                Step::Range(interval) => gate.add_range(interval),
                Step::RangeWithMode(interval, mode) => gate.add_range_with_mode(interval, mode)?,
            }
        }

        Ok(gate)
    }
}

/// Decides which samples offered to a statistics processor are used in its
/// calculations, and counts the samples seen.
///
/// Stored intervals are interpreted according to the gate's `RangeMode`.
/// Only the first stored interval takes part in a decision; any others are
/// kept and reported by `ranges()` but never consulted. NaN and absent
/// samples are never accepted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleGate {
    ranges: Vec<Interval>,
    mode: RangeMode,
    num_offered: u64,
    num_accepted: u64,
    num_nan: u64,
}

impl SampleGate {
    /// Create a gate with an undefined range mode and no ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gate with its range mode already set.
    pub fn with_mode(mode: RangeMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Adds a range. If the mode is still undefined it becomes `Excluded`.
    /// Overlapping ranges are permitted.
    pub fn add_range(&mut self, interval: impl Into<Interval>) {
        if !self.mode.is_fixed() {
            self.fix_mode(RangeMode::Excluded);
        }

        self.ranges.push(interval.into());
    }

    /// Adds a range which must be interpreted with `mode`. An undefined gate
    /// adopts `mode`. If the gate's mode is already fixed to something else
    /// the range is not stored and an error is returned.
    pub fn add_range_with_mode(
        &mut self,
        interval: impl Into<Interval>,
        mode: RangeMode,
    ) -> Result<(), ConfigurationError> {
        if !mode.is_fixed() {
            debug!("refusing to store a range with an undefined mode");
            return Err(ConfigurationError::UndefinedMode);
        }

        let mode = self.mode.transition(mode).map_err(|e| {
            debug!("refusing range: {e}");
            e
        })?;

        if mode != self.mode {
            self.fix_mode(mode);
        }

        self.ranges.push(interval.into());
        Ok(())
    }

    /// Sets the range mode. Fails if the mode has already been fixed, even if
    /// the request matches the current mode.
    pub fn set_mode(&mut self, mode: RangeMode) -> Result<(), ConfigurationError> {
        if self.mode.is_fixed() {
            let e = ConfigurationError::ModeAlreadyFixed { current: self.mode };
            debug!("refusing mode change to {mode}: {e}");
            return Err(e);
        }

        if mode.is_fixed() {
            self.fix_mode(mode);
        }

        Ok(())
    }

    fn fix_mode(&mut self, mode: RangeMode) {
        debug!("range mode fixed as {mode}");
        self.mode = mode;
    }

    /// Adds a range. Retained alias for `add_range`.
    #[deprecated(note = "use `add_range`")]
    pub fn add_excluded_range(&mut self, interval: impl Into<Interval>) {
        self.add_range(interval)
    }

    /// The stored ranges in insertion order.
    pub fn ranges(&self) -> &[Interval] {
        &self.ranges
    }

    /// Retained alias for `ranges`.
    #[deprecated(note = "use `ranges`")]
    pub fn excluded_ranges(&self) -> &[Interval] {
        self.ranges()
    }

    pub fn mode(&self) -> RangeMode {
        self.mode
    }

    pub fn num_offered(&self) -> u64 {
        self.num_offered
    }

    pub fn num_accepted(&self) -> u64 {
        self.num_accepted
    }

    pub fn num_nan(&self) -> u64 {
        self.num_nan
    }

    /// Snapshot of the mode and ranges. Counters are not included.
    pub fn config(&self) -> Config {
        Config {
            mode: self.mode,
            ranges: self.ranges.clone(),
        }
    }

    /// Classifies a sample without touching any counters.
    pub fn classify(&self, sample: impl Into<Option<f64>>) -> Classification {
        let sample = match sample.into() {
            None => return Classification::Absent,
            Some(sample) if sample.is_nan() => return Classification::NaN,
            Some(sample) => sample,
        };

        // the decision is made by the first range alone
        let accepted = match (self.mode, self.ranges.first()) {
            (RangeMode::Excluded, Some(range)) => !range.contains(sample),
            (RangeMode::Included, Some(range)) => range.contains(sample),
            _ => true,
        };

        if accepted {
            Classification::Accepted
        } else {
            Classification::Rejected
        }
    }

    /// Returns true if the sample should be used in calculations. Absent and
    /// NaN samples are not accepted, and each NaN is counted.
    pub fn is_accepted(&mut self, sample: impl Into<Option<f64>>) -> bool {
        match self.classify(sample) {
            Classification::Accepted => true,
            Classification::NaN => {
                self.record_nan();
                false
            }
            Classification::Rejected | Classification::Absent => false,
        }
    }

    /// Returns true if the sample should be left out of calculations. Absent
    /// and NaN samples are excluded, and each NaN is counted.
    #[deprecated(note = "use `is_accepted` with the opposite logic")]
    pub fn is_excluded(&mut self, sample: impl Into<Option<f64>>) -> bool {
        match self.classify(sample) {
            Classification::Accepted => false,
            Classification::NaN => {
                self.record_nan();
                true
            }
            Classification::Rejected | Classification::Absent => true,
        }
    }

    fn record_nan(&mut self) {
        self.num_nan += 1;
        trace!("NaN sample, {} seen", self.num_nan);
    }

    pub(crate) fn record_offered(&mut self) {
        self.num_offered += 1;
    }

    pub(crate) fn record_accepted(&mut self) {
        self.num_accepted += 1;
    }
}

impl From<Config> for SampleGate {
    /// Seeds the mode and then adds each range with `add_range`, so ranges
    /// under an undefined mode produce an `Excluded` gate.
    fn from(config: Config) -> Self {
        let mut gate = SampleGate::with_mode(config.mode);

        for range in config.ranges {
            gate.add_range(range);
        }

        gate
    }
}

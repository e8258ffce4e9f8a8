use crate::SampleGate;
use core::hash::Hash;
use std::collections::HashMap;

/// A streaming statistics calculator built on top of a `SampleGate`.
///
/// Implementors embed a gate and provide `update`, which consumes a sample
/// (usually after checking `SampleGate::is_accepted`) and reports whether it
/// was used. Samples should be passed in through `offer`, which keeps the
/// gate's offered and accepted counters in step with `update`.
pub trait Processor {
    /// The kinds of statistic this processor can report.
    type Statistic: Copy + Eq + Hash;

    fn gate(&self) -> &SampleGate;

    fn gate_mut(&mut self) -> &mut SampleGate;

    /// Process a sample offered by the client. Returns true if the sample was
    /// used in calculations.
    fn update(&mut self, sample: Option<f64>) -> bool;

    /// The statistics reported by `get`.
    fn supported(&self) -> &[Self::Statistic];

    /// The current value of a statistic, or `None` if it is not supported.
    fn statistic(&self, statistic: Self::Statistic) -> Option<f64>;

    /// Offer a sample to the processor.
    fn offer(&mut self, sample: impl Into<Option<f64>>)
    where
        Self: Sized,
    {
        self.gate_mut().record_offered();
        if self.update(sample.into()) {
            self.gate_mut().record_accepted();
        }
    }

    /// Offer each sample in turn.
    fn offer_all<I>(&mut self, samples: I)
    where
        Self: Sized,
        I: IntoIterator,
        I::Item: Into<Option<f64>>,
    {
        for sample in samples {
            self.offer(sample);
        }
    }

    /// Current values of all supported statistics.
    fn get(&self) -> HashMap<Self::Statistic, f64> {
        self.supported()
            .iter()
            .filter_map(|s| self.statistic(*s).map(|v| (*s, v)))
            .collect()
    }

    fn num_offered(&self) -> u64 {
        self.gate().num_offered()
    }

    fn num_accepted(&self) -> u64 {
        self.gate().num_accepted()
    }

    fn num_nan(&self) -> u64 {
        self.gate().num_nan()
    }
}

//! This crate provides the sample acceptance gate which sits in front of
//! streaming statistics calculators.
//!
//! Clients offer scalar samples one at a time. Each sample is classified
//! against a list of ranges which are interpreted either as the values to
//! accept (`RangeMode::Included`) or the values to reject
//! (`RangeMode::Excluded`). Absent and NaN samples are never accepted. The
//! gate also counts the samples offered, accepted, and the NaNs seen.
//!
//! * `SampleGate` - the range list, mode, counters, and decision logic
//! * `Processor` - the trait a statistics calculator implements to receive
//!    accepted samples
//! * `Config` / `Builder` - construct a gate from data or a chain of calls
//!
//! ```
//! use samplegate::{Interval, RangeMode, SampleGate};
//!
//! let mut gate = SampleGate::new();
//! gate.add_range_with_mode(Interval::closed(0.0, 10.0), RangeMode::Included)
//!     .unwrap();
//!
//! assert!(gate.is_accepted(5.0));
//! assert!(!gate.is_accepted(20.0));
//! assert!(!gate.is_accepted(f64::NAN));
//! assert_eq!(gate.num_nan(), 1);
//! ```

mod config;
mod errors;
mod gate;
mod interval;
mod mode;
mod processor;

pub use config::Config;
pub use errors::ConfigurationError;
pub use gate::{Builder, Classification, SampleGate};
pub use interval::Interval;
pub use mode::RangeMode;
pub use processor::Processor;

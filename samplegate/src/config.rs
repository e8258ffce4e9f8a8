use crate::{Interval, RangeMode};

/// The configuration of a `SampleGate`: its range mode and ranges. Convert
/// into a gate with `SampleGate::from`, or take a snapshot of an existing
/// gate with `SampleGate::config`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Config {
    pub mode: RangeMode,
    pub ranges: Vec<Interval>,
}

impl Config {
    pub fn new(mode: RangeMode) -> Self {
        Self {
            mode,
            ranges: Vec::new(),
        }
    }

    pub fn with_range(mut self, interval: impl Into<Interval>) -> Self {
        self.ranges.push(interval.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SampleGate;

    #[test]
    fn default() {
        let gate = SampleGate::from(Config::default());
        assert_eq!(gate.mode(), RangeMode::Undefined);
        assert!(gate.ranges().is_empty());
    }

    #[test]
    fn undefined_mode_with_ranges_becomes_excluded() {
        let config = Config::default()
            .with_range(0.0..=1.0)
            .with_range(5.0..10.0);
        let gate = SampleGate::from(config);
        assert_eq!(gate.mode(), RangeMode::Excluded);
        assert_eq!(gate.ranges().len(), 2);
    }

    #[test]
    fn seeded_mode_is_kept() {
        let mut gate = SampleGate::from(Config::new(RangeMode::Included).with_range(0.0..=1.0));
        assert_eq!(gate.mode(), RangeMode::Included);
        assert!(gate.is_accepted(0.5));
        assert!(!gate.is_accepted(1.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        let config = Config::new(RangeMode::Included).with_range(Interval::closed_open(0.0, 10.0));

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(
            json,
            r#"{"mode":"included","ranges":[{"lower":0.0,"lower_included":true,"upper":10.0,"upper_included":false}]}"#
        );
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);

        // missing fields take their defaults
        assert_eq!(serde_json::from_str::<Config>("{}").unwrap(), Config::default());
    }
}

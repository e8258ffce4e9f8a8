use crate::ConfigurationError;
use core::fmt;

/// How the intervals stored in a `SampleGate` are interpreted.
///
/// A gate starts out `Undefined`. The first range added (or an explicit
/// `set_mode`) fixes the mode to either `Included` or `Excluded`, and from then
/// on it can never change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum RangeMode {
    #[default]
    Undefined,
    /// Intervals describe the values which are accepted.
    Included,
    /// Intervals describe the values which are rejected.
    Excluded,
}

impl RangeMode {
    /// Returns true once the mode has left `Undefined`.
    pub fn is_fixed(&self) -> bool {
        *self != RangeMode::Undefined
    }

    /// Returns the mode that results from requesting `requested` while in
    /// `self`. An undefined mode adopts the request, a fixed mode only accepts
    /// a request for itself.
    pub fn transition(self, requested: RangeMode) -> Result<RangeMode, ConfigurationError> {
        match self {
            RangeMode::Undefined => Ok(requested),
            current if current == requested => Ok(current),
            current => Err(ConfigurationError::IncompatibleMode { current, requested }),
        }
    }
}

impl fmt::Display for RangeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RangeMode::Undefined => "undefined",
            RangeMode::Included => "included",
            RangeMode::Excluded => "excluded",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_undefined() {
        assert_eq!(RangeMode::default(), RangeMode::Undefined);
        assert!(!RangeMode::default().is_fixed());
    }

    #[test]
    fn transitions() {
        assert_eq!(
            RangeMode::Undefined.transition(RangeMode::Included),
            Ok(RangeMode::Included)
        );
        assert_eq!(
            RangeMode::Undefined.transition(RangeMode::Excluded),
            Ok(RangeMode::Excluded)
        );
        assert_eq!(
            RangeMode::Excluded.transition(RangeMode::Excluded),
            Ok(RangeMode::Excluded)
        );
        assert_eq!(
            RangeMode::Included.transition(RangeMode::Excluded),
            Err(ConfigurationError::IncompatibleMode {
                current: RangeMode::Included,
                requested: RangeMode::Excluded,
            })
        );

        // a fixed mode can never go back
        assert!(RangeMode::Excluded
            .transition(RangeMode::Undefined)
            .is_err());
    }

    #[test]
    fn display() {
        assert_eq!(RangeMode::Included.to_string(), "included");
        assert_eq!(
            ConfigurationError::ModeAlreadyFixed {
                current: RangeMode::Excluded
            }
            .to_string(),
            "range mode is already fixed as excluded"
        );
    }
}

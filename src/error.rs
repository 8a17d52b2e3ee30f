//! Error taxonomy
//!
//! Only configuration problems and undefined operations are errors. Border
//! and enemy contact are ordinary round outcomes and never surface here.

use core::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    /// Border band leaves no legal interior in the viewport
    InvalidArena { width: f64, height: f64, border: f64 },
    /// A configuration value is out of its allowed range
    InvalidConfig { field: &'static str, reason: String },
    /// Speed rescale requested on an entity with no direction
    ZeroSpeed,
    /// Enemy placement ran out of retries
    SpawnStarvation {
        placed: usize,
        requested: usize,
        attempts: u32,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArena {
                width,
                height,
                border,
            } => write!(
                f,
                "invalid arena: border {border} leaves no interior in {width}x{height} viewport"
            ),
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config `{field}`: {reason}")
            }
            Self::ZeroSpeed => write!(f, "cannot rescale a zero-velocity entity"),
            Self::SpawnStarvation {
                placed,
                requested,
                attempts,
            } => write!(
                f,
                "spawn starvation: placed {placed}/{requested} enemies after {attempts} attempts \
                 (arena too small for enemy count/sizes)"
            ),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = GameError::InvalidArena {
            width: 100.0,
            height: 100.0,
            border: 50.0,
        };
        assert!(err.to_string().contains("border 50"));

        let err = GameError::SpawnStarvation {
            placed: 1,
            requested: 4,
            attempts: 10,
        };
        assert!(err.to_string().contains("1/4"));
        assert_eq!(
            GameError::ZeroSpeed.to_string(),
            "cannot rescale a zero-velocity entity"
        );
    }
}

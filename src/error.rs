//! Error taxonomy for the puncturable PRF

use thiserror::Error;

/// Errors raised by PPRF construction, evaluation and puncturing
///
/// Variants are deterministic precondition violations, not transient
/// faults: retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PprfError {
    /// Invalid security parameter or domain size at construction time
    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    /// Index outside the valid range (global domain or shard-local)
    #[error("Index {index} is out of range, must be below {bound}")]
    Domain { index: u64, bound: u64 },

    /// Evaluation requested at a point that has been punctured
    #[error("Point {index} has been punctured")]
    Punctured { index: u64 },

    /// The modulus source could not produce a modulus
    #[error("Modulus generation failed: {0}")]
    KeyGeneration(String),
}

impl PprfError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }

    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }

    #[must_use]
    pub fn is_punctured(&self) -> bool {
        matches!(self, Self::Punctured { .. })
    }

    /// Rewrites a shard-local index into its global position
    ///
    /// Shards report indices relative to their own sub-domain; the
    /// coordinator calls this so callers see the index they passed in.
    pub(crate) fn globalize(self, offset: u64) -> Self {
        match self {
            Self::Punctured { index } => Self::Punctured {
                index: index + offset,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_predicates() {
        assert!(PprfError::config("bad").is_config());
        assert!(PprfError::Domain { index: 5, bound: 4 }.is_domain());
        assert!(PprfError::Punctured { index: 0 }.is_punctured());
        assert!(!PprfError::Punctured { index: 0 }.is_domain());
    }

    #[test]
    fn test_error_messages() {
        let err = PprfError::Domain {
            index: 500,
            bound: 464,
        };
        assert_eq!(
            err.to_string(),
            "Index 500 is out of range, must be below 464"
        );
        assert_eq!(
            PprfError::Punctured { index: 7 }.to_string(),
            "Point 7 has been punctured"
        );
    }

    #[test]
    fn test_globalize_only_rewrites_punctured() {
        let err = PprfError::Punctured { index: 3 }.globalize(232);
        assert_eq!(err, PprfError::Punctured { index: 235 });

        let err = PprfError::Domain {
            index: 300,
            bound: 232,
        }
        .globalize(232);
        assert_eq!(
            err,
            PprfError::Domain {
                index: 300,
                bound: 232
            }
        );
    }
}

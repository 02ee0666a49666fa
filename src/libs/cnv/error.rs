use std::fmt;

/// Validation failures raised before a distance computation starts.
///
/// Both variants are caller-supplied-input problems; a caller filling a whole
/// matrix can catch-and-skip individual pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The two profiles do not have the same number of segments
    LengthMismatch { base: usize, target: usize },
    /// The base profile contains zero positions and pruning was not permitted
    ForbiddenBaseZeros,
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::LengthMismatch { base, target } => {
                write!(
                    f,
                    "profiles differ in length: base has {} segments, target has {}",
                    base, target
                )
            }
            ProfileError::ForbiddenBaseZeros => {
                write!(
                    f,
                    "base profile contains forbidden zero positions; \
                     enable pruning to remove them from both profiles"
                )
            }
        }
    }
}

impl std::error::Error for ProfileError {}

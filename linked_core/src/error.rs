#[cfg(feature = "std")]
use thiserror::Error;

/// Container errors
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DsError {
    /// The element contract was missing or unusable; no container was created.
    #[cfg_attr(feature = "std", error("invalid configuration: {0}"))]
    InvalidConfiguration(&'static str),

    /// A byte buffer did not match the element size of the contract.
    #[cfg_attr(
        feature = "std",
        error("element size mismatch: expected {expected} bytes, found {found}")
    )]
    SizeMismatch { expected: usize, found: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for DsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DsError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {}", reason)
            }
            DsError::SizeMismatch { expected, found } => write!(
                f,
                "element size mismatch: expected {} bytes, found {}",
                expected, found
            ),
        }
    }
}

//! Error types for the tapgen-filters crate.

use crate::wavelet::Family;

/// Error type for all fallible operations in the tapgen-filters crate.
///
/// Both variants mean the requested wavelet has no bundled coefficients;
/// they differ only in how much of the name was understood.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    /// Returned when the name matches no known wavelet family.
    #[error("unknown wavelet name '{0}'")]
    UnknownWavelet(String),

    /// Returned when the family is known but the order is not bundled.
    #[error("{family} wavelet order {order} is not available")]
    InvalidOrder {
        /// Family recognised from the name prefix.
        family: Family,
        /// Order as written in the name.
        order: String,
    },
}

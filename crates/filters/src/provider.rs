//! Coefficient lookup by wavelet name.

use tracing::debug;

use crate::bank::FilterBank;
use crate::error::FilterError;
use crate::wavelet::Wavelet;

/// Source of wavelet filter banks keyed by wavelet identifier.
pub trait CoefficientProvider {
    /// Looks up the four filters for `identifier`.
    ///
    /// # Errors
    ///
    /// Returns a [`FilterError`] if the identifier is not recognised or has
    /// no coefficients.
    fn lookup(&self, identifier: &str) -> Result<FilterBank, FilterError>;
}

/// Provider backed by the coefficient tables compiled into this crate.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinFilters;

impl CoefficientProvider for BuiltinFilters {
    #[tracing::instrument(skip(self))]
    fn lookup(&self, identifier: &str) -> Result<FilterBank, FilterError> {
        let wavelet = Wavelet::from_name(identifier)?;
        let bank = FilterBank::new(wavelet)?;
        debug!(wavelet = %wavelet, taps = bank.len(), "filter bank built");
        Ok(bank)
    }
}

impl<P: CoefficientProvider + ?Sized> CoefficientProvider for &P {
    fn lookup(&self, identifier: &str) -> Result<FilterBank, FilterError> {
        (**self).lookup(identifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lookup_haar() {
        let bank = BuiltinFilters.lookup("haar").unwrap();
        assert_eq!(bank.wavelet(), Wavelet::Haar);
        assert_eq!(bank.len(), 2);
    }

    #[test]
    fn builtin_lookup_unknown() {
        let err = BuiltinFilters.lookup("nonexistent_wavelet_xyz").unwrap_err();
        assert_eq!(
            err,
            FilterError::UnknownWavelet("nonexistent_wavelet_xyz".into())
        );
    }

    #[test]
    fn provider_through_reference_and_dyn() {
        let provider: &dyn CoefficientProvider = &BuiltinFilters;
        assert_eq!(provider.lookup("db3").unwrap().len(), 6);
        let by_ref = &BuiltinFilters;
        assert_eq!(by_ref.lookup("coif1").unwrap().len(), 6);
    }
}

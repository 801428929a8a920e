//! Four-filter banks built from the bundled tables.

use crate::error::FilterError;
use crate::tables;
use crate::wavelet::Wavelet;

/// Role of one filter within a [`FilterBank`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FilterRole {
    /// Decomposition low-pass.
    DecLo,
    /// Decomposition high-pass.
    DecHi,
    /// Reconstruction low-pass.
    RecLo,
    /// Reconstruction high-pass.
    RecHi,
}

impl FilterRole {
    /// All roles in export order.
    pub const ALL: [FilterRole; 4] = [
        FilterRole::DecLo,
        FilterRole::DecHi,
        FilterRole::RecLo,
        FilterRole::RecHi,
    ];

    /// Returns the symbol suffix for this role (`"lo_d"`, `"hi_d"`, ...).
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::DecLo => "lo_d",
            Self::DecHi => "hi_d",
            Self::RecLo => "lo_r",
            Self::RecHi => "hi_r",
        }
    }
}

/// Decomposition and reconstruction filters of one wavelet.
///
/// All four filters have the same length. Only the low-pass pair is
/// tabulated; the high-pass pair is derived by alternating signs:
///
/// ```text
/// rec_hi[i] = (-1)^i         * dec_lo[i]
/// dec_hi[i] = (-1)^(L-1-i)   * rec_lo[i]
/// ```
///
/// # Example
///
/// ```
/// use tapgen_filters::{FilterBank, Wavelet};
///
/// let bank = FilterBank::new(Wavelet::Haar).unwrap();
/// assert_eq!(bank.len(), 2);
/// assert!(bank.dec_hi()[0] < 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FilterBank {
    wavelet: Wavelet,
    dec_lo: Vec<f64>,
    dec_hi: Vec<f64>,
    rec_lo: Vec<f64>,
    rec_hi: Vec<f64>,
}

impl FilterBank {
    /// Builds the filter bank for a bundled wavelet.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidOrder`] if the wavelet's order has no
    /// bundled coefficients.
    pub fn new(wavelet: Wavelet) -> Result<Self, FilterError> {
        let missing = || FilterError::InvalidOrder {
            family: wavelet.family(),
            order: wavelet
                .name()
                .trim_start_matches(wavelet.family().short_name())
                .to_string(),
        };

        let (rec_lo, dec_lo): (Vec<f64>, Vec<f64>) = match wavelet {
            Wavelet::Haar => orthogonal(tables::daubechies(1).ok_or_else(missing)?),
            Wavelet::Daubechies(n) => orthogonal(tables::daubechies(n).ok_or_else(missing)?),
            Wavelet::Symlet(n) => orthogonal(tables::symlet(n).ok_or_else(missing)?),
            Wavelet::Coiflet(n) => orthogonal(tables::coiflet(n).ok_or_else(missing)?),
            Wavelet::DiscreteMeyer => orthogonal(tables::discrete_meyer()),
            Wavelet::Biorthogonal(n, m) => {
                let (primal, dual) = tables::biorthogonal(n, m).ok_or_else(missing)?;
                (primal.to_vec(), dual.iter().rev().copied().collect())
            }
            Wavelet::ReverseBiorthogonal(n, m) => {
                let (primal, dual) = tables::biorthogonal(n, m).ok_or_else(missing)?;
                (dual.to_vec(), primal.iter().rev().copied().collect())
            }
        };

        let len = rec_lo.len();
        let rec_hi = dec_lo
            .iter()
            .enumerate()
            .map(|(i, &c)| alternate(i) * c)
            .collect();
        let dec_hi = rec_lo
            .iter()
            .enumerate()
            .map(|(i, &c)| alternate(len - 1 - i) * c)
            .collect();

        Ok(Self {
            wavelet,
            dec_lo,
            dec_hi,
            rec_lo,
            rec_hi,
        })
    }

    /// Returns the wavelet this bank was built for.
    pub fn wavelet(&self) -> Wavelet {
        self.wavelet
    }

    /// Returns the number of taps in each filter.
    pub fn len(&self) -> usize {
        self.rec_lo.len()
    }

    /// Returns `true` if the filters have no taps.
    pub fn is_empty(&self) -> bool {
        self.rec_lo.is_empty()
    }

    /// Decomposition low-pass taps.
    pub fn dec_lo(&self) -> &[f64] {
        &self.dec_lo
    }

    /// Decomposition high-pass taps.
    pub fn dec_hi(&self) -> &[f64] {
        &self.dec_hi
    }

    /// Reconstruction low-pass taps.
    pub fn rec_lo(&self) -> &[f64] {
        &self.rec_lo
    }

    /// Reconstruction high-pass taps.
    pub fn rec_hi(&self) -> &[f64] {
        &self.rec_hi
    }

    /// Returns the taps for one role.
    pub fn get(&self, role: FilterRole) -> &[f64] {
        match role {
            FilterRole::DecLo => &self.dec_lo,
            FilterRole::DecHi => &self.dec_hi,
            FilterRole::RecLo => &self.rec_lo,
            FilterRole::RecHi => &self.rec_hi,
        }
    }

    /// Iterates over `(role, taps)` in export order.
    pub fn iter(&self) -> impl Iterator<Item = (FilterRole, &[f64])> + '_ {
        FilterRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }
}

/// `(rec_lo, dec_lo)` for an orthogonal filter.
fn orthogonal(rec_lo: &[f64]) -> (Vec<f64>, Vec<f64>) {
    (rec_lo.to_vec(), rec_lo.iter().rev().copied().collect())
}

/// `(-1)^k`
fn alternate(k: usize) -> f64 {
    if k % 2 == 0 { 1.0 } else { -1.0 }
}

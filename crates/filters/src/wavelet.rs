//! Wavelet names and families.

use std::fmt;
use std::str::FromStr;

use crate::error::FilterError;
use crate::tables;

/// Wavelet family, identified by the name prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// `haar`.
    Haar,
    /// `dbN`.
    Daubechies,
    /// `symN`.
    Symlet,
    /// `coifN`.
    Coiflet,
    /// `biorN.M`.
    Biorthogonal,
    /// `rbioN.M`.
    ReverseBiorthogonal,
    /// `dmey`.
    DiscreteMeyer,
}

impl Family {
    /// All families, in listing order.
    pub const ALL: [Family; 7] = [
        Family::Haar,
        Family::Daubechies,
        Family::Symlet,
        Family::Coiflet,
        Family::Biorthogonal,
        Family::ReverseBiorthogonal,
        Family::DiscreteMeyer,
    ];

    /// Families whose names carry an order after the prefix.
    const ORDERED: [Family; 5] = [
        Family::Daubechies,
        Family::Symlet,
        Family::Coiflet,
        Family::Biorthogonal,
        Family::ReverseBiorthogonal,
    ];

    /// Returns the name prefix (`"db"`, `"bior"`, ...).
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Haar => "haar",
            Self::Daubechies => "db",
            Self::Symlet => "sym",
            Self::Coiflet => "coif",
            Self::Biorthogonal => "bior",
            Self::ReverseBiorthogonal => "rbio",
            Self::DiscreteMeyer => "dmey",
        }
    }

    /// Returns `true` for families whose decomposition and reconstruction
    /// low-pass filters are time reversals of each other.
    pub fn is_orthogonal(&self) -> bool {
        !matches!(self, Self::Biorthogonal | Self::ReverseBiorthogonal)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Haar => "Haar",
            Self::Daubechies => "Daubechies",
            Self::Symlet => "Symlet",
            Self::Coiflet => "Coiflet",
            Self::Biorthogonal => "Biorthogonal",
            Self::ReverseBiorthogonal => "Reverse biorthogonal",
            Self::DiscreteMeyer => "Discrete Meyer",
        };
        f.write_str(name)
    }
}

/// A wavelet with bundled filter coefficients.
///
/// # Supported Names
///
/// | Input | Wavelet |
/// |-------|---------|
/// | `"haar"` | [`Wavelet::Haar`] |
/// | `"db1"` .. `"db20"` | [`Wavelet::Daubechies`] |
/// | `"sym2"` .. `"sym20"` | [`Wavelet::Symlet`] |
/// | `"coif1"` .. `"coif5"` | [`Wavelet::Coiflet`] |
/// | `"bior1.1"` .. `"bior6.8"` | [`Wavelet::Biorthogonal`] |
/// | `"rbio1.1"` .. `"rbio6.8"` | [`Wavelet::ReverseBiorthogonal`] |
/// | `"dmey"` | [`Wavelet::DiscreteMeyer`] |
///
/// The biorthogonal orders follow the usual table: 1.1, 1.3, 1.5, 2.2, 2.4,
/// 2.6, 2.8, 3.1, 3.3, 3.5, 3.7, 3.9, 4.4, 5.5 and 6.8.
///
/// # Example
///
/// ```
/// use tapgen_filters::Wavelet;
///
/// let wavelet = Wavelet::from_name("DB4").unwrap();
/// assert_eq!(wavelet, Wavelet::Daubechies(4));
/// assert_eq!(wavelet.name(), "db4");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Wavelet {
    /// Haar wavelet (same taps as `db1`).
    Haar,
    /// Daubechies wavelet with N vanishing moments.
    Daubechies(u8),
    /// Symlet with N vanishing moments.
    Symlet(u8),
    /// Coiflet of order N.
    Coiflet(u8),
    /// Biorthogonal spline wavelet N.M.
    Biorthogonal(u8, u8),
    /// Reverse biorthogonal spline wavelet N.M.
    ReverseBiorthogonal(u8, u8),
    /// FIR approximation of the Meyer wavelet.
    DiscreteMeyer,
}

impl Wavelet {
    /// Parses a wavelet from a case-insensitive name string.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::UnknownWavelet`] if the name does not match
    /// any family, and [`FilterError::InvalidOrder`] if the family is known
    /// but the order has no bundled coefficients.
    pub fn from_name(name: &str) -> Result<Self, FilterError> {
        let lower = name.to_lowercase();
        if lower == Family::Haar.short_name() {
            return Ok(Self::Haar);
        }
        if lower == Family::DiscreteMeyer.short_name() {
            return Ok(Self::DiscreteMeyer);
        }

        let unknown = || FilterError::UnknownWavelet(name.to_string());
        let (family, order) = Family::ORDERED
            .iter()
            .find_map(|f| lower.strip_prefix(f.short_name()).map(|rest| (*f, rest)))
            .ok_or_else(unknown)?;
        let invalid = || FilterError::InvalidOrder {
            family,
            order: order.to_string(),
        };
        let parse = |digits: &str| -> Result<u8, FilterError> {
            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(unknown());
            }
            digits.parse().map_err(|_| invalid())
        };

        let wavelet = match family {
            Family::Haar => Self::Haar,
            Family::DiscreteMeyer => Self::DiscreteMeyer,
            Family::Daubechies => Self::Daubechies(parse(order)?),
            Family::Symlet => Self::Symlet(parse(order)?),
            Family::Coiflet => Self::Coiflet(parse(order)?),
            Family::Biorthogonal | Family::ReverseBiorthogonal => {
                let (n, m) = order.split_once('.').ok_or_else(unknown)?;
                let (n, m) = (parse(n)?, parse(m)?);
                if family == Family::Biorthogonal {
                    Self::Biorthogonal(n, m)
                } else {
                    Self::ReverseBiorthogonal(n, m)
                }
            }
        };

        if wavelet.is_available() {
            Ok(wavelet)
        } else {
            Err(invalid())
        }
    }

    /// Returns the family this wavelet belongs to.
    pub fn family(&self) -> Family {
        match self {
            Self::Haar => Family::Haar,
            Self::Daubechies(_) => Family::Daubechies,
            Self::Symlet(_) => Family::Symlet,
            Self::Coiflet(_) => Family::Coiflet,
            Self::Biorthogonal(..) => Family::Biorthogonal,
            Self::ReverseBiorthogonal(..) => Family::ReverseBiorthogonal,
            Self::DiscreteMeyer => Family::DiscreteMeyer,
        }
    }

    /// Returns the canonical lowercase name (`"db4"`, `"bior2.2"`, ...).
    pub fn name(&self) -> String {
        let prefix = self.family().short_name();
        match self {
            Self::Haar | Self::DiscreteMeyer => prefix.to_string(),
            Self::Daubechies(n) | Self::Symlet(n) | Self::Coiflet(n) => format!("{prefix}{n}"),
            Self::Biorthogonal(n, m) | Self::ReverseBiorthogonal(n, m) => {
                format!("{prefix}{n}.{m}")
            }
        }
    }

    /// Returns `true` if coefficients for this wavelet are bundled.
    pub fn is_available(&self) -> bool {
        match *self {
            Self::Haar | Self::DiscreteMeyer => true,
            Self::Daubechies(n) => (1..=tables::DAUBECHIES_MAX).contains(&n),
            Self::Symlet(n) => (2..=tables::SYMLETS_MAX).contains(&n),
            Self::Coiflet(n) => (1..=tables::COIFLETS_MAX).contains(&n),
            Self::Biorthogonal(n, m) | Self::ReverseBiorthogonal(n, m) => {
                tables::biorthogonal_duals(n).any(|dual| dual == m)
            }
        }
    }

    /// Returns every bundled wavelet, grouped by family in [`Family::ALL`]
    /// order and ascending order within a family.
    pub fn all() -> Vec<Wavelet> {
        let mut all = vec![Self::Haar];
        all.extend((1..=tables::DAUBECHIES_MAX).map(Self::Daubechies));
        all.extend((2..=tables::SYMLETS_MAX).map(Self::Symlet));
        all.extend((1..=tables::COIFLETS_MAX).map(Self::Coiflet));
        let bior_orders = || {
            (1..=tables::BIORTHOGONAL_MAX)
                .flat_map(|n| tables::biorthogonal_duals(n).map(move |m| (n, m)))
        };
        all.extend(bior_orders().map(|(n, m)| Self::Biorthogonal(n, m)));
        all.extend(bior_orders().map(|(n, m)| Self::ReverseBiorthogonal(n, m)));
        all.push(Self::DiscreteMeyer);
        all
    }
}

impl fmt::Display for Wavelet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Wavelet {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_valid() {
        assert_eq!(Wavelet::from_name("haar").unwrap(), Wavelet::Haar);
        assert_eq!(Wavelet::from_name("Haar").unwrap(), Wavelet::Haar);
        assert_eq!(
            Wavelet::from_name("db4").unwrap(),
            Wavelet::Daubechies(4)
        );
        assert_eq!(
            Wavelet::from_name("DB10").unwrap(),
            Wavelet::Daubechies(10)
        );
        assert_eq!(Wavelet::from_name("sym5").unwrap(), Wavelet::Symlet(5));
        assert_eq!(Wavelet::from_name("coif2").unwrap(), Wavelet::Coiflet(2));
        assert_eq!(Wavelet::from_name("coif5").unwrap(), Wavelet::Coiflet(5));
        assert_eq!(
            Wavelet::from_name("db20").unwrap(),
            Wavelet::Daubechies(20)
        );
        assert_eq!(Wavelet::from_name("Sym20").unwrap(), Wavelet::Symlet(20));
        assert_eq!(Wavelet::from_name("dmey").unwrap(), Wavelet::DiscreteMeyer);
        assert_eq!(Wavelet::from_name("DMEY").unwrap(), Wavelet::DiscreteMeyer);
        assert_eq!(
            Wavelet::from_name("bior2.2").unwrap(),
            Wavelet::Biorthogonal(2, 2)
        );
        assert_eq!(
            Wavelet::from_name("RBIO6.8").unwrap(),
            Wavelet::ReverseBiorthogonal(6, 8)
        );
    }

    #[test]
    fn from_name_unknown() {
        for name in [
            "nonexistent_wavelet_xyz",
            "",
            "db",
            "dbx",
            "sym-2",
            "bior22",
            "mexh",
            " haar",
            "dmey1",
        ] {
            let err = Wavelet::from_name(name).unwrap_err();
            assert!(
                matches!(err, FilterError::UnknownWavelet(ref s) if s == name),
                "{name:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn from_name_invalid_order() {
        let err = Wavelet::from_name("db21").unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidOrder {
                family: Family::Daubechies,
                order: "21".into()
            }
        );

        let err = Wavelet::from_name("coif6").unwrap_err();
        assert!(matches!(err, FilterError::InvalidOrder { family: Family::Coiflet, .. }));

        let err = Wavelet::from_name("sym1").unwrap_err();
        assert!(matches!(err, FilterError::InvalidOrder { family: Family::Symlet, .. }));

        let err = Wavelet::from_name("bior2.1").unwrap_err();
        assert!(matches!(
            err,
            FilterError::InvalidOrder { family: Family::Biorthogonal, ref order } if order == "2.1"
        ));

        // overflowing digits are still an order problem, not an unknown name
        let err = Wavelet::from_name("db300").unwrap_err();
        assert!(matches!(err, FilterError::InvalidOrder { .. }));
    }

    #[test]
    fn names_round_trip() {
        for wavelet in Wavelet::all() {
            assert_eq!(Wavelet::from_name(&wavelet.name()).unwrap(), wavelet);
            assert_eq!(wavelet.name().parse::<Wavelet>().unwrap(), wavelet);
        }
    }

    #[test]
    fn all_counts() {
        let all = Wavelet::all();
        assert_eq!(all.len(), 1 + 20 + 19 + 5 + 15 + 15 + 1);
        assert!(all.iter().all(Wavelet::is_available));
        assert_eq!(all[0], Wavelet::Haar);
        assert!(all.contains(&Wavelet::Daubechies(20)));
        assert!(all.contains(&Wavelet::Symlet(20)));
        assert!(all.contains(&Wavelet::Coiflet(5)));
        assert_eq!(all.last(), Some(&Wavelet::DiscreteMeyer));
    }

    #[test]
    fn family_of() {
        assert_eq!(Wavelet::Haar.family(), Family::Haar);
        assert_eq!(Wavelet::Coiflet(1).family(), Family::Coiflet);
        assert_eq!(
            Wavelet::ReverseBiorthogonal(1, 1).family(),
            Family::ReverseBiorthogonal
        );
        assert_eq!(Wavelet::DiscreteMeyer.family(), Family::DiscreteMeyer);
        assert!(Family::Symlet.is_orthogonal());
        assert!(Family::DiscreteMeyer.is_orthogonal());
        assert!(!Family::Biorthogonal.is_orthogonal());
    }

    #[test]
    fn display_is_name() {
        assert_eq!(Wavelet::Biorthogonal(3, 7).to_string(), "bior3.7");
        assert_eq!(Family::ReverseBiorthogonal.to_string(), "Reverse biorthogonal");
        assert_eq!(Wavelet::DiscreteMeyer.to_string(), "dmey");
    }

    #[test]
    fn wavelet_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<Wavelet>();
    }
}

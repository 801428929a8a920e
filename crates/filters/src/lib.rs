//! # tapgen-filters
//!
//! Bundled wavelet filter banks, looked up by name.
//!
//! ## Lookup
//!
//! ```mermaid
//! graph LR
//!     A["identifier"] -->|"Wavelet::from_name"| B["Wavelet"]
//!     B -->|"FilterBank::new"| C["FilterBank"]
//!     C --> D[".dec_lo() .dec_hi()"]
//!     C --> E[".rec_lo() .rec_hi()"]
//! ```
//!
//! [`BuiltinFilters`] wraps both steps behind [`CoefficientProvider`].
//!
//! ## Supported Wavelets
//!
//! | Family | Names | Length |
//! |--------|-------|--------|
//! | Haar | `haar` | 2 |
//! | Daubechies | `db1` .. `db20` | 2N |
//! | Symlets | `sym2` .. `sym20` | 2N |
//! | Coiflets | `coif1` .. `coif5` | 6N |
//! | Biorthogonal | `bior1.1` .. `bior6.8` | 2 .. 20 |
//! | Reverse biorthogonal | `rbio1.1` .. `rbio6.8` | 2 .. 20 |
//! | Discrete Meyer | `dmey` | 62 |
//!
//! Coefficients are the standard tabulated values; nothing is computed at
//! runtime beyond reversing and sign-alternating the low-pass taps.
//!
//! ## Quick Start
//!
//! ```
//! use tapgen_filters::{BuiltinFilters, CoefficientProvider, FilterRole};
//!
//! let bank = BuiltinFilters.lookup("db2").unwrap();
//! for (role, taps) in bank.iter() {
//!     assert_eq!(taps.len(), 4, "{}", role.suffix());
//! }
//! assert_eq!(bank.get(FilterRole::RecLo)[0], bank.get(FilterRole::DecLo)[3]);
//! ```

mod bank;
mod error;
mod provider;
mod tables;
mod wavelet;

pub use bank::{FilterBank, FilterRole};
pub use error::FilterError;
pub use provider::{BuiltinFilters, CoefficientProvider};
pub use wavelet::{Family, Wavelet};

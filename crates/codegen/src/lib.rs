//! # tapgen-codegen
//!
//! Renders filter taps as C array declarations.
//!
//! ```
//! use tapgen_codegen::{format_c_array, sanitize_identifier, symbol_name};
//!
//! let base = sanitize_identifier("bior-2.2");
//! let name = symbol_name(&base, "lo_d");
//! let code = format_c_array(&[0.5, -0.5], &name);
//!
//! assert_eq!(code, "const float bior_2_2_lo_d[2] = {\n  0.50000000f,  -0.50000000f\n};\n");
//! ```
//!
//! The literal style is fixed: `const float`, 8 decimals, an `f` suffix and
//! four values per row.

mod array;
mod symbol;

pub use array::format_c_array;
pub use symbol::{is_c_identifier, sanitize_identifier, symbol_name};

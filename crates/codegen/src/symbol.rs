//! Symbol names for generated declarations.

/// Derives a symbol base from a wavelet identifier.
///
/// Lowercases and replaces `-` and `.` with `_`. Deterministic and
/// idempotent; no other characters are touched.
///
/// # Example
///
/// ```
/// use tapgen_codegen::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("bior-2.2"), "bior_2_2");
/// ```
pub fn sanitize_identifier(identifier: &str) -> String {
    identifier
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '-' | '.' => '_',
            other => other,
        })
        .collect()
}

/// Joins a symbol base and a role suffix: `<base>_<suffix>`.
pub fn symbol_name(base: &str, suffix: &str) -> String {
    format!("{base}_{suffix}")
}

/// Returns `true` if `s` is a valid C identifier: an ASCII letter or `_`
/// followed by ASCII alphanumerics or `_`.
pub fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

//! C array declaration formatting.

/// Indent written before every value.
const VALUE_INDENT: &str = "  ";
/// Decimal places per value.
const PRECISION: usize = 8;
/// Suffix marking each literal as `float`.
const LITERAL_SUFFIX: &str = "f";
/// Values per output row.
const VALUES_PER_ROW: usize = 4;

/// Formats `values` as a `const float` array declaration named `name`.
///
/// Every value gets 8 decimals and an `f` suffix, is preceded by two
/// spaces and followed by a comma unless it is the last one. Rows hold at
/// most 4 values; the final row always ends in a newline.
///
/// ```text
/// const float haar_lo_d[2] = {
///   0.70710678f,  0.70710678f
/// };
/// ```
///
/// Empty `values` produce the opening line directly followed by `};`.
pub fn format_c_array(values: &[f64], name: &str) -> String {
    let mut code = format!("const float {}[{}] = {{\n", name, values.len());
    let last = values.len().saturating_sub(1);
    for (i, value) in values.iter().enumerate() {
        code.push_str(VALUE_INDENT);
        code.push_str(&format!("{value:.PRECISION$}"));
        code.push_str(LITERAL_SUFFIX);
        if i != last {
            code.push(',');
        }
        if (i + 1) % VALUES_PER_ROW == 0 || i == last {
            code.push('\n');
        }
    }
    code.push_str("};\n");
    code
}

//! Export command: print one wavelet's four filters as C declarations.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, warn};

use tapgen_codegen::{format_c_array, is_c_identifier, sanitize_identifier, symbol_name};
use tapgen_filters::CoefficientProvider;

/// Run the export for `identifier`, writing generated source to `out`.
///
/// A failed lookup is reported as a single `Error: Failed to export ...`
/// line on `out` and is not an error of this function; only write failures
/// are returned.
pub fn run<P, W>(identifier: &str, provider: &P, out: &mut W) -> Result<()>
where
    P: CoefficientProvider + ?Sized,
    W: Write,
{
    let _cmd = info_span!("export", wavelet = identifier).entered();

    // 1. Look up all four filters before writing anything
    let bank = match provider.lookup(identifier) {
        Ok(bank) => bank,
        Err(e) => {
            info!(error = %e, "coefficient lookup failed");
            writeln!(out, "Error: Failed to export wavelet '{identifier}' - {e}")
                .context("failed to write export diagnostic")?;
            return Ok(());
        }
    };
    info!(wavelet = %bank.wavelet(), taps = bank.len(), "loaded filter bank");

    // 2. Derive the symbol base
    let base = sanitize_identifier(identifier);
    if !is_c_identifier(&base) {
        warn!(symbol = %base, "derived symbol is not a valid C identifier");
    }

    // 3. Header comment, then one declaration per role
    writeln!(out, "// {identifier} wavelet filters\n").context("failed to write header")?;
    for (role, taps) in bank.iter() {
        let name = symbol_name(&base, role.suffix());
        debug!(symbol = %name, n = taps.len(), "formatting array");
        writeln!(out, "{}", format_c_array(taps, &name))
            .with_context(|| format!("failed to write array {name}"))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tapgen_filters::{BuiltinFilters, FilterBank, FilterError, Family, Wavelet};

    fn export(identifier: &str) -> String {
        let mut out = Vec::new();
        run(identifier, &BuiltinFilters, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn haar_full_output() {
        let expected = "// haar wavelet filters\n\
                        \n\
                        const float haar_lo_d[2] = {\n  0.70710678f,  0.70710678f\n};\n\
                        \n\
                        const float haar_hi_d[2] = {\n  -0.70710678f,  0.70710678f\n};\n\
                        \n\
                        const float haar_lo_r[2] = {\n  0.70710678f,  0.70710678f\n};\n\
                        \n\
                        const float haar_hi_r[2] = {\n  0.70710678f,  -0.70710678f\n};\n\
                        \n";
        assert_eq!(export("haar"), expected);
    }

    #[test]
    fn declarations_in_role_order() {
        let out = export("db4");
        let names: Vec<&str> = out
            .lines()
            .filter_map(|l| l.strip_prefix("const float "))
            .collect();
        assert_eq!(
            names,
            vec![
                "db4_lo_d[8] = {",
                "db4_hi_d[8] = {",
                "db4_lo_r[8] = {",
                "db4_hi_r[8] = {",
            ]
        );
    }

    #[test]
    fn header_keeps_identifier_symbols_are_sanitized() {
        let out = export("BIOR2.2");
        assert!(out.starts_with("// BIOR2.2 wavelet filters\n\n"));
        assert!(out.contains("const float bior2_2_lo_d[6] = {\n"));
        assert!(out.contains("const float bior2_2_hi_r[6] = {\n"));
    }

    #[test]
    fn unknown_wavelet_single_line() {
        let out = export("nonexistent_wavelet_xyz");
        assert_eq!(
            out,
            "Error: Failed to export wavelet 'nonexistent_wavelet_xyz' - \
             unknown wavelet name 'nonexistent_wavelet_xyz'\n"
        );
        assert_eq!(out.lines().count(), 1);
        assert!(!out.contains("const float"));
    }

    #[test]
    fn unavailable_order_single_line() {
        let out = export("db21");
        assert_eq!(
            out,
            "Error: Failed to export wavelet 'db21' - Daubechies wavelet order 21 is not available\n"
        );
    }

    struct FailingProvider;

    impl CoefficientProvider for FailingProvider {
        fn lookup(&self, _identifier: &str) -> Result<FilterBank, FilterError> {
            Err(FilterError::InvalidOrder {
                family: Family::Coiflet,
                order: "9".into(),
            })
        }
    }

    #[test]
    fn provider_failure_is_rendered_not_returned() {
        let mut out = Vec::new();
        run("coif9", &FailingProvider, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Error: Failed to export wavelet 'coif9' - "));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn works_through_dyn_provider() {
        let provider: &dyn CoefficientProvider = &BuiltinFilters;
        let mut out = Vec::new();
        run("sym2", provider, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("const float sym2_").count(), 4);
        assert_eq!(
            FilterBank::new(Wavelet::Symlet(2)).unwrap().len(),
            4
        );
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_returned() {
        let err = run("haar", &BuiltinFilters, &mut BrokenPipe).unwrap_err();
        assert!(err.to_string().contains("failed to write header"));
    }
}

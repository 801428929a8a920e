mod cli;
mod export_cmd;
mod list_cmd;
mod logging;

use std::io::{self, Write};
use std::process;

use anyhow::{Context, Result};
use tracing::debug;

use tapgen_filters::BuiltinFilters;

use crate::cli::Command;

fn main() {
    let (command, verbose) = match cli::parse_from(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(e) => e.exit(),
    };
    logging::init(verbose);

    let stdout = io::stdout();
    if let Err(e) = run(&command, &mut stdout.lock()) {
        if is_broken_pipe(&e) {
            debug!("stdout closed early");
            return;
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run<W: Write>(command: &Command, out: &mut W) -> Result<()> {
    match command {
        Command::List => list_cmd::run(out)?,
        Command::Export(identifier) => export_cmd::run(identifier, &BuiltinFilters, out)?,
        Command::Usage => cli::write_usage(out).context("failed to write usage")?,
    }

    out.flush().context("failed to flush stdout")
}

/// Returns `true` if `err` was caused by the reader of stdout going away.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const USAGE: &str = "Usage: tapgen <wavelet_name>\nExample: tapgen db4\n";

    fn invoke(args: &[&str]) -> String {
        let argv = std::iter::once("tapgen").chain(args.iter().copied());
        let (command, _) = cli::parse_from(argv).unwrap();
        let mut out = Vec::new();
        run(&command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn haar_exports_four_arrays() {
        let out = invoke(&["haar"]);
        assert!(out.starts_with("// haar wavelet filters\n\n"));
        for suffix in ["lo_d", "hi_d", "lo_r", "hi_r"] {
            assert!(
                out.contains(&format!("const float haar_{suffix}[2] = {{\n")),
                "missing haar_{suffix}"
            );
        }
        assert!(out.contains("const float haar_lo_d[2] = {\n  0.70710678f,  0.70710678f\n};\n"));
    }

    #[test]
    fn unknown_wavelet_prints_one_line() {
        let out = invoke(&["nonexistent_wavelet_xyz"]);
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("Error: Failed to export wavelet 'nonexistent_wavelet_xyz' - "));
    }

    #[test]
    fn wrong_argument_counts_print_usage() {
        assert_eq!(invoke(&[]), USAGE);
        assert_eq!(invoke(&["db4", "sym5"]), USAGE);
        assert_eq!(invoke(&["db4", "x", "--list"]), USAGE);
    }

    #[test]
    fn unknown_flag_prints_usage() {
        assert_eq!(invoke(&["db4", "--bogus"]), USAGE);
    }

    #[test]
    fn list_prints_every_family() {
        let out = invoke(&["--list"]);
        assert_eq!(out.lines().count(), 7);
        assert!(out.starts_with("haar: haar\n"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_stdout_is_recognised() {
        for command in [
            Command::Export("db4".into()),
            Command::List,
            Command::Usage,
        ] {
            let err = run(&command, &mut ClosedPipe).unwrap_err();
            assert!(is_broken_pipe(&err), "{command:?}: {err:#}");
        }
    }

    #[test]
    fn other_io_errors_are_not_broken_pipes() {
        let err = anyhow::Error::new(io::Error::from(io::ErrorKind::PermissionDenied))
            .context("failed to write header");
        assert!(!is_broken_pipe(&err));
        assert!(!is_broken_pipe(&anyhow::anyhow!("plain failure")));
    }
}

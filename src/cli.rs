use std::ffi::OsString;
use std::io::{self, Write};

use clap::Parser;
use clap::error::ErrorKind;

/// Program name used in the usage message.
const PROGRAM: &str = "tapgen";

/// Export wavelet filter coefficients as C array declarations.
#[derive(Parser)]
#[command(
    name = "tapgen",
    version,
    about = "Export wavelet filter coefficients as C array declarations"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// List the bundled wavelet names and exit.
    #[arg(short, long)]
    pub list: bool,

    /// Wavelet to export, e.g. `db4`. Exactly one is expected.
    #[arg(value_name = "WAVELET_NAME")]
    pub wavelets: Vec<String>,
}

/// What one invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Export the four filters of one wavelet.
    Export(String),
    /// Print the bundled wavelet names.
    List,
    /// Print the two-line usage message.
    Usage,
}

impl Cli {
    /// Maps the parsed arguments to a [`Command`].
    ///
    /// Two or more wavelet names always select [`Command::Usage`], even
    /// alongside `--list`.
    pub fn invocation(&self) -> Command {
        match self.wavelets.as_slice() {
            [_, _, ..] => Command::Usage,
            _ if self.list => Command::List,
            [name] => Command::Export(name.clone()),
            [] => Command::Usage,
        }
    }
}

/// Parses command-line arguments into a command and a verbosity level.
///
/// `--help` and `--version` are returned as clap errors so the caller can
/// let clap print them. Every other parse error, such as an unknown flag
/// next to a name, selects [`Command::Usage`].
pub fn parse_from<I, T>(args: I) -> Result<(Command, u8), clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok((cli.invocation(), cli.verbose)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Err(e)
        }
        Err(_) => Ok((Command::Usage, 0)),
    }
}

/// Writes the two-line usage message.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Usage: {PROGRAM} <wavelet_name>")?;
    writeln!(out, "Example: {PROGRAM} db4")
}

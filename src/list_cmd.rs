//! List command: print the bundled wavelet names grouped by family.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use tapgen_filters::{Family, Wavelet};

/// Writes one `<family>: <name> <name> ...` line per family.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let all = Wavelet::all();
    info!(n = all.len(), "listing bundled wavelets");

    for family in Family::ALL {
        let names: Vec<String> = all
            .iter()
            .filter(|w| w.family() == family)
            .map(Wavelet::name)
            .collect();
        writeln!(out, "{}: {}", family.short_name(), names.join(" "))
            .context("failed to write wavelet list")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> String {
        let mut out = Vec::new();
        run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn one_line_per_family() {
        let out = listing();
        let prefixes: Vec<&str> = out
            .lines()
            .map(|l| l.split_once(':').unwrap().0)
            .collect();
        assert_eq!(prefixes, vec!["haar", "db", "sym", "coif", "bior", "rbio", "dmey"]);
    }

    #[test]
    fn known_lines() {
        let out = listing();
        assert!(out.contains("haar: haar\n"));
        assert!(out.contains("db: db1 db2 db3 db4 db5 db6 db7 db8 db9 db10 db11 "));
        assert!(out.contains(" db19 db20\n"));
        assert!(out.contains(" sym19 sym20\n"));
        assert!(out.contains("coif: coif1 coif2 coif3 coif4 coif5\n"));
        assert!(out.ends_with("dmey: dmey\n"));
        assert!(out.contains(
            "bior: bior1.1 bior1.3 bior1.5 bior2.2 bior2.4 bior2.6 bior2.8 \
             bior3.1 bior3.3 bior3.5 bior3.7 bior3.9 bior4.4 bior5.5 bior6.8\n"
        ));
    }

    #[test]
    fn listed_names_are_exportable() {
        let out = listing();
        for name in out.lines().flat_map(|l| l.split_once(": ").unwrap().1.split(' ')) {
            assert!(Wavelet::from_name(name).is_ok(), "{name}");
        }
    }
}

//! Symbol universe resolution.
//!
//! The ticker universe is explicit input, never a built-in constant: symbols
//! come from positional arguments, a universe file, or both (positional
//! first, file order preserved, duplicates removed).

use std::collections::HashSet;
use std::path::Path;

use marketbrief_core::Symbol;

use crate::error::CliError;

pub fn resolve(positional: &[String], universe_file: Option<&Path>) -> Result<Vec<Symbol>, CliError> {
    let mut raw: Vec<String> = positional.to_vec();

    if let Some(path) = universe_file {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CliError::Command(format!("cannot read universe file '{}': {e}", path.display()))
        })?;
        raw.extend(parse_universe(&contents));
    }

    let mut seen = HashSet::new();
    let mut symbols = Vec::with_capacity(raw.len());
    for entry in raw {
        let symbol = Symbol::parse(&entry)?;
        if seen.insert(symbol.clone()) {
            symbols.push(symbol);
        }
    }

    Ok(symbols)
}

fn parse_universe(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| match line.find('#') {
            Some(index) => &line[..index],
            None => line,
        })
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_universe_lines_with_comments() {
        let contents = "# NIFTY constituents\nRELIANCE.NS\n\nTCS.NS # tech\n  INFY.NS  \n";
        assert_eq!(
            parse_universe(contents),
            vec!["RELIANCE.NS", "TCS.NS", "INFY.NS"]
        );
    }

    #[test]
    fn combines_positional_and_file_symbols_without_duplicates() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file must create");
        writeln!(file, "TCS.NS\nRELIANCE.NS").expect("must write");

        let symbols = resolve(
            &[String::from("reliance.ns"), String::from("SBIN.NS")],
            Some(file.path()),
        )
        .expect("must resolve");

        let raw: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(raw, vec!["RELIANCE.NS", "SBIN.NS", "TCS.NS"]);
    }

    #[test]
    fn missing_universe_file_is_a_command_error() {
        let err = resolve(&[], Some(Path::new("/nonexistent/universe.txt")))
            .expect_err("must fail");
        assert!(matches!(err, CliError::Command(_)));
    }

    #[test]
    fn invalid_symbol_is_a_validation_error() {
        let err = resolve(&[String::from("123BAD")], None).expect_err("must fail");
        assert!(matches!(err, CliError::Validation(_)));
    }
}

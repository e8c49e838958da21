// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::config::options::{ParseMode, ParseOptions, RenderOptions, SheetOptions, UnderlineOptions};
use crate::progress::ConsolePrinter;
use crate::runner;

const PARSE_HELP: &str = "\
parse_powers: extract power records from a saved page or text listing

USAGE:
    parse_powers [--txt] [-i <file>] [-o <file>]

OPTIONS:
    --txt              Parse the plain-text listing (default input: marvel_powers.txt)
    -i, --in <file>    Input file (default: marvel_powers.html)
    -o, --out <file>   JSON output (default: marvel_powers.json)
    -h, --help         Show this help";

const RENDER_HELP: &str = "\
render_cards: render one SVG card per power record

USAGE:
    render_cards [-i <file>] [-o <dir>]

OPTIONS:
    -i, --in <file>    JSON records (default: marvel_powers.json)
    -o, --out <dir>    Output directory (default: cards)
    -h, --help         Show this help";

const UNDERLINE_HELP: &str = "\
underline_cards: add separator rules between card fields

USAGE:
    underline_cards [-d <dir>]

OPTIONS:
    -d, --dir <dir>    Directory of SVG cards, rewritten in place (default: cards)
    -h, --help         Show this help";

const SHEETS_HELP: &str = "\
print_sheets: tile card PNGs onto printable letter-size sheets

USAGE:
    print_sheets [-i <dir>] [-o <dir>] [-g <dir> | --no-guides]

OPTIONS:
    -i, --in <dir>          Card PNGs (default: print_ready)
    -o, --out <dir>         Plain sheets (default: print_sheets)
    -g, --guides-out <dir>  Sheets with cut guides (default: print_sheets_with_guides)
    --no-guides             Skip the cut-guide sheets
    -h, --help              Show this help";

/// Outcome of argument parsing: options to run with, or help text to print.
#[derive(Debug, PartialEq)]
pub enum Parsed<T> {
    Run(T),
    Help(&'static str),
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<PathBuf, Box<dyn Error>> {
    Ok(PathBuf::from(args.next().ok_or(format!("Missing value for {flag}"))?))
}

pub fn parse_powers_args<I: IntoIterator<Item = String>>(args: I) -> Result<Parsed<ParseOptions>, Box<dyn Error>> {
    let mut opts = ParseOptions::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--txt" => opts.mode = ParseMode::Text,
            "-i" | "--in" => opts.set_input(value(&mut args, &a)?),
            "-o" | "--out" => opts.output = value(&mut args, &a)?,
            "-h" | "--help" => return Ok(Parsed::Help(PARSE_HELP)),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }
    Ok(Parsed::Run(opts))
}

pub fn render_cards_args<I: IntoIterator<Item = String>>(args: I) -> Result<Parsed<RenderOptions>, Box<dyn Error>> {
    let mut opts = RenderOptions::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--in" => opts.input = value(&mut args, &a)?,
            "-o" | "--out" => opts.out_dir = value(&mut args, &a)?,
            "-h" | "--help" => return Ok(Parsed::Help(RENDER_HELP)),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }
    Ok(Parsed::Run(opts))
}

pub fn underline_cards_args<I: IntoIterator<Item = String>>(args: I) -> Result<Parsed<UnderlineOptions>, Box<dyn Error>> {
    let mut opts = UnderlineOptions::default();
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-d" | "--dir" => opts.cards_dir = value(&mut args, &a)?,
            "-h" | "--help" => return Ok(Parsed::Help(UNDERLINE_HELP)),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }
    Ok(Parsed::Run(opts))
}

pub fn print_sheets_args<I: IntoIterator<Item = String>>(args: I) -> Result<Parsed<SheetOptions>, Box<dyn Error>> {
    let mut opts = SheetOptions::default();
    let mut no_guides = false;
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--in" => opts.input_dir = value(&mut args, &a)?,
            "-o" | "--out" => opts.out_dir = value(&mut args, &a)?,
            "-g" | "--guides-out" => opts.guides_dir = Some(value(&mut args, &a)?),
            "--no-guides" => no_guides = true,
            "-h" | "--help" => return Ok(Parsed::Help(SHEETS_HELP)),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }
    if no_guides {
        opts.guides_dir = None;
    }
    Ok(Parsed::Run(opts))
}

fn cli_args() -> impl Iterator<Item = String> {
    env::args().skip(1)
}

pub fn parse_powers() -> Result<(), Box<dyn Error>> {
    match parse_powers_args(cli_args())? {
        Parsed::Help(h) => println!("{h}"),
        Parsed::Run(opts) => {
            runner::run_parse(&opts, Some(&mut ConsolePrinter::default()))?;
        }
    }
    Ok(())
}

pub fn render_cards() -> Result<(), Box<dyn Error>> {
    match render_cards_args(cli_args())? {
        Parsed::Help(h) => println!("{h}"),
        Parsed::Run(opts) => {
            runner::run_render(&opts, Some(&mut ConsolePrinter::default()))?;
        }
    }
    Ok(())
}

pub fn underline_cards() -> Result<(), Box<dyn Error>> {
    match underline_cards_args(cli_args())? {
        Parsed::Help(h) => println!("{h}"),
        Parsed::Run(opts) => {
            runner::run_underline(&opts, Some(&mut ConsolePrinter::default()))?;
        }
    }
    Ok(())
}

pub fn print_sheets() -> Result<(), Box<dyn Error>> {
    match print_sheets_args(cli_args())? {
        Parsed::Help(h) => println!("{h}"),
        Parsed::Run(opts) => {
            runner::run_sheets(&opts, Some(&mut ConsolePrinter::default()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_flags() {
        let Parsed::Run(opts) = parse_powers_args(args(&["--txt", "-o", "out.json"])).unwrap() else {
            panic!("expected options");
        };
        assert_eq!(opts.mode, ParseMode::Text);
        assert_eq!(opts.input(), PathBuf::from("marvel_powers.txt"));
        assert_eq!(opts.output, PathBuf::from("out.json"));
    }

    #[test]
    fn help_and_unknown() {
        assert_eq!(render_cards_args(args(&["--help"])).unwrap(), Parsed::Help(RENDER_HELP));
        assert!(underline_cards_args(args(&["--bogus"])).is_err());
        assert!(render_cards_args(args(&["-o"])).is_err());
    }

    #[test]
    fn no_guides_wins_over_guides_dir() {
        let Parsed::Run(opts) = print_sheets_args(args(&["-g", "x", "--no-guides"])).unwrap() else {
            panic!("expected options");
        };
        assert_eq!(opts.guides_dir, None);
        let Parsed::Run(opts) = print_sheets_args(args(&[])).unwrap() else {
            panic!("expected options");
        };
        assert_eq!(opts.guides_dir, Some(PathBuf::from("print_sheets_with_guides")));
    }
}

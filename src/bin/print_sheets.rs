// src/bin/print_sheets.rs
use color_eyre::eyre::eyre;
use powercards::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::print_sheets().map_err(|e| eyre!("{e}"))
}

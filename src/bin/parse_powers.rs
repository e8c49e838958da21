// src/bin/parse_powers.rs
use color_eyre::eyre::eyre;
use powercards::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::parse_powers().map_err(|e| eyre!("{e}"))
}

// src/bin/underline_cards.rs
use color_eyre::eyre::eyre;
use powercards::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::underline_cards().map_err(|e| eyre!("{e}"))
}

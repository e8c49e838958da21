// src/bin/render_cards.rs
use color_eyre::eyre::eyre;
use powercards::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::render_cards().map_err(|e| eyre!("{e}"))
}

// src/runner.rs
//! One entry point per pipeline stage. Each returns the files it wrote and
//! reports through an optional `Progress` sink.

use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;

use crate::{
    config::consts::CARD_EXT,
    config::options::{ParseOptions, RenderOptions, SheetOptions, UnderlineOptions},
    file::{list_files_with_ext, load_records, save_records},
    progress::Progress,
    render::{write_card, CardContent, HeuristicMetrics},
    sheets::compose_sheets,
    specs::{self, summary::summarize},
    underline::{add_field_rules_in_place, label_distances},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Records parsed or rendered; cards underlined; pages composed.
    pub items: usize,
}

/// Parse the input listing and save it as JSON.
///
/// A missing or unreadable input, or a parse that finds nothing, is reported
/// and yields an empty summary without touching the output file.
pub fn run_parse(opts: &ParseOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary, Box<dyn Error>> {
    let input = opts.input();
    logf!("Parse: {:?} mode, '{}' → '{}'", opts.mode, input.display(), opts.output.display());

    let records = match specs::parse_file(opts.mode, &input) {
        Ok(r) => r,
        Err(e) => {
            loge!("Parse: {e}");
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Error: {e}"));
                p.finish();
            }
            return Ok(RunSummary::default());
        }
    };

    if records.is_empty() {
        logw!("Parse: no powers found in '{}'", input.display());
        if let Some(p) = progress.as_deref_mut() {
            p.log("No powers found. Check the input file format.");
            p.finish();
        }
        return Ok(RunSummary::default());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&summarize(&records));
    }

    save_records(&opts.output, &records)?;
    logf!("Parse: saved {} powers to '{}'", records.len(), opts.output.display());
    if let Some(p) = progress.as_deref_mut() {
        p.item_done(&format!("{} powers", records.len()), &opts.output);
        p.finish();
    }

    Ok(RunSummary { files_written: vec![opts.output.clone()], items: records.len() })
}

/// Render one SVG card per record. The first write failure aborts the batch.
pub fn run_render(opts: &RenderOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary, Box<dyn Error>> {
    let records = load_records(&opts.input)?;
    logf!("Render: {} powers from '{}' → '{}'", records.len(), opts.input.display(), opts.out_dir.display());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(records.len());
    }

    let metrics = HeuristicMetrics::default();
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(records.len());

    for record in &records {
        let path = write_card(record, &opts.out_dir, &opts.layout, &metrics, &mut seen)?;
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(CardContent::from_record(record).title, &path);
        }
        written.push(path);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Generated {} cards in '{}'", written.len(), opts.out_dir.display()));
        p.finish();
    }
    Ok(RunSummary { items: written.len(), files_written: written })
}

/// Add separator rules to every card in the directory, rewriting files in place.
pub fn run_underline(opts: &UnderlineOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary, Box<dyn Error>> {
    let cards = list_files_with_ext(&opts.cards_dir, CARD_EXT)?;
    logf!("Underline: {} cards in '{}'", cards.len(), opts.cards_dir.display());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(cards.len());
    }

    for path in &cards {
        let drawn = add_field_rules_in_place(path, &opts.layout)?;
        logd!("Underline: {} rules in '{}'", drawn, path.display());

        if let Some(p) = progress.as_deref_mut() {
            let svg = std::fs::read_to_string(path)?;
            let (ys, gaps) = label_distances(&svg, &opts.layout)?;
            p.item_done(&format!("{drawn} rules"), path);
            p.log(&format!("  Label y-positions: {ys:?}"));
            p.log(&format!("  Distances between labels: {gaps:?}"));
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    Ok(RunSummary { items: cards.len(), files_written: cards })
}

/// Compose plain sheets, then the cut-guide variant when a guides directory is set.
pub fn run_sheets(opts: &SheetOptions, mut progress: Option<&mut dyn Progress>) -> Result<RunSummary, Box<dyn Error>> {
    let mut written = compose_sheets(&opts.input_dir, &opts.out_dir, &opts.layout, false)?;
    let pages = written.len();
    if let Some(dir) = &opts.guides_dir {
        written.extend(compose_sheets(&opts.input_dir, dir, &opts.layout, true)?);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.begin(written.len());
        for path in &written {
            let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
            p.item_done(&name, path);
        }
        p.log(&format!(
            "Generated {pages} print sheets from '{}' ({} cards per sheet)",
            opts.input_dir.display(),
            opts.layout.capacity()
        ));
        p.finish();
    }
    Ok(RunSummary { files_written: written, items: pages })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::ParseMode;
    use crate::progress::RecordingProgress;

    #[test]
    fn missing_input_is_reported_not_fatal() {
        let mut opts = ParseOptions::with_mode(ParseMode::Text);
        opts.set_input("/definitely/not/here/powers.txt");
        opts.output = std::env::temp_dir().join(format!("powercards_never_{}.json", std::process::id()));

        let mut progress = RecordingProgress::default();
        let summary = run_parse(&opts, Some(&mut progress)).unwrap();
        assert!(summary.files_written.is_empty());
        assert!(!opts.output.exists());
        assert!(progress.lines[0].starts_with("Error: File '"));
        assert!(progress.finished);
    }
}

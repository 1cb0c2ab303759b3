use anyhow::{Context, Result};
use clap::ValueEnum;
use obabaz_core::{
    generate_random, generate_with_seed, ComposerConfig, NarrativeStage, RawSelection,
    RecipeDocument, SelectionState,
};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Title, description, steps, tip and prompt as plain text
    Text,
    /// The full document as JSON
    Json,
    /// Only the AI prompt, for pasting into a chat
    Prompt,
}

/// Read a selection file in the wizard's form-data shape.
pub fn read_selection(path: &Path) -> Result<SelectionState> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read selection file: {}", path.display()))?;
    let raw: RawSelection = serde_json::from_str(&json)
        .with_context(|| format!("Invalid selection JSON: {}", path.display()))?;
    Ok(raw.normalize())
}

/// Render a document for the terminal.
pub fn render_text(doc: &RecipeDocument) -> String {
    let mut out = format!("{}\n\n{}\n\n", doc.title, doc.description);
    for (i, stage) in NarrativeStage::ALL.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", i + 1, doc.step(*stage)));
    }
    out.push_str(&format!("\nobabazからの台所の知恵: {}\n", doc.tip));
    out.push_str(&format!("\n--- prompt ---\n{}\n", doc.prompt));
    out
}

/// Generate a recipe from a selection file and print it.
pub fn generate(
    config: &ComposerConfig,
    selection_path: &Path,
    format: OutputFormat,
    strict: bool,
) -> Result<()> {
    let selection = read_selection(selection_path)?;
    if strict {
        selection.validate().context("Selection failed validation")?;
    }

    let catalogs = config.catalogs()?;
    let doc = match config.tip_seed {
        Some(seed) => generate_with_seed(&selection, &catalogs, seed)?,
        None => generate_random(&selection, &catalogs)?,
    };
    tracing::info!(title = %doc.title, "generated recipe");

    match format {
        OutputFormat::Text => print!("{}", render_text(&doc)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&doc)?),
        OutputFormat::Prompt => println!("{}", doc.prompt),
    }

    Ok(())
}

//! Outputs command

use anyhow::{Context, Result};
use camino::Utf8Path;
use gable_engine::StackState;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::OutputsArgs;

/// Row for resolved exports
#[derive(Tabled)]
struct ExportRow {
    name: String,
    value: String,
}

pub fn run(args: OutputsArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let eval = super::evaluate(config_path, args.pr.as_deref())?;
    let state = StackState::load(&args.state)
        .with_context(|| format!("Failed to load engine state from {}", args.state))?;

    let mut resolved = Vec::new();
    for export in eval.program.exports() {
        let value = export
            .value
            .resolve(&state)
            .with_context(|| format!("Failed to resolve export '{}'", export.name))?;
        resolved.push((export.name.clone(), value));
    }

    if args.json {
        let map: serde_json::Map<String, serde_json::Value> = resolved
            .into_iter()
            .map(|(name, value)| (name, serde_json::Value::String(value)))
            .collect();
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let rows: Vec<ExportRow> = resolved
        .into_iter()
        .map(|(name, value)| ExportRow { name, value })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);

    Ok(())
}

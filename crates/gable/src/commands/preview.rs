//! Preview command

use anyhow::Result;
use camino::Utf8Path;
use gable_engine::Preview;
use tabled::{settings::Style, Table, Tabled};

use crate::cli::PreviewArgs;
use crate::output;

/// Row for planned engine actions
#[derive(Tabled)]
struct ActionRow {
    action: String,
    resource: String,
    #[tabled(rename = "type")]
    resource_type: String,
    #[tabled(rename = "depends on")]
    depends_on: String,
}

pub fn run(args: PreviewArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let eval = super::evaluate(config_path, args.pr.as_deref())?;
    let preview =
        Preview::of(&eval.program)?.with_warnings(eval.stack.advisories.iter().cloned());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    output::header(&format!("Stack '{}'", preview.stack));
    output::kv("Hostname", &eval.stack.hostname);
    let record_name = if eval.stack.record_name.is_empty() {
        "(zone apex)"
    } else {
        &eval.stack.record_name
    };
    output::kv("Record name", record_name);
    println!();

    let rows: Vec<ActionRow> = preview
        .actions
        .iter()
        .map(|a| ActionRow {
            action: a.action.to_string(),
            resource: a.resource.clone(),
            resource_type: a.resource_type.clone(),
            depends_on: if a.depends_on.is_empty() {
                "-".to_string()
            } else {
                a.depends_on.join(", ")
            },
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::sharp());
    println!("{}", table);

    output::header("Exports");
    for export in &preview.exports {
        output::kv(
            &export.name,
            export
                .value
                .as_deref()
                .unwrap_or("<resolved after provisioning>"),
        );
    }

    for warning in &preview.warnings {
        output::warning(warning);
    }

    Ok(())
}

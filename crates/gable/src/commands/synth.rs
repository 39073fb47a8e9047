//! Synth command

use anyhow::Result;
use camino::Utf8Path;

use crate::cli::{DocumentFormat, SynthArgs};
use crate::output;

pub fn run(args: SynthArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let eval = super::evaluate(config_path, args.pr.as_deref())?;

    let document = match args.format {
        DocumentFormat::Yaml => eval.program.to_yaml()?,
        DocumentFormat::Json => eval.program.to_json()?,
    };

    match &args.out {
        Some(path) => {
            std::fs::write(path, &document)?;
            output::success(&format!(
                "Wrote declaration for stack '{}' to {}",
                eval.program.name(),
                path
            ));
        }
        None => println!("{}", document),
    }

    Ok(())
}

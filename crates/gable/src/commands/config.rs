//! Config command

use anyhow::{anyhow, Result};
use camino::Utf8Path;
use gable_core::config::{generate_default_config, GableConfig};

use crate::cli::{ConfigCommands, ConfigInitArgs, ConfigShowArgs, ConfigValidateArgs};
use crate::output;

pub fn run(cmd: ConfigCommands, config_path: Option<&Utf8Path>) -> Result<()> {
    match cmd {
        ConfigCommands::Init(args) => init(args),
        ConfigCommands::Validate(args) => validate(args, config_path),
        ConfigCommands::Show(args) => show(args, config_path),
    }
}

fn init(args: ConfigInitArgs) -> Result<()> {
    // Check if file exists
    if args.output.exists() && !args.force {
        return Err(anyhow!(
            "File {} already exists. Use --force to overwrite.",
            args.output
        ));
    }

    // Get stack name
    let name = args.name.unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .unwrap_or_else(|| "my-site".to_string())
            .to_lowercase()
            .replace(' ', "-")
    });

    let content = generate_default_config(&name);
    std::fs::write(&args.output, content)?;

    output::success(&format!("Created {}", args.output));
    output::info("Edit the site section, then run 'gable preview'");

    Ok(())
}

fn validate(args: ConfigValidateArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let eval = super::evaluate(config_path, args.pr.as_deref())?;

    output::success(&format!(
        "Configuration is valid: {}",
        eval.config.config_path
    ));
    output::kv("Name", eval.config.name());
    output::kv("Frontend host", &eval.site.frontend_host);
    output::kv("Zone host", &eval.site.zone_host);
    output::kv("Certificate host", &eval.site.cert_host);
    output::kv("Derived hostname", &eval.stack.hostname);
    output::kv("Resources", &eval.program.resources().len().to_string());

    for advisory in &eval.stack.advisories {
        output::warning(advisory);
    }

    Ok(())
}

fn show(args: ConfigShowArgs, config_path: Option<&Utf8Path>) -> Result<()> {
    let config = GableConfig::load(config_path)?;

    if args.json {
        let json = serde_json::to_string_pretty(&config.config)?;
        println!("{}", json);
    } else {
        let yaml = config.to_yaml()?;
        println!("{}", yaml);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn init_args(output: Utf8PathBuf, force: bool) -> ConfigInitArgs {
        ConfigInitArgs {
            name: Some("demo-site".to_string()),
            output,
            force,
        }
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gable.yaml");
        std::fs::write(&path, "version: \"1\"\nname: keep\n").unwrap();
        let path = Utf8PathBuf::from_path_buf(path).expect("utf-8 path");

        let err = init(init_args(path.clone(), false)).unwrap_err();
        assert!(
            err.to_string().contains("already exists"),
            "unexpected error: {err}"
        );

        // The existing file must be untouched
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "version: \"1\"\nname: keep\n");
    }

    #[test]
    fn test_init_force_overwrites() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gable.yaml");
        std::fs::write(&path, "stale").unwrap();
        let path = Utf8PathBuf::from_path_buf(path).expect("utf-8 path");

        init(init_args(path.clone(), true)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("name: demo-site"));
        assert!(content.contains("frontend_host:"));
    }

    #[test]
    fn test_init_creates_fresh_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("gable.yaml");
        let path = Utf8PathBuf::from_path_buf(path).expect("utf-8 path");

        init(init_args(path.clone(), false)).unwrap();
        assert!(path.exists());
    }
}

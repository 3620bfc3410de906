use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use dashctl_core::{to_yaml, write_json, Panel};
use dashctl_dashlist::{DashList, DashListBuilder, DashListOption};
use tracing::{debug, info};

use crate::config::DashctlConfig;
use crate::definition::load_definitions;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Parser, Debug)]
pub struct BuildArgs {
    /// Panel definition files (.yaml, .yml, .toml or .json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Print compact JSON regardless of the configured indent
    #[arg(long)]
    pub compact: bool,

    /// Print a single panel object instead of an array (requires exactly one panel)
    #[arg(long)]
    pub single: bool,

    /// Abort on the first invalid panel instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Panel definition files (.yaml, .yml, .toml or .json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Build one definition, with the configured default options applied first
pub fn build_panel(config: &DashctlConfig, def: &DashListBuilder) -> dashctl_core::Result<Panel> {
    let options = config.defaults.options.iter().chain(def.options.iter());
    DashList::new(&def.title, options).map(DashList::into_panel)
}

struct Outcome {
    panels: Vec<Panel>,
    failures: usize,
}

fn build_files(config: &DashctlConfig, files: &[PathBuf], strict: bool) -> Result<Outcome> {
    let mut outcome = Outcome {
        panels: Vec::new(),
        failures: 0,
    };

    for path in files {
        let definitions = load_definitions(path)?;
        info!("building {} panel(s) from {}", definitions.len(), path.display());

        for def in &definitions {
            debug!(title = %def.title, options = ?option_names(&def.options), "building panel");
            match build_panel(config, def) {
                Ok(panel) => outcome.panels.push(panel),
                Err(err) if strict => {
                    return Err(anyhow::Error::new(err)
                        .context(panel_label(path, &def.title))
                        .context("build aborted (--strict)"));
                }
                Err(err) => {
                    eprintln!("✗ {}: {}", panel_label(path, &def.title), err);
                    outcome.failures += 1;
                }
            }
        }
    }

    Ok(outcome)
}

fn panel_label(path: &Path, title: &str) -> String {
    format!("{} [{}]", path.display(), title)
}

pub fn run_build(args: BuildArgs) -> Result<()> {
    let config = DashctlConfig::load()?;
    let outcome = build_files(&config, &args.files, args.strict)?;
    debug!(
        built = outcome.panels.len(),
        failed = outcome.failures,
        "build finished"
    );

    if args.single && outcome.panels.len() + outcome.failures != 1 {
        bail!(
            "--single needs exactly one panel, found {}",
            outcome.panels.len() + outcome.failures
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let indent = if args.compact { 0 } else { config.output.indent };

    match (args.format, args.single) {
        (_, true) if outcome.panels.is_empty() => {}
        (OutputFormat::Json, true) => write_json(&mut out, &outcome.panels[0], indent)?,
        (OutputFormat::Json, false) => write_json(&mut out, &outcome.panels, indent)?,
        (OutputFormat::Yaml, true) => out.write_all(to_yaml(&outcome.panels[0])?.as_bytes())?,
        (OutputFormat::Yaml, false) => out.write_all(to_yaml(&outcome.panels)?.as_bytes())?,
    }
    out.flush()?;

    if outcome.failures > 0 {
        bail!("{} panel(s) failed validation", outcome.failures);
    }
    Ok(())
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    let config = DashctlConfig::load()?;
    let mut failures = 0usize;

    for path in &args.files {
        for def in load_definitions(path)? {
            match build_panel(&config, &def) {
                Ok(_) => println!("✓ {}", panel_label(path, &def.title)),
                Err(err) => {
                    println!(
                        "✗ {} ({}): {}",
                        panel_label(path, &def.title),
                        err.kind().as_str(),
                        err
                    );
                    failures += 1;
                }
            }
        }
    }

    if failures > 0 {
        bail!("{} panel(s) failed validation", failures);
    }
    Ok(())
}

fn option_names(options: &[DashListOption]) -> Vec<&'static str> {
    options.iter().map(DashListOption::name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashctl_dashlist::{max_items, show_starred, span};
    use tempfile::Builder;

    fn definition_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_config_defaults_come_first() {
        let mut config = DashctlConfig::default();
        config.defaults.options = vec![show_starred(), max_items(20)];
        let def = DashListBuilder::new("Mine").max_items(3);

        let panel = build_panel(&config, &def).unwrap();
        assert!(panel.dashlist.starred);
        assert_eq!(panel.dashlist.limit, 3);
    }

    #[test]
    fn test_invalid_panels_are_counted_not_fatal() {
        let file = definition_file(
            "panels:\n  - title: Good\n    options: [{span: 4}]\n  - title: Bad\n    options: [{span: 15}]\n",
        );
        let outcome =
            build_files(&DashctlConfig::default(), &[file.path().to_path_buf()], false).unwrap();
        assert_eq!(outcome.panels.len(), 1);
        assert_eq!(outcome.panels[0].common.span, Some(4));
        assert_eq!(outcome.failures, 1);
    }

    #[test]
    fn test_strict_aborts_on_invalid_panel() {
        let file = definition_file("title: Wide\noptions:\n  - span: 0\n");
        let err = build_files(&DashctlConfig::default(), &[file.path().to_path_buf()], true)
            .err()
            .unwrap();
        let chain = format!("{:#}", err);
        assert!(chain.contains("--strict"));
        assert!(chain.contains("Wide"));
        assert!(chain.contains("invalid argument for 'span'"));
    }

    #[test]
    fn test_option_names() {
        assert_eq!(option_names(&[span(2), show_starred()]), vec!["span", "show_starred"]);
    }
}

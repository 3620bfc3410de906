//! Panel definition files.
//!
//! A definition file holds one panel (`title` + `options`) or several under
//! `panels`, or both. The format follows the extension: `.yaml`/`.yml`,
//! `.toml`, anything else is read as JSON.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use dashctl_dashlist::{DashListBuilder, DashListOption};
use serde::Deserialize;
use serde_yaml::with::singleton_map_recursive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Yaml,
    Toml,
    Json,
}

impl DefinitionFormat {
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => DefinitionFormat::Yaml,
            Some("toml") => DefinitionFormat::Toml,
            _ => DefinitionFormat::Json,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawDefinition {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    options: Vec<DashListOption>,
    #[serde(default)]
    panels: Vec<DashListBuilder>,
}

/// Parse definitions from text in the given format
pub fn parse_definitions(content: &str, format: DefinitionFormat) -> Result<Vec<DashListBuilder>> {
    let raw: RawDefinition = match format {
        // options are single-key maps (`- span: 6`), not YAML tags
        DefinitionFormat::Yaml => singleton_map_recursive::deserialize(
            serde_yaml::Deserializer::from_str(content),
        )
        .context("invalid YAML definition")?,
        DefinitionFormat::Toml => toml::from_str(content).context("invalid TOML definition")?,
        DefinitionFormat::Json => {
            serde_json::from_str(content).context("invalid JSON definition")?
        }
    };

    let mut definitions = Vec::with_capacity(raw.panels.len() + 1);
    match raw.title {
        Some(title) => definitions.push(DashListBuilder {
            title,
            options: raw.options,
        }),
        None if !raw.options.is_empty() => bail!("top-level options given without a title"),
        None => {}
    }
    definitions.extend(raw.panels);

    if definitions.is_empty() {
        bail!("no panels defined (expected `title` or `panels`)");
    }
    Ok(definitions)
}

/// Read and parse a definition file
pub fn load_definitions(path: &Path) -> Result<Vec<DashListBuilder>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read definition file: {}", path.display()))?;
    parse_definitions(&content, DefinitionFormat::from_path(path))
        .with_context(|| format!("Failed to load definitions from {}", path.display()))
}

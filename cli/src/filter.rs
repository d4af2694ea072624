#![deny(missing_docs)]

//! # Filter Command
//!
//! Loads an OpenAPI document, applies the stock filters selected by a
//! configuration file and/or flags, and writes the result.
//!
//! 1. **Config**: `--config` is loaded first; flags add to it.
//! 2. **Filter**: one engine pass per enabled filter.
//! 3. **Output**: written to `--output` (parent directories are created) or
//!    to stdout. The format comes from `--format`, else the output
//!    extension, else the input format.

use crate::error::CliResult;
use oas_filter_core::io::{load, render};
use oas_filter_core::{apply_filters, Document, DocumentFormat, FilterConfig};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, warn};

/// Output serialization format.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// YAML.
    Yaml,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => DocumentFormat::Json,
            OutputFormat::Yaml => DocumentFormat::Yaml,
        }
    }
}

/// Arguments for the filter command.
#[derive(clap::Args, Debug, Clone)]
pub struct FilterArgs {
    /// OpenAPI document to filter (.yaml, .yml or .json).
    pub input: PathBuf,

    /// Where to write the filtered document. Defaults to stdout.
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Output format; inferred from the output or input path when omitted.
    #[clap(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Filter configuration file (YAML or JSON).
    #[clap(long, env = "OAS_FILTER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Schema property to drop everywhere. Repeatable.
    #[clap(long, env = "OAS_FILTER_DROP_PROPERTY", value_delimiter = ',')]
    pub drop_property: Vec<String>,

    /// Regular expression; matching paths are removed. Repeatable.
    #[clap(long, env = "OAS_FILTER_EXCLUDE_PATH", value_delimiter = ',')]
    pub exclude_path: Vec<String>,

    /// Tag to remove from the document and its operations. Repeatable.
    #[clap(long, env = "OAS_FILTER_DROP_TAG", value_delimiter = ',')]
    pub drop_tag: Vec<String>,

    /// Remove deprecated operations, parameters, headers and schemas.
    #[clap(long, env = "OAS_FILTER_DROP_DEPRECATED")]
    pub drop_deprecated: bool,
}

impl FilterArgs {
    /// The effective configuration: the config file, extended by the flags.
    pub fn filter_config(&self) -> CliResult<FilterConfig> {
        let mut config = match &self.config {
            Some(path) => FilterConfig::from_path(path)?,
            None => FilterConfig::default(),
        };
        config.merge(FilterConfig {
            drop_properties: self.drop_property.clone(),
            exclude_paths: self.exclude_path.clone(),
            drop_tags: self.drop_tag.clone(),
            drop_deprecated: self.drop_deprecated,
        });
        Ok(config)
    }

    fn output_format(&self) -> DocumentFormat {
        if let Some(format) = self.format {
            return format.into();
        }
        let path = self.output.as_ref().unwrap_or(&self.input);
        DocumentFormat::from_path(path)
    }
}

/// Executes the filter command.
pub fn execute(args: &FilterArgs) -> CliResult<()> {
    let config = args.filter_config()?;
    if config.is_empty() {
        warn!("No filters configured; the document is written unchanged");
    }
    let mut filters = config.build_filters()?;

    let mut document: Document = load(&args.input)?;
    info!(
        input = %args.input.display(),
        filters = filters.len(),
        "Filtering document"
    );
    apply_filters(&mut filters, &mut document);

    let format = args.output_format();
    let mut rendered = render(&document, format)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, rendered)?;
            info!(output = %path.display(), %format, "Wrote filtered document");
        }
        None => {
            std::io::stdout().lock().write_all(rendered.as_bytes())?;
        }
    }
    Ok(())
}

pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{formats::SUPPORTED_FORMATS, ConfigProvider, KanbanOptions};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "curriculum-board")]
#[command(about = "Render a markdown curriculum checklist as a Kanban board")]
pub struct CliConfig {
    #[arg(long, default_value = "./curriculum.md", help = "Markdown source (URL or file path)")]
    pub source: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, value_delimiter = ',', default_value = "html")]
    pub formats: Vec<String>,

    #[arg(long, help = "TOML configuration file; replaces the other flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source(&self) -> &str {
        &self.source
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn kanban_options(&self) -> KanbanOptions {
        KanbanOptions::default()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_source("source", &self.source)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_output_formats("formats", &self.formats, &SUPPORTED_FORMATS)?;
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        Ok(())
    }
}

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use core::{
    engine::BoardEngine, parser::CurriculumParser, pipeline::BoardPipeline,
    render::KanbanRenderer,
};
pub use domain::model::{Board, Item};
pub use utils::error::{BoardError, Result};

pub mod annotate;
pub mod engine;
pub mod formats;
pub mod kanban;
pub mod parser;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{
    Board, Item, KanbanBoard, KanbanDocument, KanbanItem, KanbanOptions, TransformResult,
};
pub use crate::domain::ports::{BoardRenderer, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;

use crate::domain::model::{KanbanBoard, KanbanDocument, KanbanOptions, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// URL 或本地路徑
    fn source(&self) -> &str;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[String];
    fn kanban_options(&self) -> KanbanOptions;

    fn request_timeout(&self) -> Option<Duration> {
        None
    }

    fn request_headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}

/// 渲染元件的注入介面，讓解析器與管線可以脫離實際渲染獨立測試
pub trait BoardRenderer: Send + Sync {
    fn render(&self, boards: &[KanbanBoard], options: &KanbanOptions) -> Result<KanbanDocument>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn transform(&self, text: String) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<Vec<String>>;
}

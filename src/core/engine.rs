use crate::core::Pipeline;
use crate::utils::error::Result;

/// 依序執行 extract → transform → load
pub struct BoardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BoardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("🚀 Starting curriculum board build");

        let text = self.pipeline.extract().await?;
        tracing::info!("Fetched {} line(s) of markdown", text.lines().count());

        let result = self.pipeline.transform(text).await?;
        tracing::info!(
            "Rendered {} board(s), {} item(s)",
            result.document.boards.len(),
            result.document.item_count()
        );

        let written = self.pipeline.load(result).await?;
        for path in &written {
            tracing::info!("📁 Output saved to: {}", path);
        }

        Ok(written)
    }
}

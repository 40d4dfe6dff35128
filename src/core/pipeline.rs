use crate::core::annotate::TypeAnnotator;
use crate::core::formats::parse_formats;
use crate::core::kanban::to_payload;
use crate::core::parser::CurriculumParser;
use crate::core::{BoardRenderer, ConfigProvider, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;
use crate::utils::validation::is_remote_source;
use reqwest::Client;
use std::path::Path;

pub struct BoardPipeline<S: Storage, C: ConfigProvider, R: BoardRenderer> {
    storage: S,
    config: C,
    renderer: R,
    parser: CurriculumParser,
    annotator: TypeAnnotator,
    client: Client,
}

impl<S: Storage, C: ConfigProvider, R: BoardRenderer> BoardPipeline<S, C, R> {
    pub fn new(storage: S, config: C, renderer: R) -> Result<Self> {
        Ok(Self {
            storage,
            config,
            renderer,
            parser: CurriculumParser::new()?,
            annotator: TypeAnnotator::new()?,
            client: Client::new(),
        })
    }

    async fn fetch_remote(&self, url: &str) -> Result<String> {
        tracing::debug!("Making request to: {}", url);
        let mut request = self.client.get(url);

        if let Some(headers) = self.config.request_headers() {
            for (key, value) in headers {
                request = request.header(key, value);
            }
        }

        // 未設定時不加逾時，與瀏覽器 fetch 行為一致
        if let Some(timeout) = self.config.request_timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        tracing::debug!("Response status: {}", response.status());

        let response = response.error_for_status()?;
        Ok(response.text().await?)
    }

    async fn read_local(&self, path: &str) -> Result<String> {
        tracing::debug!("Reading local file: {}", path);
        let bytes = tokio::fs::read(Path::new(path)).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, R: BoardRenderer> Pipeline for BoardPipeline<S, C, R> {
    async fn extract(&self) -> Result<String> {
        let source = self.config.source();
        tracing::info!("📥 Fetching curriculum from: {}", source);

        let text = if is_remote_source(source) {
            self.fetch_remote(source).await?
        } else {
            self.read_local(source).await?
        };

        // 與瀏覽器解碼一致，去掉開頭的 BOM，否則第一個標題無法匹配
        let text = match text.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_string(),
            None => text,
        };

        tracing::debug!("Fetched {} bytes of markdown", text.len());
        Ok(text)
    }

    async fn transform(&self, text: String) -> Result<TransformResult> {
        let boards = self.parser.parse(&text);
        tracing::info!(
            "🧩 Parsed {} board(s) with {} item(s)",
            boards.len(),
            boards.iter().map(|b| b.items.len()).sum::<usize>()
        );

        let options = self.config.kanban_options();
        let mut document = self.renderer.render(&to_payload(&boards), &options)?;
        self.annotator.annotate(&mut document);

        Ok(TransformResult { boards, document })
    }

    async fn load(&self, result: TransformResult) -> Result<Vec<String>> {
        let formats = parse_formats(self.config.output_formats())?;
        let generated_at = chrono::Utc::now();
        let mut written = Vec::with_capacity(formats.len());

        for format in formats {
            let data = format.render(&result, generated_at)?;
            tracing::debug!("Writing {} ({} bytes)", format.file_name(), data.len());
            self.storage.write_file(format.file_name(), &data).await?;

            written.push(
                Path::new(self.config.output_path())
                    .join(format.file_name())
                    .to_string_lossy()
                    .into_owned(),
            );
        }

        Ok(written)
    }
}

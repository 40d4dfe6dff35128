use crate::core::kanban::to_payload;
use crate::domain::model::{KanbanDocument, KanbanOptions, TransformResult};
use crate::utils::error::{BoardError, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fmt::Write;
use std::str::FromStr;

pub const SUPPORTED_FORMATS: [&str; 3] = ["html", "json", "csv"];

const JKANBAN_CSS: &str = "https://cdn.jsdelivr.net/npm/jkanban@1.3.1/dist/jkanban.min.css";
const JKANBAN_JS: &str = "https://cdn.jsdelivr.net/npm/jkanban@1.3.1/dist/jkanban.min.js";

// 瀏覽器端重新渲染後，再套用一次 data-type 標註
const CLIENT_ANNOTATE_SCRIPT: &str = r"  document.querySelectorAll('.kanban-item').forEach(function (el) {
    var match = el.textContent.match(/^\[(\w+)\]/);
    if (match) el.dataset.type = match[1];
  });";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Html,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Html => "board.html",
            OutputFormat::Json => "board.json",
            OutputFormat::Csv => "board.csv",
        }
    }

    pub fn render(&self, result: &TransformResult, generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
        match self {
            OutputFormat::Html => render_html(result, generated_at).map(String::into_bytes),
            OutputFormat::Json => render_json(result, generated_at),
            OutputFormat::Csv => render_csv(result),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(BoardError::InvalidConfigValueError {
                field: "output.formats".to_string(),
                value: other.to_string(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    SUPPORTED_FORMATS.join(", ")
                ),
            }),
        }
    }
}

pub fn parse_formats(formats: &[String]) -> Result<Vec<OutputFormat>> {
    let mut parsed: Vec<OutputFormat> = Vec::with_capacity(formats.len());
    for format in formats {
        let format: OutputFormat = format.parse()?;
        if !parsed.contains(&format) {
            parsed.push(format);
        }
    }
    Ok(parsed)
}

fn options_of(document: &KanbanDocument) -> KanbanOptions {
    KanbanOptions {
        element: document.element.clone(),
        drag_items: document.drag_items,
        gutter: document.gutter.clone(),
        width_board: document.width_board.clone(),
    }
}

#[derive(Serialize)]
struct JsonEnvelope<'a> {
    generated_at: String,
    options: KanbanOptions,
    boards: Vec<crate::domain::model::KanbanBoard>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    annotations: Vec<JsonAnnotation<'a>>,
}

#[derive(Serialize)]
struct JsonAnnotation<'a> {
    board_id: &'a str,
    item: &'a str,
    data_type: &'a str,
}

fn render_json(result: &TransformResult, generated_at: DateTime<Utc>) -> Result<Vec<u8>> {
    let annotations = result
        .document
        .boards
        .iter()
        .flat_map(|board| {
            board.items.iter().filter_map(move |item| {
                item.data_type.as_deref().map(|data_type| JsonAnnotation {
                    board_id: &board.id,
                    item: &item.text,
                    data_type,
                })
            })
        })
        .collect();

    let envelope = JsonEnvelope {
        generated_at: generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        options: options_of(&result.document),
        boards: to_payload(&result.boards),
        annotations,
    };

    Ok(serde_json::to_vec_pretty(&envelope)?)
}

fn render_csv(result: &TransformResult) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["board_id", "board_title", "item_title", "done", "type"])?;

    for board in &result.boards {
        for item in &board.items {
            writer.write_record([
                board.id.as_str(),
                board.title.as_str(),
                item.title.as_str(),
                if item.done { "true" } else { "false" },
                item.item_type.as_str(),
            ])?;
        }
    }

    writer
        .into_inner()
        .map_err(|e| BoardError::IoError(e.into_error()))
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 內嵌於 <script> 的 JSON 不能含有未跳脫的 "<"
fn script_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}

fn render_html(result: &TransformResult, generated_at: DateTime<Utc>) -> Result<String> {
    let document = &result.document;
    let anchor = document.element.trim_start_matches('#');

    let payload = script_json(&to_payload(&result.boards))?;

    let mut html = String::new();

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"en\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "<meta charset=\"utf-8\">")?;
    writeln!(html, "<title>Curriculum</title>")?;
    writeln!(html, "<link rel=\"stylesheet\" href=\"{}\">", JKANBAN_CSS)?;
    writeln!(
        html,
        "<style>.kanban-container{{display:flex;gap:{gutter};}} .kanban-board{{width:{width};}} .kanban-item.done{{opacity:.6;text-decoration:line-through;}}</style>",
        gutter = escape_html(&document.gutter),
        width = escape_html(&document.width_board),
    )?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "<div id=\"{}\">", escape_html(anchor))?;
    writeln!(html, "<div class=\"kanban-container\">")?;

    for board in &document.boards {
        writeln!(
            html,
            "<div class=\"kanban-board\" data-id=\"{}\">",
            escape_html(&board.id)
        )?;
        writeln!(
            html,
            "<header class=\"kanban-board-header\"><div class=\"kanban-title-board\">{}</div></header>",
            escape_html(&board.title)
        )?;
        writeln!(html, "<main class=\"kanban-drag\">")?;

        for item in &board.items {
            let class = if item.class.is_empty() {
                "kanban-item".to_string()
            } else {
                format!("kanban-item {}", escape_html(&item.class))
            };
            let data_type = item
                .data_type
                .as_deref()
                .map(|t| format!(" data-type=\"{}\"", escape_html(t)))
                .unwrap_or_default();

            writeln!(
                html,
                "<div class=\"{}\" data-item-type=\"{}\"{}>{}</div>",
                class,
                escape_html(&item.item_type),
                data_type,
                escape_html(&item.text)
            )?;
        }

        writeln!(html, "</main>")?;
        writeln!(html, "</div>")?;
    }

    writeln!(html, "</div>")?;
    writeln!(html, "</div>")?;
    writeln!(
        html,
        "<footer><small>Generated {}</small></footer>",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(html, "<script src=\"{}\"></script>", JKANBAN_JS)?;
    writeln!(html, "<script>")?;
    writeln!(html, "if (window.jKanban) {{")?;
    writeln!(
        html,
        "  document.getElementById({anchor}).innerHTML = '';",
        anchor = script_json(&anchor)?
    )?;
    writeln!(
        html,
        "  new jKanban({{ element: {element}, boards: {payload}, dragItems: {drag}, gutter: {gutter}, widthBoard: {width} }});",
        element = script_json(&document.element)?,
        payload = payload,
        drag = document.drag_items,
        gutter = script_json(&document.gutter)?,
        width = script_json(&document.width_board)?,
    )?;
    writeln!(html, "{}", CLIENT_ANNOTATE_SCRIPT)?;
    writeln!(html, "}}")?;
    writeln!(html, "</script>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    Ok(html)
}

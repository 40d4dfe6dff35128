use serde::{Deserialize, Serialize};

/// 由一個 `## ` 標題產生的看板欄位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub id: String,
    pub title: String,
    pub items: Vec<Item>,
}

/// 由一行 `- [ ]` / `- [x]` 產生的項目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub done: bool,
    #[serde(rename = "type")]
    pub item_type: String,
}

/// jKanban 的看板格式；欄位名稱 `item` 與套件一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanBoard {
    pub id: String,
    pub title: String,
    pub item: Vec<KanbanItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanItem {
    pub title: String,
    pub class: String,
    pub drag: bool,
    #[serde(rename = "type")]
    pub item_type: String,
}

/// 固定的渲染選項
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanOptions {
    pub element: String,
    pub drag_items: bool,
    pub gutter: String,
    pub width_board: String,
}

impl Default for KanbanOptions {
    fn default() -> Self {
        Self {
            element: "#kanban".to_string(),
            drag_items: false,
            gutter: "16px".to_string(),
            width_board: "300px".to_string(),
        }
    }
}

/// 渲染後的看板文件，對應 jKanban 產生的 DOM 結構
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanbanDocument {
    pub element: String,
    pub gutter: String,
    pub width_board: String,
    pub drag_items: bool,
    pub boards: Vec<RenderedBoard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedBoard {
    pub id: String,
    pub title: String,
    pub items: Vec<RenderedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedItem {
    pub text: String,
    pub class: String,
    pub drag: bool,
    pub item_type: String,
    /// `data-type` attribute, filled by the annotation pass
    pub data_type: Option<String>,
}

impl KanbanDocument {
    pub fn item_count(&self) -> usize {
        self.boards.iter().map(|b| b.items.len()).sum()
    }

    pub fn items_mut(&mut self) -> impl Iterator<Item = &mut RenderedItem> {
        self.boards.iter_mut().flat_map(|b| b.items.iter_mut())
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub boards: Vec<Board>,
    pub document: KanbanDocument,
}

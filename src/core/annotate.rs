use crate::domain::model::KanbanDocument;
use crate::utils::error::Result;
use regex::Regex;

const TYPE_TOKEN_PATTERN: &str = r"^\[([A-Za-z0-9_]+)\]";

/// 渲染後處理：項目文字以 `[word]` 開頭時，把 word 寫入 `data-type`
#[derive(Debug, Clone)]
pub struct TypeAnnotator {
    token: Regex,
}

impl TypeAnnotator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            token: Regex::new(TYPE_TOKEN_PATTERN)?,
        })
    }

    pub fn type_token<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.token
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// 回傳被標註的項目數量；沒有符合的項目時不做任何事
    pub fn annotate(&self, document: &mut KanbanDocument) -> usize {
        let mut annotated = 0;
        for item in document.items_mut() {
            if let Some(token) = self.type_token(&item.text) {
                item.data_type = Some(token.to_string());
                annotated += 1;
            }
        }
        tracing::debug!("Annotated {} rendered item(s) with data-type", annotated);
        annotated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{RenderedBoard, RenderedItem};

    fn rendered(text: &str) -> RenderedItem {
        RenderedItem {
            text: text.to_string(),
            class: String::new(),
            drag: false,
            item_type: "default".to_string(),
            data_type: None,
        }
    }

    #[test]
    fn test_type_token() {
        let annotator = TypeAnnotator::new().unwrap();
        assert_eq!(annotator.type_token("[quiz] Chapter 1"), Some("quiz"));
        assert_eq!(annotator.type_token("Chapter 1 [quiz]"), None);
        assert_eq!(annotator.type_token("[two words] x"), None);
        assert_eq!(annotator.type_token("[] empty"), None);
    }

    #[test]
    fn test_annotate_document() {
        let annotator = TypeAnnotator::new().unwrap();
        let mut document = KanbanDocument {
            element: "#kanban".to_string(),
            gutter: "16px".to_string(),
            width_board: "300px".to_string(),
            drag_items: false,
            boards: vec![RenderedBoard {
                id: "intro".to_string(),
                title: "Intro".to_string(),
                items: vec![rendered("[lab] Setup"), rendered("Plain item")],
            }],
        };

        assert_eq!(annotator.annotate(&mut document), 1);
        assert_eq!(document.boards[0].items[0].data_type.as_deref(), Some("lab"));
        assert_eq!(document.boards[0].items[1].data_type, None);
    }
}

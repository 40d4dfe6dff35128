use crate::domain::model::{
    KanbanBoard, KanbanDocument, KanbanOptions, RenderedBoard, RenderedItem,
};
use crate::domain::ports::BoardRenderer;
use crate::utils::error::{BoardError, Result};

/// 依 jKanban 的結構建立看板文件
#[derive(Debug, Clone, Default)]
pub struct KanbanRenderer;

impl KanbanRenderer {
    pub fn new() -> Self {
        Self
    }

    fn check_options(options: &KanbanOptions) -> Result<()> {
        // 目標元素必須是 id 選擇器，例如 #kanban
        let anchor = options.element.strip_prefix('#').unwrap_or("");
        if !is_css_identifier(anchor) {
            return Err(BoardError::RenderError {
                message: format!("Target element must be an id selector, got '{}'", options.element),
            });
        }

        for (name, value) in [("gutter", &options.gutter), ("width_board", &options.width_board)] {
            if !is_css_length(value) {
                return Err(BoardError::RenderError {
                    message: format!(
                        "Render option '{}' must be a CSS length such as 16px, got '{}'",
                        name, value
                    ),
                });
            }
        }

        Ok(())
    }
}

fn is_css_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

const CSS_UNITS: [&str; 7] = ["px", "em", "rem", "%", "vw", "vh", "pt"];

/// 只接受數字加單位（或單獨的 0），值會直接寫進 <style> 與 <script>
fn is_css_length(value: &str) -> bool {
    if value == "0" {
        return true;
    }

    CSS_UNITS.iter().any(|unit| {
        value.strip_suffix(unit).is_some_and(|number| {
            !number.is_empty()
                && !number.starts_with('.')
                && !number.ends_with('.')
                && number.chars().all(|c| c.is_ascii_digit() || c == '.')
                && number.matches('.').count() <= 1
        })
    })
}

impl BoardRenderer for KanbanRenderer {
    fn render(&self, boards: &[KanbanBoard], options: &KanbanOptions) -> Result<KanbanDocument> {
        Self::check_options(options)?;

        let boards = boards
            .iter()
            .map(|board| RenderedBoard {
                id: board.id.clone(),
                title: board.title.clone(),
                items: board
                    .item
                    .iter()
                    .map(|item| RenderedItem {
                        text: item.title.clone(),
                        class: item.class.clone(),
                        drag: item.drag && options.drag_items,
                        item_type: item.item_type.clone(),
                        data_type: None,
                    })
                    .collect(),
            })
            .collect();

        Ok(KanbanDocument {
            element: options.element.clone(),
            gutter: options.gutter.clone(),
            width_board: options.width_board.clone(),
            drag_items: options.drag_items,
            boards,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::KanbanItem;

    fn payload() -> Vec<KanbanBoard> {
        vec![
            KanbanBoard {
                id: "intro".to_string(),
                title: "Intro".to_string(),
                item: vec![KanbanItem {
                    title: "Read syllabus".to_string(),
                    class: "done".to_string(),
                    drag: false,
                    item_type: "reading".to_string(),
                }],
            },
            KanbanBoard {
                id: "wrap-up".to_string(),
                title: "Wrap up".to_string(),
                item: vec![],
            },
        ]
    }

    #[test]
    fn test_render_preserves_order_and_fields() {
        let document = KanbanRenderer::new()
            .render(&payload(), &KanbanOptions::default())
            .unwrap();

        assert_eq!(document.element, "#kanban");
        assert_eq!(document.boards.len(), 2);
        assert_eq!(document.boards[0].id, "intro");
        assert_eq!(document.boards[1].id, "wrap-up");
        assert_eq!(document.item_count(), 1);

        let item = &document.boards[0].items[0];
        assert_eq!(item.text, "Read syllabus");
        assert_eq!(item.class, "done");
        assert!(!item.drag);
        assert_eq!(item.item_type, "reading");
        assert_eq!(item.data_type, None);
    }

    #[test]
    fn test_render_rejects_bad_anchor() {
        let options = KanbanOptions {
            element: ".kanban".to_string(),
            ..KanbanOptions::default()
        };
        let err = KanbanRenderer::new().render(&payload(), &options).unwrap_err();
        assert!(matches!(err, BoardError::RenderError { .. }));
    }

    #[test]
    fn test_render_rejects_markup_in_options() {
        let renderer = KanbanRenderer::new();

        let element = KanbanOptions {
            element: "#a</script><script>alert(1)</script>".to_string(),
            ..KanbanOptions::default()
        };
        assert!(renderer.render(&payload(), &element).is_err());

        let gutter = KanbanOptions {
            gutter: "1px;}body{display:none".to_string(),
            ..KanbanOptions::default()
        };
        assert!(renderer.render(&payload(), &gutter).is_err());
    }

    #[test]
    fn test_css_length() {
        assert!(is_css_length("16px"));
        assert!(is_css_length("1.5rem"));
        assert!(is_css_length("25%"));
        assert!(is_css_length("0"));
        assert!(!is_css_length("px"));
        assert!(!is_css_length("1.px"));
        assert!(!is_css_length("1.2.3px"));
        assert!(!is_css_length("16 px"));
    }

    #[test]
    fn test_render_accepts_custom_safe_options() {
        let options = KanbanOptions {
            element: "#course-board_1".to_string(),
            drag_items: false,
            gutter: "0.5em".to_string(),
            width_board: "240px".to_string(),
        };
        let document = KanbanRenderer::new().render(&payload(), &options).unwrap();
        assert_eq!(document.width_board, "240px");
    }

    #[test]
    fn test_render_rejects_empty_width() {
        let options = KanbanOptions {
            width_board: " ".to_string(),
            ..KanbanOptions::default()
        };
        assert!(KanbanRenderer::new().render(&payload(), &options).is_err());
    }
}

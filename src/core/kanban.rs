pub use crate::domain::model::{KanbanBoard, KanbanItem, KanbanOptions};

use crate::domain::model::{Board, Item};

/// 已完成項目的 CSS class
pub const DONE_CLASS: &str = "done";

impl From<&Item> for KanbanItem {
    fn from(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            class: if item.done { DONE_CLASS.to_string() } else { String::new() },
            drag: false,
            item_type: item.item_type.clone(),
        }
    }
}

impl From<&Board> for KanbanBoard {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id.clone(),
            title: board.title.clone(),
            item: board.items.iter().map(KanbanItem::from).collect(),
        }
    }
}

/// 轉成渲染元件需要的看板格式，保留原順序
pub fn to_payload(boards: &[Board]) -> Vec<KanbanBoard> {
    boards.iter().map(KanbanBoard::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_shape() {
        let boards = vec![Board {
            id: "intro".to_string(),
            title: "Intro".to_string(),
            items: vec![
                Item {
                    title: "Read syllabus".to_string(),
                    done: true,
                    item_type: "reading".to_string(),
                },
                Item {
                    title: "Watch video".to_string(),
                    done: false,
                    item_type: "default".to_string(),
                },
            ],
        }];

        let payload = to_payload(&boards);
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "id": "intro",
                "title": "Intro",
                "item": [
                    {"title": "Read syllabus", "class": "done", "drag": false, "type": "reading"},
                    {"title": "Watch video", "class": "", "drag": false, "type": "default"}
                ]
            }])
        );
    }

    #[test]
    fn test_default_options() {
        let options = KanbanOptions::default();
        assert_eq!(options.element, "#kanban");
        assert!(!options.drag_items);
        assert_eq!(options.gutter, "16px");
        assert_eq!(options.width_board, "300px");
    }
}

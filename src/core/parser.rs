use crate::domain::model::{Board, Item};
use crate::utils::error::Result;
use regex::Regex;

/// 沒有標籤時的預設類型
pub const DEFAULT_ITEM_TYPE: &str = "default";

// 瀏覽器 `\s` 的字元集：含 U+FEFF，不含 U+0085
macro_rules! space_class {
    () => {
        r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]"
    };
}

// 擷取內容在第一個 \r 或 Unicode 行分隔符前停止，CRLF 與 LF 文件結果相同
const HEADING_PATTERN: &str = concat!(r"^##", space_class!(), r"+([^\r\x{2028}\x{2029}]*)");
const TASK_PATTERN: &str = concat!(
    r"^- \[( |x)\]",
    space_class!(),
    r"+([^\r\x{2028}\x{2029}]*)"
);
const TAG_PATTERN: &str = r"#([A-Za-z0-9_-]+)";
const WHITESPACE_PATTERN: &str = concat!(space_class!(), "+");

fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// 將 markdown 清單轉成看板序列
///
/// 單向逐行掃描：`## 標題` 開啟新的看板，`- [ ]` / `- [x]` 加入目前看板，
/// 其餘行一律忽略。解析本身不會失敗。
#[derive(Debug, Clone)]
pub struct CurriculumParser {
    heading: Regex,
    task: Regex,
    tag: Regex,
    whitespace: Regex,
}

impl CurriculumParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            heading: Regex::new(HEADING_PATTERN)?,
            task: Regex::new(TASK_PATTERN)?,
            tag: Regex::new(TAG_PATTERN)?,
            whitespace: Regex::new(WHITESPACE_PATTERN)?,
        })
    }

    pub fn parse(&self, text: &str) -> Vec<Board> {
        let mut boards = Vec::new();
        let mut current: Option<Board> = None;
        let mut orphaned = 0usize;

        for line in text.split('\n') {
            if let Some(caps) = self.heading.captures(line) {
                let title = caps.get(1).map_or("", |m| m.as_str());
                if let Some(board) = current.take() {
                    boards.push(board);
                }
                tracing::debug!("Opening board: {}", title);
                current = Some(Board {
                    id: self.slugify(title),
                    title: title.to_string(),
                    items: Vec::new(),
                });
                continue;
            }

            if let Some(caps) = self.task.captures(line) {
                match current.as_mut() {
                    Some(board) => {
                        let done = &caps[1] == "x";
                        let content = caps.get(2).map_or("", |m| m.as_str());
                        board.items.push(self.parse_item(content, done));
                    }
                    None => orphaned += 1,
                }
            }
        }

        if let Some(board) = current.take() {
            boards.push(board);
        }

        if orphaned > 0 {
            tracing::debug!("Skipped {} checklist line(s) before the first heading", orphaned);
        }

        boards
    }

    /// 只取第一個標籤；其餘標籤保留在標題中
    fn parse_item(&self, content: &str, done: bool) -> Item {
        let item_type = self
            .tag
            .captures(content)
            .and_then(|caps| caps.get(1))
            .map_or(DEFAULT_ITEM_TYPE, |m| m.as_str())
            .to_string();

        let title = self
            .tag
            .replacen(content, 1, "")
            .trim_matches(is_space)
            .to_string();

        Item {
            title,
            done,
            item_type,
        }
    }

    /// 小寫並將連續空白換成單一 `-`
    pub fn slugify(&self, title: &str) -> String {
        self.whitespace
            .replace_all(&title.to_lowercase(), "-")
            .into_owned()
    }
}

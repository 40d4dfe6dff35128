use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    let directives = if verbose {
        "curriculum_board=debug,info"
    } else {
        "curriculum_board=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives))
}

/// 初始化日誌；`json` 為真時輸出 JSON 行，方便排程或 CI 收集
///
/// `RUST_LOG` 有設定時優先於 `verbose`。
pub fn init_logger(verbose: bool, json: bool) {
    fn base<S>() -> fmt::Layer<S> {
        fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
    }

    // Option<Layer> 為 None 時不產生任何輸出，兩種格式只會啟用一種
    let (compact, json_lines) = if json {
        (None, Some(base().json()))
    } else {
        (Some(base().compact()), None)
    };

    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(compact)
        .with(json_lines)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        assert!(default_filter(false).to_string().contains("curriculum_board=info"));
        assert!(default_filter(true).to_string().contains("curriculum_board=debug"));
    }
}

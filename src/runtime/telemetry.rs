//! 日志初始化

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::AppConfig;
use crate::errors::{LmsError, Result};

/// 安装全局 tracing 订阅者
///
/// 开发环境输出带文件和行号的文本日志，其他环境输出 JSON。
/// 返回的 guard 需要持有到进程结束，否则缓冲中的日志会丢失。
pub fn init_tracing(config: &AppConfig) -> Result<WorkerGuard> {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(std::io::stdout());
    let filter = tracing_subscriber::EnvFilter::try_new(&config.app.log_level).map_err(|e| {
        LmsError::configuration(format!("日志级别无效 '{}': {e}", config.app.log_level))
    })?;
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    let installed = if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .try_init()
    } else {
        tracing_builder.json().try_init()
    };
    installed.map_err(|e| LmsError::configuration(format!("日志初始化失败: {e}")))?;

    Ok(guard)
}

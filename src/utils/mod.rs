//! # 工具函数模块
//!
//! 提供美化输出、进度条和运行报告。
//!
//! ## 依赖关系
//! - 被 `batch/`, `commands/` 和 `main.rs` 使用
//! - 子模块: output, progress, reporter

pub mod output;
pub mod progress;
pub mod reporter;

pub use reporter::{ConsoleReporter, QuietReporter, Reporter};

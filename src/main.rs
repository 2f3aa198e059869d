//! # fcompress - 批量文件压缩工具
//!
//! 把一组输入文件（显式列表和/或目录模式匹配）分别压缩为
//! Brotli / GZip / ZLib / Deflate 格式，输出到原位置、指定路径或扁平化的输出目录。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/   (收集、规划、并行执行)
//!   │     ├── codec/   (编码器适配)
//!   │     └── models/  (数据模型)
//!   ├── utils/      (输出、进度条、报告)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod codec;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    let quiet = cli.compress.quiet;

    if let Err(e) = commands::run(cli) {
        if !quiet && !e.is_reported() {
            utils::output::print_error(&e.with_causes());
        }
        std::process::exit(1);
    }
}

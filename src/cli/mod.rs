//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: compress

pub mod compress;

use clap::Parser;

/// fcompress - 批量文件压缩工具
#[derive(Parser)]
#[command(name = "fcompress")]
#[command(version)]
#[command(about = "A batch file compression tool (Brotli, GZip, ZLib, Deflate)", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub compress: compress::CompressArgs,
}

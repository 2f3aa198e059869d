//! # 压缩作业数据模型
//!
//! 一个作业 = 一个输入文件 + 一个输出路径 + 固定的格式与压缩级别。
//!
//! ## 依赖关系
//! - 由 `batch/planner.rs` 创建
//! - 被 `batch/runner.rs` 和 `codec/` 消费

use clap::ValueEnum;
use std::path::PathBuf;

/// 压缩级别
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum CompressionLevel {
    /// Balance between speed and size
    Optimal,
    /// Fastest compression
    Fastest,
    /// Store only, no compression
    #[value(alias = "nocompression")]
    NoCompression,
    /// Smallest output size
    #[default]
    #[value(alias = "smallestsize")]
    SmallestSize,
}

impl std::fmt::Display for CompressionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompressionLevel::Optimal => write!(f, "optimal"),
            CompressionLevel::Fastest => write!(f, "fastest"),
            CompressionLevel::NoCompression => write!(f, "no-compression"),
            CompressionLevel::SmallestSize => write!(f, "smallest-size"),
        }
    }
}

/// 单个压缩作业
///
/// 规划完成后不可变，由执行器恰好消费一次。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    /// 输入文件（绝对路径）
    pub input: PathBuf,

    /// 输出文件
    pub output: PathBuf,

    /// 格式标签（原样保留，由 codec 解析）
    pub format: String,

    /// 压缩级别
    pub level: CompressionLevel,
}

impl Job {
    pub fn new(
        input: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        format: impl Into<String>,
        level: CompressionLevel,
    ) -> Self {
        Job {
            input: input.into(),
            output: output.into(),
            format: format.into(),
            level,
        }
    }
}

//! # 运行配置
//!
//! 所有"可能配置"的字段都显式使用 `Option`，在规划边界统一校验。
//!
//! ## 依赖关系
//! - 由 `cli/compress.rs` 转换得到
//! - 被 `batch/collector.rs`, `batch/planner.rs`, `commands/compress.rs` 使用

use super::job::CompressionLevel;
use std::path::{Path, PathBuf};

/// 默认匹配模式（匹配所有文件）
pub const DEFAULT_PATTERN: &str = "*";

/// 默认格式标签
pub const DEFAULT_FORMAT: &str = "br";

/// 批量压缩配置
#[derive(Debug, Clone)]
pub struct CompressSettings {
    /// 显式输入文件列表
    pub input_files: Option<Vec<PathBuf>>,

    /// 输入目录
    pub input_directory: Option<PathBuf>,

    /// 显式输出文件列表（长度必须与发现的输入文件数相同）
    pub output_files: Option<Vec<PathBuf>>,

    /// 输出目录（输出会被扁平化到该目录下）
    pub output_directory: Option<PathBuf>,

    /// 文件名匹配模式，按顺序应用
    pub patterns: Vec<String>,

    /// 格式标签: br, gz, zlib, def/deflate
    pub format: String,

    /// 压缩级别
    pub level: CompressionLevel,

    /// 并发上限
    pub threads: usize,

    /// 是否递归搜索子目录
    pub recursive: bool,

    /// 静默模式
    pub quiet: bool,
}

impl Default for CompressSettings {
    fn default() -> Self {
        CompressSettings {
            input_files: None,
            input_directory: None,
            output_files: None,
            output_directory: None,
            patterns: vec![DEFAULT_PATTERN.to_string()],
            format: DEFAULT_FORMAT.to_string(),
            level: CompressionLevel::default(),
            threads: 1,
            recursive: true,
            quiet: false,
        }
    }
}

impl CompressSettings {
    /// 有效的输出目录（空路径视为未配置）
    pub fn effective_output_directory(&self) -> Option<&Path> {
        self.output_directory
            .as_deref()
            .filter(|dir| !dir.as_os_str().is_empty())
    }
}

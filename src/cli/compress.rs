//! # 压缩命令参数定义
//!
//! 批量压缩文件 (br, gz, zlib, def/deflate)
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 转换为 `models/settings.rs` 中的 `CompressSettings`

use crate::batch::collector::split_patterns;
use crate::models::settings::{DEFAULT_FORMAT, DEFAULT_PATTERN};
use crate::models::{CompressSettings, CompressionLevel};

use clap::{ArgAction, Args};
use std::path::PathBuf;

/// 压缩参数
#[derive(Args, Debug)]
pub struct CompressArgs {
    /// The relative or absolute paths to the input files
    #[arg(short = 'f', long, num_args = 1..)]
    pub input_files: Option<Vec<PathBuf>>,

    /// The relative or absolute path to the input directory
    #[arg(short = 'd', long)]
    pub input_directory: Option<PathBuf>,

    /// The relative or absolute paths to the output files (one per input file)
    #[arg(long, num_args = 1..)]
    pub output_files: Option<Vec<PathBuf>>,

    /// The relative or absolute path to the output directory (outputs are flattened)
    #[arg(short = 'o', long)]
    pub output_directory: Option<PathBuf>,

    /// File name patterns matched in the input directory (comma separated or repeated)
    #[arg(short, long = "pattern", num_args = 1.., default_value = DEFAULT_PATTERN)]
    pub patterns: Vec<String>,

    /// The compression file format (br, gz, zlib, def, deflate)
    #[arg(long, default_value = DEFAULT_FORMAT)]
    pub format: String,

    /// The compression level
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = CompressionLevel::SmallestSize)]
    pub level: CompressionLevel,

    /// The number of parallel job threads
    #[arg(short, long, default_value_t = 1)]
    pub threads: usize,

    /// Search the input directory recursively
    #[arg(short, long, default_value_t = true, action = ArgAction::Set)]
    pub recursive: bool,

    /// Suppress all output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Exit with a non-zero status when planning aborts or any file fails
    #[arg(long, default_value_t = false)]
    pub fail_on_error: bool,
}

impl From<CompressArgs> for CompressSettings {
    fn from(args: CompressArgs) -> Self {
        CompressSettings {
            input_files: args.input_files,
            input_directory: args.input_directory,
            output_files: args.output_files,
            output_directory: args.output_directory,
            patterns: args
                .patterns
                .iter()
                .flat_map(|p| split_patterns(p))
                .collect(),
            format: args.format,
            level: args.level,
            threads: args.threads,
            recursive: args.recursive,
            quiet: args.quiet,
        }
    }
}

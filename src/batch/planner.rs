//! # 作业规划
//!
//! 为每个输入文件确定输出路径，生成不可变的作业列表。
//!
//! ## 输出路径规则
//! - 配置了显式输出文件列表：第 i 个输入对应第 i 个输出，
//!   两者数量必须相等，否则不生成任何作业
//! - 否则为 `输入路径 + "." + 小写格式标签`
//! - 配置了输出目录时只保留文件名，放入输出目录（扁平化）
//!
//! 扁平化后不同子目录下的同名文件会写到同一个输出路径，最后完成的作业覆盖之前的结果。
//!
//! ## 依赖关系
//! - 被 `commands/compress.rs` 调用
//! - 使用 `models/`

use super::collector::absolute_path;
use crate::error::{CompressError, Result};
use crate::models::{CompressSettings, Job};

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// 根据配置和输入文件列表生成作业列表
pub fn build_jobs(settings: &CompressSettings, files: &[PathBuf]) -> Result<Vec<Job>> {
    if let Some(outputs) = &settings.output_files {
        if outputs.len() != files.len() {
            return Err(CompressError::OutputCountMismatch {
                inputs: files.len(),
                outputs: outputs.len(),
            });
        }
    }

    let output_directory = settings
        .effective_output_directory()
        .map(absolute_path);

    let jobs = files
        .iter()
        .enumerate()
        .map(|(i, input)| {
            let output = match &settings.output_files {
                Some(outputs) => absolute_path(&outputs[i]),
                None => derive_output_path(input, &settings.format, output_directory.as_deref()),
            };
            Job::new(input.clone(), output, settings.format.clone(), settings.level)
        })
        .collect();

    Ok(jobs)
}

/// 默认输出路径：追加小写格式扩展名，可选扁平化到输出目录
pub fn derive_output_path(input: &Path, format: &str, output_directory: Option<&Path>) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(".");
    name.push(format.to_lowercase());
    let output = PathBuf::from(name);

    match (output_directory, output.file_name()) {
        (Some(dir), Some(file_name)) => dir.join(file_name),
        _ => output,
    }
}

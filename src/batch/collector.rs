//! # 文件收集器
//!
//! 根据显式文件列表和目录 + 模式收集待压缩文件列表。
//!
//! ## 收集顺序
//! 1. 显式输入文件，按给定顺序
//! 2. 对每个模式（按配置顺序）遍历一次输入目录：
//!    先是当前目录中匹配的文件（枚举顺序），
//!    递归时再依次深度优先进入每个子目录
//!
//! 模式之间不去重：同时匹配两个模式的文件会出现两次。
//!
//! ## 依赖关系
//! - 被 `commands/compress.rs` 调用
//! - 使用 `walkdir` 枚举目录，`glob` 匹配文件名

use crate::error::{CompressError, Result};
use crate::models::CompressSettings;

use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 按配置收集输入文件
pub fn resolve_inputs(settings: &CompressSettings) -> Result<Vec<PathBuf>> {
    let mut collector = FileCollector::new()
        .with_patterns(settings.patterns.clone())
        .recursive(settings.recursive);

    if let Some(files) = &settings.input_files {
        collector = collector.with_files(files.clone());
    }
    if let Some(dir) = &settings.input_directory {
        collector = collector.with_directory(dir.clone());
    }

    collector.collect()
}

/// 拆分逗号分隔的多模式，去掉空项
pub fn split_patterns(pattern: &str) -> Vec<String> {
    pattern
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// 转为绝对路径（不要求路径存在）
///
/// 无法转换的路径（例如空路径）原样保留，由后续的打开操作报告错误。
pub fn absolute_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// 文件收集器
pub struct FileCollector {
    /// 显式输入文件
    files: Vec<PathBuf>,
    /// 输入目录
    directory: Option<PathBuf>,
    /// 匹配模式列表
    patterns: Vec<String>,
    /// 是否递归
    recursive: bool,
}

impl FileCollector {
    /// 创建新的文件收集器
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            directory: None,
            patterns: vec!["*".to_string()],
            recursive: true,
        }
    }

    /// 设置显式输入文件
    pub fn with_files(mut self, files: Vec<PathBuf>) -> Self {
        self.files = files;
        self
    }

    /// 设置输入目录
    pub fn with_directory(mut self, directory: PathBuf) -> Self {
        self.directory = Some(directory);
        self
    }

    /// 设置匹配模式（可以为空，配合目录使用时会报错）
    pub fn with_patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = patterns;
        self
    }

    /// 设置是否递归搜索
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有文件
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        paths.extend(self.files.iter().map(|file| absolute_path(file)));

        let directory = match &self.directory {
            Some(dir) => dir,
            None => return Ok(paths),
        };

        if self.patterns.is_empty() {
            return Err(CompressError::EmptyPattern);
        }

        let patterns = self
            .patterns
            .iter()
            .map(|p| {
                Pattern::new(p).map_err(|e| CompressError::InvalidPattern {
                    pattern: p.clone(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let root = absolute_path(directory);
        if !root.is_dir() {
            return Err(CompressError::DirectoryNotFound {
                path: root.display().to_string(),
            });
        }

        for pattern in &patterns {
            Self::collect_matching(&root, pattern, self.recursive, true, &mut paths)?;
        }

        Ok(paths)
    }

    /// 收集单层目录中匹配的文件，然后按需递归
    ///
    /// 输入目录本身无法读取时返回错误；更深层无法读取的条目直接跳过。
    fn collect_matching(
        dir: &Path,
        pattern: &Pattern,
        recursive: bool,
        is_root: bool,
        paths: &mut Vec<PathBuf>,
    ) -> Result<()> {
        let mut subdirs = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if is_root && e.depth() == 0 => {
                    return Err(CompressError::DirectoryReadError {
                        path: dir.display().to_string(),
                        source: e.into(),
                    });
                }
                Err(_) => continue,
            };

            if entry.file_type().is_dir() {
                subdirs.push(entry.into_path());
            } else if Self::is_file(&entry) && Self::matches(pattern, entry.path()) {
                paths.push(entry.into_path());
            }
        }

        if recursive {
            for subdir in subdirs {
                Self::collect_matching(&subdir, pattern, recursive, false, paths)?;
            }
        }

        Ok(())
    }

    /// 普通文件，或指向文件的符号链接
    fn is_file(entry: &walkdir::DirEntry) -> bool {
        entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
    }

    /// 检查文件名是否匹配模式
    fn matches(pattern: &Pattern, path: &Path) -> bool {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => pattern.matches(name),
            None => false,
        }
    }
}

impl Default for FileCollector {
    fn default() -> Self {
        Self::new()
    }
}

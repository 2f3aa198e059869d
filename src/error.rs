//! # 统一错误处理模块
//!
//! 定义 fcompress 的所有错误类型，使用 `thiserror` 派生。
//!
//! 错误分为三类：
//! - 规划错误：在任何作业执行前检测，整个运行中止且无副作用
//! - 作业错误：只影响单个文件，不影响其他作业
//! - 致命错误：线程池或输出目录无法创建
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// fcompress 统一错误类型
#[derive(Error, Debug)]
pub enum CompressError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode '{path}' as {format}")]
    EncodeError {
        path: String,
        format: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    #[error("Failed to read directory: {path}")]
    DirectoryReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 规划错误
    // ─────────────────────────────────────────────────────────────
    #[error("The pattern can not be empty.")]
    EmptyPattern,

    #[error("Invalid pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error(
        "The number of the output files must match the number of the input files \
         ({outputs} output(s) for {inputs} input(s))."
    )]
    OutputCountMismatch { inputs: usize, outputs: usize },

    // ─────────────────────────────────────────────────────────────
    // 执行错误
    // ─────────────────────────────────────────────────────────────
    #[error("Job panicked while compressing '{path}': {message}")]
    JobPanicked { path: String, message: String },

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),

    #[error("{failed} job(s) failed")]
    BatchFailed { failed: usize },

    #[error("Run aborted: {0}")]
    Aborted(String),
}

impl CompressError {
    /// 是否为规划阶段错误（发生时不会执行任何作业）
    pub fn is_planning(&self) -> bool {
        matches!(
            self,
            CompressError::EmptyPattern
                | CompressError::InvalidPattern { .. }
                | CompressError::DirectoryNotFound { .. }
                | CompressError::DirectoryReadError { .. }
                | CompressError::OutputCountMismatch { .. }
        )
    }

    /// 是否已经通过报告器输出过，无需再次打印
    pub fn is_reported(&self) -> bool {
        matches!(self, CompressError::Aborted(_))
    }

    /// 带底层原因的完整错误描述
    pub fn with_causes(&self) -> String {
        let mut msg = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            msg.push_str(": ");
            msg.push_str(&cause.to_string());
            source = cause.source();
        }
        msg
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CompressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planning_classification() {
        assert!(CompressError::EmptyPattern.is_planning());
        assert!(CompressError::OutputCountMismatch {
            inputs: 2,
            outputs: 1
        }
        .is_planning());
        assert!(CompressError::DirectoryReadError {
            path: "in".into(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        }
        .is_planning());
        assert!(!CompressError::ThreadPool("boom".into()).is_planning());
        assert!(!CompressError::FileReadError {
            path: "a".into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .is_planning());
    }

    #[test]
    fn test_only_aborted_counts_as_reported() {
        assert!(CompressError::Aborted("The pattern can not be empty.".into()).is_reported());
        assert!(!CompressError::BatchFailed { failed: 1 }.is_reported());
        assert!(!CompressError::EmptyPattern.is_reported());
    }

    #[test]
    fn test_count_mismatch_message() {
        let msg = CompressError::OutputCountMismatch {
            inputs: 2,
            outputs: 1,
        }
        .to_string();
        assert!(msg.starts_with(
            "The number of the output files must match the number of the input files"
        ));
        assert!(msg.contains("1 output(s) for 2 input(s)"));
    }

    #[test]
    fn test_with_causes_includes_source() {
        let err = CompressError::FileReadError {
            path: "/tmp/missing.txt".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.with_causes(),
            "Failed to read file: /tmp/missing.txt: no such file"
        );
    }
}

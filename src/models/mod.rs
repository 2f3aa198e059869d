//! # 数据模型模块
//!
//! 定义运行配置与压缩作业数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/`, `codec/` 和 `commands/` 使用
//! - 子模块: settings, job

pub mod job;
pub mod settings;

pub use job::{CompressionLevel, Job};
pub use settings::CompressSettings;

//! # 批量处理模块
//!
//! 提供输入发现、作业规划和并行执行。
//!
//! ## 功能
//! - 显式文件 + 目录模式匹配收集输入
//! - 生成输出路径并校验数量约束
//! - 有界并行执行与统计报告
//!
//! ## 依赖关系
//! - 被 `commands/compress.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `walkdir` + `glob` 收集文件

pub mod collector;
pub mod planner;
pub mod runner;

pub use collector::resolve_inputs;
pub use planner::build_jobs;
pub use runner::{BatchReport, BatchRunner, JobOutcome};

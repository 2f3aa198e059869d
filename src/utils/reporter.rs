//! # 运行报告
//!
//! 发现、规划、执行各阶段通过注入的 [`Reporter`] 输出信息，
//! 不依赖任何全局日志状态。
//!
//! - [`ConsoleReporter`]: 彩色终端输出 + 进度条
//! - [`QuietReporter`]: 静默模式，全部丢弃
//!
//! 所有实现必须可以被多个工作线程同时调用。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/compress.rs` 使用
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use crate::batch::{BatchReport, JobOutcome};
use crate::error::CompressError;
use crate::models::Job;
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::sync::Mutex;

/// 运行报告接口，默认实现全部为空操作
pub trait Reporter: Send + Sync {
    /// 发现了 `count` 个输入文件
    fn discovered(&self, _count: usize) {}

    /// 没有发现任何输入文件
    fn no_inputs(&self) {}

    /// 规划阶段失败，运行中止
    fn planning_failed(&self, _error: &CompressError) {}

    /// 开始分发作业
    fn batch_started(&self, _total: usize, _threads: usize) {}

    /// 单个作业结束（可能在任意工作线程上调用）
    fn job_finished(&self, _job: &Job, _outcome: &JobOutcome) {}

    /// 所有作业结束
    fn batch_finished(&self, _report: &BatchReport) {}
}

/// 静默模式
pub struct QuietReporter;

impl Reporter for QuietReporter {}

/// 终端输出
#[derive(Default)]
pub struct ConsoleReporter {
    progress: Mutex<Option<ProgressBar>>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 有进度条时暂停进度条再打印
    fn print(&self, f: impl FnOnce()) {
        match self.current_bar() {
            Some(pb) => pb.suspend(f),
            None => f(),
        }
    }

    fn current_bar(&self) -> Option<ProgressBar> {
        self.progress
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }
}

impl Reporter for ConsoleReporter {
    fn discovered(&self, count: usize) {
        output::print_info(&format!("Found {} file(s) to compress", count));
    }

    fn no_inputs(&self) {
        output::print_warning("No input files found");
    }

    fn planning_failed(&self, error: &CompressError) {
        output::print_error(&error.with_causes());
    }

    fn batch_started(&self, total: usize, threads: usize) {
        output::print_info(&format!(
            "Compressing {} file(s) with {} worker(s)",
            total, threads
        ));
        if let Ok(mut guard) = self.progress.lock() {
            *guard = Some(progress::create_progress_bar(total as u64, "Compressing"));
        }
    }

    fn job_finished(&self, job: &Job, outcome: &JobOutcome) {
        match outcome {
            JobOutcome::Succeeded(output_path) => self.print(|| {
                output::print_compressed(
                    &job.input.display().to_string(),
                    &output_path.display().to_string(),
                )
            }),
            JobOutcome::Skipped(_) => {}
            JobOutcome::Failed(input, error) => self.print(|| {
                output::print_error(&format!("{}: {}", input.display(), error.with_causes()))
            }),
        }

        if let Some(pb) = self.current_bar() {
            pb.inc(1);
        }
    }

    fn batch_finished(&self, report: &BatchReport) {
        if let Ok(mut guard) = self.progress.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }

        output::print_done(&summary_line(report));
    }
}

/// 批次汇总行
fn summary_line(report: &BatchReport) -> String {
    format!(
        "Compressed {} file(s) in {:.2?} ({} skipped, {} failed)",
        report.success, report.elapsed, report.skipped, report.failed
    )
}

/// 测试用：把所有报告记录为文本行
#[cfg(test)]
#[derive(Default)]
pub struct MemoryReporter {
    lines: Mutex<Vec<String>>,
}

#[cfg(test)]
impl MemoryReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }
}

#[cfg(test)]
impl Reporter for MemoryReporter {
    fn discovered(&self, count: usize) {
        self.push(format!("found: {}", count));
    }

    fn no_inputs(&self) {
        self.push("no inputs".to_string());
    }

    fn planning_failed(&self, error: &CompressError) {
        self.push(format!("error: {}", error));
    }

    fn batch_started(&self, total: usize, threads: usize) {
        self.push(format!("start: {} job(s), {} worker(s)", total, threads));
    }

    fn job_finished(&self, _job: &Job, outcome: &JobOutcome) {
        match outcome {
            JobOutcome::Succeeded(output) => {
                self.push(format!("ok: {}", output.display()));
            }
            JobOutcome::Skipped(_) => {}
            JobOutcome::Failed(input, error) => {
                self.push(format!("error: {}: {}", input.display(), error));
            }
        }
    }

    fn batch_finished(&self, report: &BatchReport) {
        self.push(format!(
            "done: {} ok, {} skipped, {} failed",
            report.success, report.skipped, report.failed
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn test_quiet_reporter_accepts_everything() {
        let reporter = QuietReporter;
        let job = Job::new("a", "a.br", "br", Default::default());
        reporter.discovered(1);
        reporter.planning_failed(&CompressError::EmptyPattern);
        reporter.batch_started(1, 1);
        reporter.job_finished(&job, &JobOutcome::Skipped(PathBuf::from("a")));
        reporter.batch_finished(&BatchReport::default());
    }

    #[test]
    fn test_summary_line() {
        let report = BatchReport {
            success: 3,
            skipped: 1,
            failed: 2,
            elapsed: Duration::from_millis(1500),
            ..Default::default()
        };
        assert_eq!(
            summary_line(&report),
            "Compressed 3 file(s) in 1.50s (1 skipped, 2 failed)"
        );
    }

    #[test]
    fn test_console_reporter_progress_lifecycle() {
        let reporter = ConsoleReporter::new();
        let job = Job::new("a", "a.br", "br", Default::default());

        reporter.batch_started(2, 1);
        assert!(reporter.current_bar().is_some());

        reporter.job_finished(&job, &JobOutcome::Skipped(PathBuf::from("a")));
        assert_eq!(reporter.current_bar().map(|pb| pb.position()), Some(1));

        let report = BatchReport {
            elapsed: Duration::from_millis(5),
            ..Default::default()
        };
        reporter.batch_finished(&report);
        assert!(reporter.current_bar().is_none());
    }
}

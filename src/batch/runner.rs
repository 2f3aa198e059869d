//! # 批量执行器
//!
//! 在固定大小的线程池上执行作业列表。
//!
//! ## 功能
//! - 基于 rayon 的有界并行：同时运行的作业数不超过线程数
//! - 每个作业恰好执行一次，失败（包括 panic）只记录，不影响其他作业
//! - 从分发开始到全部作业结束统一计时
//!
//! ## 依赖关系
//! - 被 `commands/compress.rs` 调用
//! - 使用 `utils/reporter.rs` 报告每个作业的结果
//! - 使用 `rayon` 进行并行处理

use crate::codec::CompressStatus;
use crate::error::{CompressError, Result};
use crate::models::Job;
use crate::utils::reporter::Reporter;

use rayon::prelude::*;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// 单个作业结果
#[derive(Debug)]
pub enum JobOutcome {
    /// 压缩成功（输出路径）
    Succeeded(PathBuf),
    /// 格式未识别，未产生输出（输入路径）
    Skipped(PathBuf),
    /// 压缩失败（输入路径, 原因）
    Failed(PathBuf, CompressError),
}

/// 批量执行结果统计
#[derive(Debug, Default)]
pub struct BatchReport {
    /// 成功数量
    pub success: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 失败数量
    pub failed: usize,
    /// 每个作业的结果，与作业列表顺序一致
    pub outcomes: Vec<JobOutcome>,
    /// 总耗时
    pub elapsed: Duration,
}

impl BatchReport {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: JobOutcome) {
        match &outcome {
            JobOutcome::Succeeded(_) => self.success += 1,
            JobOutcome::Skipped(_) => self.skipped += 1,
            JobOutcome::Failed(_, _) => self.failed += 1,
        }
        self.outcomes.push(outcome);
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.success + self.skipped + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    threads: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器，并发数至少为 1
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
        }
    }

    /// 并发上限
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// 并行执行作业列表，阻塞直到所有作业结束
    pub fn run<F>(&self, jobs: &[Job], reporter: &dyn Reporter, processor: F) -> Result<BatchReport>
    where
        F: Fn(&Job) -> Result<CompressStatus> + Sync + Send,
    {
        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("fcompress-worker-{}", i))
            .build()
            .map_err(|e| CompressError::ThreadPool(e.to_string()))?;

        reporter.batch_started(jobs.len(), self.threads());
        let started = Instant::now();

        let outcomes: Vec<JobOutcome> = pool.install(|| {
            jobs.par_iter()
                .map(|job| {
                    let outcome = Self::execute(job, &processor);
                    reporter.job_finished(job, &outcome);
                    outcome
                })
                .collect()
        });

        // 汇总结果
        let mut report = BatchReport::default();
        for outcome in outcomes {
            report.merge(outcome);
        }
        report.elapsed = started.elapsed();
        debug_assert_eq!(report.total(), jobs.len());

        reporter.batch_finished(&report);
        Ok(report)
    }

    /// 执行单个作业，错误和 panic 都转换为 `JobOutcome::Failed`
    fn execute<F>(job: &Job, processor: &F) -> JobOutcome
    where
        F: Fn(&Job) -> Result<CompressStatus>,
    {
        match panic::catch_unwind(AssertUnwindSafe(|| processor(job))) {
            Ok(Ok(CompressStatus::Written)) => JobOutcome::Succeeded(job.output.clone()),
            Ok(Ok(CompressStatus::Unsupported)) => JobOutcome::Skipped(job.input.clone()),
            Ok(Err(err)) => JobOutcome::Failed(job.input.clone(), err),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                JobOutcome::Failed(
                    job.input.clone(),
                    CompressError::JobPanicked {
                        path: job.input.display().to_string(),
                        message,
                    },
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompressionLevel;
    use crate::utils::reporter::{MemoryReporter, QuietReporter};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::thread;

    fn make_jobs(n: usize) -> Vec<Job> {
        (0..n)
            .map(|i| {
                Job::new(
                    format!("/in/{}.txt", i),
                    format!("/out/{}.txt.br", i),
                    "br",
                    CompressionLevel::Fastest,
                )
            })
            .collect()
    }

    /// 记录同时运行的最大作业数
    struct ConcurrencyProbe {
        active: AtomicUsize,
        peak: AtomicUsize,
    }

    impl ConcurrencyProbe {
        fn new() -> Self {
            Self {
                active: AtomicUsize::new(0),
                peak: AtomicUsize::new(0),
            }
        }

        fn enter(&self) {
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(10));
            self.active.fetch_sub(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_zero_threads_means_one() {
        assert_eq!(BatchRunner::new(0).threads(), 1);
        assert_eq!(BatchRunner::new(4).threads(), 4);
    }

    #[test]
    fn test_single_thread_never_overlaps() {
        let probe = ConcurrencyProbe::new();
        let report = BatchRunner::new(1)
            .run(&make_jobs(8), &QuietReporter, |_| {
                probe.enter();
                Ok(CompressStatus::Written)
            })
            .unwrap();

        assert_eq!(report.success, 8);
        assert_eq!(probe.peak.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrency_is_bounded() {
        let probe = ConcurrencyProbe::new();
        let report = BatchRunner::new(3)
            .run(&make_jobs(12), &QuietReporter, |_| {
                probe.enter();
                Ok(CompressStatus::Written)
            })
            .unwrap();

        assert_eq!(report.total(), 12);
        assert!(probe.peak.load(Ordering::SeqCst) <= 3);
    }

    #[test]
    fn test_each_job_runs_exactly_once() {
        let seen: Mutex<HashMap<PathBuf, usize>> = Mutex::new(HashMap::new());
        let jobs = make_jobs(20);

        BatchRunner::new(4)
            .run(&jobs, &QuietReporter, |job| {
                *seen.lock().unwrap().entry(job.input.clone()).or_insert(0) += 1;
                Ok(CompressStatus::Written)
            })
            .unwrap();

        let seen = seen.into_inner().unwrap();
        assert_eq!(seen.len(), 20);
        assert!(seen.values().all(|&count| count == 1));
    }

    #[test]
    fn test_failure_is_isolated() {
        let jobs = make_jobs(5);
        let report = BatchRunner::new(2)
            .run(&jobs, &QuietReporter, |job| {
                if job.input == PathBuf::from("/in/2.txt") {
                    Err(CompressError::FileReadError {
                        path: job.input.display().to_string(),
                        source: std::io::Error::from(std::io::ErrorKind::NotFound),
                    })
                } else {
                    Ok(CompressStatus::Written)
                }
            })
            .unwrap();

        assert_eq!(report.success, 4);
        assert_eq!(report.failed, 1);

        match &report.outcomes[2] {
            JobOutcome::Failed(input, CompressError::FileReadError { .. }) => {
                assert_eq!(input, &PathBuf::from("/in/2.txt"));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_panic_is_isolated() {
        let jobs = make_jobs(3);
        let report = BatchRunner::new(2)
            .run(&jobs, &QuietReporter, |job| {
                if job.input == PathBuf::from("/in/0.txt") {
                    panic!("encoder exploded");
                }
                Ok(CompressStatus::Written)
            })
            .unwrap();

        assert_eq!(report.success, 2);
        assert_eq!(report.failed, 1);
        match &report.outcomes[0] {
            JobOutcome::Failed(_, CompressError::JobPanicked { message, .. }) => {
                assert_eq!(message, "encoder exploded");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_outcomes_follow_job_order() {
        let jobs = make_jobs(10);
        let report = BatchRunner::new(4)
            .run(&jobs, &QuietReporter, |job| {
                if job.input.to_string_lossy().contains('3') {
                    Ok(CompressStatus::Unsupported)
                } else {
                    Ok(CompressStatus::Written)
                }
            })
            .unwrap();

        assert_eq!(report.skipped, 1);
        for (job, outcome) in jobs.iter().zip(&report.outcomes) {
            match outcome {
                JobOutcome::Succeeded(output) => assert_eq!(output, &job.output),
                JobOutcome::Skipped(input) => assert_eq!(input, &job.input),
                JobOutcome::Failed(_, err) => panic!("unexpected failure: {}", err),
            }
        }
    }

    #[test]
    fn test_reporter_sees_every_job_and_one_summary() {
        let reporter = MemoryReporter::default();
        let jobs = make_jobs(3);
        BatchRunner::new(2)
            .run(&jobs, &reporter, |_| Ok(CompressStatus::Written))
            .unwrap();

        let lines = reporter.lines();
        assert_eq!(lines.first().unwrap(), "start: 3 job(s), 2 worker(s)");
        assert_eq!(lines.iter().filter(|l| l.starts_with("ok: ")).count(), 3);
        assert_eq!(lines.iter().filter(|l| l.starts_with("done: ")).count(), 1);
        assert_eq!(lines.last().unwrap(), "done: 3 ok, 0 skipped, 0 failed");
    }

    #[test]
    fn test_empty_job_list() {
        let report = BatchRunner::new(2)
            .run(&[], &QuietReporter, |_| Ok(CompressStatus::Written))
            .unwrap();
        assert_eq!(report.total(), 0);
        assert!(report.outcomes.is_empty());
    }
}

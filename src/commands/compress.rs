//! # 压缩命令实现
//!
//! 串联整个流程：收集输入 → 规划作业 → 创建输出目录 → 并行压缩 → 汇总。
//!
//! ## 功能
//! - 规划错误（模式为空、输出数量不匹配等）在任何写入前中止运行
//! - 单个文件失败只影响该文件
//! - 默认退出码始终为成功，`--fail-on-error` 时失败返回错误
//!
//! ## 依赖关系
//! - 使用 `cli/compress.rs` 定义的参数
//! - 使用 `batch/` 收集、规划、执行
//! - 使用 `codec/` 作为作业处理函数
//! - 使用 `utils/reporter.rs` 输出

use crate::batch::{build_jobs, resolve_inputs, BatchReport, BatchRunner};
use crate::cli::compress::CompressArgs;
use crate::codec::{self, CompressStatus};
use crate::error::{CompressError, Result};
use crate::models::{CompressSettings, Job};
use crate::utils::{ConsoleReporter, QuietReporter, Reporter};

use std::fs;

/// 一次运行的结果
#[derive(Debug)]
pub enum RunOutcome {
    /// 没有发现输入文件
    NoInputs,
    /// 规划失败，没有执行任何作业
    Aborted(CompressError),
    /// 所有作业已执行
    Completed(BatchReport),
}

/// 执行压缩命令
pub fn execute(args: CompressArgs) -> Result<()> {
    let fail_on_error = args.fail_on_error;
    let settings = CompressSettings::from(args);

    let reporter: Box<dyn Reporter> = if settings.quiet {
        Box::new(QuietReporter)
    } else {
        Box::new(ConsoleReporter::new())
    };

    let outcome = run(&settings, reporter.as_ref(), codec::compress_file)?;

    if fail_on_error {
        match outcome {
            RunOutcome::Aborted(e) => return Err(CompressError::Aborted(e.to_string())),
            RunOutcome::Completed(report) if report.failed > 0 => {
                return Err(CompressError::BatchFailed {
                    failed: report.failed,
                })
            }
            _ => {}
        }
    }

    Ok(())
}

/// 按配置运行一次批量压缩
///
/// 规划错误通过 `reporter` 报告并返回 `RunOutcome::Aborted`；
/// 只有无法继续的错误（输出目录无法创建、线程池无法创建）才返回 `Err`。
pub fn run<F>(settings: &CompressSettings, reporter: &dyn Reporter, processor: F) -> Result<RunOutcome>
where
    F: Fn(&Job) -> Result<CompressStatus> + Sync + Send,
{
    let files = match resolve_inputs(settings) {
        Ok(files) => files,
        Err(e) => return abort(e, reporter),
    };

    if files.is_empty() {
        reporter.no_inputs();
        return Ok(RunOutcome::NoInputs);
    }

    reporter.discovered(files.len());

    let jobs = match build_jobs(settings, &files) {
        Ok(jobs) => jobs,
        Err(e) => return abort(e, reporter),
    };

    prepare_output_directory(settings)?;

    let runner = BatchRunner::new(settings.threads);
    let report = runner.run(&jobs, reporter, processor)?;

    Ok(RunOutcome::Completed(report))
}

/// 规划错误转为中止结果，其他错误继续向上传递
fn abort(error: CompressError, reporter: &dyn Reporter) -> Result<RunOutcome> {
    if error.is_planning() {
        reporter.planning_failed(&error);
        Ok(RunOutcome::Aborted(error))
    } else {
        Err(error)
    }
}

/// 创建输出目录
fn prepare_output_directory(settings: &CompressSettings) -> Result<()> {
    if let Some(dir) = settings.effective_output_directory() {
        fs::create_dir_all(dir).map_err(|e| CompressError::FileWriteError {
            path: dir.display().to_string(),
            source: e,
        })?;
    }

    Ok(())
}

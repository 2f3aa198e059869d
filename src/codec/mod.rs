//! # 编码器适配层
//!
//! 按格式标签选择流式编码器，把输入文件的全部字节写入压缩输出。
//! 压缩算法本身来自 `brotli` 和 `flate2`，这里只负责调度。
//!
//! ## 支持的格式
//! - `br`: Brotli
//! - `gz`: GZip
//! - `zlib`: ZLib
//! - `def` / `deflate`: 原始 Deflate
//!
//! 未识别的格式标签不是错误：不产生输出文件，也不输出日志。
//!
//! ## 依赖关系
//! - 被 `commands/compress.rs` 作为作业处理函数传给 `batch/runner.rs`
//! - 使用 `models/job.rs`

use crate::error::{CompressError, Result};
use crate::models::{CompressionLevel, Job};

use flate2::write::{DeflateEncoder, GzEncoder, ZlibEncoder};
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};

/// Brotli 窗口大小 (log2)
const BROTLI_LGWIN: i32 = 22;

/// 支持的压缩格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Brotli,
    Gzip,
    Zlib,
    Deflate,
}

impl Format {
    /// 从格式标签解析（大小写不敏感）
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_lowercase().as_str() {
            "br" => Some(Format::Brotli),
            "gz" => Some(Format::Gzip),
            "zlib" => Some(Format::Zlib),
            "def" | "deflate" => Some(Format::Deflate),
            _ => None,
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Brotli => write!(f, "brotli"),
            Format::Gzip => write!(f, "gzip"),
            Format::Zlib => write!(f, "zlib"),
            Format::Deflate => write!(f, "deflate"),
        }
    }
}

/// Brotli quality (0-11)
fn brotli_quality(level: CompressionLevel) -> i32 {
    match level {
        CompressionLevel::Optimal => 4,
        CompressionLevel::Fastest => 1,
        CompressionLevel::NoCompression => 0,
        CompressionLevel::SmallestSize => 11,
    }
}

/// flate2 级别（gz/zlib/deflate 共用）
fn flate2_level(level: CompressionLevel) -> Compression {
    match level {
        CompressionLevel::Optimal => Compression::new(6),
        CompressionLevel::Fastest => Compression::fast(),
        CompressionLevel::NoCompression => Compression::none(),
        CompressionLevel::SmallestSize => Compression::best(),
    }
}

/// 单个作业的压缩结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressStatus {
    /// 输出已写入
    Written,
    /// 未识别的格式，未做任何操作
    Unsupported,
}

/// 压缩单个作业
///
/// 先打开输入，再创建输出：输入不可读时不会留下空输出文件。
/// 编码中途失败时已写入的部分输出保留在磁盘上。
pub fn compress_file(job: &Job) -> Result<CompressStatus> {
    let format = match Format::from_tag(&job.format) {
        Some(format) => format,
        None => return Ok(CompressStatus::Unsupported),
    };

    let input = File::open(&job.input).map_err(|e| CompressError::FileReadError {
        path: job.input.display().to_string(),
        source: e,
    })?;

    let output = File::create(&job.output).map_err(|e| CompressError::FileWriteError {
        path: job.output.display().to_string(),
        source: e,
    })?;

    let mut reader = BufReader::new(input);
    let writer = encode(format, job.level, &mut reader, BufWriter::new(output)).map_err(|e| {
        CompressError::EncodeError {
            path: job.input.display().to_string(),
            format: format.to_string(),
            source: e,
        }
    })?;

    writer
        .into_inner()
        .map_err(|e| CompressError::FileWriteError {
            path: job.output.display().to_string(),
            source: e.into_error(),
        })?;

    Ok(CompressStatus::Written)
}

/// 把 `input` 的全部字节经编码器写入 `output`，结束编码流后返回 `output`
pub fn encode<R, W>(format: Format, level: CompressionLevel, input: &mut R, output: W) -> io::Result<W>
where
    R: Read,
    W: Write,
{
    match format {
        Format::Brotli => {
            let mut output = output;
            let mut params = brotli::enc::BrotliEncoderParams::default();
            params.quality = brotli_quality(level);
            params.lgwin = BROTLI_LGWIN;
            brotli::BrotliCompress(input, &mut output, &params)?;
            Ok(output)
        }
        Format::Gzip => {
            let mut encoder = GzEncoder::new(output, flate2_level(level));
            io::copy(input, &mut encoder)?;
            encoder.finish()
        }
        Format::Zlib => {
            let mut encoder = ZlibEncoder::new(output, flate2_level(level));
            io::copy(input, &mut encoder)?;
            encoder.finish()
        }
        Format::Deflate => {
            let mut encoder = DeflateEncoder::new(output, flate2_level(level));
            io::copy(input, &mut encoder)?;
            encoder.finish()
        }
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::argparse::ParserError;

/// Result type for operations that can produce FindError
pub type FindResult<T> = Result<T, FindError>;

/// mini-find 的错误类型
#[derive(Debug, Error)]
pub enum FindError {
    /// 搜索根路径不存在
    #[error("File '{}' does not exist.", .0.display())]
    PathNotFound(PathBuf),

    /// 无法确认路径是否存在（其他IO错误）
    #[error("Filesystem error at {}: {source}", .path.display())]
    FilesystemError {
        #[source]
        source: io::Error,
        path: PathBuf,
    },

    /// 命令行参数错误
    #[error(transparent)]
    Parser(#[from] ParserError),
}

impl FindError {
    /// 将存在性检查的IO错误转换为领域错误
    pub fn from_io(err: io::Error, path: PathBuf) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FindError::PathNotFound(path),
            _ => FindError::FilesystemError { source: err, path },
        }
    }
}

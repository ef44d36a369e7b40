//! 文件查找模块
//!
//! 这个模块负责校验搜索根路径、遍历目录树，并用组合过滤器筛选结果。
//! 所有操作都在调用线程上顺序执行。

pub mod filter;
pub mod options;
pub mod walker;

use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::DirEntry;

use crate::argparse::NonEmpty;
use crate::cli::FindArguments;
use crate::errors::{FindError, FindResult};

pub use self::filter::{AllFilter, FileFilter, FindType, FsEntry};
pub use self::options::FindOptions;
pub use self::walker::FileWalker;

/// 文件查找器
#[derive(Debug, Default)]
pub struct Finder {
    options: FindOptions,
}

impl Finder {
    /// 创建新的文件查找器实例
    pub fn new(options: FindOptions) -> Self {
        Self { options }
    }

    /// 按给定参数搜索所有根路径
    ///
    /// 任一根路径不存在时整个搜索失败，不返回任何结果。
    /// 结果先按根路径顺序、再按遍历顺序排列。
    pub fn search(&self, args: &FindArguments) -> FindResult<Vec<DirEntry>> {
        let roots = resolve_roots(&args.paths)?;
        let filter = AllFilter::from_arguments(args);
        debug!("过滤条件: {}", filter.description());

        let mut results = Vec::new();
        for root in &roots {
            results.extend(self.find(root, &filter));
        }

        info!("在 {} 个根路径中找到 {} 个匹配项", roots.len(), results.len());
        Ok(results)
    }

    /// 在单个根路径下查找符合条件的条目
    pub fn find<F>(&self, root: &Path, filter: &F) -> Vec<DirEntry>
    where
        F: FileFilter + ?Sized,
    {
        debug!("在路径中搜索: {}", root.display());

        FileWalker::new(&self.options)
            .walk(root)
            .filter(|entry| filter.matches(entry))
            .collect()
    }
}

/// 将路径字符串解析为已存在的路径，遇到第一个不存在的路径即失败
pub fn resolve_roots(paths: &NonEmpty<String>) -> FindResult<Vec<PathBuf>> {
    paths.iter().map(|raw| resolve_root(raw)).collect()
}

fn resolve_root(raw: &str) -> FindResult<PathBuf> {
    let path = PathBuf::from(raw);
    match path.try_exists() {
        Ok(true) => Ok(path),
        Ok(false) => Err(FindError::PathNotFound(path)),
        Err(err) => Err(FindError::from_io(err, path)),
    }
}

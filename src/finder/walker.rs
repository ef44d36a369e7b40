//! 文件系统遍历功能
//!
//! 本模块以先序方式遍历目录树：先访问目录本身，再访问其子项。
//! 根路径本身也会被返回；若根路径是文件，则只返回该文件。

use std::path::Path;

use log::warn;
use walkdir::{DirEntry, WalkDir};

use super::options::FindOptions;

/// 使用给定选项处理文件系统遍历
pub struct FileWalker<'a> {
    options: &'a FindOptions,
}

impl<'a> FileWalker<'a> {
    /// 使用给定选项创建新的 FileWalker
    pub fn new(options: &'a FindOptions) -> Self {
        Self { options }
    }

    /// 从给定路径开始遍历文件系统
    pub fn walk<P: AsRef<Path>>(&self, path: P) -> FileWalkerIterator {
        FileWalkerIterator {
            inner: self.init_walker(path.as_ref()).into_iter(),
        }
    }

    /// 使用配置的选项初始化目录遍历器
    fn init_walker(&self, path: &Path) -> WalkDir {
        // 同一目录下按文件名排序，保证输出稳定
        let mut walker = WalkDir::new(path)
            .follow_links(self.options.follow_links)
            .sort_by_file_name();

        if let Some(depth) = self.options.max_depth {
            walker = walker.max_depth(depth);
        }

        walker
    }
}

/// 先序遍历迭代器，读取失败的条目记录警告后跳过
pub struct FileWalkerIterator {
    inner: walkdir::IntoIter,
}

impl Iterator for FileWalkerIterator {
    type Item = DirEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next()? {
                Ok(entry) => return Some(entry),
                Err(err) => warn!("跳过无法读取的条目: {}", err),
            }
        }
    }
}

//! 一个小型的文件查找库
//!
//! 本库由两部分组成：
//! - [`argparse`]：按短名/长名查询原始参数向量的选项解析器
//! - [`finder`]：校验根路径、先序遍历目录树并按条件过滤
//!
//! # 示例
//!
//! ```no_run
//! use mini_find::argparse::ArgParser;
//! use mini_find::cli::FindArguments;
//! use mini_find::finder::Finder;
//!
//! let parser = ArgParser::new(["--paths=.", "--type=file", "--iname=readme.md"]);
//! let arguments = FindArguments::parse(&parser).unwrap();
//!
//! let results = Finder::default().search(&arguments).unwrap();
//! for entry in results {
//!     println!("找到文件: {}", entry.path().display());
//! }
//! ```

pub mod argparse;
pub mod cli;
pub mod errors;
pub mod finder;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::Finder;

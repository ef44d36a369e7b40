//! mini-find 的命令行接口
//!
//! 本模块把 [`ArgParser`] 的查询组合成完整的命令行参数：
//!
//! | 选项 | 短名 | 长名 | 必需 |
//! |---|---|---|---|
//! | 搜索根路径（逗号分隔） | `-p` | `--paths` | 是 |
//! | 条目类型 `file` / `directory` | `-t` | `--type` | 否 |
//! | 精确文件名 | `-n` | `--name` | 否 |
//! | 不区分大小写的文件名 | `-in` | `--iname` | 否 |
//! | 最大搜索深度 | `-md` | `--max-depth` | 否 |
//! | 跟随符号链接 | `-L` | `--follow-links` | 否 |
//! | 启用调试日志 | `-d` | `--debug` | 否 |

use crate::argparse::{ArgParser, LongName, NonEmpty, Optional, ParseResult, ParserError, ShortName};
use crate::finder::filter::FindType;
use crate::finder::options::FindOptions;

fn option(short: &str, long: &str) -> (ShortName, LongName) {
    (ShortName::new(short), LongName::new(long))
}

/// 解析并校验后的搜索参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindArguments {
    /// 搜索根路径，至少一个
    pub paths: NonEmpty<String>,
    pub find_type: Option<FindType>,
    /// 精确文件名
    pub name: Option<String>,
    /// 不区分大小写的文件名
    pub iname: Option<String>,
}

impl FindArguments {
    /// 从参数向量中读取搜索参数
    pub fn parse(parser: &ArgParser) -> ParseResult<Self> {
        let (short, long) = option("p", "paths");
        let paths = parser.list(&short, &long)?;

        let (short, long) = option("t", "type");
        let find_type = parser
            .value_with(&short, &long, |raw| {
                FindType::parse(&raw).ok_or_else(|| ParserError::invalid_value(&short, &long, &raw))
            })
            .optional()?;

        let (short, long) = option("n", "name");
        let name = parser.value(&short, &long).optional()?;

        let (short, long) = option("in", "iname");
        let iname = parser.value(&short, &long).optional()?;

        Ok(Self {
            paths,
            find_type,
            name,
            iname,
        })
    }
}

/// 完整的命令行参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub arguments: FindArguments,

    /// 最大搜索深度
    pub max_depth: Option<usize>,

    /// 跟随符号链接
    pub follow_links: bool,

    /// 启用调试日志
    pub debug: bool,
}

impl Cli {
    /// 解析当前进程的命令行参数
    pub fn parse() -> ParseResult<Self> {
        Self::parse_from(&ArgParser::from_env()?)
    }

    pub fn parse_from(parser: &ArgParser) -> ParseResult<Self> {
        let arguments = FindArguments::parse(parser)?;

        let (short, long) = option("md", "max-depth");
        let max_depth = parser
            .value_with(&short, &long, |raw| {
                raw.parse::<usize>()
                    .map_err(|_| ParserError::invalid_value(&short, &long, &raw))
            })
            .optional()?;

        let (short, long) = option("L", "follow-links");
        let follow_links = parser.flag(&short, &long)?;

        let (short, long) = option("d", "debug");
        let debug = parser.flag(&short, &long)?;

        Ok(Self {
            arguments,
            max_depth,
            follow_links,
            debug,
        })
    }

    /// 构建查找选项
    pub fn build_options(&self) -> FindOptions {
        FindOptions::from_cli(self)
    }
}

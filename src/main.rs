use std::io::{self, Write};
use std::process;
use std::time::Instant;

use anyhow::Result;
use log::{debug, info};

use mini_find::cli::Cli;
use mini_find::finder::Finder;

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    // 解析命令行参数
    let cli = Cli::parse()?;

    // 初始化日志，RUST_LOG 优先
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    info!("开始运行 mini-find");
    debug!("参数: {:?}", cli);
    let start_time = Instant::now();

    // 全部根路径校验通过后才会有输出
    let finder = Finder::new(cli.build_options());
    let results = finder.search(&cli.arguments)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for entry in &results {
        writeln!(out, "{}", entry.path().display())?;
    }
    out.flush()?;

    let elapsed = start_time.elapsed();
    info!("搜索完成，耗时 {:.2?}", elapsed);

    Ok(())
}

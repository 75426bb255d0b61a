//! 采集协议命令行：解码描述符、查看协议注册表。

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use harvest_config::HarvestConfig;
use harvest_telemetry::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 加载本地 .env（如存在）
    dotenvy::dotenv().ok();
    // 从环境变量加载运行配置
    let config = HarvestConfig::from_env()?;
    // 初始化结构化日志
    init_tracing(&config.log_filter);

    let cli = Cli::parse();
    // 启动阶段完成注册，之后只读
    let registry = commands::build_registry(&config);

    match cli.command {
        Commands::Decode { path } => {
            let text = commands::read_source(&path)?;
            println!("{}", commands::decode(&registry, &text)?);
        }
        Commands::List => println!("{registry}"),
        Commands::Stats { paths } => println!("{}", commands::stats(&registry, &paths)?),
    }

    Ok(())
}

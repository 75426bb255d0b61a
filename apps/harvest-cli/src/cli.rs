use clap::{Parser, Subcommand};

/// 采集协议描述符工具
#[derive(Parser)]
#[command(name = "harvest-cli")]
#[command(version)]
#[command(about = "Decode harvest protocol descriptors and inspect the protocol registry")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode one descriptor and print it as JSON
    Decode {
        /// Descriptor file path, or "-" for stdin
        path: String,
    },

    /// List registered protocol factories
    List,

    /// Decode several descriptors and print decode counters
    Stats {
        /// Descriptor file paths
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

use clap::Parser;
use std::path::PathBuf;

/// Jilo Agent - Jitsi Meet 服务状态 HTTP 接口
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// 配置文件路径
    #[arg(short, long, env = "JILO_AGENT_CONFIG", default_value = "./jilo-agent.conf")]
    pub config: PathBuf,

    /// 监听端口（覆盖配置文件中的 agent_port）
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// 监听地址（覆盖配置文件中的 bind_address）
    #[arg(short = 'a', long, env = "ADDRESS")]
    pub address: Option<String>,
}

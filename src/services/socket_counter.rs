use async_trait::async_trait;
use regex::Regex;
use tokio::process::Command;

/// 统计某个端口上的活动连接数
#[async_trait]
pub trait SocketCounter: Send + Sync {
    async fn count(&self, port: u16) -> u64;
}

/// 通过 `netstat -an` 的输出计数
pub struct NetstatCounter {
    program: String,
}

impl NetstatCounter {
    pub fn new() -> Self {
        Self::with_program("netstat")
    }

    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Default for NetstatCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SocketCounter for NetstatCounter {
    async fn count(&self, port: u16) -> u64 {
        match Command::new(&self.program).arg("-an").output().await {
            Ok(output) => count_port_lines(&String::from_utf8_lossy(&output.stdout), port),
            Err(e) => {
                log::debug!("Failed to inspect the socket table for port {}: {}", port, e);
                0
            }
        }
    }
}

/// 统计地址列以 `:<port>` 结尾的行数；`:8080` 和 IPv6 地址中间的 `:80:` 都不算
pub fn count_port_lines(table: &str, port: u16) -> u64 {
    let pattern = match Regex::new(&format!(r":{}(\s|$)", port)) {
        Ok(r) => r,
        Err(_) => return 0,
    };

    table.lines().filter(|line| pattern.is_match(line)).count() as u64
}

use async_trait::async_trait;
use tokio::process::Command;

use crate::models::ServiceState;

/// 查询进程管理器中某个 unit 的状态
#[async_trait]
pub trait ProcessProbe: Send + Sync {
    async fn probe(&self, unit: &str) -> ServiceState;
}

/// 通过 `systemctl is-active <unit>` 查询
pub struct SystemctlProbe {
    program: String,
}

impl SystemctlProbe {
    pub fn new() -> Self {
        Self::with_program("systemctl")
    }

    pub fn with_program(program: &str) -> Self {
        Self {
            program: program.to_string(),
        }
    }
}

impl Default for SystemctlProbe {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessProbe for SystemctlProbe {
    async fn probe(&self, unit: &str) -> ServiceState {
        // is-active 对非 active 状态返回非零退出码，因此只看 stdout
        match Command::new(&self.program).arg("is-active").arg(unit).output().await {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout);
                ServiceState::from_supervisor_output(&stdout)
            }
            Err(e) => {
                log::debug!("Failed to query the state of unit '{}': {}", unit, e);
                ServiceState::NotRunning
            }
        }
    }
}

//! 外部查看器 - 把 DOT 写入临时文件并交给 shell 管道显示

use crate::generator::DotGenerator;
use std::io::Write;
use thiserror::Error;
use tokio::process::Command;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to spawn viewer `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ViewerError>;

/// 查看器配置
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// shell 命令，`{path}` 替换为 DOT 文件路径
    pub command: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            command: "dot -Tsvg {path} | display".to_string(),
        }
    }
}

impl ViewerConfig {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(v) = std::env::var("FIXTUREGRAPH_VIEWER") {
            if !v.trim().is_empty() {
                config.command = v;
            }
        }

        config
    }

    pub fn with_command(mut self, command: &str) -> Self {
        self.command = command.to_string();
        self
    }
}

/// 查看结果；查看器失败不是错误，DOT 源码保留供检查
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowReport {
    /// 没有任何节点或边，未启动查看器
    Empty,
    Shown,
    Failed {
        source: String,
        status: Option<i32>,
        stdout: String,
        stderr: String,
    },
}

pub struct Viewer {
    config: ViewerConfig,
}

impl Viewer {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    pub async fn show(&self, generator: &DotGenerator, lines: &[String]) -> Result<ShowReport> {
        if lines.is_empty() {
            tracing::info!("Found no relations, not showing dot graph");
            return Ok(ShowReport::Empty);
        }

        let source = generator.document(lines);
        let mut file = tempfile::Builder::new()
            .prefix("fixturegraph-")
            .suffix(".dot")
            .tempfile()?;
        file.write_all(source.as_bytes())?;
        file.flush()?;

        let command = self
            .config
            .command
            .replace("{path}", &file.path().display().to_string());
        tracing::debug!("running viewer: {}", command);

        let output = Command::new("bash")
            .arg("-c")
            .arg(&command)
            .output()
            .await
            .map_err(|source| ViewerError::Spawn {
                command: command.clone(),
                source,
            })?;

        if output.status.success() {
            return Ok(ShowReport::Shown);
        }

        tracing::warn!("viewer exited with {}", output.status);
        Ok(ShowReport::Failed {
            source,
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

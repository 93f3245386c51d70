use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::config::{LaunchConfig, LaunchPolicy};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchSpec {
    pub program: String, // e.g. "python"
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
    pub env: BTreeMap<String, String>,
}

impl LaunchSpec {
    /// `<interpreter> -m <module> run <script>` with the policy's environment.
    pub fn from_config(cfg: &LaunchConfig, policy: LaunchPolicy) -> Self {
        Self {
            program: cfg.interpreter.clone(),
            args: vec![
                "-m".to_string(),
                cfg.module.clone(),
                "run".to_string(),
                cfg.script.clone(),
            ],
            cwd: cfg.workdir.as_ref().map(PathBuf::from),
            env: child_env(cfg, policy),
        }
    }

    /// Builds the command; the explicit env is layered over the inherited one.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).envs(&self.env);
        if let Some(dir) = &self.cwd {
            cmd.current_dir(dir);
        }
        cmd
    }

    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Environment handed to the dashboard. CORS is only switched on for
/// detached launches.
pub fn child_env(cfg: &LaunchConfig, policy: LaunchPolicy) -> BTreeMap<String, String> {
    let binding = &cfg.dashboard;
    let mut env = BTreeMap::new();

    let python_path = cfg
        .python_path
        .clone()
        .unwrap_or_else(|| bundled_python_path().display().to_string());
    env.insert("PYTHONPATH".to_string(), python_path);
    env.insert(
        "STREAMLIT_SERVER_HEADLESS".to_string(),
        binding.headless.to_string(),
    );
    env.insert(
        "STREAMLIT_SERVER_ADDRESS".to_string(),
        binding.address.clone(),
    );
    env.insert("STREAMLIT_SERVER_PORT".to_string(), binding.port.to_string());

    if policy == LaunchPolicy::Detached {
        env.insert(
            "STREAMLIT_SERVER_ENABLE_CORS".to_string(),
            binding.enable_cors.to_string(),
        );
    }

    env
}

/// `<function dir>/streamlit/lib`, where the function dir holds the executable.
fn bundled_python_path() -> PathBuf {
    let dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join("streamlit").join("lib")
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub launch: LaunchConfig,

    #[serde(default)]
    pub routes: RoutesConfig,

    #[serde(default)]
    pub pages: PagesConfig,

    #[serde(default)]
    pub http_server: HttpServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// How the dashboard process is started on each invocation.
///
/// - `blocking`: inherit stdio and wait for the child to exit. The outcome is
///   observed, but the invocation is exposed to the platform's execution ceiling.
/// - `detached`: spawn and return immediately. Dodges the ceiling, but the
///   child's fate is never observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaunchPolicy {
    Blocking,
    #[default]
    Detached,
}

impl LaunchPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LaunchPolicy::Blocking => "blocking",
            LaunchPolicy::Detached => "detached",
        }
    }
}

impl std::str::FromStr for LaunchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blocking" => Ok(LaunchPolicy::Blocking),
            "detached" => Ok(LaunchPolicy::Detached),
            other => Err(format!("unknown launch policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchConfig {
    #[serde(default)]
    pub policy: LaunchPolicy,

    /// Python interpreter used to run the dashboard.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    #[serde(default = "default_module")]
    pub module: String,

    #[serde(default = "default_script")]
    pub script: String,

    /// Working directory for the child. Inherits the caller's when unset.
    #[serde(default)]
    pub workdir: Option<String>,

    /// Overrides the bundled `<function dir>/streamlit/lib` search path.
    #[serde(default)]
    pub python_path: Option<String>,

    #[serde(default)]
    pub dashboard: DashboardBinding,
}

fn default_interpreter() -> String {
    "python".to_string()
}

fn default_module() -> String {
    "streamlit".to_string()
}

fn default_script() -> String {
    "app.py".to_string()
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            policy: LaunchPolicy::default(),
            interpreter: default_interpreter(),
            module: default_module(),
            script: default_script(),
            workdir: None,
            python_path: None,
            dashboard: DashboardBinding::default(),
        }
    }
}

/// Server settings handed to the dashboard through its environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardBinding {
    #[serde(default = "default_dashboard_port")]
    pub port: u16,

    #[serde(default = "default_dashboard_address")]
    pub address: String,

    #[serde(default = "default_true")]
    pub headless: bool,

    /// Only applied under the detached policy.
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

fn default_dashboard_port() -> u16 {
    8501
}

fn default_dashboard_address() -> String {
    "0.0.0.0".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for DashboardBinding {
    fn default() -> Self {
        Self {
            port: default_dashboard_port(),
            address: default_dashboard_address(),
            headless: true,
            enable_cors: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// Path that triggers a launch attempt.
    #[serde(default = "default_status_path")]
    pub status_path: String,

    /// Function name; `/.netlify/functions/<name>` also triggers a launch.
    #[serde(default = "default_function_name")]
    pub function_name: String,
}

fn default_status_path() -> String {
    "/status".to_string()
}

fn default_function_name() -> String {
    "streamlit".to_string()
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            status_path: default_status_path(),
            function_name: default_function_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Where the redirect page sends the browser.
    #[serde(default = "default_app_url")]
    pub app_url: String,

    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u32,

    #[serde(default = "default_platform_name")]
    pub platform_name: String,

    /// Execution ceiling quoted on the pages.
    #[serde(default = "default_execution_limit_secs")]
    pub execution_limit_secs: u32,

    #[serde(default = "default_alternatives")]
    pub alternatives: Vec<HostingAlternative>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostingAlternative {
    pub name: String,
    pub url: String,
}

fn default_app_url() -> String {
    "http://localhost:8501".to_string()
}

fn default_refresh_secs() -> u32 {
    5
}

fn default_platform_name() -> String {
    "Netlify".to_string()
}

fn default_execution_limit_secs() -> u32 {
    10
}

fn default_alternatives() -> Vec<HostingAlternative> {
    vec![
        HostingAlternative {
            name: "Streamlit Cloud".into(),
            url: "https://streamlit.io/cloud".into(),
        },
        HostingAlternative {
            name: "Heroku".into(),
            url: "https://www.heroku.com".into(),
        },
        HostingAlternative {
            name: "Render".into(),
            url: "https://render.com".into(),
        },
    ]
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            app_url: default_app_url(),
            refresh_secs: default_refresh_secs(),
            platform_name: default_platform_name(),
            execution_limit_secs: default_execution_limit_secs(),
            alternatives: default_alternatives(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "default_http_host")]
    pub host: String,

    #[serde(default = "default_http_port")]
    pub port: u16,

    /// Per-request ceiling, mirroring the hosting platform's limit.
    #[serde(default = "default_http_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_http_host() -> String {
    "127.0.0.1".to_string()
}

fn default_http_port() -> u16 {
    8888
}

fn default_http_timeout_secs() -> u64 {
    10
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: default_http_host(),
            port: default_http_port(),
            timeout_secs: default_http_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// When set, logs are also written to a daily-rolling file here.
    #[serde(default)]
    pub directory: Option<String>,

    #[serde(default = "default_log_file_prefix")]
    pub file_prefix: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file_prefix() -> String {
    "launchpad.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            directory: None,
            file_prefix: default_log_file_prefix(),
        }
    }
}

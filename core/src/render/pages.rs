//! Fixed response documents.
//!
//! Templates are plain HTML with `{{name}}` slots. Every slot is known up
//! front and values are never rescanned, so a single left-to-right pass is
//! enough; no loops, conditionals or nesting are needed. Unknown slots are a
//! render fault rather than silent output.

use crate::config::PagesConfig;
use crate::errors::HandlerFault;

const REDIRECT_HTML: &str = include_str!("templates/redirect.html");
const LAUNCH_ERROR_HTML: &str = include_str!("templates/launch_error.html");
const CANNOT_CONNECT_HTML: &str = include_str!("templates/cannot_connect.html");

pub const BLOCKING_SUCCESS_BODY: &str = "Streamlit app is running";
pub const BLOCKING_FAILURE_ERROR: &str = "Failed to start Streamlit app";

/// Template sources for the three HTML documents.
#[derive(Debug, Clone, Copy)]
pub struct Templates {
    pub redirect: &'static str,
    pub launch_error: &'static str,
    pub cannot_connect: &'static str,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            redirect: REDIRECT_HTML,
            launch_error: LAUNCH_ERROR_HTML,
            cannot_connect: CANNOT_CONNECT_HTML,
        }
    }
}

/// Renders the pages against the configured hosting details.
#[derive(Debug, Clone)]
pub struct Pages {
    cfg: PagesConfig,
    templates: Templates,
}

impl Pages {
    /// Uses the embedded templates.
    pub fn new(cfg: PagesConfig) -> Self {
        Self::with_templates(cfg, Templates::default())
    }

    pub fn with_templates(cfg: PagesConfig, templates: Templates) -> Self {
        Self { cfg, templates }
    }

    /// Meta-refresh page returned after a detached launch.
    pub fn redirect(&self) -> Result<String, HandlerFault> {
        fill(
            self.templates.redirect,
            &[
                ("app_url", escape_html(&self.cfg.app_url)),
                ("refresh_secs", self.cfg.refresh_secs.to_string()),
                ("platform_name", escape_html(&self.cfg.platform_name)),
                ("execution_limit_secs", self.cfg.execution_limit_secs.to_string()),
                ("alternatives", self.alternatives()),
            ],
        )
    }

    pub fn launch_error(&self, message: &str) -> Result<String, HandlerFault> {
        fill(
            self.templates.launch_error,
            &[
                ("error_message", escape_html(message)),
                ("platform_name", escape_html(&self.cfg.platform_name)),
                ("alternatives", self.alternatives()),
            ],
        )
    }

    /// The fallback page. `fault` is echoed when the page stands in for an error.
    pub fn cannot_connect(&self, fault: Option<&str>) -> Result<String, HandlerFault> {
        let fault = fault
            .map(|m| format!("  <pre>{}</pre>", escape_html(m)))
            .unwrap_or_default();
        fill(
            self.templates.cannot_connect,
            &[
                ("platform_name", escape_html(&self.cfg.platform_name)),
                ("execution_limit_secs", self.cfg.execution_limit_secs.to_string()),
                ("fault", fault),
                ("alternatives", self.alternatives()),
            ],
        )
    }

    /// `{"error":"Failed to start Streamlit app"}`
    pub fn blocking_failure(&self) -> Result<String, HandlerFault> {
        serde_json::to_string(&serde_json::json!({ "error": BLOCKING_FAILURE_ERROR }))
            .map_err(HandlerFault::Encode)
    }

    fn alternatives(&self) -> String {
        self.cfg
            .alternatives
            .iter()
            .map(|alt| {
                format!(
                    "    <li><a href=\"{}\">{}</a></li>",
                    escape_html(&alt.url),
                    escape_html(&alt.name)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Single pass over the template, so substituted values are never rescanned.
fn fill(template: &str, vars: &[(&str, String)]) -> Result<String, HandlerFault> {
    let mut out = String::with_capacity(template.len() + 512);
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = after.find("}}").ok_or_else(|| {
            HandlerFault::Render("unterminated placeholder in template".to_string())
        })?;
        let key = &after[..end];
        let value = vars
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
            .ok_or_else(|| HandlerFault::Render(format!("unfilled placeholder {{{{{key}}}}}")))?;
        out.push_str(value);
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

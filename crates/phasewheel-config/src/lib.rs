use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_UNLOCK_PASSWORD_ENV: &str = "PHASEWHEEL_UNLOCK_PASSWORD";

const CONFIG_PATHS: [&str; 2] = ["configs/phasewheel.toml", "../../configs/phasewheel.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct QuotaSettings {
    pub max_free_generations: u32,
    pub unlock_minutes: u32,
    /// Environment variable holding the shared unlock password
    pub unlock_password_env: String,
    pub ledger_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSettings {
    pub model: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PhasewheelSettings {
    pub quota: QuotaSettings,
    pub report: ReportSettings,
    /// File the settings were read from, if any
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct QuotaToml {
    #[serde(default = "default_max_free_generations")]
    max_free_generations: u32,
    #[serde(default = "default_unlock_minutes")]
    unlock_minutes: u32,
    #[serde(default = "default_unlock_password_env")]
    unlock_password_env: String,
    #[serde(default = "default_ledger_path")]
    ledger_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReportToml {
    #[serde(default = "default_model")]
    model: String,
}

fn default_max_free_generations() -> u32 {
    2
}

fn default_unlock_minutes() -> u32 {
    60
}

fn default_unlock_password_env() -> String {
    DEFAULT_UNLOCK_PASSWORD_ENV.to_string()
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("target/phasewheel/generations.json")
}

fn default_model() -> String {
    "anthropic/claude-3.5-sonnet".to_string()
}

impl Default for QuotaToml {
    fn default() -> Self {
        Self {
            max_free_generations: default_max_free_generations(),
            unlock_minutes: default_unlock_minutes(),
            unlock_password_env: default_unlock_password_env(),
            ledger_path: default_ledger_path(),
        }
    }
}

impl Default for ReportToml {
    fn default() -> Self {
        Self { model: default_model() }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    quota: QuotaToml,
    #[serde(default)]
    report: ReportToml,
}

impl Default for PhasewheelSettings {
    fn default() -> Self {
        from_root(RootConfigToml::default(), None)
    }
}

impl QuotaSettings {
    /// Unlock password from the configured environment variable, if set and non-empty.
    pub fn unlock_password(&self) -> Option<String> {
        std::env::var(&self.unlock_password_env)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

fn from_root(root: RootConfigToml, source: Option<PathBuf>) -> PhasewheelSettings {
    let RootConfigToml { quota, report } = root;
    PhasewheelSettings {
        quota: QuotaSettings {
            max_free_generations: quota.max_free_generations,
            unlock_minutes: quota.unlock_minutes,
            unlock_password_env: quota.unlock_password_env,
            ledger_path: quota.ledger_path,
        },
        report: ReportSettings { model: report.model },
        source,
    }
}

pub fn parse_settings(text: &str) -> anyhow::Result<PhasewheelSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse phasewheel.toml: {e}"))?;
    validate(from_root(root, None))
}

fn validate(settings: PhasewheelSettings) -> anyhow::Result<PhasewheelSettings> {
    if settings.quota.unlock_minutes == 0 {
        anyhow::bail!("quota.unlock_minutes must be at least 1");
    }
    if settings.quota.unlock_password_env.trim().is_empty() {
        anyhow::bail!("quota.unlock_password_env must name an environment variable");
    }
    if settings.report.model.trim().is_empty() {
        anyhow::bail!("report.model must not be empty");
    }
    Ok(settings)
}

pub fn load_settings_from(path: &Path) -> anyhow::Result<PhasewheelSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    let mut settings = parse_settings(&text)?;
    settings.source = Some(path.to_path_buf());
    Ok(settings)
}

/// Try the common relative paths for `configs/phasewheel.toml`; defaults when none exists.
pub fn load_settings() -> anyhow::Result<PhasewheelSettings> {
    for p in &CONFIG_PATHS {
        let path = Path::new(p);
        if path.exists() {
            return load_settings_from(path);
        }
    }
    Ok(PhasewheelSettings::default())
}

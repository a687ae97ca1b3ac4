pub mod cli;

use crate::utils::error::{AggregatorError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use cli::CliArgs;

pub const DEFAULT_CARBON_INTENSITY_URL: &str =
    "https://api.carbonintensity.org.uk/regional/intensity/{from}/{to}/regionid/{regionid}";
pub const DEFAULT_COVID_ENDPOINT: &str = "https://api.coronavirus.data.gov.uk/v1/data";

const CARBON_PLACEHOLDERS: [&str; 3] = ["{from}", "{to}", "{regionid}"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub carbon_intensity: CarbonIntensityConfig,
    pub covid: CovidConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 空白代表允許任何來源
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            allowed_origins: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarbonIntensityConfig {
    pub url_template: String,
    pub timeout_seconds: u64,
}

impl Default for CarbonIntensityConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_CARBON_INTENSITY_URL.to_string(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CovidConfig {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for CovidConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_COVID_ENDPOINT.to_string(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
            json: false,
            file: None,
        }
    }
}

impl ServiceConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AggregatorError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COVID_ENDPOINT})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AggregatorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server.host.clone(), self.server.port)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.host", &self.server.host)?;
        validation::validate_positive_number("server.port", u64::from(self.server.port), 1)?;
        for origin in &self.server.allowed_origins {
            validation::validate_url("server.allowed_origins", origin)?;
        }

        // 驗證模板時先把佔位符換掉，否則 URL 解析會失敗
        let template = &self.carbon_intensity.url_template;
        validation::validate_placeholders(
            "carbon_intensity.url_template",
            template,
            &CARBON_PLACEHOLDERS,
        )?;
        let sample = template
            .replace("{from}", "2021-01-01")
            .replace("{to}", "2021-01-02")
            .replace("{regionid}", "1");
        validation::validate_url("carbon_intensity.url_template", &sample)?;
        validation::validate_positive_number(
            "carbon_intensity.timeout_seconds",
            self.carbon_intensity.timeout_seconds,
            1,
        )?;

        validation::validate_url("covid.endpoint", &self.covid.endpoint)?;
        validation::validate_positive_number("covid.timeout_seconds", self.covid.timeout_seconds, 1)?;

        validation::validate_non_empty_string("logging.level", &self.logging.level)?;

        Ok(())
    }
}

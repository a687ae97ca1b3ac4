use crate::config::ServiceConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "region-data-aggregator")]
#[command(about = "Serves combined carbon intensity and COVID-19 data per UK region")]
pub struct CliArgs {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override server.host from config
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port from config
    #[arg(long)]
    pub port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    /// 載入配置檔 (若有) 並套用命令列覆蓋設定
    pub fn load_config(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None => ServiceConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_config_file() {
        let args = CliArgs::parse_from(["region-data-aggregator"]);
        let config = args.load_config().unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 5000);
        assert!(!args.verbose);
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"10.0.0.1\"\nport = 9000\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let args = CliArgs::parse_from(["region-data-aggregator", "--config", &path, "--port", "7000"]);
        let config = args.load_config().unwrap();
        assert_eq!(config.server.host, "10.0.0.1");
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn test_missing_config_file_is_error() {
        let args = CliArgs::parse_from([
            "region-data-aggregator",
            "--config",
            "/nonexistent/region-data.toml",
        ]);
        assert!(args.load_config().is_err());
    }
}

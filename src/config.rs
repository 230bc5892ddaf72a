use crate::dataset::ColumnNames;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATA_PATH: &str = "bat_dong_san_com_vn_fillter_update.csv";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8050;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub columns: ColumnNames,
    pub host: String,
    pub port: u16,
    pub max_workers: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            columns: ColumnNames::default(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_workers: 8,
        }
    }
}

impl AppConfig {
    /// Defaults, with the listen address taken from `HOST` / `PORT` when the
    /// hosting environment sets them.
    pub fn from_env() -> Self {
        Self::default().with_overrides(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Self {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.host = host.trim().to_string();
        }
        if let Some(raw) = port {
            match raw.trim().parse::<u16>() {
                Ok(port) => self.port = port,
                Err(_) => log::warn!("Ignoring invalid PORT value {raw:?}"),
            }
        }
        self
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bind_to_localhost() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.bind_addr().unwrap().to_string(), "127.0.0.1:8050");
        assert_eq!(cfg.columns.district, "Quan_huyen");
    }

    #[test]
    fn host_and_port_overrides_apply() {
        let cfg = AppConfig::default().with_overrides(Some("0.0.0.0".into()), Some("9000".into()));
        assert_eq!(cfg.bind_addr().unwrap().to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn invalid_port_keeps_default() {
        let cfg = AppConfig::default().with_overrides(None, Some("http".into()));
        assert_eq!(cfg.port, DEFAULT_PORT);
    }
}

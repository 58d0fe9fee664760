//! Configuration loading and listen-address resolution

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address when nothing else is configured
pub const DEFAULT_HOST: &str = "127.0.0.1";
/// Default listen port when nothing else is configured
pub const DEFAULT_PORT: u16 = 7070;

/// Resolved listen configuration for the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenConfig {
    pub host: String,
    pub port: u16,
}

impl ListenConfig {
    pub fn socket_addr(&self) -> crate::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| crate::Error::Config(format!("Invalid listen address: {}", e)))
    }
}

/// Optional `[listen]` table in the TOML config file
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    #[serde(default)]
    listen: ListenSection,
}

#[derive(Debug, Deserialize, Default)]
struct ListenSection {
    host: Option<String>,
    port: Option<u16>,
}

/// Listen-address resolution priority order:
/// 1. Command-line argument (highest priority)
/// 2. Environment variable (`UACT_HOST` / `UACT_PORT`)
/// 3. TOML config file
/// 4. Compiled default (fallback)
///
/// Host and port resolve independently, so a CLI port can combine with a
/// config-file host.
pub fn resolve_listen_config(cli_host: Option<&str>, cli_port: Option<u16>) -> ListenConfig {
    let file = load_config_file()
        .and_then(|path| std::fs::read_to_string(path).ok())
        .map(|content| parse_file_config(&content))
        .unwrap_or_default();

    let host = cli_host
        .map(str::to_string)
        .or_else(|| std::env::var("UACT_HOST").ok())
        .or(file.listen.host)
        .unwrap_or_else(|| DEFAULT_HOST.to_string());

    let port = cli_port
        .or_else(|| {
            std::env::var("UACT_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(file.listen.port)
        .unwrap_or(DEFAULT_PORT);

    ListenConfig { host, port }
}

/// Parse the config file contents; malformed files fall back to defaults
fn parse_file_config(content: &str) -> FileConfig {
    toml::from_str(content).unwrap_or_else(|e| {
        tracing::warn!("Ignoring malformed config file: {}", e);
        FileConfig::default()
    })
}

/// Locate the platform config file (`<config dir>/uact/config.toml`)
fn load_config_file() -> Option<PathBuf> {
    let path = dirs::config_dir()?.join("uact").join("config.toml");
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_file_config_full() {
        let config = parse_file_config("[listen]\nhost = \"0.0.0.0\"\nport = 9000\n");
        assert_eq!(config.listen.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.listen.port, Some(9000));
    }

    #[test]
    fn test_parse_file_config_partial() {
        let config = parse_file_config("[listen]\nport = 9000\n");
        assert!(config.listen.host.is_none());
        assert_eq!(config.listen.port, Some(9000));
    }

    #[test]
    fn test_parse_file_config_empty() {
        let config = parse_file_config("");
        assert!(config.listen.host.is_none());
        assert!(config.listen.port.is_none());
    }

    #[test]
    fn test_parse_file_config_malformed_falls_back() {
        let config = parse_file_config("not valid toml [");
        assert!(config.listen.host.is_none());
        assert!(config.listen.port.is_none());
    }

    #[test]
    fn test_cli_takes_priority() {
        let config = resolve_listen_config(Some("10.0.0.1"), Some(8123));
        assert_eq!(config.host, "10.0.0.1");
        assert_eq!(config.port, 8123);
    }

    #[test]
    fn test_socket_addr() {
        let config = ListenConfig {
            host: "127.0.0.1".to_string(),
            port: 7070,
        };
        assert_eq!(
            config.socket_addr().unwrap().to_string(),
            "127.0.0.1:7070"
        );
    }

    #[test]
    fn test_socket_addr_invalid_host() {
        let config = ListenConfig {
            host: "not a host".to_string(),
            port: 7070,
        };
        assert!(config.socket_addr().is_err());
    }
}

//! Server configuration
//!
//! The only external knob is the `PORT` environment variable. Anything
//! that does not parse as a port in 1-65535 falls back to the default.

/// Port used when `PORT` is unset or unparseable
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable holding the listening port
pub const PORT_ENV_VAR: &str = "PORT";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub hostname: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            hostname: "0.0.0.0".to_string(),
        }
    }
}

impl ServerConfig {
    /// Build a configuration from the process environment
    pub fn from_env() -> Self {
        let port = resolve_port(std::env::var(PORT_ENV_VAR).ok().as_deref());
        Self {
            port,
            ..Self::default()
        }
    }

    /// The URL printed on startup
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}/", self.port)
    }
}

/// Resolve the listening port from an optional `PORT` value
///
/// Port 0 would ask the kernel for an ephemeral port, which is never
/// what a configured deployment wants, so it falls back to the default
/// along with everything else that fails to parse.
pub fn resolve_port(value: Option<&str>) -> u16 {
    value
        .and_then(|v| v.parse::<u16>().ok())
        .filter(|port| *port != 0)
        .unwrap_or(DEFAULT_PORT)
}

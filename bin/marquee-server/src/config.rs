//! Server configuration, loaded from environment variables at startup.

use std::net::SocketAddr;

const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Runtime configuration for marquee-server.
///
/// Every field has a sensible default so the server works out-of-the-box
/// without any environment variables set. Values that fail to parse fall
/// back to the default.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP address to bind (default: `0.0.0.0:5000`).
    pub bind_address: SocketAddr,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    /// `RUST_LOG` takes precedence when set.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Comma-separated list of allowed CORS origins. `None` allows any origin.
    pub cors_allowed_origins: Option<String>,

    /// Serve Swagger UI at `/swagger-ui` (default: `true`).
    pub enable_swagger: bool,
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            bind_address: parse_bind(lookup("MARQUEE_BIND")),
            log_level: lookup("MARQUEE_LOG").unwrap_or_else(|| "info".to_owned()),
            log_json: parse_flag(lookup("MARQUEE_LOG_JSON"), "MARQUEE_LOG_JSON", false),
            cors_allowed_origins: lookup("MARQUEE_CORS_ORIGINS").filter(|v| !v.trim().is_empty()),
            enable_swagger: parse_flag(
                lookup("MARQUEE_ENABLE_SWAGGER"),
                "MARQUEE_ENABLE_SWAGGER",
                true,
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// ── private helpers ──────────────────────────────────────────────────────────
//
// Config is read before tracing is initialised, so bad values are reported on
// stderr.

fn default_bind() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 5000))
}

fn parse_bind(raw: Option<String>) -> SocketAddr {
    let Some(raw) = raw else {
        return default_bind();
    };
    raw.trim().parse().unwrap_or_else(|e| {
        eprintln!("WARN: MARQUEE_BIND='{raw}' is not a socket address ({e}); falling back to '{DEFAULT_BIND}'");
        default_bind()
    })
}

/// `1`/`true` and `0`/`false` (any case); anything else keeps `default`.
fn parse_flag(raw: Option<String>, key: &str, default: bool) -> bool {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim() {
        "1" => true,
        "0" => false,
        v if v.eq_ignore_ascii_case("true") => true,
        v if v.eq_ignore_ascii_case("false") => false,
        _ => {
            eprintln!("WARN: {key}='{raw}' is not a boolean; falling back to '{default}'");
            default
        }
    }
}

use natal_chart::chart::ChartSettings;
use natal_chart::rendering::{ChartRenderer, GlyphConfig, VisualConfig};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5002;
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "CHART_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Everything the rendering service needs at startup
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub server: ServerSettings,
    pub chart: ChartSettings,
    pub theme: VisualConfig,
    pub glyphs: GlyphConfig,
}

impl ServiceConfig {
    pub fn renderer(&self) -> ChartRenderer {
        ChartRenderer::with_configs(self.chart.clone(), self.theme.clone(), self.glyphs.clone())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ServerToml {
    #[serde(default)]
    host: Option<String>,
    #[serde(default)]
    port: Option<u16>,
    #[serde(default)]
    body_limit_bytes: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    server: ServerToml,
    #[serde(default)]
    chart: ChartSettings,
    #[serde(default)]
    theme: VisualConfig,
    #[serde(default)]
    glyphs: GlyphConfig,
}

/// Try `CHART_CONFIG`, then the common relative paths for `configs/chart.toml`.
///
/// An explicit path that cannot be read is an error; no file at the default
/// locations is not.
pub fn read_chart_toml_text() -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Ok(explicit) = std::env::var(CONFIG_PATH_ENV) {
        let path = PathBuf::from(explicit);
        let text = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
        return Ok(Some((path, text)));
    }
    let paths = ["configs/chart.toml", "../../configs/chart.toml"];
    for p in &paths {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), c)));
        }
    }
    Ok(None)
}

/// Parse the config file contents; absent sections and fields keep defaults.
pub fn parse_service_config(text: &str) -> anyhow::Result<ServiceConfig> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse chart.toml: {e}"))?;
    let RootConfigToml {
        server,
        chart,
        theme,
        glyphs,
    } = root;

    let defaults = ServerSettings::default();
    let server = ServerSettings {
        host: server.host.unwrap_or(defaults.host),
        port: server.port.unwrap_or(defaults.port),
        body_limit_bytes: server.body_limit_bytes.unwrap_or(defaults.body_limit_bytes),
    };
    if server.body_limit_bytes == 0 {
        anyhow::bail!("server.body_limit_bytes must be greater than zero");
    }
    if chart.width <= 0.0 || chart.height <= 0.0 {
        anyhow::bail!(
            "chart canvas must have a positive size, got {}x{}",
            chart.width,
            chart.height
        );
    }

    Ok(ServiceConfig {
        server,
        chart,
        theme,
        glyphs,
    })
}

/// Apply `PORT` and `HOST` overrides. `lookup` is the environment.
pub fn apply_env_overrides<F>(config: &mut ServiceConfig, lookup: F) -> anyhow::Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(port) = lookup("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid PORT {port:?}: {e}"))?;
    }
    if let Some(host) = lookup("HOST").filter(|host| !host.trim().is_empty()) {
        config.server.host = host.trim().to_string();
    }
    Ok(())
}

/// Load the service configuration: file (if any), then environment overrides.
pub fn load_service_config() -> anyhow::Result<ServiceConfig> {
    let mut config = match read_chart_toml_text()? {
        Some((path, text)) => {
            log::info!("Loading chart config from {}", path.display());
            parse_service_config(&text)?
        }
        None => {
            log::info!("No chart.toml found, using defaults");
            ServiceConfig::default()
        }
    };
    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_chart::chart::IncompleteHousesPolicy;
    use natal_chart::rendering::Color;
    use std::collections::HashMap;

    #[test]
    fn empty_file_gives_defaults() {
        let config = parse_service_config("").unwrap();
        assert_eq!(config.server, ServerSettings::default());
        assert_eq!(config.chart, ChartSettings::default());
        assert_eq!(config.theme, VisualConfig::default());
    }

    #[test]
    fn sections_override_fields() {
        let config = parse_service_config(
            r##"
[server]
port = 8080
body_limit_bytes = 4096

[chart]
incomplete_houses = "reject"
subdivision_step = 10.0

[chart.radii]
center = 80.0

[theme]
background_fill = "#101010"
aspect_color = "navy"

[glyphs]
fallback = "*"

[glyphs.planet_glyphs]
Chiron = "K"
"##,
        )
        .unwrap();
        assert_eq!(config.server.host, DEFAULT_HOST);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.body_limit_bytes, 4096);
        assert_eq!(config.chart.incomplete_houses, IncompleteHousesPolicy::Reject);
        assert_eq!(config.chart.subdivision_step, 10.0);
        assert_eq!(config.chart.radii.center, 80.0);
        assert_eq!(config.chart.radii.outer, 290.0);
        assert_eq!(config.theme.background_fill, Color::rgb(0x10, 0x10, 0x10));
        assert_eq!(config.theme.aspect_color, Color::rgb(0, 0, 128));
        assert_eq!(config.glyphs.planet_symbol("chiron"), "K");
        assert_eq!(config.glyphs.planet_symbol("Eris"), "*");
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let config = parse_service_config(include_str!("../../../configs/chart.toml")).unwrap();
        assert_eq!(config.server, ServerSettings::default());
        assert_eq!(config.chart, ChartSettings::default());
        assert_eq!(config.theme, VisualConfig::default());
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(parse_service_config("[theme]\nzodiac_fill = \"mauve-ish\"").is_err());
        assert!(parse_service_config("[server]\nbody_limit_bytes = 0").is_err());
        assert!(parse_service_config("[chart]\nwidth = -1.0").is_err());
        assert!(parse_service_config("[server\n").is_err());
    }

    #[test]
    fn env_overrides_port_and_host() {
        let env: HashMap<&str, &str> = [("PORT", "6001"), ("HOST", "127.0.0.1")].into();
        let mut config = ServiceConfig::default();
        apply_env_overrides(&mut config, |key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.server.bind_address(), "127.0.0.1:6001");

        let mut config = ServiceConfig::default();
        let err = apply_env_overrides(&mut config, |key| {
            (key == "PORT").then(|| "http".to_string())
        });
        assert!(err.is_err());
    }

    #[test]
    fn renderer_uses_configured_canvas() {
        let config = parse_service_config("[chart]\nwidth = 800.0\nheight = 800.0").unwrap();
        assert_eq!(config.renderer().settings().width, 800.0);
    }
}

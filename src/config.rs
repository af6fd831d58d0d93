use crate::error::{Error, Result};
use log::info;
use serde::Deserialize;

const FILE: &str = "dockbar.toml";

const DEFAULT: &str = r##"
height = 10
color = "#8b0000"
name = "bar"
"##;

#[derive(Debug, Deserialize)]
struct ConfigTomlRepr {
    height: u16,
    color: String,
    name: String,
}

impl TryFrom<ConfigTomlRepr> for Config {
    type Error = Error;

    fn try_from(repr: ConfigTomlRepr) -> Result<Config> {
        let color = parse_color(&repr.color)?;
        Ok(Config {
            height: repr.height,
            color,
            name: repr.name,
        })
    }
}

/// Parse "#rrggbb" (the '#' is optional) into a background pixel value.
fn parse_color(s: &str) -> Result<u32> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 {
        return Err(Error::InvalidConfig {
            reason: format!("color must be 6 hex digits: {:?}", s),
        });
    }
    u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidConfig {
        reason: format!("color must be 6 hex digits: {:?}", s),
    })
}

#[derive(Debug, Clone)]
pub struct Config {
    pub height: u16,
    pub color: u32,
    pub name: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        match std::fs::read(FILE) {
            Ok(bytes) => {
                info!("use {}", FILE);
                let config_str = String::from_utf8(bytes).map_err(|_| Error::InvalidConfig {
                    reason: "ill-formed UTF-8".to_owned(),
                })?;
                let repr: ConfigTomlRepr =
                    toml::from_str(&config_str).map_err(|e| Error::InvalidConfig {
                        reason: format!("{}", e),
                    })?;
                repr.try_into()
            }
            Err(_) => Ok(Self::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        info!("default config is used");
        let repr: ConfigTomlRepr = toml::from_str(DEFAULT).expect("Default config is wrong");
        repr.try_into().expect("Default config is wrong")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_keeps_the_original_constants() {
        let config = Config::default();
        assert_eq!(config.height, 10);
        assert_eq!(config.color, 0x8b0000);
        assert_eq!(config.name, "bar");
    }

    #[test]
    fn parses_a_user_file() {
        let repr: ConfigTomlRepr = toml::from_str(
            r##"
            height = 24
            color = "202030"
            name = "panel"
            "##,
        )
        .unwrap();
        let config: Config = repr.try_into().unwrap();
        assert_eq!(config.height, 24);
        assert_eq!(config.color, 0x202030);
        assert_eq!(config.name, "panel");
    }

    #[test]
    fn rejects_a_malformed_color() {
        assert!(parse_color("#12").is_err());
        assert!(parse_color("nothex").is_err());
        assert_eq!(parse_color("#8b0000").unwrap(), 0x8b0000);
    }
}

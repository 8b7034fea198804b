use crate::Result;
use crate::structs::PLACEHOLDER;
use serde::Deserialize;

/// Options for reading `nmcli` output.
/// 解析 nmcli 输出时使用的参数。
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Token the tool prints for an unknown field; scan rows carrying it are dropped.
    pub placeholder: String,
    /// Leading character that flags the connected access point in a scan.
    pub active_marker: char,
    /// Number of header lines at the top of the scan listing.
    pub header_lines: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER.to_string(),
            active_marker: '*',
            header_lines: 1,
        }
    }
}

/// 用于解析 TOML 的临时结构
#[derive(Deserialize)]
struct ConfigFile {
    /// [parser] 表（可选）
    #[serde(default)]
    parser: ParseConfig,
}

/// Loads the parser options from the `[parser]` table of a TOML document.
/// Missing keys (or a missing table) fall back to the defaults.
pub fn load_config_from_toml_str(s: &str) -> Result<ParseConfig> {
    let parsed: ConfigFile = toml::from_str(s)?;
    Ok(parsed.parser)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        const CONFIG_TOML: &str = include_str!("../../configs/nmview.toml");
        let config = load_config_from_toml_str(CONFIG_TOML).unwrap();
        assert_eq!(config, ParseConfig::default());
    }

    #[test]
    fn partial_table_keeps_remaining_defaults() {
        let config = load_config_from_toml_str("[parser]\nheader_lines = 0\n").unwrap();
        assert_eq!(config.header_lines, 0);
        assert_eq!(config.placeholder, "--");
        assert_eq!(config.active_marker, '*');
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(load_config_from_toml_str("").unwrap(), ParseConfig::default());
    }

    #[test]
    fn bad_toml_is_a_config_error() {
        let err = load_config_from_toml_str("[parser]\nheader_lines = \"one\"\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }
}

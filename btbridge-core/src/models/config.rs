use serde::{Deserialize, Serialize};

use super::profile::A2dpCodec;

/// The set of A2DP codecs this daemon instance handles.
///
/// Optional codecs are a runtime configuration value rather than a
/// compile-time feature: disabling one removes its endpoints from the
/// object-path table entirely. SBC is the mandatory baseline and must
/// always be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    pub enabled: Vec<A2dpCodec>,
}

impl CodecConfig {
    /// Configuration with every known codec enabled.
    pub fn all() -> Self {
        Self {
            enabled: A2dpCodec::ALL.to_vec(),
        }
    }

    pub fn is_enabled(&self, codec: A2dpCodec) -> bool {
        self.enabled.contains(&codec)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.is_enabled(A2dpCodec::Sbc) {
            return Err("baseline codec SBC must be enabled".into());
        }
        for (i, codec) in self.enabled.iter().enumerate() {
            if self.enabled[..i].contains(codec) {
                return Err(format!("duplicate codec in configuration: {}", codec));
            }
        }
        Ok(())
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            enabled: vec![A2dpCodec::Sbc],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_baseline_only() {
        let config = CodecConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.is_enabled(A2dpCodec::Sbc));
        assert!(!config.is_enabled(A2dpCodec::Aptx));
    }

    #[test]
    fn missing_baseline_rejected() {
        let config = CodecConfig {
            enabled: vec![A2dpCodec::Aptx],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn duplicates_rejected() {
        let config = CodecConfig {
            enabled: vec![A2dpCodec::Sbc, A2dpCodec::Mpeg24, A2dpCodec::Mpeg24],
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_round_trip() {
        let config = CodecConfig::all();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("sbc"));
        let parsed: CodecConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bluetooth audio/telephony role served by an endpoint.
///
/// `None` is the decode-miss value: malformed or foreign IPC object paths
/// resolve to it, which is a normal outcome rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BluetoothProfile {
    None,
    A2dpSource,
    A2dpSink,
    HspHeadset,
    HspAudioGateway,
    HfpHandsFree,
    HfpAudioGateway,
}

impl BluetoothProfile {
    /// Whether this profile carries A2DP audio and hence a meaningful codec.
    pub fn is_a2dp(self) -> bool {
        matches!(self, Self::A2dpSource | Self::A2dpSink)
    }

    /// Human-readable role name for logs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "(none)",
            Self::A2dpSource => "A2DP Source",
            Self::A2dpSink => "A2DP Sink",
            Self::HspHeadset => "HSP Headset",
            Self::HspAudioGateway => "HSP Audio Gateway",
            Self::HfpHandsFree => "HFP Hands-Free",
            Self::HfpAudioGateway => "HFP Audio Gateway",
        }
    }
}

impl fmt::Display for BluetoothProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A2DP audio codec. Meaningful only for the A2DP profiles.
///
/// SBC is the mandatory baseline; the others are optional and enabled
/// through [`CodecConfig`](crate::models::config::CodecConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum A2dpCodec {
    Sbc,
    Mpeg12,
    Mpeg24,
    Aptx,
}

impl A2dpCodec {
    /// All codecs this crate knows about, baseline first.
    pub const ALL: [A2dpCodec; 4] = [Self::Sbc, Self::Mpeg12, Self::Mpeg24, Self::Aptx];

    /// AVDTP media codec type code (aptX is a vendor codec).
    pub const fn id(self) -> u8 {
        match self {
            Self::Sbc => 0x00,
            Self::Mpeg12 => 0x01,
            Self::Mpeg24 => 0x02,
            Self::Aptx => 0xFF,
        }
    }

    /// Reverse lookup from the AVDTP media codec type code.
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    /// Short label used in object paths and logs.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sbc => "SBC",
            Self::Mpeg12 => "MPEG12",
            Self::Mpeg24 => "MPEG24",
            Self::Aptx => "APTX",
        }
    }
}

impl fmt::Display for A2dpCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a2dp_detection() {
        assert!(BluetoothProfile::A2dpSource.is_a2dp());
        assert!(BluetoothProfile::A2dpSink.is_a2dp());
        assert!(!BluetoothProfile::HspHeadset.is_a2dp());
        assert!(!BluetoothProfile::None.is_a2dp());
    }

    #[test]
    fn codec_id_round_trip() {
        for codec in A2dpCodec::ALL {
            assert_eq!(A2dpCodec::from_id(codec.id()), Some(codec));
        }
        assert_eq!(A2dpCodec::from_id(0x42), None);
    }

    #[test]
    fn display_names() {
        assert_eq!(BluetoothProfile::HfpAudioGateway.to_string(), "HFP Audio Gateway");
        assert_eq!(A2dpCodec::Mpeg24.to_string(), "MPEG24");
    }
}

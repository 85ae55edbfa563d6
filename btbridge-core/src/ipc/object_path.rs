use crate::models::config::CodecConfig;
use crate::models::profile::{A2dpCodec, BluetoothProfile};

/// Canonical A2DP object paths, one Source/Sink pair per codec.
const A2DP_PATHS: &[(A2dpCodec, &str, &str)] = &[
    (A2dpCodec::Sbc, "/A2DP/SBC/Source", "/A2DP/SBC/Sink"),
    (A2dpCodec::Mpeg12, "/A2DP/MPEG12/Source", "/A2DP/MPEG12/Sink"),
    (A2dpCodec::Mpeg24, "/A2DP/MPEG24/Source", "/A2DP/MPEG24/Sink"),
    (A2dpCodec::Aptx, "/A2DP/APTX/Source", "/A2DP/APTX/Sink"),
];

/// Fixed HSP/HFP object paths; these profiles have no codec dimension.
const TELEPHONY_PATHS: &[(BluetoothProfile, &str)] = &[
    (BluetoothProfile::HspHeadset, "/HSP/Headset"),
    (BluetoothProfile::HspAudioGateway, "/HSP/AudioGateway"),
    (BluetoothProfile::HfpHandsFree, "/HFP/HandsFree"),
    (BluetoothProfile::HfpAudioGateway, "/HFP/AudioGateway"),
];

#[derive(Debug, Clone, Copy)]
struct Entry {
    profile: BluetoothProfile,
    codec: Option<A2dpCodec>,
    path: &'static str,
}

/// Bidirectional mapping between (profile, codec) pairs and hierarchical
/// IPC object paths.
///
/// Built once from the enabled-codec configuration and immutable
/// afterwards, so unsynchronized concurrent reads are safe. Disabling a
/// codec removes its entries entirely: both [`encode`](Self::encode) and
/// [`decode`](Self::decode) miss for it.
#[derive(Debug, Clone)]
pub struct ObjectPathTable {
    entries: Vec<Entry>,
}

impl ObjectPathTable {
    pub fn new(config: &CodecConfig) -> Self {
        let mut entries = Vec::new();
        for &(codec, source, sink) in A2DP_PATHS {
            if !config.is_enabled(codec) {
                continue;
            }
            entries.push(Entry {
                profile: BluetoothProfile::A2dpSource,
                codec: Some(codec),
                path: source,
            });
            entries.push(Entry {
                profile: BluetoothProfile::A2dpSink,
                codec: Some(codec),
                path: sink,
            });
        }
        for &(profile, path) in TELEPHONY_PATHS {
            entries.push(Entry {
                profile,
                codec: None,
                path,
            });
        }
        log::debug!("object path table built with {} entries", entries.len());
        Self { entries }
    }

    /// Canonical object path for an endpoint.
    ///
    /// A2DP profiles require an enabled codec; HSP/HFP ignore the codec
    /// argument. Returns `None` for the `None` profile and for disabled
    /// codecs.
    pub fn encode(
        &self,
        profile: BluetoothProfile,
        codec: Option<A2dpCodec>,
    ) -> Option<&'static str> {
        if !profile.is_a2dp() {
            return self.fixed_path(profile);
        }
        let codec = codec?;
        self.entries
            .iter()
            .find(|e| e.profile == profile && e.codec == Some(codec))
            .map(|e| e.path)
    }

    fn fixed_path(&self, profile: BluetoothProfile) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.codec.is_none() && e.profile == profile)
            .map(|e| e.path)
    }

    /// Profile denoted by an object path.
    ///
    /// Matches table entries as prefixes, so instance discriminators the
    /// IPC layer appends (`/1`, `/2`, ...) still resolve. Unrecognized
    /// paths, including the root `/`, decode to
    /// [`BluetoothProfile::None`] — a normal outcome, not an error.
    pub fn decode(&self, path: &str) -> BluetoothProfile {
        self.entries
            .iter()
            .find(|e| path.starts_with(e.path))
            .map(|e| e.profile)
            .unwrap_or(BluetoothProfile::None)
    }
}

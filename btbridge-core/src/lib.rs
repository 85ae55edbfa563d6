//! # btbridge-core
//!
//! Utility substrate of the btbridge Bluetooth audio bridging daemon.
//!
//! Moves raw audio bytes between a wire transport and a local audio device,
//! scales sample amplitudes for volume/mute control, keeps producer and
//! consumer timing comparable across monotonic clock reads, and identifies
//! which Bluetooth profile/codec an IPC-exposed endpoint represents. The
//! transport sockets, device I/O threads, RTP/codec pipelines, and the IPC
//! service itself are external collaborators that call into this crate.
//!
//! ## Architecture
//!
//! ```text
//! btbridge-core (this crate)
//! ├── models/       ← BluetoothProfile, A2dpCodec, CodecConfig, BufferError
//! ├── processing/   ← StagingBuffer, s16le PCM scaling
//! ├── timing/       ← Timespec, monotonic differencing
//! └── ipc/          ← ObjectPathTable (endpoint path encode/decode)
//! ```
//!
//! Data flow: transport bytes enter a [`StagingBuffer`] → [`scale_s16le`]
//! adjusts amplitude in place while the block awaits consumption → the
//! buffer is drained toward the device and compacted. [`timing::diff`]
//! serves the pacing/latency logic around that path; [`ObjectPathTable`]
//! is consulted once per endpoint registration or lookup, off the hot path.
//!
//! None of these operations blocks or performs I/O, so every one of them is
//! safe to call from a real-time-sensitive audio callback.

pub mod ipc;
pub mod models;
pub mod processing;
pub mod timing;

// Re-export key types at crate root for convenience.
pub use ipc::object_path::ObjectPathTable;
pub use models::config::CodecConfig;
pub use models::error::BufferError;
pub use models::profile::{A2dpCodec, BluetoothProfile};
pub use processing::scale::scale_s16le;
pub use processing::staging::StagingBuffer;
pub use timing::Timespec;

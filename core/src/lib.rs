//! # bluetap core
//!
//! The device-interaction orchestration engine.
//!
//! * **[`executor`]**: Runs external tools and judges their output.
//! * **[`tools`]**: Argument vectors for `btmgmt`, `bluetoothctl`, `pactl`, `parecord` and `paplay`.
//! * **[`bypass`]**: Adapter configuration, forced pairing and forced connection.
//! * **[`audio`]**: Profile switch, capture and playback.
//! * **[`vendors`]**: OUI based manufacturer lookup.

pub mod audio;
pub mod bypass;
pub mod executor;
pub mod tools;
pub mod vendors;

//! # bluetap common
//!
//! Models and boundaries shared by every crate of the workspace.
//!
//! * **[`bluetooth`]**: Device addresses, address types, pairing capabilities and the [`bluetooth::target::Target`].
//! * **[`exec`]**: The [`exec::CommandRunner`] port used to spawn external tools.
//! * **[`vendors`]**: The [`vendors::VendorRepository`] port used to resolve manufacturers.
//! * **[`config`]**: Per-invocation settings built by the command line.
//! * **[`error`]**: The workspace error type.
//! * **[`log`]**: Logging macros routed through `tracing`.

pub mod bluetooth;
pub mod config;
pub mod error;
pub mod exec;
pub mod log;
pub mod vendors;

#[doc(hidden)]
pub use tracing;

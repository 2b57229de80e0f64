//! Platform helpers for Netlock.
//!
//! - [`fs`] - atomic file replacement
//! - [`open`] - opening files with the default application
//! - [`path`] - tilde expansion and config-relative paths

pub mod fs;
pub mod open;
pub mod path;

pub use fs::{copy_atomic, write_atomic};
pub use open::open_path;
pub use path::{expand, expand_and_resolve};

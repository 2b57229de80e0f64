//! netlock - renders the host's network configuration and installs it as the
//! lock screen background.
//!
//! The pipeline is split into small pieces that can be used on their own:
//!
//! - [`network`] gathers the network information as text
//! - [`render`] lays the text out and draws the PNG
//! - [`install`] puts the image in place
//! - [`scheduler`] repeats the whole cycle on a timer until cancelled

pub mod cache;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod install;
pub mod logging;
pub mod network;
pub mod platform;
pub mod render;
pub mod scheduler;
pub mod service;

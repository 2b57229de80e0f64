//! Structured adapter summary.
//!
//! Lists every adapter that has at least one IP address, in name order:
//!
//! ```text
//! Adapter: eth0
//!   IP Addresses: 10.0.0.5, fe80::1
//!   Prefix Lengths: 24, 64
//!   MAC Address: 00:11:22:33:44:55
//! ```

use std::fmt::Write as _;
use std::net::IpAddr;

use sysinfo::Networks;

use super::{NetworkInfoProvider, ProviderError};

/// One network adapter as shown on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterInfo {
    pub name: String,
    pub addresses: Vec<IpAddr>,
    pub prefixes: Vec<u8>,
    pub mac: Option<String>,
}

/// Reads adapters through `sysinfo`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdapterProvider {
    /// Include loopback adapters.
    pub include_loopback: bool,
}

impl AdapterProvider {
    fn collect(&self) -> Vec<AdapterInfo> {
        let networks = Networks::new_with_refreshed_list();

        let mut adapters: Vec<AdapterInfo> = networks
            .iter()
            .map(|(name, data)| {
                let mac = data.mac_address();
                AdapterInfo {
                    name: name.clone(),
                    addresses: data.ip_networks().iter().map(|net| net.addr).collect(),
                    prefixes: data.ip_networks().iter().map(|net| net.prefix).collect(),
                    mac: (!mac.is_unspecified()).then(|| mac.to_string()),
                }
            })
            .filter(|adapter| !adapter.addresses.is_empty())
            .filter(|adapter| {
                self.include_loopback || !adapter.addresses.iter().all(IpAddr::is_loopback)
            })
            .collect();

        adapters.sort_by(|a, b| a.name.cmp(&b.name));
        adapters
    }
}

impl NetworkInfoProvider for AdapterProvider {
    fn gather(&self) -> Result<String, ProviderError> {
        let adapters = self.collect();
        if adapters.is_empty() {
            return Err(ProviderError::NoAdapters);
        }
        tracing::debug!(count = adapters.len(), "network adapters collected");
        Ok(format_adapters(&adapters))
    }
}

fn join<T: ToString>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
}

/// Formats adapters as text, one block per adapter followed by a blank line.
#[must_use]
pub fn format_adapters(adapters: &[AdapterInfo]) -> String {
    let mut out = String::new();

    for adapter in adapters {
        let _ = writeln!(out, "Adapter: {}", adapter.name);
        if !adapter.addresses.is_empty() {
            let _ = writeln!(out, "  IP Addresses: {}", join(&adapter.addresses));
        }
        if !adapter.prefixes.is_empty() {
            let _ = writeln!(out, "  Prefix Lengths: {}", join(&adapter.prefixes));
        }
        if let Some(mac) = &adapter.mac {
            let _ = writeln!(out, "  MAC Address: {mac}");
        }
        out.push('\n');
    }

    out
}

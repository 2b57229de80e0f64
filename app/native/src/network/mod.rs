//! Network information sources.
//!
//! The renderer treats network information as opaque text. This module
//! produces that text from the operating system and optionally narrows it
//! down to the lines worth showing.
//!
//! - [`command`] - output of a system command such as `ipconfig /all`
//! - [`adapters`] - a structured adapter summary from `sysinfo`
//! - [`filter`] - keyword allow-list applied to the formatted lines

pub mod adapters;
pub mod command;
pub mod filter;

pub use adapters::{AdapterInfo, AdapterProvider, format_adapters};
use chrono::{DateTime, Local};
pub use command::CommandProvider;
pub use filter::{DEFAULT_FILTER_LIMIT, DEFAULT_KEYWORDS, LineFilter};
use thiserror::Error;

/// Errors that can occur while gathering network information.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The command could not be started.
    #[error("failed to run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The command ran but reported failure.
    #[error("`{program}` exited with {status}: {stderr}")]
    CommandFailed { program: String, status: String, stderr: String },
    /// No adapter with an IP address was found.
    #[error("no IP-enabled network adapters found")]
    NoAdapters,
    /// No source is configured.
    #[error("no network information source is configured")]
    NoSources,
    /// Every configured source failed.
    #[error("all network information sources failed: {0}")]
    AllSourcesFailed(String),
}

/// Supplies the raw network information text for one update cycle.
pub trait NetworkInfoProvider: Send + Sync {
    /// Returns the current network information as text.
    ///
    /// # Errors
    ///
    /// Returns an error if the information cannot be retrieved. Callers show
    /// [`placeholder`] text instead of aborting.
    fn gather(&self) -> Result<String, ProviderError>;
}

/// Text shown in place of the network information when gathering fails.
#[must_use]
pub fn placeholder(err: &ProviderError) -> String {
    format!("Error retrieving network information: {err}")
}

/// Header line stamped on top of the gathered information.
#[must_use]
pub fn timestamp_header(at: DateTime<Local>) -> String {
    format!("Network Configuration - {}", at.format("%Y-%m-%d %H:%M:%S"))
}

/// Combines several sources under a timestamp header.
///
/// Failing sources are logged and skipped. The fallback source is only asked
/// when every primary source failed; gathering fails when nothing succeeded.
pub struct SystemProvider {
    sources: Vec<Box<dyn NetworkInfoProvider>>,
    fallback: Option<Box<dyn NetworkInfoProvider>>,
    clock: fn() -> DateTime<Local>,
}

impl SystemProvider {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn NetworkInfoProvider>>) -> Self {
        Self {
            sources,
            fallback: None,
            clock: Local::now,
        }
    }

    /// Sets the source used when all primary sources fail.
    #[must_use]
    pub fn with_fallback(mut self, fallback: Box<dyn NetworkInfoProvider>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Overrides the clock used for the header.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Local>) -> Self {
        self.clock = clock;
        self
    }

    fn collect<'a>(
        providers: impl Iterator<Item = &'a Box<dyn NetworkInfoProvider>>,
        sections: &mut Vec<String>,
        failures: &mut Vec<String>,
    ) {
        for provider in providers {
            match provider.gather() {
                Ok(text) => sections.push(text.trim_end().to_string()),
                Err(err) => {
                    tracing::warn!(error = %err, "network information source failed");
                    failures.push(err.to_string());
                }
            }
        }
    }
}

impl NetworkInfoProvider for SystemProvider {
    fn gather(&self) -> Result<String, ProviderError> {
        let mut sections = Vec::new();
        let mut failures = Vec::new();

        Self::collect(self.sources.iter(), &mut sections, &mut failures);
        if sections.is_empty() {
            Self::collect(self.fallback.iter(), &mut sections, &mut failures);
        }

        if sections.is_empty() {
            return Err(if failures.is_empty() {
                ProviderError::NoSources
            } else {
                ProviderError::AllSourcesFailed(failures.join("; "))
            });
        }

        sections.insert(0, timestamp_header((self.clock)()));
        Ok(sections.join("\n\n"))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    struct Fixed(&'static str);

    impl NetworkInfoProvider for Fixed {
        fn gather(&self) -> Result<String, ProviderError> { Ok(self.0.to_string()) }
    }

    struct Broken;

    impl NetworkInfoProvider for Broken {
        fn gather(&self) -> Result<String, ProviderError> { Err(ProviderError::NoAdapters) }
    }

    fn fixed_clock() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 8, 5, 1).single().unwrap()
    }

    #[test]
    fn test_timestamp_header_format() {
        assert_eq!(timestamp_header(fixed_clock()), "Network Configuration - 2024-03-09 08:05:01");
    }

    #[test]
    fn test_placeholder_mentions_cause() {
        let text = placeholder(&ProviderError::NoAdapters);
        assert_eq!(
            text,
            "Error retrieving network information: no IP-enabled network adapters found"
        );
    }

    #[test]
    fn test_system_provider_joins_sections() {
        let provider =
            SystemProvider::new(vec![Box::new(Fixed("ipconfig output\n")), Box::new(Fixed("Adapter: Eth0"))])
                .with_clock(fixed_clock);

        let text = provider.gather().unwrap();
        assert_eq!(
            text,
            "Network Configuration - 2024-03-09 08:05:01\n\nipconfig output\n\nAdapter: Eth0"
        );
    }

    #[test]
    fn test_system_provider_skips_failing_sources() {
        let provider = SystemProvider::new(vec![Box::new(Broken), Box::new(Fixed("Adapter: Eth0"))])
            .with_clock(fixed_clock);

        let text = provider.gather().unwrap();
        assert!(text.ends_with("Adapter: Eth0"));
    }

    #[test]
    fn test_system_provider_fails_when_all_sources_fail() {
        let provider = SystemProvider::new(vec![Box::new(Broken), Box::new(Broken)]);
        let err = provider.gather().unwrap_err();
        assert!(matches!(err, ProviderError::AllSourcesFailed(_)));
    }

    #[test]
    fn test_fallback_is_used_when_sources_fail() {
        let provider = SystemProvider::new(vec![Box::new(Broken)])
            .with_fallback(Box::new(Fixed("Adapter: WiFi")))
            .with_clock(fixed_clock);

        assert_eq!(
            provider.gather().unwrap(),
            "Network Configuration - 2024-03-09 08:05:01\n\nAdapter: WiFi"
        );
    }

    #[test]
    fn test_fallback_is_skipped_when_a_source_works() {
        let provider = SystemProvider::new(vec![Box::new(Fixed("ipconfig output"))])
            .with_fallback(Box::new(Fixed("Adapter: WiFi")))
            .with_clock(fixed_clock);

        assert!(!provider.gather().unwrap().contains("Adapter: WiFi"));
    }

    #[test]
    fn test_system_provider_without_sources() {
        let provider = SystemProvider::new(Vec::new());
        assert!(matches!(provider.gather(), Err(ProviderError::NoSources)));
    }
}

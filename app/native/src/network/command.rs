//! Network information from a system command.

use std::process::{Command, Stdio};

use super::{NetworkInfoProvider, ProviderError};

/// Runs a command and returns its standard output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandProvider {
    program: String,
    args: Vec<String>,
}

impl CommandProvider {
    #[must_use]
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a provider from `[program, args...]`.
    ///
    /// Returns `None` for an empty command line.
    #[must_use]
    pub fn from_command_line(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        if program.trim().is_empty() {
            return None;
        }
        Some(Self::new(program.clone(), args.iter().cloned()))
    }

    /// The platform's usual "show my IP configuration" command.
    #[must_use]
    pub fn platform_default() -> Self {
        if cfg!(target_os = "windows") {
            Self::new("ipconfig", ["/all"])
        } else if cfg!(target_os = "macos") {
            Self::new("ifconfig", Vec::<String>::new())
        } else {
            Self::new("ip", ["addr"])
        }
    }

    #[must_use]
    pub fn program(&self) -> &str { &self.program }

    #[must_use]
    pub fn args(&self) -> &[String] { &self.args }
}

impl NetworkInfoProvider for CommandProvider {
    fn gather(&self) -> Result<String, ProviderError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ProviderError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        // Some tools exit non-zero on partial failures but still print usable output.
        if !output.status.success() && stdout.trim().is_empty() {
            return Err(ProviderError::CommandFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!(program = %self.program, bytes = stdout.len(), "command output collected");
        Ok(stdout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_command_line() {
        let command = vec!["ipconfig".to_string(), "/all".to_string()];
        let provider = CommandProvider::from_command_line(&command).unwrap();
        assert_eq!(provider.program(), "ipconfig");
        assert_eq!(provider.args(), ["/all".to_string()]);
    }

    #[test]
    fn test_from_empty_command_line() {
        assert!(CommandProvider::from_command_line(&[]).is_none());
        assert!(CommandProvider::from_command_line(&[" ".to_string()]).is_none());
    }

    #[test]
    fn test_platform_default_is_not_empty() {
        assert!(!CommandProvider::platform_default().program().is_empty());
    }

    #[test]
    fn test_missing_program_reports_spawn_error() {
        let provider = CommandProvider::new("netlock-definitely-missing-binary", ["--flag"]);
        let err = provider.gather().unwrap_err();
        assert!(matches!(err, ProviderError::Spawn { .. }));
        assert!(err.to_string().contains("netlock-definitely-missing-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn test_command_output_is_returned() {
        let provider = CommandProvider::new("echo", ["Adapter: Eth0"]);
        assert_eq!(provider.gather().unwrap(), "Adapter: Eth0\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_without_output() {
        let provider = CommandProvider::new("false", Vec::<String>::new());
        assert!(matches!(provider.gather(), Err(ProviderError::CommandFailed { .. })));
    }
}

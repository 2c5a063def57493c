//! The documentation check itself

use std::path::PathBuf;

use tracing::{debug, info};

use crate::error::VerifyResult;
use crate::playwright::PlaywrightRunner;
use crate::script::{build_script, RunReport, DOCS_URL, SCREENSHOT_PATH};

/// Outcome of one verification run
#[derive(Debug, Clone)]
pub enum Outcome {
    Success { screenshot: PathBuf },
    Failure { detail: String },
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// The single line this program prints to stdout
    pub fn message(&self) -> String {
        match self {
            Outcome::Success { .. } => {
                "Documentation page loaded successfully and screenshot taken.".to_string()
            }
            Outcome::Failure { detail } => {
                format!("Error verifying documentation page: {}", detail)
            }
        }
    }
}

/// Drives one headless-browser pass over the documentation page
pub struct DocVerifier {
    runner: PlaywrightRunner,
}

impl DocVerifier {
    pub fn new() -> Self {
        Self::with_runner(PlaywrightRunner::new())
    }

    pub fn with_runner(runner: PlaywrightRunner) -> Self {
        Self { runner }
    }

    /// Run the check. Every failure mode collapses into `Outcome::Failure`
    /// with the error detail as text; callers never see an `Err`.
    pub async fn run(&self) -> Outcome {
        match self.try_run().await {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Failure {
                detail: e.to_string(),
            },
        }
    }

    async fn try_run(&self) -> VerifyResult<Outcome> {
        // Absolute path so the screenshot lands in the invocation
        // directory regardless of where the script file is staged.
        let screenshot = std::env::current_dir()?.join(SCREENSHOT_PATH);

        info!("Checking {}", DOCS_URL);

        let script = build_script(&screenshot);
        let stdout = self.runner.run_script(&script).await?;
        let report = RunReport::parse(&stdout)?;

        if report.success {
            debug!("Screenshot written to {}", screenshot.display());
            Ok(Outcome::Success { screenshot })
        } else {
            Ok(Outcome::Failure {
                detail: report
                    .error
                    .unwrap_or_else(|| "unknown error".to_string()),
            })
        }
    }
}

impl Default for DocVerifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message() {
        let outcome = Outcome::Success {
            screenshot: PathBuf::from(SCREENSHOT_PATH),
        };
        assert_eq!(
            outcome.message(),
            "Documentation page loaded successfully and screenshot taken."
        );
    }

    #[test]
    fn test_failure_message_embeds_detail() {
        let outcome = Outcome::Failure {
            detail: "page.waitForSelector: Timeout 10000ms exceeded.".to_string(),
        };
        let message = outcome.message();
        assert!(message.starts_with("Error verifying documentation page:"));
        assert!(message.contains("Timeout 10000ms exceeded"));
    }

    #[test]
    fn test_messages_are_single_line() {
        let success = Outcome::Success {
            screenshot: PathBuf::from(SCREENSHOT_PATH),
        };
        let failure = Outcome::Failure {
            detail: "net::ERR_NAME_NOT_RESOLVED".to_string(),
        };
        assert!(!success.message().contains('\n'));
        assert!(!failure.message().contains('\n'));
    }
}

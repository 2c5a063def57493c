//! Error types for the documentation smoke check

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("Playwright not found. Install with: npm install playwright && npx playwright install chromium")]
    PlaywrightNotFound,

    #[error("Check script failed: {0}")]
    Script(String),

    #[error("No result report in script output: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type VerifyResult<T> = Result<T, VerifyError>;

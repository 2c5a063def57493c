//! Documentation site smoke check
//!
//! Verifies that the FlorisBoard documentation site renders by driving a
//! headless Chromium through Playwright:
//!
//! ```text
//! DocVerifier::run()
//!   ├── build_script()          fixed navigate/wait/screenshot sequence
//!   ├── PlaywrightRunner        stages the script, runs it with node
//!   └── RunReport::parse()      one JSON result line from the script
//! ```
//!
//! The check is deliberately fixed: one URL, one selector, one screenshot
//! path, a 10 second wait. The run always ends with the browser closed and
//! exactly one human-readable line on stdout.

pub mod error;
pub mod playwright;
pub mod script;
pub mod verifier;

pub use error::{VerifyError, VerifyResult};
pub use playwright::PlaywrightRunner;
pub use verifier::{DocVerifier, Outcome};

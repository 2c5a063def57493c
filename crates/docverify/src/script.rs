//! Generates the Playwright check script and parses its result line

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VerifyError, VerifyResult};

/// Documentation page under test
pub const DOCS_URL: &str = "https://florisboard.github.io/florisboard/";

/// Selector that proves the page rendered
pub const HEADING_SELECTOR: &str = "h1";

/// How long to wait for the heading before giving up
pub const HEADING_TIMEOUT_MS: u64 = 10_000;

/// Screenshot destination, relative to the invocation directory
pub const SCREENSHOT_PATH: &str = "docs_screenshot.png";

/// Result line printed by the generated script
///
/// The script always exits 0; success and failure are distinguished only
/// by this report so that the Rust side owns the final message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl RunReport {
    /// Scan captured stdout for the report line.
    ///
    /// Playwright and the page itself may write extra lines, so the last
    /// parseable JSON object wins.
    pub fn parse(output: &str) -> VerifyResult<Self> {
        for line in output.lines().rev() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if let Ok(report) = serde_json::from_str::<RunReport>(line) {
                return Ok(report);
            }
        }

        let mut detail = output.trim().to_string();
        if detail.len() > 500 {
            // Back off to a char boundary; browser noise is not always ASCII.
            let mut cut = 500;
            while !detail.is_char_boundary(cut) {
                cut -= 1;
            }
            detail.truncate(cut);
        }
        Err(VerifyError::Report(detail))
    }
}

/// Build the self-contained Playwright program for the check.
///
/// Mirrors the fixed sequence: launch headless Chromium, open a page,
/// navigate, wait for the heading, screenshot. Any thrown error is caught
/// in one place and reported; the browser is closed in `finally` on every
/// path.
pub fn build_script(screenshot_path: &Path) -> String {
    format!(
        r#"const {{ chromium }} = require('playwright');

(async () => {{
  const browser = await chromium.launch({{ headless: true }});
  try {{
    const page = await browser.newPage();
    await page.goto('{url}');
    await page.waitForSelector('{selector}', {{ timeout: {timeout} }});
    await page.screenshot({{ path: '{screenshot}', fullPage: true }});
    console.log(JSON.stringify({{ success: true }}));
  }} catch (error) {{
    console.log(JSON.stringify({{ success: false, error: error.message }}));
  }} finally {{
    await browser.close();
  }}
}})();
"#,
        url = DOCS_URL,
        selector = HEADING_SELECTOR,
        timeout = HEADING_TIMEOUT_MS,
        screenshot = js_escape(&screenshot_path.to_string_lossy()),
    )
}

/// Escape a string for embedding in a single-quoted JS literal
fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

//! docverify - check that the documentation site renders

use tracing_subscriber::EnvFilter;

use docverify::DocVerifier;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout carries exactly one outcome line.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let outcome = DocVerifier::new().run().await;

    // Both outcomes exit 0; the printed line is the report.
    println!("{}", outcome.message());
}

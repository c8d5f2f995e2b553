use ansible_workspace::presentation::cli::CliApp;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let app = CliApp::new();

    // Initialize logging
    let default_filter = if app.verbose() {
        "warn,ansible_workspace=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the CLI application
    app.run().await
}

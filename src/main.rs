use anyhow::Context;
use user_directory::{report_user_name, AppBuilder};

/// Identifier looked up on every run
const DEMO_USER_ID: i64 = 1;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the lookup result
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let deps = AppBuilder::new()
        .with_production_deps()
        .build()
        .context("Failed to wire application dependencies")?;

    // An Err here exits non-zero
    report_user_name(&deps, DEMO_USER_ID, &mut std::io::stdout().lock())
}

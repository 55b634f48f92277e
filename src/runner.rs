// Lookup-and-report step used by the binary
//
// Kept out of main.rs so the failure branch can be driven with a mock
// repository. The only thing written to `out` is the single result line;
// diagnostics go through tracing.

use crate::app_builder::AppDependencies;
use anyhow::Context;
use std::io::Write;

/// Resolve one user's name and write it to `out`
///
/// Writes exactly one line on success and nothing on failure.
///
/// # Errors
/// - The repository lookup failed (context names the user id)
/// - Writing to `out` failed
pub fn report_user_name<W: Write>(
    deps: &AppDependencies,
    id: i64,
    out: &mut W,
) -> anyhow::Result<()> {
    match deps.user_service.get_user_name(id) {
        Ok(name) => {
            writeln!(out, "Real user: {}", name).context("Failed to write lookup result")?;
            Ok(())
        }
        Err(e) => {
            tracing::error!("Lookup for user {} failed: {}", id, e);
            Err(e).with_context(|| format!("Failed to resolve user {}", id))
        }
    }
}

//! Sorts 10,000 random integers with merge sort, checks the result, and discards it.

use classic_sort::{merge_sort, verify, SequenceConfig};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), verify::VerifyError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = SequenceConfig::default();
    let input = config.generate();
    debug!(len = input.len(), bound = config.bound, "generated input");

    let sorted = merge_sort(&input);
    verify::check_sorted_permutation(&input, &sorted)?;

    info!(len = sorted.len(), "merge sort finished");
    Ok(())
}

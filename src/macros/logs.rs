macro_rules! debug_key {
    ($source: expr, $description: expr, $registry: expr, $key: expr) => {
        tracing::debug!(
            "{} - {} exists at {}: {}",
            $source,
            $description,
            $key,
            $registry.key_exists(&$key)
        );
    };
}
pub(crate) use debug_key;

macro_rules! trace_skipped_entry {
    ($source: expr, $key: expr, $reason: expr) => {
        tracing::trace!("{} - Skipped entry at {}: {}", $source, $key, $reason);
    };
}
pub(crate) use trace_skipped_entry;

macro_rules! warn_no_programs {
    ($source: expr) => {
        tracing::warn!("{} - No programs found", $source);
    };
}
pub(crate) use warn_no_programs;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "astrelis_bitmap_font=debug";

/// Install a fmt subscriber, honouring `RUST_LOG` when it is set.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

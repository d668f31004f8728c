use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. `RUST_LOG` wins over the defaults.
///
/// Library crates log through the `log` facade; the subscriber bridges
/// those records as well.
pub fn init(verbose: bool) {
    let default = if verbose {
        "hedgemaze=debug,hedgemaze_lib=debug,hedge_core=debug,hedge_paths=debug,info"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

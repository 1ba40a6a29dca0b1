//! Tracing setup shared by the binaries.

use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing.
///
/// Output goes to stderr so results printed on stdout stay clean.
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "compkit=debug" } else { "compkit=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(log_layer(verbose, std::io::stderr))
        .init();
}

/// Plain-text formatting layer; no ANSI escapes.
fn log_layer<S, W>(verbose: bool, writer: W) -> impl Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(verbose)
}

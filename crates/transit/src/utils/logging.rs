use std::sync::Once;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// The filter is read from the `TRANSIT_LOG` environment variable and falls
/// back to `transit=info` when unset or unparseable. Calling this more than
/// once is harmless; only the first call takes effect.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TRANSIT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("transit=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}

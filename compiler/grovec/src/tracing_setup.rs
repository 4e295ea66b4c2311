//! Subscriber installation for the `grove` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Filter used by `--verbose` when `RUST_LOG` is unset.
pub const VERBOSE_FILTER: &str = "grove_parse=debug";

/// Initialize tracing for diagnostic output on stderr.
///
/// Safe to call multiple times; only the first call installs a subscriber.
/// Without `RUST_LOG` and without `verbose`, nothing is installed. Parse
/// attempts are nested spans, so output is rendered as an indented tree.
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) if verbose => EnvFilter::new(VERBOSE_FILTER),
            Err(_) => return,
        };
        tracing_subscriber::registry()
            .with(filter)
            .with(
                HierarchicalLayer::new(2)
                    .with_writer(std::io::stderr)
                    .with_targets(true)
                    .with_indent_lines(true),
            )
            .init();
    });
}

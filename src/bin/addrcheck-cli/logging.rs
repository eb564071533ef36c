//! stderr logging, filtered by `ADDRCHECK_LOG` (e.g. `ADDRCHECK_LOG=addrcheck=debug`).

#[cfg(feature = "with-tracing")]
pub fn init() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_env("ADDRCHECK_LOG")
        .unwrap_or_else(|_| EnvFilter::new("addrcheck=warn,addrcheck_cli=warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

#[cfg(not(feature = "with-tracing"))]
pub fn init() {}

//! Interactive console front end

pub mod input;
pub mod menu;
pub mod session;

pub use input::{Console, TokenReader};
pub use menu::{run, MenuChoice};
pub use session::run_calculations;

/// Install the stderr tracing subscriber; `RUST_LOG` overrides the default filter
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kinematic_calc=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `verbose` raises the default level from info to debug. `RUST_LOG` still
/// takes precedence when set.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);

    // A logger may already be installed (e.g. by a test harness).
    let _ = builder.try_init();
}

use env_logger::{Builder, Env};

/// Console logging at `info` unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

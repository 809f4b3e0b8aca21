//! Tracing setup for the command line front-end.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host application or to this helper.

/// Default level when neither `--debug` nor `RUST_LOG` says otherwise.
pub const DEFAULT_LEVEL: &str = "warn";

/// Filter directive to install: a forced level wins over `RUST_LOG`, which
/// wins over [`DEFAULT_LEVEL`].
#[must_use]
pub fn filter_directive(forced: Option<&str>, env: Option<&str>) -> String {
    forced
        .or(env.filter(|s| !s.trim().is_empty()))
        .unwrap_or(DEFAULT_LEVEL)
        .to_owned()
}

/// Installs a compact stderr subscriber. `forced_level` (set by `--debug`)
/// takes precedence over `RUST_LOG`.
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber already exists.
pub fn init_default_tracing(forced_level: Option<&str>) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let env = std::env::var(tracing_subscriber::EnvFilter::DEFAULT_ENV).ok();
        let directive = filter_directive(forced_level, env.as_deref());
        let builder = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(directive))
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = forced_level;
        false
    }
}

//! Tracing setup for hosts embedding `circle-plot`.
//!
//! Events emitted: `debug!` per render cycle (`point_count`, `radius`, grid
//! and label toggles), `trace!` for the built plot frame and the tight crop
//! rectangle of a rasterized plot, `debug!` per exported document (size,
//! text lines, degraded flag), and `warn!` when the plot image was left out
//! of an export. Nothing is printed until a subscriber is installed,
//! either by the host or through `init_default_tracing`.

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// `circle_plot=info` (so only degraded exports show by default).
///
/// Returns `false` without the `telemetry` feature or when the host already
/// installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("circle_plot=info")),
            )
            .with_target(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

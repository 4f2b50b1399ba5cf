use dotdocs_config::DebugConfig;
use tracing_subscriber::{EnvFilter, Registry, reload};

/// Filter handle kept after startup so the manifest can pick the level.
pub(crate) struct TracingHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl TracingHandle {
    /// Apply the manifest's `[debug]` level unless `RUST_LOG` already chose one.
    pub(crate) fn apply_config(&self, debug_cfg: &DebugConfig) {
        if self.from_env {
            return;
        }

        let filter = EnvFilter::new(debug_cfg.filter_directive());
        if let Err(err) = self.filter.reload(filter) {
            tracing::warn!(error = %err, "failed to apply manifest trace level");
        }
    }
}

/// Install a stderr subscriber before anything else runs. `RUST_LOG` wins;
/// otherwise the default `[debug]` level holds until the manifest is loaded.
/// Stdout is reserved for the report.
pub(crate) fn initialize_tracing() -> TracingHandle {
    use tracing_subscriber::prelude::*;

    let (env_filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (
            EnvFilter::new(DebugConfig::default().filter_directive()),
            false,
        ),
    };
    let (filter_layer, filter) = reload::Layer::new(env_filter);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let init_result = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();

    if let Err(err) = init_result {
        tracing::warn!(error = %err, "tracing already initialized; skipping setup");
    }

    TracingHandle { filter, from_env }
}

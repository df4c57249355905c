//! Tracing and error-report setup shared by the grosir binaries.

use crate::Environment;
use tracing::debug;
use tracing_subscriber::{EnvFilter, prelude::*};

/// Install the color-eyre panic and error hooks.
///
/// Call before any fallible work in main() so reports carry file:line
/// locations. Repeated calls are harmless.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Initialize the global tracing subscriber.
///
/// Production gets flattened JSON lines for log aggregation; development
/// gets pretty human-readable output. Both carry
/// `tracing_error::ErrorLayer` so span traces are attached to error
/// reports, and `RUST_LOG` overrides the default filter.
///
/// No-op when a subscriber is already installed, which happens when
/// several tests initialize tracing in one process.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if environment.is_production() {
            EnvFilter::new("info,tower_http=info")
        } else {
            EnvFilter::new("debug")
        }
    });

    let result = if environment.is_production() {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_file(false)
                    .with_line_number(false)
                    .pretty(),
            )
            .with(tracing_error::ErrorLayer::default())
            .with(filter)
            .try_init()
    };

    match result {
        Ok(_) => tracing::info!("Tracing initialized. Environment: {:?}", environment),
        Err(_) => debug!("Tracing already initialized, skipping"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        let env = Environment::Development;
        init_tracing(&env);
        init_tracing(&env);
    }

    #[test]
    fn test_init_tracing_honors_rust_log() {
        temp_env::with_var("RUST_LOG", Some("trace"), || {
            init_tracing(&Environment::Production);
        });
    }
}

//! Logging and trace export setup
//!
//! The request layer itself only emits `tracing` events: validation failures at
//! `debug`, Bot API failure answers at `warn`, registry changes at `debug`.
//! Applications that have no subscriber yet can install one here.
//!
//! The installed subscriber is a `tracing-subscriber` registry made of:
//!
//! 1. an **EnvFilter** (from `RUST_LOG`, or the configured level)
//! 2. a **fmt layer**, JSON or plain text
//! 3. an **OpenTelemetry layer**, only when an OTLP endpoint is configured
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: log filter (e.g. "info", "tgbots_core=debug")
//! - `OTEL_EXPORTER_OTLP_ENDPOINT`: collector endpoint; trace export is off
//!   when unset
//! - `TGBOTS_LOG_FORMAT`: `json` (default) or `plain`
//!
//! # Usage Pattern
//!
//! ```rust,no_run
//! use tgbots_core::ObservabilityConfig;
//!
//! let config = ObservabilityConfig::new("my-bot").with_log_level("debug");
//! tgbots_core::init_observability(config).expect("Failed to init observability");
//!
//! // ... build, validate and send requests ...
//!
//! tgbots_core::shutdown_observability();
//! ```

use opentelemetry::KeyValue;
use std::sync::OnceLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

static TRACER_PROVIDER: OnceLock<opentelemetry_sdk::trace::SdkTracerProvider> = OnceLock::new();

/// Output format of the fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable lines
    Plain,
}

impl LogFormat {
    fn from_env() -> Self {
        match std::env::var("TGBOTS_LOG_FORMAT") {
            Ok(value) if value.eq_ignore_ascii_case("plain") => LogFormat::Plain,
            _ => LogFormat::Json,
        }
    }
}

/// Logging and trace export configuration
///
/// # Defaults
///
/// - Service name: "tgbots"
/// - Service version: the crate version
/// - OTLP endpoint: `$OTEL_EXPORTER_OTLP_ENDPOINT`, export disabled when unset
/// - Log level: `$RUST_LOG` or "info"
/// - Format: `$TGBOTS_LOG_FORMAT` or JSON
///
/// # Examples
///
/// ```rust
/// use tgbots_core::{LogFormat, ObservabilityConfig};
///
/// let config = ObservabilityConfig::new("moderation-bot")
///     .with_endpoint("http://collector:4317")
///     .with_format(LogFormat::Plain)
///     .with_log_level("tgbots_core=debug");
///
/// assert_eq!(config.otlp_endpoint.as_deref(), Some("http://collector:4317"));
/// ```
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name attached to exported spans
    pub service_name: String,
    /// Service version attached to exported spans
    pub service_version: String,
    /// OTLP/gRPC collector endpoint; `None` disables trace export
    pub otlp_endpoint: Option<String>,
    /// Filter directive used when `RUST_LOG` is not set
    pub log_level: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "tgbots".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            otlp_endpoint: std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT").ok(),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            format: LogFormat::from_env(),
        }
    }
}

impl ObservabilityConfig {
    /// Create a configuration with a custom service name and default settings
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Export traces to this OTLP collector
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    /// Disable trace export regardless of the environment
    pub fn without_export(mut self) -> Self {
        self.otlp_endpoint = None;
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }
}

/// Install the global `tracing` subscriber
///
/// # Errors
///
/// - the filter directive is invalid
/// - the OTLP exporter cannot be built
/// - a global subscriber is already installed
pub fn init_observability(config: ObservabilityConfig) -> Result<(), BoxError> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let fmt_layer = match config.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_line_number(true)
            .json()
            .boxed(),
        LogFormat::Plain => tracing_subscriber::fmt::layer().with_target(true).boxed(),
    };

    let telemetry_layer = match &config.otlp_endpoint {
        Some(endpoint) => {
            let tracer = init_tracer(&config, endpoint)?;
            Some(tracing_opentelemetry::layer().with_tracer(tracer))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(telemetry_layer)
        .try_init()?;

    tracing::info!(
        service_name = %config.service_name,
        otlp_endpoint = ?config.otlp_endpoint,
        "Observability initialized"
    );

    Ok(())
}

fn init_tracer(
    config: &ObservabilityConfig,
    endpoint: &str,
) -> Result<opentelemetry_sdk::trace::Tracer, BoxError> {
    use opentelemetry::trace::TracerProvider as _;
    use opentelemetry_otlp::WithExportConfig;
    use opentelemetry_sdk::Resource;

    let resource = Resource::builder_empty()
        .with_attributes(vec![
            KeyValue::new(
                opentelemetry_semantic_conventions::resource::SERVICE_NAME,
                config.service_name.clone(),
            ),
            KeyValue::new(
                opentelemetry_semantic_conventions::resource::SERVICE_VERSION,
                config.service_version.clone(),
            ),
        ])
        .build();

    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(endpoint)
        .build()?;

    let provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .with_resource(resource)
        .build();

    let tracer = provider.tracer(config.service_name.clone());
    opentelemetry::global::set_tracer_provider(provider.clone());
    // Kept so shutdown can flush pending spans
    let _ = TRACER_PROVIDER.set(provider);

    Ok(tracer)
}

/// Flush and stop trace export, if it was enabled
///
/// Safe to call more than once and when nothing was initialized.
pub fn shutdown_observability() {
    if let Some(provider) = TRACER_PROVIDER.get() {
        if let Err(e) = provider.shutdown() {
            tracing::warn!(error = %e, "Tracer provider shutdown failed");
        }
    }
}

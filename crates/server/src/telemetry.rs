use axum::{body::Body, http::Request, response::Response};
use opentelemetry::{
    global,
    trace::{SpanKind, TraceContextExt, Tracer},
    Context, KeyValue,
};
use opentelemetry_otlp::{WithExportConfig, WithTonicConfig};
use std::{
    future::Future,
    pin::Pin,
    sync::OnceLock,
    task::{Context as TaskContext, Poll},
};
use tower::{Layer, Service};

use crate::auth::cookies::extract_session_id;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const TRACER_NAME: &str = "agrimarket";

/// Keep the LoggerProvider alive for the process lifetime.
static LOGGER_PROVIDER: OnceLock<opentelemetry_sdk::logs::SdkLoggerProvider> = OnceLock::new();

/// Runtime for the OTLP gRPC exporters. Tonic's `connect_lazy()` needs a
/// Tokio context, which `dioxus::serve` may not have entered yet.
static OTEL_RUNTIME: OnceLock<tokio::runtime::Runtime> = OnceLock::new();

/// Collector settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct OtelSettings {
    pub endpoint: String,
    pub service_name: String,
    pub environment: String,
    pub ingestion_key: Option<String>,
}

impl OtelSettings {
    /// `None` when `OTEL_EXPORTER_OTLP_ENDPOINT` is unset or empty.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());
        Some(Self {
            endpoint: non_empty("OTEL_EXPORTER_OTLP_ENDPOINT")?,
            service_name: non_empty("OTEL_SERVICE_NAME").unwrap_or_else(|| TRACER_NAME.to_string()),
            environment: non_empty("DEPLOY_ENV").unwrap_or_else(|| "development".to_string()),
            ingestion_key: non_empty("SIGNOZ_INGESTION_KEY"),
        })
    }

    fn uses_tls(&self) -> bool {
        self.endpoint.starts_with("https://")
    }

    fn metadata(&self) -> Option<opentelemetry_otlp::tonic_types::metadata::MetadataMap> {
        let key = self.ingestion_key.as_deref()?;
        let value = match key.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("SIGNOZ_INGESTION_KEY is not a valid header value, ignoring");
                return None;
            }
        };
        let mut metadata = opentelemetry_otlp::tonic_types::metadata::MetadataMap::new();
        metadata.insert("signoz-ingestion-key", value);
        Some(metadata)
    }
}

/// Set up OTLP trace and log export.
///
/// Dioxus owns the tracing subscriber; this only registers the global
/// TracerProvider (fed by [`OtelTraceLayer`]) and bridges the `log` crate
/// into OTLP logs. Failures are reported and leave telemetry disabled.
pub fn init_telemetry() {
    let _ = dotenvy::dotenv();

    let Some(settings) = OtelSettings::from_env() else {
        tracing::info!("OTEL_EXPORTER_OTLP_ENDPOINT not set, skipping OTLP telemetry");
        return;
    };

    if let Err(e) = install(&settings) {
        tracing::warn!(error = %e, "telemetry disabled");
    }
}

fn install(settings: &OtelSettings) -> Result<(), String> {
    let rt = match OTEL_RUNTIME.get() {
        Some(rt) => rt,
        None => {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .worker_threads(1)
                .build()
                .map_err(|e| format!("failed to create OTEL runtime: {e}"))?;
            OTEL_RUNTIME.get_or_init(|| rt)
        }
    };
    let _guard = rt.enter();

    let mut span_builder = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.endpoint);
    if settings.uses_tls() {
        span_builder = span_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    if let Some(metadata) = settings.metadata() {
        span_builder = span_builder.with_metadata(metadata);
    }
    let span_exporter = span_builder
        .build()
        .map_err(|e| format!("failed to create OTLP span exporter: {e}"))?;

    let resource = opentelemetry_sdk::Resource::builder()
        .with_service_name(settings.service_name.clone())
        .with_attribute(KeyValue::new("service.version", APP_VERSION))
        .with_attribute(KeyValue::new(
            "deployment.environment",
            settings.environment.clone(),
        ))
        .build();

    let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_resource(resource.clone())
        .build();
    global::set_tracer_provider(tracer_provider);

    let mut log_builder = opentelemetry_otlp::LogExporter::builder()
        .with_tonic()
        .with_endpoint(&settings.endpoint);
    if settings.uses_tls() {
        log_builder = log_builder.with_tls_config(
            opentelemetry_otlp::tonic_types::transport::ClientTlsConfig::new().with_native_roots(),
        );
    }
    if let Some(metadata) = settings.metadata() {
        log_builder = log_builder.with_metadata(metadata);
    }
    let log_exporter = log_builder
        .build()
        .map_err(|e| format!("failed to create OTLP log exporter: {e}"))?;

    let logger_provider = LOGGER_PROVIDER.get_or_init(|| {
        opentelemetry_sdk::logs::SdkLoggerProvider::builder()
            .with_batch_exporter(log_exporter)
            .with_resource(resource)
            .build()
    });

    let bridge = opentelemetry_appender_log::OpenTelemetryLogBridge::new(logger_provider);
    match log::set_boxed_logger(Box::new(bridge)) {
        Ok(()) => log::set_max_level(log::LevelFilter::Info),
        Err(_) => tracing::debug!("log bridge skipped, a logger is already set"),
    }

    tracing::info!(
        version = APP_VERSION,
        endpoint = %settings.endpoint,
        cloud = settings.ingestion_key.is_some(),
        "telemetry initialized"
    );
    Ok(())
}

/// Route label for span names. Dashboard URLs collapse to their pattern so
/// each role does not get its own span name.
fn route_label(path: &str) -> &str {
    if path.starts_with("/dashboard/") {
        "/dashboard/:role"
    } else {
        path
    }
}

/// Tower layer that opens an OpenTelemetry server span per HTTP request.
///
/// Records method, path, user-agent, request id, response status and
/// whether the request carried a session cookie.
#[derive(Clone)]
pub struct OtelTraceLayer;

impl<S> Layer<S> for OtelTraceLayer {
    type Service = OtelTraceService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        OtelTraceService { inner }
    }
}

#[derive(Clone)]
pub struct OtelTraceService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for OtelTraceService<S>
where
    S: Service<Request<Body>, Response = Response> + Send + Clone + 'static,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut TaskContext<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let tracer = global::tracer(TRACER_NAME);
        let method = req.method().to_string();
        let path = req.uri().path().to_string();

        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string()
        };
        let session = if extract_session_id(req.headers()).is_some() {
            "cookie"
        } else {
            "anonymous"
        };

        let attributes = vec![
            KeyValue::new("http.method", method.clone()),
            KeyValue::new("http.target", path.clone()),
            KeyValue::new("http.user_agent", header("user-agent")),
            KeyValue::new("http.request_id", header("x-request-id")),
            KeyValue::new("session.status", session),
        ];

        let span = tracer
            .span_builder(format!("{} {}", method, route_label(&path)))
            .with_kind(SpanKind::Server)
            .with_attributes(attributes)
            .start(&tracer);

        let cx = Context::current_with_span(span);
        let mut inner = self.inner.clone();

        let guard = cx.clone().attach();
        let future = inner.call(req);
        drop(guard);

        Box::pin(async move {
            let response = future.await?;

            let span = cx.span();
            let status = response.status();
            span.set_attribute(KeyValue::new("http.status_code", status.as_u16() as i64));
            if status.is_server_error() {
                span.set_status(opentelemetry::trace::Status::error(status.to_string()));
            } else if status.is_client_error() {
                span.set_attribute(KeyValue::new("error.type", "client_error"));
            }

            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn settings_require_endpoint() {
        assert_eq!(OtelSettings::from_lookup(lookup(&[])), None);
        assert_eq!(
            OtelSettings::from_lookup(lookup(&[("OTEL_EXPORTER_OTLP_ENDPOINT", "")])),
            None
        );
    }

    #[test]
    fn settings_fill_defaults() {
        let settings = OtelSettings::from_lookup(lookup(&[(
            "OTEL_EXPORTER_OTLP_ENDPOINT",
            "http://localhost:4317",
        )]))
        .unwrap();
        assert_eq!(settings.service_name, "agrimarket");
        assert_eq!(settings.environment, "development");
        assert_eq!(settings.ingestion_key, None);
        assert!(!settings.uses_tls());
        assert!(settings.metadata().is_none());
    }

    #[test]
    fn cloud_settings_use_tls_and_key() {
        let settings = OtelSettings::from_lookup(lookup(&[
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "https://ingest.eu.signoz.cloud:443"),
            ("SIGNOZ_INGESTION_KEY", "abc123"),
            ("DEPLOY_ENV", "production"),
        ]))
        .unwrap();
        assert!(settings.uses_tls());
        assert_eq!(settings.environment, "production");
        assert!(settings.metadata().is_some());
    }

    #[test]
    fn dashboard_paths_share_a_route_label() {
        assert_eq!(route_label("/dashboard/farmer"), "/dashboard/:role");
        assert_eq!(route_label("/dashboard/service_provider"), "/dashboard/:role");
        assert_eq!(route_label("/login"), "/login");
    }
}

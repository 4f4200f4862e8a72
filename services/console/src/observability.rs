//! Tracing, trace-context propagation and Prometheus metrics for the console.
//!
//! `init_observability` is safe to call more than once; only the first call
//! installs the subscriber and the metrics recorder. Span export is enabled
//! only when `OTEL_EXPORTER_OTLP_ENDPOINT` is set, so local runs and tests
//! never try to reach a collector.
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use opentelemetry::propagation::Extractor;
use opentelemetry::trace::TracerProvider;
use opentelemetry::{KeyValue, global};
use opentelemetry_sdk::Resource;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

static SUBSCRIBER: OnceLock<()> = OnceLock::new();
static PROPAGATOR: OnceLock<()> = OnceLock::new();
static RECORDER: OnceLock<PrometheusHandle> = OnceLock::new();

/// OpenTelemetry resource identity of this process.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ServiceIdentity {
    name: String,
    instance: Option<String>,
    environment: Option<String>,
}

impl ServiceIdentity {
    fn from_env(name: &str) -> Self {
        let instance = std::env::var("MROSC_INSTANCE_ID")
            .or_else(|_| std::env::var("HOSTNAME"))
            .ok();
        Self {
            name: name.to_string(),
            instance,
            environment: std::env::var("DEPLOYMENT_ENVIRONMENT").ok(),
        }
    }

    fn attributes(&self) -> Vec<KeyValue> {
        let optional = [
            ("service.instance.id", &self.instance),
            ("deployment.environment", &self.environment),
        ];
        std::iter::once(KeyValue::new("service.name", self.name.clone()))
            .chain(
                optional
                    .into_iter()
                    .filter_map(|(key, value)| value.clone().map(|v| KeyValue::new(key, v))),
            )
            .collect()
    }
}

pub fn init_observability(service_name: &str) -> PrometheusHandle {
    SUBSCRIBER.get_or_init(|| {
        install_propagator();
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let identity = ServiceIdentity::from_env(service_name);
        let (provider, exporter_error) = match otlp_provider(&identity) {
            Ok(provider) => (provider, None),
            Err(err) => (None, Some(err)),
        };
        let otel = provider.map(|provider| {
            tracing_opentelemetry::layer().with_tracer(provider.tracer(service_name.to_string()))
        });
        // `Option<Layer>` is itself a layer, so a missing exporter is a no-op.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .with(otel)
            .try_init();
        if let Some(err) = exporter_error {
            tracing::warn!(error = %err, "otlp span export disabled");
        }
    });
    prometheus_handle()
}

fn otlp_provider(identity: &ServiceIdentity) -> Result<Option<SdkTracerProvider>, String> {
    if std::env::var_os("OTEL_EXPORTER_OTLP_ENDPOINT").is_none() {
        return Ok(None);
    }
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .map_err(|err| err.to_string())?;
    let resource = Resource::builder_empty()
        .with_attributes(identity.attributes())
        .build();
    Ok(Some(
        SdkTracerProvider::builder()
            .with_resource(resource)
            .with_batch_exporter(exporter)
            .build(),
    ))
}

fn install_propagator() {
    PROPAGATOR.get_or_init(|| global::set_text_map_propagator(TraceContextPropagator::new()));
}

/// Parent context carried by W3C `traceparent`/`tracestate` headers.
pub fn trace_context_from_headers(headers: &axum::http::HeaderMap) -> opentelemetry::Context {
    install_propagator();
    global::get_text_map_propagator(|propagator| propagator.extract(&HeaderCarrier(headers)))
}

struct HeaderCarrier<'a>(&'a axum::http::HeaderMap);

impl Extractor for HeaderCarrier<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.to_str().ok()
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(axum::http::HeaderName::as_str).collect()
    }
}

fn prometheus_handle() -> PrometheusHandle {
    RECORDER
        .get_or_init(|| {
            let recorder = PrometheusBuilder::new().build_recorder();
            let handle = recorder.handle();
            if let Err(err) = metrics::set_global_recorder(recorder) {
                tracing::warn!(error = %err, "global metrics recorder already set");
            }
            handle
        })
        .clone()
}

pub(crate) fn metrics_router(handle: PrometheusHandle) -> axum::Router {
    axum::Router::new().route(
        "/metrics",
        axum::routing::get(move || {
            let body = handle.render();
            async move { body }
        }),
    )
}

pub async fn serve_metrics(handle: PrometheusHandle, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "metrics listening");
    serve_metrics_until(handle, listener, std::future::pending()).await
}

pub(crate) async fn serve_metrics_until<F>(
    handle: PrometheusHandle,
    listener: tokio::net::TcpListener,
    shutdown: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, metrics_router(handle).into_make_service())
        .with_graceful_shutdown(shutdown)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_env::ScopedEnv;
    use axum::body::Body;
    use axum::http::{HeaderMap, HeaderValue, Request, StatusCode};
    use opentelemetry::trace::TraceContextExt;
    use serial_test::serial;
    use std::time::Duration;
    use tower::ServiceExt;

    #[test]
    #[serial]
    fn identity_reads_instance_and_environment() {
        let _env = ScopedEnv::new()
            .set("MROSC_INSTANCE_ID", "console-1")
            .set("DEPLOYMENT_ENVIRONMENT", "homologacao");
        let identity = ServiceIdentity::from_env("mrosc-console");
        assert_eq!(identity.instance.as_deref(), Some("console-1"));
        assert_eq!(identity.environment.as_deref(), Some("homologacao"));

        let keys: Vec<String> = identity
            .attributes()
            .iter()
            .map(|attr| attr.key.as_str().to_string())
            .collect();
        assert_eq!(
            keys,
            ["service.name", "service.instance.id", "deployment.environment"]
        );
    }

    #[test]
    #[serial]
    fn identity_falls_back_to_hostname() {
        let _env = ScopedEnv::new()
            .unset("MROSC_INSTANCE_ID")
            .unset("DEPLOYMENT_ENVIRONMENT")
            .set("HOSTNAME", "console-pod-7");
        let identity = ServiceIdentity::from_env("mrosc-console");
        assert_eq!(identity.instance.as_deref(), Some("console-pod-7"));
        assert_eq!(identity.attributes().len(), 2);
    }

    #[test]
    #[serial]
    fn no_exporter_without_endpoint() {
        let _env = ScopedEnv::new().unset("OTEL_EXPORTER_OTLP_ENDPOINT");
        let provider = otlp_provider(&ServiceIdentity::from_env("mrosc-console"));
        assert!(matches!(provider, Ok(None)));
    }

    #[test]
    fn carrier_skips_non_utf8_values() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "tracestate",
            HeaderValue::from_bytes(b"vendor=\xFE").expect("opaque bytes"),
        );
        let carrier = HeaderCarrier(&headers);
        assert_eq!(carrier.get("tracestate"), None);
        assert_eq!(carrier.keys(), vec!["tracestate"]);
    }

    #[test]
    fn traceparent_becomes_remote_parent() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "traceparent",
            HeaderValue::from_static("00-0af7651916cd43dd8448eb211c80319c-b7ad6b7169203331-01"),
        );
        let context = trace_context_from_headers(&headers);
        let span = context.span();
        let span_context = span.span_context();
        assert!(span_context.is_remote());
        assert_eq!(
            span_context.trace_id().to_string(),
            "0af7651916cd43dd8448eb211c80319c"
        );
    }

    #[test]
    fn missing_traceparent_yields_empty_context() {
        let context = trace_context_from_headers(&HeaderMap::new());
        assert!(!context.span().span_context().is_valid());
    }

    #[tokio::test]
    #[serial]
    async fn repeated_init_shares_one_recorder() {
        let first = init_observability("console-test");
        metrics::counter!("mrosc_init_shared_total").increment(1);
        let second = init_observability("console-test");
        assert!(first.render().contains("mrosc_init_shared_total"));
        assert!(second.render().contains("mrosc_init_shared_total"));
    }

    #[tokio::test]
    #[serial]
    async fn metrics_route_renders_access_decisions() {
        let handle = init_observability("console-test");
        metrics::counter!("mrosc_access_decisions_total", "outcome" => "denied").increment(1);

        let response = metrics_router(handle)
            .oneshot(Request::get("/metrics").body(Body::empty()).expect("request"))
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("mrosc_access_decisions_total{outcome=\"denied\"}"));
    }

    #[tokio::test(flavor = "multi_thread")]
    #[serial]
    async fn metrics_listener_serves_until_shutdown() {
        let handle = init_observability("console-test");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(serve_metrics_until(handle, listener, async move {
            let _ = stopped.await;
        }));

        let status = reqwest::Client::builder()
            .no_proxy()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("client")
            .get(format!("http://{addr}/metrics"))
            .send()
            .await
            .expect("scrape")
            .status();
        assert!(status.is_success());

        let _ = stop.send(());
        tokio::time::timeout(Duration::from_secs(2), server)
            .await
            .expect("stops in time")
            .expect("join")
            .expect("serve");
    }
}

use std::io;
use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use tracing_subscriber::EnvFilter;

use greeter_core::Config;
use greeter_server::{router, server, telemetry};

/// Collects formatted log output in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Install a thread-local subscriber using the default filter.
fn capture_default_filter() -> (CapturedLogs, tracing::subscriber::DefaultGuard) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(telemetry::DEFAULT_LOG_FILTER))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (logs, guard)
}

#[tokio::test]
async fn default_filter_logs_requests() {
    let (logs, _guard) = capture_default_filter();
    let server = TestServer::new(router::create_router()).unwrap();

    server.get("/api/hello").await.assert_status_ok();
    server.get("/api/missing").await.assert_status_not_found();

    let output = logs.contents();
    assert!(output.contains("started processing request"), "{output}");
    assert!(output.contains("finished processing request"), "{output}");
    assert!(output.contains("status=200"), "{output}");
    assert!(output.contains("status=404"), "{output}");
}

#[tokio::test]
async fn bind_logs_the_bound_port() {
    let (logs, _guard) = capture_default_filter();

    let listener = server::bind(Config { port: 0 }.socket_addr()).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    assert_ne!(port, 0);

    let output = logs.contents();
    assert!(output.contains(&format!("listening on 0.0.0.0:{port}")), "{output}");
    assert!(!output.contains("0.0.0.0:0"), "{output}");
}

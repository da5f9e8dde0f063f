//! Shared fixtures for the library tests.

use axum::Router;
use std::net::SocketAddr;

/// Serve `router` on an ephemeral port from a background runtime
pub fn serve_router(router: Router) -> SocketAddr {
    // Bound before returning so the first request never races the accept loop
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });

    addr
}

/// URL on a local port nothing listens on
pub fn closed_port_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/bookmarks", addr)
}

/// Alert that remembers every message instead of blocking
#[derive(Debug, Default)]
pub struct RecordingAlert {
    pub messages: Vec<String>,
}

impl crate::report::Alert for RecordingAlert {
    fn alert(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

thread_local! {
    static CAPTURED: std::cell::RefCell<Vec<(log::Level, String)>> =
        const { std::cell::RefCell::new(Vec::new()) };
}

/// Logger keeping records per thread so parallel tests stay isolated
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        CAPTURED.with(|c| {
            c.borrow_mut()
                .push((record.level(), record.args().to_string()))
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Install the capturing logger and clear this thread's records
pub fn capture_logs() {
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
    CAPTURED.with(|c| c.borrow_mut().clear());
}

/// Error-level messages logged on this thread since `capture_logs`
pub fn captured_errors() -> Vec<String> {
    CAPTURED.with(|c| {
        c.borrow()
            .iter()
            .filter(|(level, _)| *level == log::Level::Error)
            .map(|(_, msg)| msg.clone())
            .collect()
    })
}

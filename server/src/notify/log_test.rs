use super::*;

#[tokio::test(start_paused = true)]
async fn notify_waits_configured_delay() {
    let notifier = LogNotifier::new(Duration::from_millis(1500));
    let started = tokio::time::Instant::now();

    let result = notifier.notify("hello").await.unwrap();

    assert_eq!(result, Delivery::Simulated);
    assert!(started.elapsed() >= Duration::from_millis(1500));
}

#[tokio::test]
async fn notify_with_zero_delay_returns_immediately() {
    let notifier = LogNotifier::new(Duration::ZERO);
    assert_eq!(notifier.notify("hello").await.unwrap(), Delivery::Simulated);
}

#[test]
fn kind_is_log() {
    assert_eq!(LogNotifier::new(Duration::ZERO).kind(), "log");
}

#[derive(Clone, Default)]
struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

struct CapturedWriter(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter(std::sync::Arc::clone(&self.0))
    }
}

impl std::io::Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

#[tokio::test(start_paused = true)]
async fn notify_logs_full_payload() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let payload = "🏢 *회사명*: ABC Corp\n📑 *분야*: 안전\n\n📝 *상세 내용*:\nNeed consulting";
    let result = LogNotifier::new(Duration::from_millis(1500)).notify(payload).await.unwrap();

    assert_eq!(result, Delivery::Simulated);
    let text = logs.text();
    assert!(text.contains("test mode"));
    assert!(text.contains("ABC Corp"));
    assert!(text.contains("안전"));
    assert!(text.contains("Need consulting"));
}

//! Sink that writes reports as JSON.

use async_trait::async_trait;
use recon_report::Report;
use recon_tool::{DeliveryError, InvocationContext, ReportSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Writes each delivered report as pretty-printed JSON followed by a newline
#[derive(Debug)]
pub struct JsonSink<W> {
    writer: Mutex<W>,
}

impl<W> JsonSink<W> {
    /// Wrap `writer`
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer
    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}

impl JsonSink<io::Stdout> {
    /// Sink printing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

#[async_trait]
impl<W> ReportSink for JsonSink<W>
where
    W: Write + Send,
{
    async fn deliver(&self, ctx: &InvocationContext, report: &Report) -> Result<(), DeliveryError> {
        let mut bytes = serde_json::to_vec_pretty(report)
            .map_err(|e| DeliveryError::with_source("cannot encode report", e))?;
        bytes.push(b'\n');

        let mut writer = self.writer.lock().unwrap_or_else(|e| e.into_inner());
        writer
            .write_all(&bytes)
            .and_then(|()| writer.flush())
            .map_err(|e| DeliveryError::with_source("cannot write report", e))?;

        tracing::debug!(scan_id = %ctx.scan_id, bytes = bytes.len(), "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recon_report::Finding;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_writes_report_json() {
        let sink = JsonSink::new(Vec::new());
        let report = Report::from_findings(vec![Finding::new("Nginx", "1.4.6", 100)]);

        sink.deliver(&InvocationContext::new(), &report).await.unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert!(written.ends_with('\n'));
        let decoded: Report = serde_json::from_str(&written).unwrap();
        assert_eq!(decoded, report);
    }

    #[tokio::test]
    async fn test_writes_one_document_per_report() {
        let sink = JsonSink::new(Vec::new());
        let ctx = InvocationContext::new();

        sink.deliver(&ctx, &Report::Empty).await.unwrap();
        sink.deliver(&ctx, &Report::Empty).await.unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        let docs: Vec<Report> = serde_json::Deserializer::from_str(&written)
            .into_iter::<Report>()
            .map(Result::unwrap)
            .collect();
        assert_eq!(docs, vec![Report::Empty, Report::Empty]);
    }

    #[tokio::test]
    async fn test_write_failure_is_delivery_error() {
        let sink = JsonSink::new(BrokenPipe);

        let err = sink.deliver(&InvocationContext::new(), &Report::Empty).await.unwrap_err();
        assert_eq!(err.to_string(), "cannot write report");
    }
}

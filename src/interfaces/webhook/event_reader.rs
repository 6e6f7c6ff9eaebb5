use crate::domain::ports::WebhookRequest;
use crate::error::Result;
use bytes::Bytes;
use std::io::BufRead;

/// Path replayed webhook deliveries are addressed to.
pub const REPLAY_PATH: &str = "/webhooks/stub";

/// Replays webhook bodies from a JSON-lines source.
///
/// Each non-blank line becomes the body of a `POST` request. Bodies are not
/// parsed here; deciding what they mean is the gateway's job.
pub struct EventReader<R: BufRead> {
    source: R,
}

impl<R: BufRead> EventReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn requests(self) -> impl Iterator<Item = Result<WebhookRequest>> {
        self.source
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .map(|line| -> Result<WebhookRequest> {
                let body = line?;
                let request = http::Request::builder()
                    .method(http::Method::POST)
                    .uri(REPLAY_PATH)
                    .header(http::header::CONTENT_TYPE, "application/json")
                    .body(Bytes::from(body.trim().to_string()))?;
                Ok(request)
            })
    }
}

//! Progress stream handler (Server-Sent Events)

use axum::{
    extract::Path,
    response::sse::{Event, Sse},
};
use futures::{Stream, StreamExt};
use uuid::Uuid;

use crate::progress;

/// Stream the synthetic progress schedule for a document as SSE
/// `update` events carrying `{stage, progress}` payloads.
///
/// The identifier is not checked against storage and the schedule does
/// not track the document's actual state; every stream for every id
/// walks the same fixed sequence. Client disconnect simply drops the
/// stream.
pub async fn stream_progress(
    Path(file_id): Path<Uuid>,
) -> Sse<impl Stream<Item = std::result::Result<Event, axum::Error>>> {
    tracing::debug!(%file_id, "Progress stream opened");

    let events = progress::paced(progress::TICK_INTERVAL)
        .map(|point| Event::default().event("update").json_data(&point));

    Sse::new(events)
}

//! Synthetic upload-progress schedule
//!
//! The progress stream walks a fixed three-stage schedule, stepping by
//! ten percentage points within each stage (both endpoints included)
//! and pausing between emissions. The schedule is deliberately
//! independent of the actual pipeline state for the document: extraction
//! completes synchronously during upload, and this stream is the
//! client-facing pacing affordance layered on top. Every call produces
//! the same sequence.

use futures::Stream;
use serde::Serialize;
use std::time::Duration;

/// Pause between consecutive progress emissions
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Step size within a stage, in percentage points
const STEP_PERCENT: i32 = 10;

/// The fixed stage schedule: (label, start percent, end percent)
const STAGES: [(&str, i32, i32); 3] = [
    ("Extracting text", 0, 30),
    ("Preparing for analysis", 30, 70),
    ("Ready for AI analysis", 70, 100),
];

/// One point of the progress schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressPoint {
    pub stage: &'static str,
    pub progress: i32,
}

/// The full schedule, in emission order.
pub fn schedule() -> Vec<ProgressPoint> {
    let mut points = Vec::new();
    for (stage, start, end) in STAGES {
        let mut progress = start;
        while progress <= end {
            points.push(ProgressPoint { stage, progress });
            progress += STEP_PERCENT;
        }
    }
    points
}

/// Stream the schedule, pausing `interval` between consecutive points.
///
/// The first point is emitted immediately. Dropping the stream (client
/// disconnect) stops production; there is nothing else to clean up.
pub fn paced(interval: Duration) -> impl Stream<Item = ProgressPoint> {
    futures::stream::unfold(
        (schedule().into_iter(), interval, true),
        |(mut points, interval, first)| async move {
            let point = points.next()?;
            if !first {
                tokio::time::sleep(interval).await;
            }
            Some((point, (points, interval, false)))
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_schedule_has_thirteen_points() {
        assert_eq!(schedule().len(), 13);
    }

    #[test]
    fn test_schedule_percent_sequence() {
        let percents: Vec<i32> = schedule().iter().map(|p| p.progress).collect();
        assert_eq!(
            percents,
            vec![0, 10, 20, 30, 30, 40, 50, 60, 70, 70, 80, 90, 100]
        );
    }

    #[test]
    fn test_schedule_stage_labels() {
        let points = schedule();
        assert!(points[..4].iter().all(|p| p.stage == "Extracting text"));
        assert!(points[4..9]
            .iter()
            .all(|p| p.stage == "Preparing for analysis"));
        assert!(points[9..]
            .iter()
            .all(|p| p.stage == "Ready for AI analysis"));
    }

    #[test]
    fn test_schedule_never_decreases() {
        for pair in schedule().windows(2) {
            assert!(pair[1].progress >= pair[0].progress);
        }
    }

    #[tokio::test]
    async fn test_paced_stream_emits_full_schedule() {
        let points: Vec<ProgressPoint> = paced(Duration::ZERO).collect().await;
        assert_eq!(points, schedule());
    }
}

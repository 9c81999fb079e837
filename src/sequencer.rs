//! Timed delivery of bot responses.
//!
//! Every command produces an ordered list of [`Step`]s: a text to send and
//! the delay to wait before sending it. Keeping the delays as data lets the
//! quiz flow be built and checked without real time passing; [`play`] is the
//! only place that actually waits.
//!
//! # Example
//!
//! ```text
//! Q1 ──10s──▶ A1 ──3s──▶ Q2 ──10s──▶ A2
//! ```

use std::time::Duration;

use log::debug;
use tokio::time::sleep;

/// Capability to send a text message to a room.
///
/// Implemented by the Matrix client; tests record the sends instead.
pub trait ChannelSink {
    /// Sends a Markdown text message to `room_id`.
    async fn send_text(&self, room_id: &str, text: &str);
}

/// A message to send once `delay` has elapsed since the previous step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Wait before sending
    pub delay: Duration,
    /// Markdown text to send
    pub text: String,
}

impl Step {
    /// A step sent without waiting.
    pub fn now(text: impl Into<String>) -> Self {
        Step {
            delay: Duration::ZERO,
            text: text.into(),
        }
    }

    /// A step sent after `delay`.
    pub fn after(delay: Duration, text: impl Into<String>) -> Self {
        Step {
            delay,
            text: text.into(),
        }
    }
}

/// Delays of a quiz sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Wait between a question and its answer
    pub answer_wait: Duration,
    /// Wait between an answer and the next question
    pub next_question_wait: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Timings {
            answer_wait: Duration::from_secs(10),
            next_question_wait: Duration::from_secs(3),
        }
    }
}

/// Sends `steps` to `room_id` in order, sleeping before each delayed step.
///
/// Sleeping is asynchronous so the Matrix sync loop keeps running while a
/// quiz is in progress.
pub async fn play<S: ChannelSink>(sink: &S, room_id: &str, steps: Vec<Step>) {
    debug!("playing {} steps in {}", steps.len(), room_id);

    for step in steps {
        if !step.delay.is_zero() {
            sleep(step.delay).await;
        }
        sink.send_text(room_id, &step.text).await;
    }
}

#[cfg(test)]
pub mod tests {
    use std::sync::Mutex;

    use tokio::time::Instant;

    use super::*;

    /// Sink recording every send with the time it happened.
    #[derive(Default)]
    pub struct RecordingSink {
        pub sent: Mutex<Vec<(Instant, String, String)>>,
    }

    impl RecordingSink {
        pub fn texts(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|(_, _, text)| text.clone())
                .collect()
        }
    }

    impl ChannelSink for RecordingSink {
        async fn send_text(&self, room_id: &str, text: &str) {
            self.sent
                .lock()
                .unwrap()
                .push((Instant::now(), room_id.to_string(), text.to_string()));
        }
    }

    #[test]
    fn test_default_timings() {
        let timings = Timings::default();
        assert_eq!(timings.answer_wait, Duration::from_secs(10));
        assert_eq!(timings.next_question_wait, Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_waits_between_steps() {
        let sink = RecordingSink::default();
        let start = Instant::now();
        let steps = vec![
            Step::now("Q1"),
            Step::after(Duration::from_secs(10), "A1"),
            Step::after(Duration::from_secs(3), "Q2"),
            Step::after(Duration::from_secs(10), "A2"),
        ];

        play(&sink, "!room:example.com", steps).await;

        let sent = sink.sent.lock().unwrap();
        let offsets: Vec<u64> = sent
            .iter()
            .map(|(at, _, _)| (*at - start).as_secs())
            .collect();
        assert_eq!(offsets, vec![0, 10, 13, 23]);
        assert!(sent.iter().all(|(_, room, _)| room == "!room:example.com"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_keeps_order() {
        let sink = RecordingSink::default();

        play(
            &sink,
            "!room:example.com",
            vec![Step::now("first"), Step::now("second")],
        )
        .await;

        assert_eq!(sink.texts(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_play_nothing() {
        let sink = RecordingSink::default();

        play(&sink, "!room:example.com", vec![]).await;

        assert!(sink.texts().is_empty());
    }
}

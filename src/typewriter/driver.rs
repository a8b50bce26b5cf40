//! Timer-driven scheduling of typewriter steps.
//!
//! One tokio task owns the engine and runs a loop of step, display, sleep.
//! Each step schedules exactly one follow-up, so steps never overlap. The loop
//! runs until the [`TypewriterHandle`] is stopped or dropped.

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::{Step, Typewriter};

/// Display handle that accepts "set displayed text to S".
pub trait TextSink: Send {
    fn set_text(&mut self, text: &str);

    /// Receive a whole step. Sinks that only display text keep the default.
    fn apply_step(&mut self, step: &Step) {
        self.set_text(&step.text);
    }
}

impl<F> TextSink for F
where
    F: FnMut(&str) + Send,
{
    fn set_text(&mut self, text: &str) {
        self(text)
    }
}

/// Sink forwarding every displayed text into an event channel.
///
/// A closed receiver is not an error: the page went away and the next stop
/// signal will end the loop.
pub struct ChannelSink<T> {
    tx: mpsc::UnboundedSender<T>,
    wrap: fn(String) -> T,
}

impl<T: Send> ChannelSink<T> {
    pub fn new(tx: mpsc::UnboundedSender<T>, wrap: fn(String) -> T) -> Self {
        Self { tx, wrap }
    }
}

impl<T: Send> TextSink for ChannelSink<T> {
    fn set_text(&mut self, text: &str) {
        let _ = self.tx.send((self.wrap)(text.to_string()));
    }
}

/// Control handle for a running typewriter task.
///
/// Dropping the handle closes the stop channel, which also ends the loop.
pub struct TypewriterHandle {
    stop_tx: watch::Sender<bool>,
    task: JoinHandle<Typewriter>,
}

impl TypewriterHandle {
    /// Ask the loop to stop at its next wait point.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    /// True once the loop has exited.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Stop the loop and return the engine with its final state.
    pub async fn stop_and_join(self) -> Result<Typewriter, tokio::task::JoinError> {
        self.stop();
        self.task.await
    }
}

/// Start the typing loop after `start_delay`.
///
/// The initial delay belongs to the caller (e.g. a splash sequence); the
/// engine only starts stepping once it elapses.
pub fn spawn<S>(engine: Typewriter, sink: S, start_delay: Duration) -> TypewriterHandle
where
    S: TextSink + 'static,
{
    let (stop_tx, stop_rx) = watch::channel(false);
    let task = tokio::spawn(run_loop(engine, sink, start_delay, stop_rx));
    TypewriterHandle { stop_tx, task }
}

async fn run_loop<S: TextSink>(
    mut engine: Typewriter,
    mut sink: S,
    start_delay: Duration,
    mut stop_rx: watch::Receiver<bool>,
) -> Typewriter {
    tracing::debug!(
        phrases = engine.phrases().len(),
        start_delay_ms = u64::try_from(start_delay.as_millis()).unwrap_or(u64::MAX),
        "typewriter scheduled"
    );
    if !wait_or_stop(start_delay, &mut stop_rx).await {
        tracing::debug!("typewriter stopped before first step");
        return engine;
    }

    loop {
        let step = engine.step();
        sink.apply_step(&step);
        if !wait_or_stop(step.delay, &mut stop_rx).await {
            break;
        }
    }

    tracing::debug!(state = ?engine.state(), "typewriter stopped");
    engine
}

/// Sleep for `delay`; return false if a stop arrives (or the handle is gone) first.
async fn wait_or_stop(delay: Duration, stop_rx: &mut watch::Receiver<bool>) -> bool {
    if *stop_rx.borrow() {
        return false;
    }
    tokio::select! {
        _ = tokio::time::sleep(delay) => true,
        _ = stop_rx.changed() => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::typewriter::{Boundary, TypewriterTiming};
    use std::sync::{Arc, Mutex};
    use tokio::time::Instant;

    type Log = Arc<Mutex<Vec<(u64, String)>>>;

    fn recording_sink(start: Instant, log: Log) -> impl TextSink + 'static {
        move |text: &str| {
            let at = start.elapsed().as_millis() as u64;
            log.lock().expect("log lock").push((at, text.to_string()));
        }
    }

    fn timing() -> TypewriterTiming {
        TypewriterTiming {
            type_speed: Duration::from_millis(1),
            delete_speed: Duration::from_millis(2),
            pause_duration: Duration::from_millis(5),
            transition_delay: Duration::from_millis(3),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn steps_are_scheduled_at_their_delays() {
        let engine = Typewriter::new(["Hi", "Go"], timing()).expect("engine");
        let log: Log = Arc::default();
        let start = Instant::now();
        let handle = spawn(
            engine,
            recording_sink(start, Arc::clone(&log)),
            Duration::from_millis(10),
        );

        tokio::time::sleep(Duration::from_millis(35)).await;
        let engine = handle.stop_and_join().await.expect("join");

        let entries = log.lock().expect("log lock").clone();
        let expected: Vec<(u64, String)> = [
            (10, "H"),
            (11, "Hi"),
            (16, "H"),
            (18, ""),
            (21, "G"),
            (22, "Go"),
            (27, "G"),
            (29, ""),
            (32, "H"),
            (33, "Hi"),
        ]
        .into_iter()
        .map(|(at, text)| (at, text.to_string()))
        .collect();
        assert_eq!(entries, expected);
        assert_eq!(engine.displayed(), "Hi");
    }

    #[tokio::test(start_paused = true)]
    async fn stop_before_start_delay_never_steps() {
        let engine = Typewriter::new(["abc"], timing()).expect("engine");
        let log: Log = Arc::default();
        let handle = spawn(
            engine,
            recording_sink(Instant::now(), Arc::clone(&log)),
            Duration::from_secs(60),
        );
        tokio::time::sleep(Duration::from_millis(5)).await;
        let engine = handle.stop_and_join().await.expect("join");
        assert!(log.lock().expect("log lock").is_empty());
        assert!(engine.is_at_start());
    }

    struct BoundarySink(Arc<Mutex<Vec<Boundary>>>);

    impl TextSink for BoundarySink {
        fn set_text(&mut self, _text: &str) {}

        fn apply_step(&mut self, step: &Step) {
            self.0.lock().expect("log lock").push(step.boundary);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn loop_hands_whole_steps_to_the_sink() {
        let engine = Typewriter::new(["ab"], timing()).expect("engine");
        let seen = Arc::new(Mutex::new(Vec::new()));
        let handle = spawn(engine, BoundarySink(Arc::clone(&seen)), Duration::ZERO);
        // Steps land at 0, 1, 6 and 8ms.
        tokio::time::sleep(Duration::from_millis(9)).await;
        handle.stop_and_join().await.expect("join");
        assert_eq!(
            *seen.lock().expect("log lock"),
            vec![
                Boundary::None,
                Boundary::FullyTyped,
                Boundary::None,
                Boundary::Cleared
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn unbounded_start_delay_waits_until_stopped() {
        let engine = Typewriter::new(["abc"], timing()).expect("engine");
        let handle = spawn(engine, |_: &str| {}, Duration::MAX);
        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert!(!handle.is_finished());
        let engine = handle.stop_and_join().await.expect("join");
        assert!(engine.is_at_start());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_ends_the_loop() {
        let engine = Typewriter::new(["abc"], timing()).expect("engine");
        let (tx, mut rx) = mpsc::unbounded_channel::<String>();
        let handle = spawn(engine, ChannelSink::new(tx, |text| text), Duration::ZERO);
        assert_eq!(rx.recv().await.as_deref(), Some("a"));
        drop(handle);
        // Sender lives inside the task; once the loop exits the channel closes.
        while rx.recv().await.is_some() {}
    }
}

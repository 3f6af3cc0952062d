//! Paced replay engine.
//!
//! A [`ReplayStream`] owns a fetched batch and a cursor into it. Each tick
//! of its timer releases the next item, in batch order, until the batch is
//! exhausted. The stream then ends and its timer is dropped in the same
//! poll that yielded the last item, so nothing periodic outlives the data.
//!
//! The timer is created on the first poll, which makes the stream lazy: a
//! batch that is never consumed never schedules anything. An empty batch
//! never creates a timer at all.

use std::pin::Pin;
use std::task::{Context, Poll, ready};
use std::time::Duration;

use futures::Stream;
use futures::stream::FusedStream;
use tokio::time::Interval;
use tracing::debug;

use crate::ticker::periodic;

enum Phase {
    /// Not polled yet.
    Idle,
    Ticking(Interval),
    Finished,
}

/// Finite stream yielding one batch item per period.
///
/// Single consumer: the stream is advanced through `&mut self`, and once
/// finished it cannot be restarted.
pub struct ReplayStream<T> {
    items: std::vec::IntoIter<T>,
    period: Duration,
    phase: Phase,
}

// Items are moved out by value and never pinned.
impl<T> Unpin for ReplayStream<T> {}

/// Replay `items` one per `period`, first item one period after the
/// stream is first polled.
pub fn replay<T>(items: Vec<T>, period: Duration) -> ReplayStream<T> {
    let phase = if items.is_empty() {
        Phase::Finished
    } else {
        Phase::Idle
    };
    ReplayStream {
        items: items.into_iter(),
        period,
        phase,
    }
}

impl<T> ReplayStream<T> {
    /// Items not yet emitted.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, Phase::Finished)
    }

    /// Whether a timer is currently scheduled.
    pub fn has_timer(&self) -> bool {
        matches!(self.phase, Phase::Ticking(_))
    }
}

impl<T> Stream for ReplayStream<T> {
    type Item = T;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<T>> {
        let this = &mut *self;
        if matches!(this.phase, Phase::Idle) {
            this.phase = Phase::Ticking(periodic(this.period));
        }
        let Phase::Ticking(ticker) = &mut this.phase else {
            return Poll::Ready(None);
        };

        ready!(ticker.poll_tick(cx));
        let item = this.items.next();
        if this.items.len() == 0 {
            this.phase = Phase::Finished;
            debug!(period_ms = this.period.as_millis() as u64, "replay exhausted");
        }
        Poll::Ready(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.items.len();
        (n, Some(n))
    }
}

impl<T> FusedStream for ReplayStream<T> {
    fn is_terminated(&self) -> bool {
        self.is_finished()
    }
}

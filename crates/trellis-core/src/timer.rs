//! Timer system for Trellis.
//!
//! Provides one-shot and repeating timers. Timers do not run on their own
//! thread: the run loop asks [`TimerManager::time_until_next`] how long it
//! may block on the platform, then drains [`TimerManager::process_expired`]
//! into ordinary [`Event::TimerFired`] events that go through the same
//! dispatch path as user input.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::error::{Result, TimerError};
use crate::event::Event;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// The type of timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Fires once after the specified duration.
    OneShot,
    /// Fires repeatedly at the specified interval.
    Repeating,
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should next fire.
    next_fire: Instant,
    /// The interval for repeating timers.
    interval: Duration,
    /// The kind of timer.
    kind: TimerKind,
    /// Whether this timer is active.
    active: bool,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages all timers for an application.
pub struct TimerManager {
    /// All registered timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires (min-heap by fire time).
    queue: BinaryHeap<TimerQueueEntry>,
}

impl TimerManager {
    /// Create a new timer manager.
    pub fn new() -> Self {
        Self {
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// Start a one-shot timer that fires after the specified duration.
    ///
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_one_shot(&mut self, duration: Duration) -> TimerId {
        self.start(duration, TimerKind::OneShot)
    }

    /// Start a repeating timer that fires at the specified interval.
    ///
    /// The first fire occurs after `interval` duration.
    /// Returns the timer ID that can be used to cancel the timer.
    pub fn start_repeating(&mut self, interval: Duration) -> TimerId {
        self.start(interval, TimerKind::Repeating)
    }

    fn start(&mut self, interval: Duration, kind: TimerKind) -> TimerId {
        let next_fire = Instant::now() + interval;

        let id = self.timers.insert(TimerData {
            next_fire,
            interval,
            kind,
            active: true,
        });
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });

        id
    }

    /// Stop and remove a timer.
    ///
    /// Returns `Ok(())` if the timer was found and removed, or an error if
    /// the ID is stale (already fired one-shot, or already stopped).
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if self.timers.remove(id).is_some() {
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.get(id).is_some_and(|t| t.active)
    }

    /// Get the duration until the next timer fires, if any.
    ///
    /// Returns `None` if there are no active timers; the run loop may then
    /// block indefinitely on the platform.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        // Drop stale entries (stopped timers) from the front of the queue.
        while let Some(entry) = self.queue.peek() {
            if !self.timers.get(entry.id).is_some_and(|t| t.active) {
                self.queue.pop();
            } else {
                break;
            }
        }

        self.queue.peek().map(|entry| {
            entry.fire_time.saturating_duration_since(Instant::now())
        })
    }

    /// Process all timers that should fire now.
    ///
    /// Returns the list of timer events to dispatch, in fire-time order.
    #[tracing::instrument(skip(self), target = "trellis_core::timer", level = "trace")]
    pub fn process_expired(&mut self) -> Vec<Event> {
        let now = Instant::now();
        let mut events = Vec::new();

        while let Some(entry) = self.queue.peek() {
            if entry.fire_time > now {
                break;
            }

            let entry = self.queue.pop().expect("peeked entry exists");
            let id = entry.id;

            // A stale queue entry: the timer was stopped, or this entry was
            // superseded by a repeat reschedule.
            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };
            if !timer.active || timer.next_fire != entry.fire_time {
                continue;
            }

            tracing::trace!(target: "trellis_core::timer", ?id, "timer fired");
            events.push(Event::TimerFired { id });

            match timer.kind {
                TimerKind::OneShot => {
                    self.timers.remove(id);
                }
                TimerKind::Repeating => {
                    timer.next_fire = now + timer.interval;
                    self.queue.push(TimerQueueEntry {
                        id,
                        fire_time: timer.next_fire,
                    });
                }
            }
        }

        events
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.iter().filter(|(_, t)| t.active).count()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_fires_once() {
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(Duration::ZERO);

        let events = timers.process_expired();
        assert_eq!(events, vec![Event::TimerFired { id }]);
        assert!(!timers.is_active(id));

        // Already consumed; nothing more to fire.
        assert!(timers.process_expired().is_empty());
    }

    #[test]
    fn test_repeating_reschedules() {
        let mut timers = TimerManager::new();
        let id = timers.start_repeating(Duration::ZERO);

        let events = timers.process_expired();
        assert_eq!(events, vec![Event::TimerFired { id }]);
        assert!(timers.is_active(id));

        // Still scheduled for another round.
        let events = timers.process_expired();
        assert_eq!(events, vec![Event::TimerFired { id }]);
    }

    #[test]
    fn test_stop_invalid_id() {
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(Duration::ZERO);
        assert!(timers.stop(id).is_ok());
        assert!(timers.stop(id).is_err());
    }

    #[test]
    fn test_stopped_timer_does_not_fire() {
        let mut timers = TimerManager::new();
        let id = timers.start_one_shot(Duration::ZERO);
        timers.stop(id).unwrap();

        assert!(timers.process_expired().is_empty());
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_time_until_next() {
        let mut timers = TimerManager::new();
        assert_eq!(timers.time_until_next(), None);

        let id = timers.start_one_shot(Duration::from_secs(60));
        let remaining = timers.time_until_next().unwrap();
        assert!(remaining <= Duration::from_secs(60));
        assert!(remaining > Duration::from_secs(59));

        timers.stop(id).unwrap();
        assert_eq!(timers.time_until_next(), None);
    }

    #[test]
    fn test_fire_order_is_deadline_order() {
        let mut timers = TimerManager::new();
        let late = timers.start_one_shot(Duration::from_millis(5));
        let early = timers.start_one_shot(Duration::ZERO);

        std::thread::sleep(Duration::from_millis(10));
        let events = timers.process_expired();
        assert_eq!(
            events,
            vec![Event::TimerFired { id: early }, Event::TimerFired { id: late }]
        );
    }
}

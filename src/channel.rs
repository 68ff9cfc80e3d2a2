//! Bounded sensor event channel for `no_std` environments.
//!
//! Carries [`SensorEvent`]s from the device callback into the engine,
//! built on `critical-section` and `heapless::Deque` so the sender side
//! may run in interrupt context. The engine drains the queue at the top
//! of every tick; if the queue is full the sample is dropped (the next
//! sample supersedes it anyway).

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::event::SensorEvent;

/// Error returned when trying to send to a full channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventDropped(pub SensorEvent);

/// A bounded, thread-safe sensor event queue.
pub struct EventChannel<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<SensorEvent, SIZE>>>,
}

impl<const SIZE: usize> EventChannel<SIZE> {
    /// Create a new empty channel.
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this channel.
    ///
    /// Multiple senders can coexist; they share access to the same queue.
    pub const fn sender(&self) -> EventSender<'_, SIZE> {
        EventSender { channel: self }
    }

    /// Get a receiver handle for this channel.
    pub const fn receiver(&self) -> EventReceiver<'_, SIZE> {
        EventReceiver { channel: self }
    }

    /// Try to enqueue an event.
    ///
    /// Returns `Err(EventDropped(event))` if the channel is full.
    pub fn try_send(&self, event: SensorEvent) -> Result<(), EventDropped> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(event).map_err(EventDropped)
        })
    }

    /// Dequeue the oldest pending event, if any.
    pub fn try_receive(&self) -> Option<SensorEvent> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front()
        })
    }
}

impl<const SIZE: usize> Default for EventChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// A sender handle for an [`EventChannel`].
///
/// This is a lightweight reference that can be cloned and passed around,
/// typically into the device callback.
#[derive(Clone, Copy)]
pub struct EventSender<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventSender<'_, SIZE> {
    /// Try to enqueue an event.
    ///
    /// Returns `Err(EventDropped(event))` if the channel is full.
    pub fn try_send(&self, event: SensorEvent) -> Result<(), EventDropped> {
        self.channel.try_send(event)
    }
}

/// A receiver handle for an [`EventChannel`].
#[derive(Clone, Copy)]
pub struct EventReceiver<'a, const SIZE: usize> {
    channel: &'a EventChannel<SIZE>,
}

impl<const SIZE: usize> EventReceiver<'_, SIZE> {
    /// Dequeue the oldest pending event, if any.
    pub fn try_receive(&self) -> Option<SensorEvent> {
        self.channel.try_receive()
    }
}

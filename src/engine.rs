use heapless::Vec;

use crate::channel::EventReceiver;
use crate::color::Rgb;
use crate::cursor::Cursor;
use crate::event::SensorEvent;
use crate::filter::TiltFilter;
use crate::mapper::SlotMapper;
use crate::renderer::{LedUpdate, TrailRenderer};
use crate::trail::{Trail, TrailTracker};

/// Configuration for the trail engine
///
/// All values are fixed for the session; there is no runtime mutation.
#[derive(Debug, Clone)]
pub struct TrailEngineConfig<const DEPTH: usize> {
    /// Exponential smoothing factor for tilt samples, in `(0, 1)`
    pub smoothing: f32,
    /// Tilt magnitude treated as neutral
    pub deadzone: f32,
    /// Scale applied to tilt beyond the deadzone
    pub sensitivity: f32,
    /// Head color; trail segments are dimmed copies of it
    pub base_color: Rgb,
    /// Brightness weights by trail age, brightest first
    pub decay_levels: [u8; DEPTH],
}

impl Default for TrailEngineConfig<4> {
    fn default() -> Self {
        Self {
            smoothing: 0.4,
            deadzone: 1.0,
            sensitivity: 0.01,
            base_color: Rgb { r: 0, g: 25, b: 25 },
            decay_levels: [12, 8, 5, 3],
        }
    }
}

/// Trail engine - the main orchestrator
///
/// Turns the filtered tilt signal into per-LED updates, one pipeline
/// pass per tick: mapper, cursor step, trail tracking, render + diff.
/// State is owned exclusively by the caller's loop thread; events reach
/// the engine through the channel drained at the top of every tick.
pub struct TrailEngine<'a, const LEDS: usize, const DEPTH: usize, const EVENT_CHANNEL_SIZE: usize>
{
    // External dependencies
    events: EventReceiver<'a, EVENT_CHANNEL_SIZE>,

    // Internal state
    filter: TiltFilter,
    cursor: Cursor,
    tracker: TrailTracker<DEPTH>,

    // Internal dependencies
    mapper: SlotMapper,
    renderer: TrailRenderer<LEDS, DEPTH>,
}

impl<'a, const LEDS: usize, const DEPTH: usize, const EVENT_CHANNEL_SIZE: usize>
    TrailEngine<'a, LEDS, DEPTH, EVENT_CHANNEL_SIZE>
{
    /// Create a new engine reading events from `events`.
    ///
    /// The cursor starts at the center of the strip with an empty
    /// trail; the first tick seeds the trail with the center slot.
    pub fn new(events: EventReceiver<'a, EVENT_CHANNEL_SIZE>, config: &TrailEngineConfig<DEPTH>) -> Self {
        let slot_count = LEDS as u8;
        Self {
            events,
            filter: TiltFilter::new(config.smoothing),
            cursor: Cursor::centered(slot_count),
            tracker: TrailTracker::new(),
            mapper: SlotMapper::new(config.deadzone, config.sensitivity, slot_count),
            renderer: TrailRenderer::new(config.base_color, config.decay_levels),
        }
    }

    /// Feed one sensor event directly.
    ///
    /// Tilt samples are folded into the filter; every other event kind
    /// is silently discarded. Hosts whose device delivers callbacks
    /// synchronously can call this instead of going through the channel.
    pub fn handle_event(&mut self, event: SensorEvent) {
        if let SensorEvent::Tilt(sample) = event {
            self.filter.integrate(sample);
        }
    }

    /// Run one animation tick.
    ///
    /// Drains pending events, then runs the pipeline to completion
    /// against the filter state as of entry. Returns the LED writes
    /// needed to bring the strip up to date; an empty list means the
    /// frame is unchanged.
    pub fn tick(&mut self) -> Vec<LedUpdate, LEDS> {
        self.process_events();

        let target = self.mapper.map(self.filter.x());
        let current = self.cursor.step_toward(target);
        let trail = self.tracker.track(current, target, LEDS as u8 - 1);

        self.renderer.render(trail)
    }

    /// Force every slot to black, regardless of diff state.
    pub fn reset(&mut self) -> Vec<LedUpdate, LEDS> {
        self.renderer.reset()
    }

    /// Cursor position after the last tick.
    pub const fn current_slot(&self) -> u8 {
        self.cursor.slot()
    }

    /// The trail as of the last tick.
    pub const fn trail(&self) -> &Trail<DEPTH> {
        self.tracker.trail()
    }

    /// Drain pending events from the channel (non-blocking)
    fn process_events(&mut self) {
        while let Some(event) = self.events.try_receive() {
            self.handle_event(event);
        }
    }
}

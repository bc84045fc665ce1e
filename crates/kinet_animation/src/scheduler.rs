//! Animation scheduler
//!
//! A single-threaded tick queue that owns top-level animations and timelines.
//! Entities register once and are ticked by handle with monotonically
//! non-decreasing frame timestamps supplied by the host. When no host frame
//! callback exists, [`AnimationScheduler::run_until_idle`] drives the queue
//! at a fixed interval on the calling thread.
//!
//! The scheduler also owns the [`EasingRegistry`] used to resolve easing
//! names at clock construction time.

use slotmap::{new_key_type, SlotMap};
use std::time::{Duration, Instant};

use crate::animation::{Animation, AnimationConfig};
use crate::easing::EasingRegistry;
use crate::signal::CompletionSignal;
use crate::target::{PropertyAccess, ResolveTargets};
use crate::timeline::Timeline;

new_key_type! {
    /// Handle to a registered animation
    pub struct AnimationId;
    /// Handle to a registered timeline
    pub struct TimelineId;
}

/// The scheduler that ticks all registered animations and timelines
pub struct AnimationScheduler {
    animations: SlotMap<AnimationId, Animation>,
    timelines: SlotMap<TimelineId, Timeline>,
    easing: EasingRegistry,
    target_fps: u32,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            animations: SlotMap::with_key(),
            timelines: SlotMap::with_key(),
            easing: EasingRegistry::new(),
            target_fps: 120,
        }
    }

    /// Frame rate used by the fallback driver
    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps.max(1);
    }

    pub fn easing(&self) -> &EasingRegistry {
        &self.easing
    }

    /// Mutable access to the easing registry, e.g. to register custom curves
    pub fn easing_mut(&mut self) -> &mut EasingRegistry {
        &mut self.easing
    }

    // =========================================================================
    // Animations
    // =========================================================================

    /// Build an animation from a config and register it
    ///
    /// With `autoplay` set (the default) the clock is scheduled immediately
    /// and will advance on the next tick.
    pub fn animate<W>(&mut self, world: &W, config: AnimationConfig) -> AnimationId
    where
        W: ResolveTargets + PropertyAccess,
    {
        let animation = config.build(&self.easing, world);
        self.animations.insert(animation)
    }

    /// Register an already-built animation
    pub fn add_animation(&mut self, animation: Animation) -> AnimationId {
        self.animations.insert(animation)
    }

    pub fn remove_animation(&mut self, id: AnimationId) -> Option<Animation> {
        self.animations.remove(id)
    }

    /// Apply a function to an animation if it exists
    pub fn with_animation<F, R>(&self, id: AnimationId, f: F) -> Option<R>
    where
        F: FnOnce(&Animation) -> R,
    {
        self.animations.get(id).map(f)
    }

    /// Apply a function to modify an animation if it exists
    pub fn with_animation_mut<F, R>(&mut self, id: AnimationId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Animation) -> R,
    {
        self.animations.get_mut(id).map(f)
    }

    /// Completion signal of the animation's current generation
    pub fn signal(&self, id: AnimationId) -> Option<CompletionSignal> {
        self.animations.get(id).map(Animation::signal)
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }

    // =========================================================================
    // Timelines
    // =========================================================================

    /// Register an empty timeline
    pub fn timeline(&mut self) -> TimelineId {
        self.timelines.insert(Timeline::new())
    }

    /// Register an already-built timeline
    pub fn add_timeline(&mut self, timeline: Timeline) -> TimelineId {
        self.timelines.insert(timeline)
    }

    pub fn remove_timeline(&mut self, id: TimelineId) -> Option<Timeline> {
        self.timelines.remove(id)
    }

    /// Add a member animation to a timeline at an offset relative to the
    /// timeline's current time
    ///
    /// Returns false if the timeline does not exist.
    pub fn timeline_add<W>(
        &mut self,
        id: TimelineId,
        config: AnimationConfig,
        offset_ms: f64,
        world: &W,
    ) -> bool
    where
        W: ResolveTargets + PropertyAccess,
    {
        let registry = &self.easing;
        match self.timelines.get_mut(id) {
            Some(timeline) => {
                timeline.add(config, offset_ms, registry, world);
                true
            }
            None => false,
        }
    }

    /// Apply a function to a timeline if it exists
    pub fn with_timeline<F, R>(&self, id: TimelineId, f: F) -> Option<R>
    where
        F: FnOnce(&Timeline) -> R,
    {
        self.timelines.get(id).map(f)
    }

    /// Apply a function to modify a timeline if it exists
    pub fn with_timeline_mut<F, R>(&mut self, id: TimelineId, f: F) -> Option<R>
    where
        F: FnOnce(&mut Timeline) -> R,
    {
        self.timelines.get_mut(id).map(f)
    }

    pub fn timeline_count(&self) -> usize {
        self.timelines.len()
    }

    // =========================================================================
    // Ticking
    // =========================================================================

    /// Tick every registered entity once against a frame timestamp
    ///
    /// Returns true if any animations or timelines are still active.
    /// Timestamps must be monotonically non-decreasing across calls.
    ///
    /// Entities are not removed on completion; removal is explicit so a
    /// finished clock can be restarted through its handle.
    pub fn tick(&mut self, timestamp_ms: f64, access: &mut dyn PropertyAccess) -> bool {
        for (_, animation) in self.animations.iter_mut() {
            animation.tick(timestamp_ms, access);
        }
        for (_, timeline) in self.timelines.iter_mut() {
            timeline.tick(timestamp_ms, access);
        }
        self.has_active_animations()
    }

    /// Whether any registered entity is still playing
    pub fn has_active_animations(&self) -> bool {
        self.animations.values().any(Animation::is_playing)
            || self.timelines.values().any(Timeline::is_playing)
    }

    /// Fixed-interval fallback driver
    ///
    /// Ticks on the calling thread at the target frame rate until nothing is
    /// active. An animation with an infinite repeat keeps this running until
    /// something external pauses it, per the scheduling model.
    pub fn run_until_idle(&mut self, access: &mut dyn PropertyAccess) {
        let frame = Duration::from_micros(1_000_000 / u64::from(self.target_fps));
        let origin = Instant::now();
        loop {
            let now_ms = origin.elapsed().as_secs_f64() * 1000.0;
            if !self.tick(now_ms, access) {
                break;
            }
            std::thread::sleep(frame);
        }
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

//! Timeline orchestration for multiple animations
//!
//! A timeline is purely a scheduler: it owns member clocks, start-gates each
//! one as its own elapsed time crosses the member's offset, and aggregates
//! completion from the maximum member end time. It never interpolates values
//! itself - per-property interpolation lives in exactly one place, the
//! [`Animation`] tick.

use crate::animation::{Animation, AnimationConfig};
use crate::easing::EasingRegistry;
use crate::target::{PropertyAccess, ResolveTargets};
use crate::value;

struct TimelineMember {
    /// Offset in milliseconds from timeline start
    offset_ms: f64,
    animation: Animation,
}

/// An ordered collection of clocks attached at offsets into a shared
/// timeline clock
#[derive(Default)]
pub struct Timeline {
    /// Members in ascending offset order
    members: Vec<TimelineMember>,
    start_time: Option<f64>,
    current_time: f64,
    /// Max over members of offset + duration; never recomputed downward
    total_duration: f64,
    paused: bool,
    finished: bool,
    scheduled: bool,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an animation to the timeline at an offset
    ///
    /// The offset is relative to the timeline's current time at the moment of
    /// this call, which is what makes overlapping and staggered composition
    /// possible. The member's autoplay is forced off; its lifecycle is fully
    /// delegated to timeline ticks.
    pub fn add<W>(
        &mut self,
        mut config: AnimationConfig,
        offset_ms: f64,
        registry: &EasingRegistry,
        world: &W,
    ) -> &mut Self
    where
        W: ResolveTargets + PropertyAccess,
    {
        config.options.autoplay = false;
        let offset = self.current_time + offset_ms;
        let animation = config.build(registry, world);

        self.total_duration = self
            .total_duration
            .max(offset + animation.duration_ms().max(0.0));

        // Stable insertion keeps members in ascending offset order
        let at = self.members.partition_point(|m| m.offset_ms <= offset);
        self.members.insert(
            at,
            TimelineMember {
                offset_ms: offset,
                animation,
            },
        );
        self
    }

    /// Play the timeline, preserving elapsed progress across pause/resume
    ///
    /// On a finished timeline this is equivalent to [`Timeline::restart`].
    pub fn play(&mut self) -> &mut Self {
        if self.finished {
            return self.restart();
        }
        self.paused = false;
        // Re-baseline on the next tick so current_time carries over
        self.start_time = None;
        self.scheduled = true;
        self
    }

    /// Pause the timeline and every member that is neither finished nor
    /// already paused
    pub fn pause(&mut self) -> &mut Self {
        self.paused = true;
        self.scheduled = false;
        for member in &mut self.members {
            if !member.animation.is_finished() && !member.animation.is_paused() {
                member.animation.pause();
            }
        }
        self
    }

    /// Reset to time zero, restart every member unconditionally, and play
    pub fn restart(&mut self) -> &mut Self {
        self.current_time = 0.0;
        self.finished = false;
        self.paused = false;
        self.start_time = None;
        for member in &mut self.members {
            member.animation.restart();
        }
        self.scheduled = true;
        self
    }

    /// Seek the timeline, forwarding to every member whose window contains
    /// the requested time
    pub fn seek(&mut self, time_ms: f64, access: &mut dyn PropertyAccess) -> &mut Self {
        self.current_time = value::clamp(time_ms, 0.0, self.total_duration);
        for member in &mut self.members {
            let relative = self.current_time - member.offset_ms;
            if relative >= 0.0 && relative <= member.animation.duration_ms() {
                member.animation.seek(relative, access);
            }
        }
        self
    }

    /// Overall progress in `[0,1]`
    pub fn progress(&self) -> f64 {
        if self.total_duration > 0.0 {
            self.current_time / self.total_duration
        } else {
            0.0
        }
    }

    /// Advance against a frame timestamp
    ///
    /// Members are evaluated in ascending offset order: each one whose start
    /// offset has been crossed is transitioned to playing (once per crossing)
    /// and ticked. The timeline finishes when its clock reaches the total
    /// duration.
    pub fn tick(&mut self, timestamp: f64, access: &mut dyn PropertyAccess) {
        if self.paused || self.finished || !self.scheduled {
            return;
        }

        let start = *self.start_time.get_or_insert(timestamp - self.current_time);
        self.current_time = timestamp - start;

        let now = self.current_time;
        for member in &mut self.members {
            let relative = now - member.offset_ms;
            if relative >= 0.0 && !member.animation.is_finished() {
                if !member.animation.is_playing() {
                    member.animation.play();
                }
                member.animation.tick(timestamp, access);
            }
        }

        if self.current_time >= self.total_duration {
            self.finished = true;
            self.current_time = self.total_duration;
            self.scheduled = false;
        }
    }

    /// Members in ascending offset order, as (offset, clock) pairs
    pub fn members(&self) -> impl Iterator<Item = (f64, &Animation)> {
        self.members.iter().map(|m| (m.offset_ms, &m.animation))
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn total_duration(&self) -> f64 {
        self.total_duration
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_playing(&self) -> bool {
        self.scheduled && !self.paused && !self.finished
    }
}

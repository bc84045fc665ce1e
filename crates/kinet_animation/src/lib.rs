//! Kinet Animation Engine
//!
//! Property interpolation and animation scheduling: eased per-property
//! tweens, play/pause/seek/restart/reverse control, loop and direction
//! policies, offset-based timelines, and completion signals.
//!
//! # Features
//!
//! - **Property Tweens**: From/to snapshots captured at construction, eased
//!   interpolation applied through a narrow [`PropertyAccess`] trait
//! - **Easing Registry**: Built-in curve catalog plus runtime-registered
//!   custom functions, with silent fallback on unknown names
//! - **Playback Control**: play, pause, seek, restart, reverse
//! - **Loops and Direction**: finite/infinite repeats, alternate parity
//! - **Timelines**: Orchestrate multiple animations with millisecond offsets
//! - **Completion Signals**: One-shot, cloneable handles fulfilled when an
//!   animation generation finishes
//! - **Scheduler**: Single-threaded tick queue driven by host frame
//!   timestamps, with a fixed-interval fallback driver

pub mod animation;
pub mod easing;
pub mod error;
pub mod scheduler;
pub mod signal;
pub mod target;
pub mod timeline;
pub mod value;

pub use animation::{
    Animation, AnimationConfig, AnimationHooks, AnimationOptions, Direction, PropertyTrack, Repeat,
};
pub use easing::{cubic_bezier, Easing, EasingFn, EasingRegistry, DEFAULT_EASING};
pub use error::{AnimationError, Result};
pub use scheduler::{AnimationId, AnimationScheduler, TimelineId};
pub use signal::CompletionSignal;
pub use target::{PropertyAccess, PropertyStore, ResolveTargets, TargetId, TargetList, TargetSpec};
pub use timeline::Timeline;
pub use value::{ParsedValue, PropertyValue};

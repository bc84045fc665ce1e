//! The interpolation clock
//!
//! An [`Animation`] owns one interpolation's lifecycle: per-property from/to
//! snapshots captured at construction, current progress, play state, and the
//! loop/direction policy. It advances against frame timestamps handed to
//! [`Animation::tick`] by the scheduler; the `scheduled` flag is the analogue
//! of a pending frame registration and clearing it (via `pause`) is the only
//! cancellation primitive.

use crate::easing::{Easing, EasingFn, EasingRegistry};
use crate::error::AnimationError;
use crate::signal::CompletionSignal;
use crate::target::{PropertyAccess, ResolveTargets, TargetId, TargetList, TargetSpec};
use crate::value::{self, ParsedValue, PropertyValue};

/// Loop policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    /// Run a single pass
    #[default]
    No,
    /// Loop until externally paused or restarted
    Infinite,
    /// Run exactly this many passes in total
    Times(u32),
}

impl Repeat {
    /// Whether another pass follows after `completed` finished passes
    fn continues_after(self, completed: u32) -> bool {
        match self {
            Repeat::No => false,
            Repeat::Infinite => true,
            Repeat::Times(n) => completed < n,
        }
    }
}

/// Playback direction policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Normal,
    /// Always run the curve backward
    Reverse,
    /// Flip on odd iterations
    Alternate,
    /// Flip on even iterations
    AlternateReverse,
}

impl Direction {
    /// Whether the eased input flips for the given (pre-increment) iteration
    fn flips(self, iteration: u32) -> bool {
        match self {
            Direction::Normal => false,
            Direction::Reverse => true,
            Direction::Alternate => iteration % 2 == 1,
            Direction::AlternateReverse => iteration % 2 == 0,
        }
    }
}

/// Animation options, immutable once the clock is constructed
#[derive(Clone, Debug)]
pub struct AnimationOptions {
    /// Duration of one pass in milliseconds. Values <= 0 complete on the
    /// first advancing tick.
    pub duration_ms: f64,
    /// Delay before the first pass starts advancing
    pub delay_ms: f64,
    pub easing: Easing,
    pub repeat: Repeat,
    pub direction: Direction,
    /// Begin scheduling immediately on construction
    pub autoplay: bool,
    /// Carried for configuration parity; not consumed by the clock
    pub end_delay_ms: f64,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1000.0,
            delay_ms: 0.0,
            easing: Easing::default(),
            repeat: Repeat::No,
            direction: Direction::Normal,
            autoplay: true,
            end_delay_ms: 0.0,
        }
    }
}

/// Lifecycle hooks, delivered synchronously from within the tick
#[derive(Default)]
pub struct AnimationHooks {
    on_start: Option<Box<dyn FnMut() + Send>>,
    on_update: Option<Box<dyn FnMut(f64) + Send>>,
    on_complete: Option<Box<dyn FnMut() + Send>>,
    on_loop: Option<Box<dyn FnMut(u32) + Send>>,
}

impl AnimationHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fired when scheduling first begins, and again on restart
    pub fn on_start(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_start = Some(Box::new(f));
        self
    }

    /// Fired every advancing tick with the unadjusted progress in `[0,1]`
    pub fn on_update(mut self, f: impl FnMut(f64) + Send + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    /// Fired once when the clock reaches its terminal state
    pub fn on_complete(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    /// Fired at the end of every pass with the pre-increment iteration index
    pub fn on_loop(mut self, f: impl FnMut(u32) + Send + 'static) -> Self {
        self.on_loop = Some(Box::new(f));
        self
    }
}

/// Declarative description of one animation: targets, end values, options
/// and hooks
///
/// Built into an [`Animation`] either at the top level (via the scheduler) or
/// as a timeline member.
pub struct AnimationConfig {
    pub targets: TargetSpec,
    pub properties: Vec<(String, PropertyValue)>,
    pub options: AnimationOptions,
    pub hooks: AnimationHooks,
}

impl AnimationConfig {
    pub fn new(targets: impl Into<TargetSpec>) -> Self {
        Self {
            targets: targets.into(),
            properties: Vec::new(),
            options: AnimationOptions::default(),
            hooks: AnimationHooks::default(),
        }
    }

    /// Add an end value for a property
    pub fn property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    pub fn duration(mut self, ms: f64) -> Self {
        self.options.duration_ms = ms;
        self
    }

    pub fn delay(mut self, ms: f64) -> Self {
        self.options.delay_ms = ms;
        self
    }

    pub fn easing(mut self, easing: impl Into<Easing>) -> Self {
        self.options.easing = easing.into();
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.options.repeat = repeat;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.options.direction = direction;
        self
    }

    pub fn autoplay(mut self, autoplay: bool) -> Self {
        self.options.autoplay = autoplay;
        self
    }

    pub fn end_delay(mut self, ms: f64) -> Self {
        self.options.end_delay_ms = ms;
        self
    }

    pub fn on_start(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.hooks = self.hooks.on_start(f);
        self
    }

    pub fn on_update(mut self, f: impl FnMut(f64) + Send + 'static) -> Self {
        self.hooks = self.hooks.on_update(f);
        self
    }

    pub fn on_complete(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.hooks = self.hooks.on_complete(f);
        self
    }

    pub fn on_loop(mut self, f: impl FnMut(u32) + Send + 'static) -> Self {
        self.hooks = self.hooks.on_loop(f);
        self
    }

    /// Resolve targets and construct the clock
    pub fn build<W>(self, registry: &EasingRegistry, world: &W) -> Animation
    where
        W: ResolveTargets + PropertyAccess,
    {
        let targets = world.resolve(&self.targets);
        Animation::new(
            targets,
            &self.properties,
            self.options,
            self.hooks,
            registry,
            world,
        )
    }
}

/// One interpolation lane: a (target, property) pair with its snapshots
#[derive(Clone, Debug)]
pub struct PropertyTrack {
    pub target: TargetId,
    pub property: String,
    pub from: ParsedValue,
    pub to: ParsedValue,
}

/// A property interpolation clock
pub struct Animation {
    targets: TargetList,
    tracks: Vec<PropertyTrack>,
    options: AnimationOptions,
    hooks: AnimationHooks,
    easing: EasingFn,
    start_time: Option<f64>,
    current_time: f64,
    progress: f64,
    iteration: u32,
    finished: bool,
    paused: bool,
    reversed: bool,
    scheduled: bool,
    signal: CompletionSignal,
}

impl Animation {
    /// Construct a clock over already-resolved targets
    ///
    /// Captures the "from" snapshot from the targets' current values and the
    /// "to" snapshot from `properties`. A property whose current value cannot
    /// be read produces no track (a no-op for that property, logged). If
    /// `autoplay` is set, scheduling begins immediately.
    pub fn new(
        targets: TargetList,
        properties: &[(String, PropertyValue)],
        options: AnimationOptions,
        hooks: AnimationHooks,
        registry: &EasingRegistry,
        access: &dyn PropertyAccess,
    ) -> Self {
        if targets.is_empty() {
            tracing::warn!("{}", AnimationError::NoTargets);
        }

        let mut tracks = Vec::with_capacity(targets.len() * properties.len());
        for &target in &targets {
            for (property, end_raw) in properties {
                let Some(current) = access.read(target, property) else {
                    tracing::warn!(
                        "{}",
                        AnimationError::MissingStartValue {
                            property: property.clone(),
                        }
                    );
                    continue;
                };
                tracks.push(PropertyTrack {
                    target,
                    property: property.clone(),
                    from: value::parse(&current),
                    to: value::parse(end_raw),
                });
            }
        }

        let easing = registry.resolve(&options.easing);
        let autoplay = options.autoplay;
        let mut animation = Self {
            targets,
            tracks,
            options,
            hooks,
            easing,
            start_time: None,
            current_time: 0.0,
            progress: 0.0,
            iteration: 0,
            finished: false,
            paused: false,
            reversed: false,
            scheduled: false,
            signal: CompletionSignal::new(),
        };

        if autoplay {
            animation.play();
        }
        animation
    }

    /// Begin or resume playback
    ///
    /// On a finished clock this is equivalent to [`Animation::restart`].
    /// Resuming from pause keeps the existing time baseline; elapsed time is
    /// not reset.
    pub fn play(&mut self) -> &mut Self {
        if self.finished {
            return self.restart();
        }
        if self.paused {
            self.paused = false;
            self.scheduled = true;
        } else if !self.scheduled {
            if let Some(f) = self.hooks.on_start.as_mut() {
                f();
            }
            self.scheduled = true;
        }
        self
    }

    /// Pause playback and cancel the pending frame registration. Idempotent.
    pub fn pause(&mut self) -> &mut Self {
        self.paused = true;
        self.scheduled = false;
        self
    }

    /// Reset to the initial state and play from the beginning
    ///
    /// Installs a new completion signal; handles to the previous one are
    /// abandoned and never complete.
    pub fn restart(&mut self) -> &mut Self {
        self.finished = false;
        self.paused = false;
        self.start_time = None;
        self.current_time = 0.0;
        self.progress = 0.0;
        self.iteration = 0;
        self.scheduled = false;
        self.signal = CompletionSignal::new();

        if let Some(f) = self.hooks.on_start.as_mut() {
            f();
        }
        self.scheduled = true;
        self
    }

    /// Toggle the reversed flag and swap the from/to snapshots in place
    ///
    /// Subsequent progress runs the curve backward from the current state;
    /// elapsed time is not reset.
    pub fn reverse(&mut self) -> &mut Self {
        self.reversed = !self.reversed;
        for track in &mut self.tracks {
            std::mem::swap(&mut track.from, &mut track.to);
        }
        self
    }

    /// Jump to a time, clamped to `[0, duration]`, and apply the eased
    /// interpolation immediately
    ///
    /// Deterministic: no frame scheduling is involved, and play/pause/finished
    /// state is untouched.
    pub fn seek(&mut self, time_ms: f64, access: &mut dyn PropertyAccess) -> &mut Self {
        let duration = self.options.duration_ms;
        if duration <= 0.0 {
            self.current_time = 0.0;
            self.progress = 1.0;
        } else {
            self.current_time = value::clamp(time_ms, 0.0, duration);
            self.progress = self.current_time / duration;
        }

        let eased = (self.easing)(self.directed_progress());
        self.apply(eased, access);
        if let Some(f) = self.hooks.on_update.as_mut() {
            f(self.progress);
        }
        self
    }

    /// Advance against a frame timestamp (milliseconds, monotonic)
    ///
    /// No-op unless the clock is scheduled and neither paused nor finished.
    pub fn tick(&mut self, timestamp: f64, access: &mut dyn PropertyAccess) {
        if self.paused || self.finished || !self.scheduled {
            return;
        }

        let start = *self.start_time.get_or_insert(timestamp);
        let elapsed = timestamp - start - self.options.delay_ms;
        if elapsed < 0.0 {
            // Still inside the delay window; stay scheduled without advancing.
            return;
        }

        self.current_time = elapsed;
        let duration = self.options.duration_ms;
        self.progress = if duration <= 0.0 {
            1.0
        } else {
            value::clamp(elapsed / duration, 0.0, 1.0)
        };

        let eased = (self.easing)(self.directed_progress());
        self.apply(eased, access);

        if let Some(f) = self.hooks.on_update.as_mut() {
            f(self.progress);
        }

        if self.progress >= 1.0 {
            self.handle_complete();
        }
    }

    fn handle_complete(&mut self) {
        if let Some(f) = self.hooks.on_loop.as_mut() {
            f(self.iteration);
        }
        self.iteration += 1;

        if self.options.repeat.continues_after(self.iteration) {
            // Restart timing only; snapshots and hooks are untouched. The
            // next tick re-baselines, so the delay applies again.
            self.start_time = None;
            self.current_time = 0.0;
            self.progress = 0.0;
            return;
        }

        self.finished = true;
        self.scheduled = false;
        if let Some(f) = self.hooks.on_complete.as_mut() {
            f();
        }
        self.signal.complete();
    }

    /// Direction-adjusted progress for the current iteration parity
    fn directed_progress(&self) -> f64 {
        if self.options.direction.flips(self.iteration) {
            1.0 - self.progress
        } else {
            self.progress
        }
    }

    /// Interpolate every track and delegate the writes
    fn apply(&self, eased: f64, access: &mut dyn PropertyAccess) {
        for track in &self.tracks {
            let magnitude = value::lerp(track.from.magnitude, track.to.magnitude, eased);
            let unit = if track.to.unit.is_empty() {
                track.from.unit.as_str()
            } else {
                track.to.unit.as_str()
            };
            access.write(
                track.target,
                &track.property,
                ParsedValue::new(magnitude, unit).to_property_value(),
            );
        }
    }

    /// Handle to this generation's completion signal
    ///
    /// Resolves exactly once when the clock finishes; a `restart()` before
    /// then abandons it permanently.
    pub fn signal(&self) -> CompletionSignal {
        self.signal.clone()
    }

    pub fn targets(&self) -> &[TargetId] {
        &self.targets
    }

    pub fn tracks(&self) -> &[PropertyTrack] {
        &self.tracks
    }

    pub fn options(&self) -> &AnimationOptions {
        &self.options
    }

    pub fn duration_ms(&self) -> f64 {
        self.options.duration_ms
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    /// Unadjusted progress in `[0,1]`
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Completed passes
    pub fn iteration(&self) -> u32 {
        self.iteration
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Whether a frame registration is pending
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Scheduled and neither paused nor finished
    pub fn is_playing(&self) -> bool {
        self.scheduled && !self.paused && !self.finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::{PropertyStore, ResolveTargets, TargetSpec};
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    fn store_with_box() -> (PropertyStore, TargetId) {
        let mut store = PropertyStore::new();
        let id = store.add_target("box");
        store.set(id, "opacity", PropertyValue::Number(1.0));
        store.set(id, "x", PropertyValue::Text("0px".into()));
        (store, id)
    }

    fn linear_options(duration_ms: f64) -> AnimationOptions {
        AnimationOptions {
            duration_ms,
            easing: Easing::from("linear"),
            autoplay: false,
            ..Default::default()
        }
    }

    fn build(
        store: &PropertyStore,
        id: TargetId,
        properties: &[(String, PropertyValue)],
        options: AnimationOptions,
        hooks: AnimationHooks,
    ) -> Animation {
        let registry = EasingRegistry::new();
        let targets = store.resolve(&TargetSpec::Id(id));
        Animation::new(targets, properties, options, hooks, &registry, store)
    }

    fn opacity_to(end: f64) -> Vec<(String, PropertyValue)> {
        vec![("opacity".to_string(), PropertyValue::Number(end))]
    }

    fn read_opacity(store: &PropertyStore, id: TargetId) -> f64 {
        match store.get(id, "opacity") {
            Some(PropertyValue::Number(n)) => *n,
            other => panic!("unexpected opacity value: {other:?}"),
        }
    }

    #[test]
    fn progress_is_monotonic_and_reaches_one() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            linear_options(1000.0),
            AnimationHooks::new(),
        );
        anim.play();

        let mut prev = 0.0;
        for step in 0..=11 {
            anim.tick(step as f64 * 100.0, &mut store);
            assert!(anim.progress() >= prev);
            prev = anim.progress();
        }
        assert_eq!(anim.progress(), 1.0);
        assert!(anim.is_finished());
    }

    #[test]
    fn seek_is_idempotent() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            AnimationOptions {
                duration_ms: 1000.0,
                easing: Easing::from("easeInOutCubic"),
                autoplay: false,
                ..Default::default()
            },
            AnimationHooks::new(),
        );

        anim.seek(400.0, &mut store);
        let first = read_opacity(&store, id);
        let progress = anim.progress();
        anim.seek(400.0, &mut store);
        assert_eq!(read_opacity(&store, id), first);
        assert_eq!(anim.progress(), progress);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            linear_options(1000.0),
            AnimationHooks::new(),
        );

        anim.seek(-100.0, &mut store);
        assert_eq!(anim.current_time(), 0.0);
        anim.seek(1500.0, &mut store);
        assert_eq!(anim.current_time(), 1000.0);
    }

    #[test]
    fn seek_leaves_play_state_untouched() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            linear_options(1000.0),
            AnimationHooks::new(),
        );
        anim.pause();
        anim.seek(500.0, &mut store);
        assert!(anim.is_paused());
        assert!(!anim.is_finished());
    }

    #[test]
    fn linear_interpolation_is_exact_at_midpoint() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            linear_options(1000.0),
            AnimationHooks::new(),
        );

        anim.seek(500.0, &mut store);
        assert!((read_opacity(&store, id) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn unit_strings_interpolate_and_keep_the_unit() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &[("x".to_string(), PropertyValue::Text("100px".into()))],
            linear_options(1000.0),
            AnimationHooks::new(),
        );

        anim.seek(250.0, &mut store);
        assert_eq!(store.get(id, "x"), Some(&PropertyValue::Text("25px".into())));
    }

    #[test]
    fn reverse_direction_flips_the_eased_input() {
        let (mut store_a, id_a) = store_with_box();
        store_a.set(id_a, "opacity", PropertyValue::Number(0.0));
        let mut normal = build(
            &store_a,
            id_a,
            &opacity_to(1.0),
            AnimationOptions {
                duration_ms: 1000.0,
                easing: Easing::from("easeInQuad"),
                autoplay: false,
                ..Default::default()
            },
            AnimationHooks::new(),
        );

        let (mut store_b, id_b) = store_with_box();
        store_b.set(id_b, "opacity", PropertyValue::Number(0.0));
        let mut reversed = build(
            &store_b,
            id_b,
            &opacity_to(1.0),
            AnimationOptions {
                duration_ms: 1000.0,
                easing: Easing::from("easeInQuad"),
                direction: Direction::Reverse,
                autoplay: false,
                ..Default::default()
            },
            AnimationHooks::new(),
        );

        // reverse seek(250) must equal normal under the complementary input
        normal.seek(750.0, &mut store_a);
        reversed.seek(250.0, &mut store_b);
        assert!((read_opacity(&store_a, id_a) - read_opacity(&store_b, id_b)).abs() < 1e-12);
    }

    #[test]
    fn update_hook_reports_unadjusted_progress() {
        let (mut store, id) = store_with_box();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            AnimationOptions {
                duration_ms: 400.0,
                easing: Easing::from("linear"),
                direction: Direction::Reverse,
                autoplay: false,
                ..Default::default()
            },
            AnimationHooks::new().on_update(move |p| sink.lock().unwrap().push(p)),
        );
        anim.play();
        for step in 0..=4 {
            anim.tick(step as f64 * 100.0, &mut store);
        }

        let seen = seen.lock().unwrap();
        assert_eq!(seen.as_slice(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn loop_runs_exactly_three_passes() {
        let (mut store, id) = store_with_box();
        let loops = Arc::new(Mutex::new(Vec::new()));
        let completes = Arc::new(AtomicU32::new(0));
        let loop_sink = Arc::clone(&loops);
        let complete_sink = Arc::clone(&completes);

        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            AnimationOptions {
                duration_ms: 100.0,
                easing: Easing::from("linear"),
                repeat: Repeat::Times(3),
                autoplay: false,
                ..Default::default()
            },
            AnimationHooks::new()
                .on_loop(move |i| loop_sink.lock().unwrap().push(i))
                .on_complete(move || {
                    complete_sink.fetch_add(1, Ordering::SeqCst);
                }),
        );
        anim.play();

        let mut now = 0.0;
        while !anim.is_finished() && now < 10_000.0 {
            anim.tick(now, &mut store);
            now += 50.0;
        }

        assert!(anim.is_finished());
        assert_eq!(loops.lock().unwrap().as_slice(), &[0, 1, 2]);
        assert_eq!(completes.load(Ordering::SeqCst), 1);
        assert_eq!(anim.iteration(), 3);
        assert!(anim.signal().is_complete());
    }

    #[test]
    fn alternate_flips_on_odd_iterations_only() {
        let (mut store, id) = store_with_box();
        store.set(id, "opacity", PropertyValue::Number(0.0));
        let mut anim = build(
            &store,
            id,
            &opacity_to(1.0),
            AnimationOptions {
                duration_ms: 100.0,
                easing: Easing::from("linear"),
                repeat: Repeat::Times(2),
                direction: Direction::Alternate,
                autoplay: false,
                ..Default::default()
            },
            AnimationHooks::new(),
        );
        anim.play();

        // First pass runs forward
        anim.tick(0.0, &mut store);
        anim.tick(25.0, &mut store);
        assert!((read_opacity(&store, id) - 0.25).abs() < 1e-12);

        // Complete the first pass, re-baseline, then check the flip
        anim.tick(100.0, &mut store);
        assert_eq!(anim.iteration(), 1);
        anim.tick(101.0, &mut store);
        anim.tick(126.0, &mut store);
        assert!((read_opacity(&store, id) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn restart_abandons_the_previous_signal() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            linear_options(100.0),
            AnimationHooks::new(),
        );
        anim.play();
        anim.tick(0.0, &mut store);
        anim.tick(50.0, &mut store);

        let abandoned = anim.signal();
        anim.restart();

        let mut now = 200.0;
        while !anim.is_finished() {
            anim.tick(now, &mut store);
            now += 50.0;
        }

        assert!(!abandoned.is_complete());
        assert!(anim.signal().is_complete());
    }

    #[test]
    fn zero_duration_completes_on_the_first_tick() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            linear_options(0.0),
            AnimationHooks::new(),
        );
        anim.play();
        anim.tick(42.0, &mut store);

        assert_eq!(anim.progress(), 1.0);
        assert!(anim.is_finished());
        assert_eq!(read_opacity(&store, id), 0.0);
    }

    #[test]
    fn delay_defers_advancement() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            AnimationOptions {
                duration_ms: 1000.0,
                delay_ms: 200.0,
                easing: Easing::from("linear"),
                autoplay: false,
                ..Default::default()
            },
            AnimationHooks::new(),
        );
        anim.play();

        anim.tick(0.0, &mut store);
        anim.tick(100.0, &mut store);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(read_opacity(&store, id), 1.0);

        anim.tick(700.0, &mut store);
        assert!((anim.progress() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn missing_start_value_is_a_noop_for_that_property() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &[
                ("opacity".to_string(), PropertyValue::Number(0.0)),
                ("ghost".to_string(), PropertyValue::Number(5.0)),
            ],
            linear_options(1000.0),
            AnimationHooks::new(),
        );

        assert_eq!(anim.tracks().len(), 1);
        anim.seek(500.0, &mut store);
        assert_eq!(store.get(id, "ghost"), None);
        assert!((read_opacity(&store, id) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn reverse_swaps_snapshots_without_resetting_time() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            linear_options(1000.0),
            AnimationHooks::new(),
        );

        anim.seek(250.0, &mut store);
        anim.reverse();
        assert!(anim.is_reversed());
        assert_eq!(anim.current_time(), 250.0);

        // Snapshots swapped: the same seek now runs 0 -> 1
        anim.seek(250.0, &mut store);
        assert!((read_opacity(&store, id) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn pause_cancels_scheduling_and_play_resumes() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            linear_options(1000.0),
            AnimationHooks::new(),
        );
        anim.play();
        anim.tick(0.0, &mut store);
        anim.tick(300.0, &mut store);
        let at_pause = anim.progress();

        anim.pause();
        anim.pause();
        anim.tick(400.0, &mut store);
        assert_eq!(anim.progress(), at_pause);

        anim.play();
        anim.tick(500.0, &mut store);
        assert!(anim.progress() > at_pause);
    }

    #[test]
    fn play_on_a_finished_clock_restarts() {
        let (mut store, id) = store_with_box();
        let starts = Arc::new(AtomicU32::new(0));
        let start_sink = Arc::clone(&starts);
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            linear_options(100.0),
            AnimationHooks::new().on_start(move || {
                start_sink.fetch_add(1, Ordering::SeqCst);
            }),
        );
        anim.play();
        anim.tick(0.0, &mut store);
        anim.tick(100.0, &mut store);
        assert!(anim.is_finished());

        anim.play();
        assert!(!anim.is_finished());
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(starts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn autoplay_false_means_ticks_are_ignored_until_play() {
        let (mut store, id) = store_with_box();
        let mut anim = build(
            &store,
            id,
            &opacity_to(0.0),
            linear_options(1000.0),
            AnimationHooks::new(),
        );

        anim.tick(0.0, &mut store);
        anim.tick(500.0, &mut store);
        assert_eq!(anim.progress(), 0.0);
        assert!(!anim.is_scheduled());
    }
}

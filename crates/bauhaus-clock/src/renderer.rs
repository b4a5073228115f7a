//! The clock component: props in, scene out, on its own redraw schedule.

use std::time::Instant;

use bauhaus_engine::time::{TimeSample, TimeSource};

use crate::angles::{derive_angles, AngleSet};
use crate::config::ClockProps;
use crate::face::{assemble, ClockScene};
use crate::scheduler::UpdateScheduler;

/// Picks the instant to render: the controlled sample verbatim, else `now`.
#[inline]
pub fn resolve_time<S: TimeSource + ?Sized>(controlled: Option<TimeSample>, now: &S) -> TimeSample {
    match controlled {
        Some(t) => t,
        None => now.now(),
    }
}

/// Analog clock component.
///
/// Lifecycle: [`new`](Self::new) → [`mount`](Self::mount) →
/// ([`tick`](Self::tick) | [`set_props`](Self::set_props))* →
/// [`unmount`](Self::unmount). The scene is rebuilt on every fire and on
/// every props change; nothing is cached between frames.
pub struct ClockRenderer<S: TimeSource> {
    props: ClockProps,
    source: S,
    scheduler: UpdateScheduler,
    /// Last sample read from `source`.
    internal: TimeSample,
    /// Sample the current scene was built from.
    sample: TimeSample,
    angles: AngleSet,
    scene: ClockScene,
    mounted: bool,
    renders: u64,
}

impl<S: TimeSource> ClockRenderer<S> {
    /// Builds the component and its first frame. Does not start the timer.
    pub fn new(props: ClockProps, source: S) -> Self {
        let internal = if props.is_controlled() { TimeSample::default() } else { source.now() };
        let sample = resolve_time(props.time, &|| internal);
        let config = props.render_config();
        let angles = derive_angles(sample, config.tick_rate);
        let scene = assemble(angles, &config);

        Self {
            props,
            source,
            scheduler: UpdateScheduler::new(),
            internal,
            sample,
            angles,
            scene,
            mounted: false,
            renders: 1,
        }
    }

    /// Starts the redraw timer unless time is controlled.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted || self.scheduler.is_unmounted() {
            return;
        }
        self.mounted = true;
        self.scheduler.configure(self.props.tick_rate, self.props.is_controlled(), now);
    }

    /// Replaces the props and re-renders.
    ///
    /// The timer is only rebuilt when the tick rate or the presence of
    /// controlled time changes; a new controlled sample alone just redraws.
    pub fn set_props(&mut self, props: ClockProps, now: Instant) {
        let reschedule = props.tick_rate != self.props.tick_rate
            || props.is_controlled() != self.props.is_controlled();
        let released = self.props.is_controlled() && !props.is_controlled();

        self.props = props;

        if released {
            // Leaving controlled mode: don't flash a stale internal sample.
            self.internal = self.source.now();
        }
        if reschedule && self.mounted {
            self.scheduler.configure(self.props.tick_rate, self.props.is_controlled(), now);
        }

        let internal = self.internal;
        self.render(resolve_time(self.props.time, &|| internal));
    }

    /// Pushes a new controlled sample. Equivalent to `set_props` with `time`
    /// replaced, so it also switches an uncontrolled clock to controlled.
    pub fn set_time(&mut self, sample: TimeSample, now: Instant) {
        let props = self.props.clone().time(Some(sample));
        self.set_props(props, now);
    }

    /// Advances the timer. Returns `true` if a new frame was rendered.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.scheduler.poll(now).is_none() {
            return false;
        }
        self.internal = resolve_time(None, &self.source);
        let internal = self.internal;
        self.render(resolve_time(self.props.time, &|| internal));
        true
    }

    /// Cancels the timer for good.
    pub fn unmount(&mut self) {
        self.scheduler.unmount();
        self.mounted = false;
    }

    fn render(&mut self, sample: TimeSample) {
        let config = self.props.render_config();
        self.sample = sample;
        self.angles = derive_angles(sample, config.tick_rate);
        self.scene = assemble(self.angles, &config);
        self.renders += 1;
        log::trace!(
            "clock render #{}: {sample} -> h {:.3} m {:.3} s {:.3}",
            self.renders,
            self.angles.hour,
            self.angles.minute,
            self.angles.second
        );
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn props(&self) -> &ClockProps {
        &self.props
    }

    #[inline]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[inline]
    pub fn scheduler(&self) -> &UpdateScheduler {
        &self.scheduler
    }

    #[inline]
    pub fn sample(&self) -> TimeSample {
        self.sample
    }

    #[inline]
    pub fn angles(&self) -> AngleSet {
        self.angles
    }

    #[inline]
    pub fn scene(&self) -> &ClockScene {
        &self.scene
    }

    /// Frames built so far, including the initial one.
    #[inline]
    pub fn renders(&self) -> u64 {
        self.renders
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The current frame as an SVG document.
    pub fn svg(&self) -> String {
        self.scene.to_svg(&self.props.class_name)
    }
}

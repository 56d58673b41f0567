//! Frame-driven animation loop with guaranteed teardown.

use std::fmt::Debug;

use folio_core::DrawSurface;
use log::{debug, trace};

/// A background animation that can be stepped once per refresh.
pub trait Animation: Debug {
    /// Regenerate all state for a surface of the given size.
    fn configure(&mut self, width: f64, height: f64);

    /// Move the simulation forward one frame.
    fn advance(&mut self);

    /// Draw the current state. Never mutates the simulation.
    fn render(&self, surface: &mut dyn DrawSurface);
}

impl<A: Animation + ?Sized> Animation for Box<A> {
    fn configure(&mut self, width: f64, height: f64) {
        (**self).configure(width, height);
    }

    fn advance(&mut self) {
        (**self).advance();
    }

    fn render(&self, surface: &mut dyn DrawSurface) {
        (**self).render(surface);
    }
}

/// Pixel dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether anything can be drawn on a surface this size.
    pub fn usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Loop lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// An owned, running animation.
///
/// The loop steps only when [`tick`](Self::tick) is called by the refresh
/// driver, and never again after [`stop`](Self::stop). Dropping the loop
/// stops it, so the owner tears it down on every exit path.
#[derive(Debug)]
pub struct AnimationLoop<A: Animation> {
    animation: A,
    size: SurfaceSize,
    state: LoopState,
    frames: u64,
}

impl<A: Animation> AnimationLoop<A> {
    /// Configure `animation` for the surface and start stepping it.
    ///
    /// Returns `None` when there is no usable surface; the animation is
    /// simply skipped.
    pub fn start(mut animation: A, size: Option<SurfaceSize>) -> Option<Self> {
        let size = match size {
            Some(size) if size.usable() => size,
            other => {
                debug!("no drawing surface ({other:?}), animation skipped");
                return None;
            }
        };

        animation.configure(size.width, size.height);
        debug!("animation started at {}x{}", size.width, size.height);

        Some(Self {
            animation,
            size,
            state: LoopState::Running,
            frames: 0,
        })
    }

    /// Run one advance and render step. Returns `false` once stopped.
    pub fn tick(&mut self, surface: &mut dyn DrawSurface) -> bool {
        if self.state != LoopState::Running {
            return false;
        }
        self.animation.advance();
        self.animation.render(surface);
        self.frames = self.frames.wrapping_add(1);
        true
    }

    /// Regenerate the animation for a new surface size.
    ///
    /// Ignored once stopped or when the new size is unusable.
    pub fn resize(&mut self, size: SurfaceSize) {
        if self.state != LoopState::Running || !size.usable() {
            return;
        }
        if size != self.size {
            debug!(
                "surface resized {}x{} -> {}x{}",
                self.size.width, self.size.height, size.width, size.height
            );
        }
        self.size = size;
        self.animation.configure(size.width, size.height);
    }

    /// Stop scheduling further steps. Idempotent.
    pub fn stop(&mut self) {
        if self.state == LoopState::Running {
            trace!("animation stopped after {} frames", self.frames);
            self.state = LoopState::Stopped;
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Frames stepped since start.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Current surface size.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn animation(&self) -> &A {
        &self.animation
    }
}

impl<A: Animation> Drop for AnimationLoop<A> {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DisplayList;

    #[derive(Debug, Default)]
    struct Counter {
        configured: Vec<(f64, f64)>,
        advances: usize,
    }

    impl Animation for Counter {
        fn configure(&mut self, width: f64, height: f64) {
            self.configured.push((width, height));
        }

        fn advance(&mut self) {
            self.advances += 1;
        }

        fn render(&self, surface: &mut dyn DrawSurface) {
            surface.clear_rect();
            surface.fill_circle(self.advances as f64, 0.0, 1.0);
        }
    }

    #[test]
    fn test_start_without_surface_is_skipped() {
        assert!(AnimationLoop::start(Counter::default(), None).is_none());
        assert!(
            AnimationLoop::start(Counter::default(), Some(SurfaceSize::new(0.0, 10.0))).is_none()
        );
        assert!(
            AnimationLoop::start(Counter::default(), Some(SurfaceSize::new(10.0, f64::NAN)))
                .is_none()
        );
    }

    #[test]
    fn test_start_configures_once() {
        let animation_loop =
            AnimationLoop::start(Counter::default(), Some(SurfaceSize::new(320.0, 200.0)))
                .expect("usable surface");
        assert_eq!(animation_loop.animation().configured, vec![(320.0, 200.0)]);
        assert!(animation_loop.is_running());
    }

    #[test]
    fn test_one_step_per_tick() {
        let mut surface = DisplayList::new();
        let mut animation_loop =
            AnimationLoop::start(Counter::default(), Some(SurfaceSize::new(10.0, 10.0)))
                .expect("usable surface");

        for _ in 0..3 {
            assert!(animation_loop.tick(&mut surface));
        }
        assert_eq!(animation_loop.animation().advances, 3);
        assert_eq!(animation_loop.frames(), 3);
        assert_eq!(surface.commands().len(), 1);
    }

    #[test]
    fn test_no_steps_after_stop() {
        let mut surface = DisplayList::new();
        let mut animation_loop =
            AnimationLoop::start(Counter::default(), Some(SurfaceSize::new(10.0, 10.0)))
                .expect("usable surface");
        animation_loop.tick(&mut surface);
        animation_loop.stop();
        surface.clear_rect();

        for _ in 0..5 {
            assert!(!animation_loop.tick(&mut surface));
        }
        assert_eq!(animation_loop.animation().advances, 1);
        assert!(surface.is_empty());
        assert_eq!(animation_loop.state(), LoopState::Stopped);

        // Stopping twice is harmless
        animation_loop.stop();
        assert_eq!(animation_loop.state(), LoopState::Stopped);
    }

    #[test]
    fn test_resize_reconfigures_while_running() {
        let mut animation_loop =
            AnimationLoop::start(Counter::default(), Some(SurfaceSize::new(10.0, 10.0)))
                .expect("usable surface");
        animation_loop.resize(SurfaceSize::new(20.0, 30.0));
        animation_loop.resize(SurfaceSize::new(0.0, 30.0));
        assert_eq!(
            animation_loop.animation().configured,
            vec![(10.0, 10.0), (20.0, 30.0)]
        );
        assert_eq!(animation_loop.size(), SurfaceSize::new(20.0, 30.0));

        animation_loop.stop();
        animation_loop.resize(SurfaceSize::new(40.0, 40.0));
        assert_eq!(animation_loop.animation().configured.len(), 2);
    }

    #[test]
    fn test_boxed_animation() {
        let boxed: Box<dyn Animation> = Box::new(Counter::default());
        let mut surface = DisplayList::new();
        let mut animation_loop =
            AnimationLoop::start(boxed, Some(SurfaceSize::new(10.0, 10.0))).expect("usable");
        assert!(animation_loop.tick(&mut surface));
        assert_eq!(surface.commands().len(), 1);
    }

    #[test]
    fn test_resize_keeps_loop_running() {
        let mut surface = DisplayList::new();
        let mut animation_loop =
            AnimationLoop::start(Counter::default(), Some(SurfaceSize::new(10.0, 10.0)))
                .expect("usable surface");
        animation_loop.tick(&mut surface);
        animation_loop.resize(SurfaceSize::new(50.0, 50.0));
        assert!(animation_loop.tick(&mut surface));
        assert_eq!(animation_loop.frames(), 2);
    }
}

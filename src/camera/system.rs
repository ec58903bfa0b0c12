//! The unified camera system: overview/follow mode state machine.
//!
//! One `CameraSystem` exists per canvas and owns the live orbit state,
//! the per-mode snapshots, the follow configuration, and the
//! manual-override bookkeeping. Nothing here is process-global; hosts and
//! tests can run any number of independent instances.

use glam::Vec2;
use web_time::{Duration, Instant};

use super::core::{CameraPose, CameraState};
use super::follow::FollowConfig;
use crate::options::{CameraModeOptions, CameraOptions, FollowOptions};
use crate::scene::{EntityId, EntityRegistry};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Which camera behavior is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CameraMode {
    /// Free orbit camera for surveying the whole canvas.
    #[default]
    Overview,
    /// Camera tracking a target entity, with side-steering enabled.
    Follow,
}

impl CameraMode {
    /// Human-readable label for the UI's camera-mode readout.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Follow => "Follow",
        }
    }
}

/// Saved orbit parameters per mode, restored verbatim on re-entry so
/// switching modes never loses the other mode's manual adjustments.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ModeSnapshots {
    overview: CameraState,
    follow: CameraState,
}

/// A pending automatic follow-resume, armed by a manual gesture.
///
/// Each manual gesture bumps the system's generation and overwrites the
/// task; a task only fires when its generation is still current and its
/// due time has passed, so a stale task is a no-op (last gesture wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResumeTask {
    generation: u64,
    due: Instant,
}

// ---------------------------------------------------------------------------
// CameraSystem
// ---------------------------------------------------------------------------

/// Unified overview/follow camera controller.
#[derive(Debug)]
pub struct CameraSystem {
    mode: CameraMode,
    state: CameraState,
    pose: CameraPose,
    snapshots: ModeSnapshots,
    follow: FollowConfig,
    options: CameraOptions,
    resume_cooldown: Duration,
    /// Timestamp of the most recent explicit user gesture
    /// (pan/pinch/rotate).
    last_interaction: Option<Instant>,
    resume: Option<ResumeTask>,
    override_generation: u64,
}

fn initial_state(opts: &CameraModeOptions) -> CameraState {
    let mut state = CameraState {
        distance: opts.distance.clamp(opts.min_distance, opts.max_distance),
        vertical_angle: opts.vertical_angle,
        horizontal_angle: opts.horizontal_angle,
        center: glam::Vec3::ZERO,
    };
    state.clamp_vertical();
    state
}

impl CameraSystem {
    /// Create a camera system starting in overview mode.
    #[must_use]
    pub fn new(camera: CameraOptions, follow: &FollowOptions) -> Self {
        let snapshots = ModeSnapshots {
            overview: initial_state(&camera.overview),
            follow: initial_state(&camera.follow),
        };
        let state = snapshots.overview;
        Self {
            mode: CameraMode::Overview,
            state,
            pose: CameraPose::from_state(&state),
            snapshots,
            follow: FollowConfig::from_options(follow),
            options: camera,
            resume_cooldown: Duration::from_secs_f32(
                follow.resume_cooldown_secs.max(0.0),
            ),
            last_interaction: None,
            resume: None,
            override_generation: 0,
        }
    }

    // -- Readouts -----------------------------------------------------------

    /// The active camera mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Poll-style label for the UI's camera-mode indicator.
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        self.mode.as_str()
    }

    /// Current orbit parameters.
    #[must_use]
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Derived eye transform, valid as of the last mutation or tick.
    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Follow configuration.
    #[must_use]
    pub fn follow(&self) -> &FollowConfig {
        &self.follow
    }

    /// Mutable follow configuration, for the host's settings surface
    /// (offset, smoothness).
    pub fn follow_mut(&mut self) -> &mut FollowConfig {
        &mut self.follow
    }

    /// Timestamp of the most recent explicit user gesture.
    #[must_use]
    pub fn last_interaction(&self) -> Option<Instant> {
        self.last_interaction
    }

    fn mode_options(&self) -> &CameraModeOptions {
        match self.mode {
            CameraMode::Overview => &self.options.overview,
            CameraMode::Follow => &self.options.follow,
        }
    }

    fn refresh(&mut self) {
        self.pose = CameraPose::from_state(&self.state);
    }

    // -- Follow management --------------------------------------------------

    /// Set or clear the follow target.
    pub fn set_follow_target(&mut self, target: Option<EntityId>) {
        self.follow.target = target;
        match target {
            Some(id) => log::info!("follow target set: #{}", id.raw()),
            None => log::info!("follow target cleared"),
        }
    }

    /// Explicitly enable follow tracking, cancelling any pending
    /// auto-resume.
    pub fn enable_follow(&mut self) {
        self.follow.enabled = true;
        self.override_generation += 1;
        self.resume = None;
        log::debug!("camera follow enabled");
    }

    /// Explicitly disable follow tracking. Unlike a manual gesture this
    /// does not arm the auto-resume cooldown.
    pub fn disable_follow(&mut self) {
        self.follow.enabled = false;
        self.override_generation += 1;
        self.resume = None;
        log::debug!("camera follow disabled");
    }

    /// Arm (or re-arm) the follow-resume cooldown without disabling
    /// tracking. Used at the end of a pan gesture in follow mode.
    pub fn arm_follow_resume(&mut self, now: Instant) {
        if self.mode == CameraMode::Follow {
            self.arm_resume(now);
        }
    }

    fn arm_resume(&mut self, now: Instant) {
        self.override_generation += 1;
        self.resume = Some(ResumeTask {
            generation: self.override_generation,
            due: now + self.resume_cooldown,
        });
    }

    /// A manual rotate/pan in follow mode takes control away from the
    /// tracker for the cooldown window. Re-armed on every gesture; the
    /// last gesture wins.
    fn manual_override(&mut self, now: Instant) {
        if self.mode == CameraMode::Follow {
            self.follow.enabled = false;
            self.arm_resume(now);
        }
    }

    /// Stamp the interaction clock. Every explicit user gesture
    /// (pan/pinch/rotate) calls this.
    pub fn note_interaction(&mut self, now: Instant) {
        self.last_interaction = Some(now);
    }

    // -- Mode switching -----------------------------------------------------

    /// Toggle between overview and follow mode, snapshotting the leaving
    /// mode's orbit parameters and restoring the entering mode's.
    ///
    /// Entering follow mode with a live target re-centers on the
    /// target's ground-projected position plus the follow offset
    /// (unsmoothed; the tracker takes over from there).
    pub fn toggle_mode(&mut self, registry: &EntityRegistry) {
        match self.mode {
            CameraMode::Overview => {
                self.snapshots.overview = self.state;
                self.mode = CameraMode::Follow;
                self.state = self.snapshots.follow;
                if let Some(e) =
                    self.follow.target.and_then(|id| registry.get(id))
                {
                    self.state.center = self.follow.desired_center(e.position);
                }
            }
            CameraMode::Follow => {
                self.snapshots.follow = self.state;
                self.mode = CameraMode::Overview;
                self.state = self.snapshots.overview;
            }
        }
        self.refresh();
        log::info!("camera mode switched to {}", self.mode.as_str());
    }

    // -- Gestures -----------------------------------------------------------

    /// One-finger orbit: horizontal-dominant translation spins around
    /// the vertical axis, vertical-dominant translation tilts (clamped
    /// away from the poles). A follow-mode gesture overrides tracking.
    pub fn rotate(&mut self, delta: Vec2, now: Instant) {
        self.note_interaction(now);
        self.manual_override(now);
        let sensitivity = self.mode_options().rotate_sensitivity;
        if delta.x.abs() > delta.y.abs() {
            self.state.horizontal_angle += delta.x * sensitivity;
        } else {
            self.state.vertical_angle -= delta.y * sensitivity;
            self.state.clamp_vertical();
        }
        self.refresh();
    }

    /// Two-finger pan: slide the look-at center along the camera's
    /// ground-projected right/forward basis. A follow-mode gesture
    /// overrides tracking.
    pub fn pan(&mut self, delta: Vec2, now: Instant) {
        self.note_interaction(now);
        self.manual_override(now);
        let sensitivity = self.mode_options().pan_sensitivity;
        let right = self.pose.ground_right();
        let forward = self.pose.ground_forward();
        self.state.center +=
            right * (-delta.x * sensitivity) + forward * (delta.y * sensitivity);
        self.refresh();
    }

    /// Pinch zoom: divide the orbit distance by the pinch factor and
    /// clamp to the active mode's range. Does not override follow
    /// tracking.
    pub fn zoom(&mut self, factor: f32, now: Instant) {
        if factor <= 0.0 {
            return;
        }
        self.note_interaction(now);
        let opts = self.mode_options();
        self.state.distance = (self.state.distance / factor)
            .clamp(opts.min_distance, opts.max_distance);
        self.refresh();
    }

    // -- Tick ---------------------------------------------------------------

    /// One fixed 16 ms step: fire a due follow-resume, smooth the center
    /// toward a live target, refresh the derived pose.
    pub fn tick(&mut self, registry: &EntityRegistry, now: Instant) {
        if self.mode == CameraMode::Follow {
            if let Some(task) = self.resume {
                if task.generation != self.override_generation {
                    // Stale task from before a newer gesture; drop it.
                    self.resume = None;
                } else if now >= task.due {
                    self.follow.enabled = true;
                    self.resume = None;
                    log::debug!("camera follow resumed after cooldown");
                }
            }
            if self.follow.enabled {
                if let Some(pos) = self
                    .follow
                    .target
                    .and_then(|id| registry.get(id))
                    .map(|e| e.position)
                {
                    self.state.center =
                        self.follow.smooth_center(self.state.center, pos);
                }
            }
        }
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::options::Options;
    use crate::scene::SceneEntity;

    fn system() -> CameraSystem {
        let opts = Options::default();
        CameraSystem::new(opts.camera, &opts.follow)
    }

    fn registry_with_target() -> (EntityRegistry, EntityId) {
        let mut reg = EntityRegistry::new();
        let mut chair = SceneEntity::new("chair").with_followable(true);
        chair.position = Vec3::new(1.0, 0.5, 2.0);
        let id = reg.insert(chair);
        (reg, id)
    }

    #[test]
    fn mode_round_trip_restores_exact_state() {
        let reg = EntityRegistry::new();
        let mut cam = system();
        let t0 = Instant::now();
        cam.rotate(Vec2::new(40.0, 3.0), t0);
        cam.zoom(1.2, t0);
        let before = *cam.state();

        cam.toggle_mode(&reg);
        assert_eq!(cam.mode(), CameraMode::Follow);
        cam.toggle_mode(&reg);
        assert_eq!(cam.mode(), CameraMode::Overview);
        assert_eq!(*cam.state(), before);
    }

    #[test]
    fn entering_follow_centers_on_offset_target() {
        let (reg, id) = registry_with_target();
        let mut cam = system();
        cam.set_follow_target(Some(id));
        cam.toggle_mode(&reg);
        // target (1, 0.5, 2) + offset (3, 2, 3), ground projected.
        assert_eq!(cam.state().center, Vec3::new(4.0, 0.0, 5.0));
        // Follow mode's own orbit parameters are restored.
        assert_eq!(cam.state().distance, 5.0);
    }

    #[test]
    fn zoom_clamps_per_mode() {
        let reg = EntityRegistry::new();
        let mut cam = system();
        let t0 = Instant::now();

        cam.zoom(1000.0, t0);
        assert_eq!(cam.state().distance, 2.0);
        cam.zoom(0.0001, t0);
        assert_eq!(cam.state().distance, 50.0);

        cam.toggle_mode(&reg);
        cam.zoom(1000.0, t0);
        assert_eq!(cam.state().distance, 1.0);
        cam.zoom(0.0001, t0);
        assert_eq!(cam.state().distance, 20.0);
    }

    #[test]
    fn vertical_angle_never_reaches_the_poles() {
        use std::f32::consts::FRAC_PI_2;
        let mut cam = system();
        let t0 = Instant::now();
        for _ in 0..500 {
            cam.rotate(Vec2::new(0.0, -50.0), t0);
        }
        assert!(cam.state().vertical_angle < FRAC_PI_2 - 0.0999);
        for _ in 0..1000 {
            cam.rotate(Vec2::new(0.0, 50.0), t0);
        }
        assert!(cam.state().vertical_angle > -FRAC_PI_2 + 0.0999);
    }

    #[test]
    fn horizontal_dominant_rotation_leaves_tilt_unchanged() {
        let mut cam = system();
        let t0 = Instant::now();
        let tilt = cam.state().vertical_angle;
        cam.rotate(Vec2::new(30.0, 10.0), t0);
        assert_eq!(cam.state().vertical_angle, tilt);
        assert!(cam.state().horizontal_angle != 1.5708);
    }

    #[test]
    fn overview_gestures_do_not_disable_follow() {
        let mut cam = system();
        let t0 = Instant::now();
        assert!(cam.follow().enabled);
        cam.rotate(Vec2::new(10.0, 0.0), t0);
        cam.pan(Vec2::new(5.0, 5.0), t0);
        assert!(cam.follow().enabled);
    }

    #[test]
    fn manual_override_cooldown_rearms_on_each_gesture() {
        let (reg, id) = registry_with_target();
        let mut cam = system();
        cam.set_follow_target(Some(id));
        cam.toggle_mode(&reg);

        let t0 = Instant::now();
        cam.rotate(Vec2::new(20.0, 0.0), t0);
        assert!(!cam.follow().enabled);

        // Not yet due.
        cam.tick(&reg, t0 + Duration::from_millis(1400));
        assert!(!cam.follow().enabled);

        // Second gesture 1.5 s after the first re-arms the cooldown.
        let t1 = t0 + Duration::from_millis(1500);
        cam.rotate(Vec2::new(20.0, 0.0), t1);

        // 2.0 s after the *first* gesture: still disabled.
        cam.tick(&reg, t0 + Duration::from_millis(2000));
        assert!(!cam.follow().enabled);
        cam.tick(&reg, t1 + Duration::from_millis(1900));
        assert!(!cam.follow().enabled);

        // 2.0 s after the *second* gesture: resumed.
        cam.tick(&reg, t1 + Duration::from_millis(2000));
        assert!(cam.follow().enabled);
    }

    #[test]
    fn resume_only_fires_in_follow_mode() {
        let (reg, id) = registry_with_target();
        let mut cam = system();
        cam.set_follow_target(Some(id));
        cam.toggle_mode(&reg);

        let t0 = Instant::now();
        cam.rotate(Vec2::new(20.0, 0.0), t0);
        cam.toggle_mode(&reg); // back to overview
        cam.tick(&reg, t0 + Duration::from_secs(3));
        assert!(!cam.follow().enabled);

        // Re-entering follow lets the (still current) task fire.
        cam.toggle_mode(&reg);
        cam.tick(&reg, t0 + Duration::from_secs(3));
        assert!(cam.follow().enabled);
    }

    #[test]
    fn follow_tick_smooths_center_toward_target() {
        let (reg, id) = registry_with_target();
        let mut cam = system();
        cam.set_follow_target(Some(id));
        cam.toggle_mode(&reg);

        let desired = cam.follow().desired_center(Vec3::new(1.0, 0.5, 2.0));
        // Entry snaps to the desired center; nudge away to observe the
        // smoothing pull.
        cam.state.center = Vec3::ZERO;
        let t0 = Instant::now();
        for _ in 0..600 {
            cam.tick(&reg, t0);
        }
        assert!((cam.state().center - desired).length() < 1e-2);
    }

    #[test]
    fn dead_target_holds_last_center() {
        let (mut reg, id) = registry_with_target();
        let mut cam = system();
        cam.set_follow_target(Some(id));
        cam.toggle_mode(&reg);
        let center = cam.state().center;

        let _gone = reg.remove(id);
        let t0 = Instant::now();
        for _ in 0..10 {
            cam.tick(&reg, t0);
        }
        assert_eq!(cam.state().center, center);
    }

    #[test]
    fn explicit_disable_cancels_pending_resume() {
        let (reg, id) = registry_with_target();
        let mut cam = system();
        cam.set_follow_target(Some(id));
        cam.toggle_mode(&reg);

        let t0 = Instant::now();
        cam.rotate(Vec2::new(20.0, 0.0), t0);
        cam.disable_follow();
        cam.tick(&reg, t0 + Duration::from_secs(5));
        assert!(!cam.follow().enabled);
    }
}

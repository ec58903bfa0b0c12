//! The canvas engine: single owner of all interaction state.
//!
//! One `CanvasEngine` per canvas holds the entity registry, the camera
//! system, the selection, and per-entity steering states. The host feeds
//! it classified gestures (or commands directly) and drives
//! [`CanvasEngine::tick`] from a fixed 16 ms timer; everything runs on
//! one logical timeline, so no locking is involved.

mod command;

use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;
use web_time::Instant;

pub use command::CanvasCommand;

use crate::camera::CameraSystem;
use crate::input::{dispatch, DispatchContext, GestureEvent};
use crate::motion::LateralSteering;
use crate::options::Options;
use crate::scene::{
    placement, EntityId, EntityRegistry, EntityTag, SceneEntity,
};

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Tap-selection state: a weak handle set on tap-hit and cleared on
/// tap-miss. Implies no ownership of the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: Option<EntityId>,
}

impl SelectionState {
    /// The selected entity, if any (may be stale; the engine validates
    /// liveness against the registry on use).
    #[must_use]
    pub fn selected(&self) -> Option<EntityId> {
        self.selected
    }

    fn select(&mut self, id: EntityId) {
        self.selected = Some(id);
    }

    fn clear(&mut self) {
        self.selected = None;
    }
}

// ---------------------------------------------------------------------------
// CanvasEngine
// ---------------------------------------------------------------------------

/// Owner of all interaction state for one canvas.
#[derive(Debug)]
pub struct CanvasEngine {
    registry: EntityRegistry,
    camera: CameraSystem,
    selection: SelectionState,
    /// Lateral steering state per steerable entity.
    steering: FxHashMap<EntityId, LateralSteering>,
    options: Options,
}

impl CanvasEngine {
    /// Create an engine with the given options and an empty scene.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self {
            registry: EntityRegistry::new(),
            camera: CameraSystem::new(options.camera, &options.follow),
            selection: SelectionState::default(),
            steering: FxHashMap::default(),
            options,
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// The entity registry.
    #[must_use]
    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    /// Mutable registry access, for the external scene owner to add or
    /// remove entities directly.
    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// The camera system.
    #[must_use]
    pub fn camera(&self) -> &CameraSystem {
        &self.camera
    }

    /// Mutable camera access, for the host's settings surface.
    pub fn camera_mut(&mut self) -> &mut CameraSystem {
        &mut self.camera
    }

    /// The active options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The selected entity, validated against the registry — a handle
    /// whose entity was removed reads as no selection.
    #[must_use]
    pub fn selected(&self) -> Option<EntityId> {
        self.selection
            .selected()
            .filter(|id| self.registry.is_live(*id))
    }

    /// Poll-style camera-mode label for the UI indicator.
    #[must_use]
    pub fn mode_label(&self) -> &'static str {
        self.camera.mode_label()
    }

    // -- Scene intake -------------------------------------------------------

    /// Add a loaded entity to the canvas.
    ///
    /// Room geometry is pinned at the origin and helper geometry keeps
    /// its given position; regular objects are placed by the planner
    /// (centered, stacked above whatever already sits at the center).
    /// The first followable entity added becomes the follow target
    /// automatically.
    pub fn spawn(&mut self, mut entity: SceneEntity) -> EntityId {
        match entity.tag {
            EntityTag::Room => entity.position = Vec3::ZERO,
            EntityTag::Helper => {}
            EntityTag::Object => {
                entity.position = placement::plan_position(
                    entity.bounds,
                    self.registry.iter().map(|(_, e)| e),
                    &self.options.placement,
                );
            }
        }
        let followable = entity.followable;
        log::info!(
            "spawned '{}' at {:?}",
            entity.name,
            entity.position
        );
        let id = self.registry.insert(entity);
        if followable && self.camera.follow().target.is_none() {
            self.camera.set_follow_target(Some(id));
        }
        id
    }

    // -- Gestures and commands ----------------------------------------------

    /// Route a classified gesture through the dispatcher and execute the
    /// resulting command, if any. Returns the executed command.
    pub fn handle_gesture(
        &mut self,
        event: GestureEvent,
        now: Instant,
    ) -> Option<CanvasCommand> {
        let ctx = DispatchContext {
            has_selection: self.selected().is_some(),
            mode: self.camera.mode(),
        };
        let cmd = dispatch(event, ctx)?;
        self.execute(cmd, now);
        Some(cmd)
    }

    /// Execute a single command against the current state.
    pub fn execute(&mut self, cmd: CanvasCommand, now: Instant) {
        match cmd {
            CanvasCommand::Select { id } => self.select(id),
            CanvasCommand::ClearSelection => self.selection.clear(),
            CanvasCommand::ToggleCameraMode => {
                self.camera.toggle_mode(&self.registry);
            }
            CanvasCommand::RotateCamera { delta } => {
                self.camera.rotate(delta, now);
            }
            CanvasCommand::PanCamera { delta } => self.camera.pan(delta, now),
            CanvasCommand::ZoomCamera { factor } => {
                self.camera.zoom(factor, now);
            }
            CanvasCommand::ArmFollowResume => {
                self.camera.arm_follow_resume(now);
            }
            CanvasCommand::MoveSelected { delta } => {
                self.move_selected(delta, now);
            }
            CanvasCommand::ScaleSelected { factor } => {
                self.camera.note_interaction(now);
                if let Some(e) = self.selected_entity_mut() {
                    e.scale *= factor;
                }
            }
            CanvasCommand::RotateSelected { angle } => {
                self.camera.note_interaction(now);
                if let Some(e) = self.selected_entity_mut() {
                    e.orientation = Quat::from_rotation_y(angle) * e.orientation;
                }
            }
            CanvasCommand::Steer { delta } => self.steer(delta, now),
            CanvasCommand::SetFollowTarget { id } => {
                self.camera.set_follow_target(id);
            }
            CanvasCommand::EnableFollow => self.camera.enable_follow(),
            CanvasCommand::DisableFollow => self.camera.disable_follow(),
        }
    }

    /// Tap-hit selection rules: helper geometry is ignored (selection
    /// unchanged), a dead handle behaves like a miss, and selecting a
    /// followable entity also makes it the follow target.
    fn select(&mut self, id: EntityId) {
        match self.registry.get(id) {
            Some(e) if e.is_selectable() => {
                log::debug!("selected '{}'", e.name);
                let followable = e.followable;
                self.selection.select(id);
                if followable {
                    self.camera.set_follow_target(Some(id));
                }
            }
            Some(_) => {}
            None => self.selection.clear(),
        }
    }

    fn selected_entity_mut(&mut self) -> Option<&mut SceneEntity> {
        let id = self.selection.selected()?;
        self.registry.get_mut(id)
    }

    /// Drag the selection along the camera's ground-projected right
    /// vector and world up; screen Y grows downward, so the vertical
    /// delta is inverted.
    fn move_selected(&mut self, delta: glam::Vec2, now: Instant) {
        self.camera.note_interaction(now);
        let sensitivity = self.options.interaction.move_sensitivity;
        let right = self.camera.pose().ground_right();
        let Some(e) = self.selected_entity_mut() else {
            return;
        };
        e.position += right * (delta.x * sensitivity)
            + Vec3::Y * (-delta.y * sensitivity);
    }

    /// Feed a swipe impulse into the follow target's steering state.
    fn steer(&mut self, delta: glam::Vec2, now: Instant) {
        self.camera.note_interaction(now);
        let Some(id) = self.camera.follow().target else {
            return;
        };
        if !self.registry.is_live(id) {
            return;
        }
        let state = self.steering.entry(id).or_default();
        let _accepted = state.apply_impulse(delta, &self.options.steering);
    }

    // -- Tick ---------------------------------------------------------------

    /// One fixed 16 ms step: advance the camera (follow smoothing and
    /// resume cooldown) and every steering state, applying lateral
    /// displacement to the steered entities.
    pub fn tick(&mut self, now: Instant) {
        self.camera.tick(&self.registry, now);

        for (id, state) in &mut self.steering {
            let dx = state.tick(&self.options.steering);
            if dx != 0.0 {
                if let Some(e) = self.registry.get_mut(*id) {
                    e.position.x += dx;
                }
            }
        }
        // Drop states for removed entities; keep resting states, they
        // are cheap and avoid reallocation on the next swipe.
        let registry = &self.registry;
        self.steering.retain(|id, _| registry.is_live(*id));
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use web_time::Duration;

    use super::*;
    use crate::camera::CameraMode;
    use crate::scene::Aabb;

    fn chair() -> SceneEntity {
        SceneEntity::new("chair")
            .with_followable(true)
            .with_bounds(Aabb::new(
                Vec3::new(-0.5, -0.5, -0.5),
                Vec3::new(0.5, 0.5, 0.5),
            ))
    }

    fn engine_with_chair() -> (CanvasEngine, EntityId) {
        let mut engine = CanvasEngine::new(Options::default());
        let id = engine.spawn(chair());
        (engine, id)
    }

    #[test]
    fn spawn_places_and_stacks_objects() {
        let mut engine = CanvasEngine::new(Options::default());
        let room = engine.spawn(
            SceneEntity::new("room").with_tag(EntityTag::Room),
        );
        assert_eq!(engine.registry().get(room).map(|e| e.position), Some(Vec3::ZERO));

        let first = engine.spawn(chair());
        let second = engine.spawn(chair());
        let first_pos = match engine.registry().get(first) {
            Some(e) => e.position,
            None => panic!("first entity missing"),
        };
        let second_pos = match engine.registry().get(second) {
            Some(e) => e.position,
            None => panic!("second entity missing"),
        };
        assert_eq!(first_pos, Vec3::new(0.0, 0.5, 0.0));
        // Stacked above the first: top (1.0) + gap (0.1) + half height.
        assert!((second_pos.y - 1.6).abs() < 1e-5);
    }

    #[test]
    fn first_followable_spawn_becomes_follow_target() {
        let (engine, id) = engine_with_chair();
        assert_eq!(engine.camera().follow().target, Some(id));
    }

    #[test]
    fn tap_selects_and_miss_clears() {
        let (mut engine, id) = engine_with_chair();
        let t0 = Instant::now();

        let _cmd = engine.handle_gesture(GestureEvent::Tap { hit: Some(id) }, t0);
        assert_eq!(engine.selected(), Some(id));

        let _cmd = engine.handle_gesture(GestureEvent::Tap { hit: None }, t0);
        assert_eq!(engine.selected(), None);
    }

    #[test]
    fn tap_on_helper_leaves_selection_unchanged() {
        let (mut engine, id) = engine_with_chair();
        let grid = engine.spawn(
            SceneEntity::new("grid_floor").with_tag(EntityTag::Helper),
        );
        let t0 = Instant::now();

        let _cmd = engine.handle_gesture(GestureEvent::Tap { hit: Some(id) }, t0);
        let _cmd = engine.handle_gesture(GestureEvent::Tap { hit: Some(grid) }, t0);
        assert_eq!(engine.selected(), Some(id));
    }

    #[test]
    fn tap_on_dead_handle_behaves_like_a_miss() {
        let (mut engine, id) = engine_with_chair();
        let t0 = Instant::now();
        let _cmd = engine.handle_gesture(GestureEvent::Tap { hit: Some(id) }, t0);
        let _gone = engine.registry_mut().remove(id);

        let _cmd = engine.handle_gesture(GestureEvent::Tap { hit: Some(id) }, t0);
        assert_eq!(engine.selected(), None);
    }

    #[test]
    fn drag_moves_selection_with_inverted_screen_y() {
        let (mut engine, id) = engine_with_chair();
        let t0 = Instant::now();
        let _cmd = engine.handle_gesture(GestureEvent::Tap { hit: Some(id) }, t0);
        let before = match engine.registry().get(id) {
            Some(e) => e.position,
            None => panic!("entity missing"),
        };

        let _cmd = engine.handle_gesture(
            GestureEvent::PanChanged {
                translation: Vec2::new(0.0, 10.0),
                touches: 1,
            },
            t0,
        );
        let after = match engine.registry().get(id) {
            Some(e) => e.position,
            None => panic!("entity missing"),
        };
        // Screen-down drag lowers the object.
        assert!((after.y - (before.y - 0.1)).abs() < 1e-6);
        assert_eq!(after.x, before.x);
        assert_eq!(after.z, before.z);
    }

    #[test]
    fn pinch_scales_selection_but_zooms_camera_without_one() {
        let (mut engine, id) = engine_with_chair();
        let t0 = Instant::now();

        let distance = engine.camera().state().distance;
        let _cmd = engine.handle_gesture(GestureEvent::Pinch { scale: 2.0 }, t0);
        assert!((engine.camera().state().distance - distance / 2.0).abs() < 1e-5);

        let _cmd = engine.handle_gesture(GestureEvent::Tap { hit: Some(id) }, t0);
        let _cmd = engine.handle_gesture(GestureEvent::Pinch { scale: 2.0 }, t0);
        let scale = match engine.registry().get(id) {
            Some(e) => e.scale,
            None => panic!("entity missing"),
        };
        assert_eq!(scale, Vec3::splat(2.0));
    }

    #[test]
    fn rotate_gesture_yaws_selection_about_world_y() {
        let (mut engine, id) = engine_with_chair();
        let t0 = Instant::now();
        let _cmd = engine.handle_gesture(GestureEvent::Tap { hit: Some(id) }, t0);
        let _cmd = engine
            .handle_gesture(GestureEvent::Rotate { angle: 0.5 }, t0);
        let orientation = match engine.registry().get(id) {
            Some(e) => e.orientation,
            None => panic!("entity missing"),
        };
        let expected = Quat::from_rotation_y(0.5);
        assert!(orientation.angle_between(expected) < 1e-5);
    }

    #[test]
    fn follow_mode_swipe_steers_the_target() {
        let (mut engine, id) = engine_with_chair();
        let t0 = Instant::now();
        // Double tap into follow mode; no selection.
        let _cmd = engine.handle_gesture(GestureEvent::DoubleTap, t0);
        assert_eq!(engine.camera().mode(), CameraMode::Follow);

        let cmd = engine.handle_gesture(
            GestureEvent::PanChanged {
                translation: Vec2::new(50.0, 5.0),
                touches: 1,
            },
            t0,
        );
        assert!(matches!(cmd, Some(CanvasCommand::Steer { .. })));

        let x0 = match engine.registry().get(id) {
            Some(e) => e.position.x,
            None => panic!("entity missing"),
        };
        for i in 0..20 {
            engine.tick(t0 + Duration::from_millis(16 * i));
        }
        let x1 = match engine.registry().get(id) {
            Some(e) => e.position.x,
            None => panic!("entity missing"),
        };
        assert!(x1 > x0, "rightward swipe should move the target right");
    }

    #[test]
    fn steering_decays_back_to_rest() {
        let (mut engine, id) = engine_with_chair();
        let t0 = Instant::now();
        let _cmd = engine.handle_gesture(GestureEvent::DoubleTap, t0);
        let _cmd = engine.handle_gesture(
            GestureEvent::PanChanged {
                translation: Vec2::new(50.0, 0.0),
                touches: 1,
            },
            t0,
        );

        for i in 0..400 {
            engine.tick(t0 + Duration::from_millis(16 * i));
        }
        let state = engine.steering.get(&id).copied().unwrap_or_default();
        assert!(state.is_at_rest());
    }

    #[test]
    fn double_tap_toggles_mode_label() {
        let (mut engine, _id) = engine_with_chair();
        let t0 = Instant::now();
        assert_eq!(engine.mode_label(), "Overview");
        let _cmd = engine.handle_gesture(GestureEvent::DoubleTap, t0);
        assert_eq!(engine.mode_label(), "Follow");
        let _cmd = engine.handle_gesture(GestureEvent::DoubleTap, t0);
        assert_eq!(engine.mode_label(), "Overview");
    }

    #[test]
    fn follow_camera_tracks_ticked_target_motion() {
        let (mut engine, id) = engine_with_chair();
        let t0 = Instant::now();
        let _cmd = engine.handle_gesture(GestureEvent::DoubleTap, t0);

        // Host-side motion: the chair drifts forward each tick.
        for i in 0..300 {
            if let Some(e) = engine.registry_mut().get_mut(id) {
                e.position.z -= 0.01;
            }
            engine.tick(t0 + Duration::from_millis(16 * i));
        }
        let target_z = match engine.registry().get(id) {
            Some(e) => e.position.z,
            None => panic!("entity missing"),
        };
        let center = engine.camera().state().center;
        let desired_z = target_z + engine.camera().follow().offset.z;
        // The smoothed center lags the moving target but stays close.
        assert!((center.z - desired_z).abs() < 0.5);
    }
}

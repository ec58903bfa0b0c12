//! Deterministic placement for newly introduced objects.
//!
//! New objects land at the canvas center: on the floor if nothing is
//! there yet, otherwise stacked above the tallest object already sitting
//! near the origin. The computation is order-independent — re-running
//! with the same entity set and the same newcomer always yields the same
//! position.

use glam::{Vec2, Vec3};

use super::entity::{Aabb, EntityTag, SceneEntity};
use crate::options::PlacementOptions;

/// Approximate height of an object from its bounds.
///
/// Falls back to `default_height` when the loader provided no bounds or
/// the bounds are degenerate (zero or negative vertical extent).
#[must_use]
pub fn object_height(bounds: Option<Aabb>, default_height: f32) -> f32 {
    match bounds {
        Some(b) if b.height() > f32::EPSILON => b.height(),
        _ => default_height,
    }
}

/// Compute where a new object with the given bounds should sit.
///
/// Room and helper geometry are excluded from the stacking computation;
/// only regular objects within `center_radius` of the origin (in the
/// ground plane) count as the "center stack". The newcomer rests at
/// `(0, h/2, 0)` on an empty stack, or `stack_gap` above the stack's
/// highest top face otherwise.
#[must_use]
pub fn plan_position<'a>(
    new_bounds: Option<Aabb>,
    existing: impl Iterator<Item = &'a SceneEntity>,
    opts: &PlacementOptions,
) -> Vec3 {
    let half_height = object_height(new_bounds, opts.default_height) / 2.0;

    let highest_top = existing
        .filter(|e| e.tag == EntityTag::Object)
        .filter(|e| {
            Vec2::new(e.position.x, e.position.z).length() < opts.center_radius
        })
        .map(|e| {
            e.position.y + object_height(e.bounds, opts.default_height) / 2.0
        })
        .fold(None, |acc: Option<f32>, top| {
            Some(acc.map_or(top, |a| a.max(top)))
        });

    match highest_top {
        None => Vec3::new(0.0, half_height, 0.0),
        Some(top) => Vec3::new(0.0, top + half_height + opts.stack_gap, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(name: &str, height: f32) -> SceneEntity {
        SceneEntity::new(name).with_bounds(Aabb::new(
            Vec3::new(-0.5, -height / 2.0, -0.5),
            Vec3::new(0.5, height / 2.0, 0.5),
        ))
    }

    #[test]
    fn empty_scene_places_on_floor() {
        let opts = PlacementOptions::default();
        let pos = plan_position(
            Some(Aabb::new(
                Vec3::new(-0.2, -0.2, -0.2),
                Vec3::new(0.2, 0.2, 0.2),
            )),
            std::iter::empty(),
            &opts,
        );
        assert_eq!(pos, Vec3::new(0.0, 0.2, 0.0));
    }

    #[test]
    fn stacks_above_highest_center_object() {
        let opts = PlacementOptions::default();
        let mut base = boxed("base", 1.0);
        base.position = Vec3::new(0.0, 0.5, 0.0);

        let newcomer = Aabb::new(Vec3::new(-0.2, -0.2, -0.2), Vec3::new(0.2, 0.2, 0.2));
        let pos = plan_position(Some(newcomer), [&base].into_iter(), &opts);
        // top of base = 0.5 + 0.5, plus gap 0.1, plus half of 0.4
        assert!((pos.y - 1.3).abs() < 1e-6);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.z, 0.0);
    }

    #[test]
    fn room_geometry_is_excluded_from_stacking() {
        let opts = PlacementOptions::default();
        let room = boxed("room", 3.0).with_tag(EntityTag::Room);
        let pos = plan_position(
            Some(Aabb::new(
                Vec3::new(-0.2, -0.2, -0.2),
                Vec3::new(0.2, 0.2, 0.2),
            )),
            [&room].into_iter(),
            &opts,
        );
        assert_eq!(pos, Vec3::new(0.0, 0.2, 0.0));
    }

    #[test]
    fn off_center_objects_do_not_form_a_stack() {
        let opts = PlacementOptions::default();
        let mut far = boxed("far", 1.0);
        far.position = Vec3::new(2.0, 0.5, 0.0);
        let pos = plan_position(
            Some(Aabb::new(
                Vec3::new(-0.2, -0.2, -0.2),
                Vec3::new(0.2, 0.2, 0.2),
            )),
            [&far].into_iter(),
            &opts,
        );
        assert_eq!(pos, Vec3::new(0.0, 0.2, 0.0));
    }

    #[test]
    fn degenerate_bounds_fall_back_to_default_height() {
        let opts = PlacementOptions::default();
        let flat = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(object_height(Some(flat), opts.default_height), 0.2);
        assert_eq!(object_height(None, opts.default_height), 0.2);

        let pos = plan_position(Some(flat), std::iter::empty(), &opts);
        assert_eq!(pos, Vec3::new(0.0, 0.1, 0.0));
    }

    #[test]
    fn order_independent() {
        let opts = PlacementOptions::default();
        let mut a = boxed("a", 1.0);
        a.position = Vec3::new(0.0, 0.5, 0.0);
        let mut b = boxed("b", 0.6);
        b.position = Vec3::new(0.1, 1.9, 0.0);

        let newcomer = Aabb::new(Vec3::new(-0.2, -0.2, -0.2), Vec3::new(0.2, 0.2, 0.2));
        let fwd = plan_position(Some(newcomer), [&a, &b].into_iter(), &opts);
        let rev = plan_position(Some(newcomer), [&b, &a].into_iter(), &opts);
        assert_eq!(fwd, rev);
    }
}

//! Consumption collision predicate
//!
//! A consumer can eat a target when the target's center lies inside the
//! consumer's disk. The target's own radius is not subtracted.

use super::entity::Entity;

/// Check whether `consumer` covers the center of `target`
///
/// Destroyed targets never match. Compares squared distances, no sqrt.
#[inline]
pub fn can_consume<C, T>(consumer: &C, target: &T) -> bool
where
    C: Entity + ?Sized,
    T: Entity + ?Sized,
{
    if target.is_destroyed() {
        return false;
    }
    let dist_sq = consumer.position().distance_squared(target.position());
    let r = consumer.radius();
    dist_sq <= r * r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entity::{Bot, Food, FoodId, Identity, Player};
    use glam::Vec2;
    use proptest::prelude::*;

    fn player_at(x: f32, y: f32, radius: f32) -> Player {
        Player::new(Identity::default(), Vec2::new(x, y), radius, 10.0)
    }

    #[test]
    fn test_center_inside_disk() {
        let player = player_at(100.0, 100.0, 20.0);
        let food = Food::new(FoodId(1), Vec2::new(110.0, 110.0), 5.0);
        assert!(can_consume(&player, &food));
    }

    #[test]
    fn test_center_on_edge_counts() {
        let player = player_at(0.0, 0.0, 20.0);
        let food = Food::new(FoodId(1), Vec2::new(20.0, 0.0), 5.0);
        assert!(can_consume(&player, &food));
    }

    #[test]
    fn test_overlap_without_center_containment_misses() {
        // Disks overlap, but the target's center is outside the consumer
        let player = player_at(0.0, 0.0, 20.0);
        let bot = Bot::new(Identity::default(), Vec2::new(24.0, 0.0), 10.0);
        assert!(!can_consume(&player, &bot));
    }

    #[test]
    fn test_destroyed_target_never_matches() {
        let player = player_at(0.0, 0.0, 50.0);
        let mut food = Food::new(FoodId(1), Vec2::ZERO, 5.0);
        food.destroy();
        assert!(!can_consume(&player, &food));
    }

    proptest! {
        #[test]
        fn prop_destroyed_never_consumable(
            cx in 0.0f32..1000.0, cy in 0.0f32..1000.0, cr in 0.1f32..500.0,
            tx in 0.0f32..1000.0, ty in 0.0f32..1000.0, tr in 0.0f32..100.0,
        ) {
            let player = player_at(cx, cy, cr);
            let mut bot = Bot::new(Identity::default(), Vec2::new(tx, ty), tr);
            bot.destroy();
            prop_assert!(!can_consume(&player, &bot));
        }

        #[test]
        fn prop_predicate_is_idempotent(
            cx in 0.0f32..1000.0, cy in 0.0f32..1000.0, cr in 0.1f32..500.0,
            tx in 0.0f32..1000.0, ty in 0.0f32..1000.0,
        ) {
            let player = player_at(cx, cy, cr);
            let food = Food::new(FoodId(7), Vec2::new(tx, ty), 5.0);
            prop_assert_eq!(can_consume(&player, &food), can_consume(&player, &food));
        }
    }
}

//! Area-additive growth
//!
//! Eating combines areas: `r' = sqrt(r_c^2 + r_t^2)`, times a small bonus
//! for moving prey.

use super::entity::{Entity, Player};

/// Radius after a consumer of radius `consumer_radius` eats a target of `target_radius`
#[inline]
pub fn grown_radius(consumer_radius: f32, target_radius: f32, bonus: Option<f32>) -> f32 {
    let combined = (consumer_radius * consumer_radius + target_radius * target_radius).sqrt();
    match bonus {
        Some(factor) => combined * factor,
        None => combined,
    }
}

/// Consume `target`, growing `consumer` and destroying the target
///
/// `bonus` is the multiplier for moving prey (`None` for food). A target that
/// is already destroyed is left alone and the consumer's radius is returned
/// unchanged.
pub fn consume<T>(consumer: &mut Player, target: &mut T, bonus: Option<f32>) -> f32
where
    T: Entity + ?Sized,
{
    if target.is_destroyed() {
        log::debug!("Consume race: target already destroyed");
        return consumer.radius();
    }
    let new_radius = grown_radius(consumer.radius(), target.radius().max(0.0), bonus);
    consumer.grow_to(new_radius);
    target.destroy();
    consumer.radius()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::GROWTH_BONUS;
    use crate::sim::entity::{Bot, Food, FoodId, Identity};
    use glam::Vec2;
    use proptest::prelude::*;

    fn player(radius: f32) -> Player {
        Player::new(Identity::default(), Vec2::ZERO, radius, 10.0)
    }

    #[test]
    fn test_food_has_no_bonus() {
        let mut me = player(30.0);
        let mut food = Food::new(FoodId(1), Vec2::ZERO, 5.0);
        let r = consume(&mut me, &mut food, None);
        assert!((r - 925.0f32.sqrt()).abs() < 1e-4);
        assert!((r - 30.4138).abs() < 1e-3);
        assert!(food.is_destroyed());
    }

    #[test]
    fn test_bot_gets_bonus() {
        let mut me = player(30.0);
        let mut bot = Bot::new(Identity::default(), Vec2::ZERO, 20.0);
        let r = consume(&mut me, &mut bot, Some(GROWTH_BONUS));
        assert!((r - 1300.0f32.sqrt() * 1.002).abs() < 1e-3);
        assert!((r - 36.1276).abs() < 1e-3);
        assert!(bot.is_destroyed());
    }

    #[test]
    fn test_zero_radius_target_still_destroyed() {
        let mut me = player(30.0);
        let mut food = Food::new(FoodId(1), Vec2::ZERO, 0.0);
        let r = consume(&mut me, &mut food, None);
        assert_eq!(r, 30.0);
        assert!(food.is_destroyed());
    }

    #[test]
    fn test_already_destroyed_is_noop() {
        let mut me = player(30.0);
        let mut food = Food::new(FoodId(1), Vec2::ZERO, 5.0);
        consume(&mut me, &mut food, None);
        let after_first = me.radius();
        let r = consume(&mut me, &mut food, None);
        assert_eq!(r, after_first);
    }

    proptest! {
        #[test]
        fn prop_area_additive(r1 in 0.0f32..1000.0, r2 in 0.0f32..1000.0) {
            let expected = (r1 * r1 + r2 * r2).sqrt();
            let food = grown_radius(r1, r2, None);
            let prey = grown_radius(r1, r2, Some(GROWTH_BONUS));
            prop_assert!((food - expected).abs() <= expected * 1e-5 + 1e-5);
            prop_assert!((prey - expected * GROWTH_BONUS).abs() <= expected * 1e-5 + 1e-5);
            prop_assert!(food >= r1.max(0.0));
            prop_assert!(prey >= r1.max(0.0));
        }
    }
}

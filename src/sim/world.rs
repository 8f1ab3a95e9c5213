//! World stepper: scrolls obstacles and culls the ones that left the screen

use super::obstacle::Obstacle;

/// Move every obstacle left by `speed` and drop those fully past the left edge.
/// Survivors keep spawn order. Returns how many were removed.
pub fn advance(obstacles: &mut Vec<Obstacle>, speed: f32) -> usize {
    let before = obstacles.len();
    for obstacle in obstacles.iter_mut() {
        obstacle.pos.x -= speed;
    }
    obstacles.retain(|o| !o.is_offscreen());
    before - obstacles.len()
}

/// Flag obstacles whose right edge is behind `x`
pub fn mark_passed(obstacles: &mut [Obstacle], x: f32) {
    for obstacle in obstacles.iter_mut().filter(|o| !o.passed) {
        if obstacle.right_edge() < x {
            obstacle.passed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn obstacle_at(id: u32, x: f32) -> Obstacle {
        // Kind 0 is 45 wide
        Obstacle::new(id, 0, Vec2::new(x, 205.0))
    }

    #[test]
    fn test_advance_scenario() {
        let mut obstacles = vec![obstacle_at(1, 100.0)];
        advance(&mut obstacles, 5.0);
        assert_eq!(obstacles[0].pos.x, 95.0);

        let mut ticks = 1;
        while !obstacles.is_empty() {
            assert!(obstacles[0].pos.x >= -45.0);
            advance(&mut obstacles, 5.0);
            ticks += 1;
        }
        // x goes 100 -> -50 in 30 ticks; -45 is still on screen
        assert_eq!(ticks, 30);
    }

    #[test]
    fn test_advance_keeps_order() {
        let mut obstacles = vec![
            obstacle_at(1, -40.0),
            obstacle_at(2, 10.0),
            obstacle_at(3, -43.0),
            obstacle_at(4, 300.0),
            obstacle_at(5, -42.0),
        ];
        // Right edges after the step: 2, 52, -1, 302, 0
        let removed = advance(&mut obstacles, 3.0);
        assert_eq!(removed, 1);
        let ids: Vec<u32> = obstacles.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_mark_passed() {
        let mut obstacles = vec![obstacle_at(1, 0.0), obstacle_at(2, 100.0)];
        mark_passed(&mut obstacles, 50.0);
        assert!(obstacles[0].passed);
        assert!(!obstacles[1].passed);
    }

    proptest! {
        #[test]
        fn prop_removed_iff_offscreen(xs in prop::collection::vec(-200.0f32..900.0, 0..30), speed in 0.0f32..20.0) {
            let mut obstacles: Vec<Obstacle> =
                xs.iter().enumerate().map(|(i, &x)| obstacle_at(i as u32, x)).collect();
            let expected: Vec<u32> = obstacles
                .iter()
                .filter(|o| (o.pos.x - speed) + o.size.x >= 0.0)
                .map(|o| o.id)
                .collect();

            advance(&mut obstacles, speed);

            let ids: Vec<u32> = obstacles.iter().map(|o| o.id).collect();
            prop_assert_eq!(ids, expected);
            for o in &obstacles {
                prop_assert!(o.pos.x + o.size.x >= 0.0);
            }
        }
    }
}

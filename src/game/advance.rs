//! Post-validation state advancement

use rand::Rng;

use super::board::{GameState, Position};

/// Pick a fruit cell uniformly over the open board interior. Column and row
/// zero are never used so the fruit cannot spawn on the border the snake
/// starts from.
pub fn random_fruit<R: Rng>(width: i32, height: i32, rng: &mut R) -> Position {
    Position {
        x: if width > 1 { rng.gen_range(1..width) } else { 0 },
        y: if height > 1 { rng.gen_range(1..height) } else { 0 },
    }
}

/// Advance a state that passed both validators: bump the score, respawn the
/// fruit, and carry the snake forward unchanged at its declared position.
pub fn advance<R: Rng>(state: &GameState, rng: &mut R) -> GameState {
    let mut next = state.clone();
    next.score = state.score + 1;
    next.fruit = random_fruit(state.width, state.height, rng);
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Snake;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn state() -> GameState {
        GameState {
            game_id: "g-1".to_string(),
            width: 10,
            height: 8,
            score: 3,
            fruit: Position { x: 2, y: 2 },
            snake: Snake {
                x: 5,
                y: 7,
                vel_x: 1,
                vel_y: 0,
            },
        }
    }

    #[test]
    fn advance_increments_score_and_respawns_fruit() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let next = advance(&state(), &mut rng);
        assert_eq!(next.score, 4);
        assert_eq!(next.game_id, "g-1");
        assert!((1..10).contains(&next.fruit.x));
        assert!((1..8).contains(&next.fruit.y));
    }

    #[test]
    fn advance_carries_snake_through_untouched() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let next = advance(&state(), &mut rng);
        // x and y both survive, y is not overwritten from x
        assert_eq!(next.snake.x, 5);
        assert_eq!(next.snake.y, 7);
        assert_eq!(next.snake.vel_x, 1);
        assert_eq!(next.snake.vel_y, 0);
    }

    #[test]
    fn fruit_avoids_border_column_and_row() {
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..200 {
            let fruit = random_fruit(5, 5, &mut rng);
            assert!((1..5).contains(&fruit.x));
            assert!((1..5).contains(&fruit.y));
        }
    }

    #[test]
    fn fruit_on_degenerate_board_does_not_panic() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let fruit = random_fruit(1, 1, &mut rng);
        assert_eq!(fruit, Position { x: 0, y: 0 });
    }

    #[test]
    fn same_seed_same_fruit() {
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(random_fruit(100, 100, &mut a), random_fruit(100, 100, &mut b));
    }
}

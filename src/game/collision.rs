//! Collision checks and pipe bookkeeping.

use super::types::{Bird, Pipe};
use crate::config::GameConfig;

/// Bird touching the ground or poking above the ceiling.
pub fn hits_bounds(bird: &Bird, config: &GameConfig) -> bool {
    bird.bottom() >= config.ground_top() || bird.top() < 0.0
}

/// Bird overlapping a pipe horizontally while outside its gap.
pub fn hits_pipe(bird: &Bird, pipe: &Pipe) -> bool {
    let overlaps = bird.right() > pipe.x && bird.left() < pipe.right();
    overlaps && (bird.top() < pipe.gap_top || bird.bottom() > pipe.gap_bottom())
}

/// Any collision this tick ends the run.
pub fn check_collision(bird: &Bird, pipes: &[Pipe], config: &GameConfig) -> bool {
    hits_bounds(bird, config) || pipes.iter().any(|pipe| hits_pipe(bird, pipe))
}

/// Mark every unscored pipe whose right edge is behind `anchor` and return
/// how many were newly scored. Pipes are visited oldest first.
pub fn score_passed_pipes(pipes: &mut [Pipe], anchor: f64) -> u32 {
    let mut passed = 0;
    for pipe in pipes.iter_mut() {
        if !pipe.scored && pipe.right() < anchor {
            pipe.scored = true;
            passed += 1;
        }
    }
    passed
}

/// Drop pipes that have scrolled fully past the left edge.
pub fn remove_offscreen(pipes: &mut Vec<Pipe>) {
    pipes.retain(|pipe| pipe.right() >= 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn bird_at(y: f64) -> Bird {
        Bird::new(150.0, y, 40.0, 30.0)
    }

    #[test]
    fn test_ground_collision_is_inclusive() {
        // Ground top is 560; bird bottom exactly on it collides
        assert!(hits_bounds(&bird_at(530.0), &config()));
        assert!(!hits_bounds(&bird_at(529.9), &config()));
    }

    #[test]
    fn test_ceiling_collision() {
        assert!(hits_bounds(&bird_at(-0.1), &config()));
        assert!(!hits_bounds(&bird_at(0.0), &config()));
    }

    #[test]
    fn test_pipe_body_collision() {
        // Gap spans 300..500, bird at 100 sits in the top pipe body
        let pipe = Pipe::new(140.0, 300.0, 70.0, 200.0);
        assert!(hits_pipe(&bird_at(100.0), &pipe));
        // Bird at 480 sticks out below the gap
        assert!(hits_pipe(&bird_at(480.0), &pipe));
    }

    #[test]
    fn test_inside_gap_is_safe() {
        let pipe = Pipe::new(140.0, 300.0, 70.0, 200.0);
        assert!(!hits_pipe(&bird_at(300.0), &pipe));
        assert!(!hits_pipe(&bird_at(470.0), &pipe));
        assert!(!hits_pipe(&bird_at(400.0), &pipe));
    }

    #[test]
    fn test_horizontally_clear_is_safe() {
        // Bird spans 150..190
        let ahead = Pipe::new(190.0, 300.0, 70.0, 200.0);
        let behind = Pipe::new(80.0, 300.0, 70.0, 200.0);
        assert!(!hits_pipe(&bird_at(0.0), &ahead));
        assert!(!hits_pipe(&bird_at(0.0), &behind));
    }

    #[test]
    fn test_check_collision_any_pipe() {
        let pipes = vec![
            Pipe::new(400.0, 300.0, 70.0, 200.0),
            Pipe::new(140.0, 300.0, 70.0, 200.0),
        ];
        assert!(check_collision(&bird_at(100.0), &pipes, &config()));
        assert!(!check_collision(&bird_at(350.0), &pipes, &config()));
    }

    #[test]
    fn test_score_once_per_pipe() {
        let mut pipes = vec![Pipe::new(70.0, 100.0, 70.0, 200.0)];
        assert_eq!(score_passed_pipes(&mut pipes, 150.0), 1);
        assert!(pipes[0].scored);
        assert_eq!(score_passed_pipes(&mut pipes, 150.0), 0);
    }

    #[test]
    fn test_no_score_until_right_edge_passes_anchor() {
        // Right edge exactly on the anchor has not passed it yet
        let mut pipes = vec![Pipe::new(80.0, 100.0, 70.0, 200.0)];
        assert_eq!(score_passed_pipes(&mut pipes, 150.0), 0);
        pipes[0].x = 79.9;
        assert_eq!(score_passed_pipes(&mut pipes, 150.0), 1);
    }

    #[test]
    fn test_remove_offscreen_keeps_order() {
        let mut pipes = vec![
            Pipe::new(-71.0, 100.0, 70.0, 200.0),
            Pipe::new(-70.0, 110.0, 70.0, 200.0),
            Pipe::new(300.0, 120.0, 70.0, 200.0),
        ];
        remove_offscreen(&mut pipes);
        assert_eq!(pipes.len(), 2);
        assert_eq!(pipes[0].gap_top, 110.0);
        assert_eq!(pipes[1].gap_top, 120.0);
    }

    #[test]
    fn test_remove_offscreen_ignores_scored_flag() {
        let mut pipes = vec![Pipe::new(-100.0, 100.0, 70.0, 200.0)];
        remove_offscreen(&mut pipes);
        assert!(pipes.is_empty());
    }
}

// ant.rs - The ant: position, heading and step counter

use crate::grid::GridSize;
use crate::rules::Turn;

/// Clockwise order; turning right moves one entry forward.
pub const HEADINGS: [Heading; 4] = [Heading::Up, Heading::Right, Heading::Down, Heading::Left];

/// Direction the ant is facing. Screen coordinates: `Up` decreases y.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    fn index(self) -> usize {
        match self {
            Heading::Up => 0,
            Heading::Right => 1,
            Heading::Down => 2,
            Heading::Left => 3,
        }
    }

    /// Returns the heading after applying `turn`.
    pub fn turned(self, turn: Turn) -> Self {
        let i = match turn {
            Turn::Right => (self.index() + 1) % 4,
            Turn::Left => (self.index() + 3) % 4,
        };
        HEADINGS[i]
    }

    /// Moves one cell from `(x, y)` in this direction, wrapping around the
    /// edges of a grid of `size` (the grid is a torus).
    pub fn advance(self, x: usize, y: usize, size: GridSize) -> (usize, usize) {
        match self {
            Heading::Up => (x, if y == 0 { size.height - 1 } else { y - 1 }),
            Heading::Down => (x, if y + 1 >= size.height { 0 } else { y + 1 }),
            Heading::Left => (if x == 0 { size.width - 1 } else { x - 1 }, y),
            Heading::Right => (if x + 1 >= size.width { 0 } else { x + 1 }, y),
        }
    }
}

/// The single agent walking the grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ant {
    pub x: usize,
    pub y: usize,
    pub heading: Heading,
    pub step_count: u64,
}

impl Ant {
    /// Fresh ant at the center of the grid, facing down.
    pub fn centered(size: GridSize) -> Self {
        let (x, y) = size.center();
        Self {
            x,
            y,
            heading: Heading::Down,
            step_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_turns_return_home() {
        for turn in [Turn::Right, Turn::Left] {
            let mut h = Heading::Up;
            for _ in 0..4 {
                h = h.turned(turn);
            }
            assert_eq!(h, Heading::Up);
        }
    }

    #[test]
    fn test_turn_order() {
        assert_eq!(Heading::Up.turned(Turn::Right), Heading::Right);
        assert_eq!(Heading::Right.turned(Turn::Right), Heading::Down);
        assert_eq!(Heading::Down.turned(Turn::Right), Heading::Left);
        assert_eq!(Heading::Left.turned(Turn::Right), Heading::Up);
        assert_eq!(Heading::Up.turned(Turn::Left), Heading::Left);
        assert_eq!(Heading::Down.turned(Turn::Left), Heading::Right);
    }

    #[test]
    fn test_advance_wraps() {
        let size = GridSize::new(5, 3).unwrap();
        assert_eq!(Heading::Right.advance(4, 1, size), (0, 1));
        assert_eq!(Heading::Left.advance(0, 1, size), (4, 1));
        assert_eq!(Heading::Down.advance(2, 2, size), (2, 0));
        assert_eq!(Heading::Up.advance(2, 0, size), (2, 2));
        assert_eq!(Heading::Up.advance(2, 2, size), (2, 1));
        assert_eq!(Heading::Right.advance(1, 1, size), (2, 1));
    }

    #[test]
    fn test_centered() {
        let ant = Ant::centered(GridSize::new(200, 151).unwrap());
        assert_eq!((ant.x, ant.y), (100, 75));
        assert_eq!(ant.heading, Heading::Down);
        assert_eq!(ant.step_count, 0);
    }
}

//! D4 symmetry group operations for board comparison

use serde::{Deserialize, Serialize};

use super::Value;

/// Source cell for each target cell after one counter-clockwise quarter turn,
/// i.e. `(p + 1) * 3 % 10 - 1`
const QUARTER_TURN: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// Source cell for each target cell after mirroring about the vertical axis
const MIRROR: [usize; 9] = [2, 1, 0, 5, 4, 3, 8, 7, 6];

/// D4 symmetry transformation (dihedral group of the square)
///
/// The reflection, when present, is applied before the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct D4Transform {
    /// Counter-clockwise quarter turns (0-3)
    pub quarter_turns: u8,
    /// Whether to mirror about the vertical axis first
    pub reflection: bool,
}

impl D4Transform {
    /// Create a transform; `quarter_turns` is taken mod 4
    pub fn new(quarter_turns: i32, reflection: bool) -> Self {
        D4Transform {
            quarter_turns: quarter_turns.rem_euclid(4) as u8,
            reflection,
        }
    }

    /// Create identity transform
    pub fn identity() -> Self {
        Self::new(0, false)
    }

    /// Get all 8 D4 transforms
    pub fn all() -> [D4Transform; 8] {
        let mut transforms = [Self::identity(); 8];
        for (i, transform) in transforms.iter_mut().enumerate() {
            *transform = Self::new((i % 4) as i32, i >= 4);
        }
        transforms
    }

    /// Index of the cell that ends up at `target` after the transform
    pub fn source_index(&self, target: usize) -> usize {
        let mut index = target;
        for _ in 0..self.quarter_turns {
            index = QUARTER_TURN[index];
        }
        if self.reflection {
            index = MIRROR[index];
        }
        index
    }

    /// Apply transform to an array of cells
    pub fn apply_to_cells(&self, cells: &[Value; 9]) -> [Value; 9] {
        std::array::from_fn(|target| cells[self.source_index(target)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> [usize; 9] {
        std::array::from_fn(|i| i)
    }

    fn apply(t: &D4Transform, cells: &[usize; 9]) -> [usize; 9] {
        std::array::from_fn(|target| cells[t.source_index(target)])
    }

    #[test]
    fn test_quarter_turn_matches_closed_form() {
        for p in 0..9 {
            assert_eq!(QUARTER_TURN[p], (p + 1) * 3 % 10 - 1);
        }
    }

    #[test]
    fn test_all_transforms_are_distinct() {
        let images: Vec<[usize; 9]> = D4Transform::all()
            .iter()
            .map(|t| apply(t, &numbered()))
            .collect();
        for i in 0..images.len() {
            for j in (i + 1)..images.len() {
                assert_ne!(images[i], images[j], "transforms {i} and {j} coincide");
            }
        }
    }

    #[test]
    fn test_four_turns_is_identity() {
        let t = D4Transform::new(1, false);
        let mut cells = numbered();
        for _ in 0..4 {
            cells = apply(&t, &cells);
        }
        assert_eq!(cells, numbered());
        assert_eq!(D4Transform::new(4, false), D4Transform::identity());
    }

    #[test]
    fn test_double_reflection_is_identity() {
        let t = D4Transform::new(0, true);
        assert_eq!(apply(&t, &apply(&t, &numbered())), numbered());
    }

    #[test]
    fn test_centre_is_fixed() {
        for t in D4Transform::all() {
            assert_eq!(t.source_index(4), 4);
        }
    }
}

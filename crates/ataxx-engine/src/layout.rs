//! Starting layouts.
//!
//! A layout is a named template board identified by a number. Layouts are
//! registered once and never changed; every game receives its own copy.

use crate::Board;
use std::collections::BTreeMap;
use thiserror::Error;

/// Identifier of a registered layout.
pub type LayoutId = u32;

/// Four corner pieces on an otherwise empty board.
pub const CLASSIC: &str = "x5o/7/7/7/7/7/o5x";

/// The classic corners plus four blocked cells around the centre.
pub const FOUR_BLOCKS: &str = "x5o/7/2-1-2/7/2-1-2/7/o5x";

/// Errors raised by the layout registry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("unknown layout id: {0}")]
    Unknown(LayoutId),

    #[error("layout id {0} is already registered")]
    Duplicate(LayoutId),
}

/// A registered starting board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    id: LayoutId,
    name: String,
    board: Board,
}

impl Layout {
    pub fn id(&self) -> LayoutId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of the template board.
    pub fn board(&self) -> Board {
        self.board
    }
}

/// The set of layouts a game can start from.
///
/// [`LayoutRegistry::default`] contains the built-in layouts:
///
/// | id | name          | placement                     |
/// |----|---------------|-------------------------------|
/// | 1  | `Classic`     | `x5o/7/7/7/7/7/o5x`           |
/// | 2  | `Four Blocks` | `x5o/7/2-1-2/7/2-1-2/7/o5x`   |
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: BTreeMap<LayoutId, Layout>,
}

impl LayoutRegistry {
    /// Creates a registry with no layouts.
    pub fn new() -> Self {
        LayoutRegistry {
            layouts: BTreeMap::new(),
        }
    }

    /// Creates a registry holding the built-in layouts.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (id, name, placement) in [(1, "Classic", CLASSIC), (2, "Four Blocks", FOUR_BLOCKS)] {
            let board = Board::from_notation(placement).expect("built-in layout is valid");
            registry
                .register(id, name, board)
                .expect("built-in layout ids are unique");
        }
        registry
    }

    /// Registers a new layout. Existing layouts are never replaced.
    pub fn register(
        &mut self,
        id: LayoutId,
        name: impl Into<String>,
        board: Board,
    ) -> Result<(), LayoutError> {
        if self.layouts.contains_key(&id) {
            return Err(LayoutError::Duplicate(id));
        }
        self.layouts.insert(
            id,
            Layout {
                id,
                name: name.into(),
                board,
            },
        );
        Ok(())
    }

    pub fn get(&self, id: LayoutId) -> Option<&Layout> {
        self.layouts.get(&id)
    }

    /// Builds a fresh board from the layout with the given id.
    pub fn create_board(&self, id: LayoutId) -> Result<Board, LayoutError> {
        self.get(id)
            .map(Layout::board)
            .ok_or(LayoutError::Unknown(id))
    }

    /// Iterates the layouts in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Layout> {
        self.layouts.values()
    }

    pub fn len(&self) -> usize {
        self.layouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layouts.is_empty()
    }
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ataxx_core::{Cell, Position};

    #[test]
    fn builtin_layouts() {
        let registry = LayoutRegistry::builtin();
        assert_eq!(registry.len(), 2);

        let classic = registry.create_board(1).unwrap();
        assert_eq!(classic.get(Position::new(0, 0)), Some(Cell::Yellow));
        assert_eq!(classic.get(Position::new(0, 6)), Some(Cell::Red));
        assert_eq!(classic.get(Position::new(6, 0)), Some(Cell::Red));
        assert_eq!(classic.get(Position::new(6, 6)), Some(Cell::Yellow));
        assert_eq!(classic.count(Cell::Empty), 45);

        let blocks = registry.create_board(2).unwrap();
        for (row, col) in [(2, 2), (2, 4), (4, 2), (4, 4)] {
            assert_eq!(blocks.get(Position::new(row, col)), Some(Cell::Blocked));
        }
        assert_eq!(blocks.count(Cell::Blocked), 4);
    }

    #[test]
    fn unknown_layout() {
        let registry = LayoutRegistry::builtin();
        assert_eq!(registry.create_board(3), Err(LayoutError::Unknown(3)));
        assert_eq!(registry.create_board(0), Err(LayoutError::Unknown(0)));
    }

    #[test]
    fn boards_are_independent_copies() {
        let registry = LayoutRegistry::builtin();
        let edited = registry
            .create_board(1)
            .unwrap()
            .with(Position::new(3, 3), Cell::Blocked);
        assert_ne!(edited, registry.create_board(1).unwrap());
        assert_eq!(registry.get(1).unwrap().board().count(Cell::Blocked), 0);
    }

    #[test]
    fn register_rejects_duplicates() {
        let mut registry = LayoutRegistry::builtin();
        let custom = Board::from_notation("x5o/7/7/3-3/7/7/o5x").unwrap();
        registry.register(7, "Centre Block", custom).unwrap();
        assert_eq!(registry.get(7).unwrap().name(), "Centre Block");
        assert_eq!(
            registry.register(1, "Replacement", custom),
            Err(LayoutError::Duplicate(1))
        );
        assert_eq!(registry.get(1).unwrap().name(), "Classic");
    }

    #[test]
    fn iteration_is_ordered_by_id() {
        let mut registry = LayoutRegistry::new();
        assert!(registry.is_empty());
        registry.register(9, "Nine", Board::empty()).unwrap();
        registry.register(3, "Three", Board::empty()).unwrap();
        let ids: Vec<_> = registry.iter().map(Layout::id).collect();
        assert_eq!(ids, vec![3, 9]);
    }

    #[test]
    fn error_display() {
        assert_eq!(LayoutError::Unknown(5).to_string(), "unknown layout id: 5");
    }
}

use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of everything a presentation layer draws.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub size: Coord2,
    /// `None` marks a removed cell.
    pub colors: Array2<Option<TileColor>>,
    pub points: u64,
    pub game_over: bool,
    pub best_move: Option<Coord2>,
    /// Every cell of the group `best_move` points at.
    pub hint_group: Vec<Coord2>,
}

impl BoardSnapshot {
    pub fn from_engine(engine: &PlayEngine) -> Self {
        let colors = engine
            .grid()
            .view()
            .map(|tile| (!tile.is_removed()).then_some(tile.color()));

        let hint_group = engine
            .next_best_move()
            .map(|coords| connected_group(engine.grid(), coords))
            .unwrap_or_default();

        Self {
            size: engine.size(),
            colors,
            points: engine.points(),
            game_over: engine.is_game_over(),
            best_move: engine.next_best_move(),
            hint_group,
        }
    }

    pub fn color_at(&self, coords: Coord2) -> Option<TileColor> {
        self.colors.get(coords.to_nd_index()).copied().flatten()
    }

    pub fn is_hinted(&self, coords: Coord2) -> bool {
        self.hint_group.contains(&coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_engine_maps_removed_cells_to_none() {
        let mut engine = PlayEngine::new("RRG BYG".parse().unwrap());
        engine.process_click((0, 0), &mut NoFeedback).unwrap();

        let snapshot = BoardSnapshot::from_engine(&engine);

        assert_eq!(snapshot.size, (2, 3));
        assert_eq!(snapshot.color_at((0, 0)), None);
        assert_eq!(snapshot.color_at((1, 0)), Some(TileColor::Blue));
        assert_eq!(snapshot.color_at((9, 9)), None);
        assert_eq!(snapshot.points, 2);
        assert!(!snapshot.game_over);
        assert_eq!(snapshot.best_move, Some((0, 2)));
        assert!(snapshot.is_hinted((0, 2)));
        assert!(snapshot.is_hinted((1, 2)));
        assert_eq!(snapshot.hint_group.len(), 2);
    }

    #[test]
    fn finished_game_has_no_hint() {
        let engine = PlayEngine::new("RG GR".parse().unwrap());
        let snapshot = BoardSnapshot::from_engine(&engine);

        assert!(snapshot.game_over);
        assert_eq!(snapshot.best_move, None);
        assert!(snapshot.hint_group.is_empty());
    }

    #[test]
    fn survives_json_round_trip() {
        let engine = PlayEngine::new("RRG BYB".parse().unwrap());
        let snapshot = BoardSnapshot::from_engine(&engine);

        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: BoardSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, snapshot);
    }
}

//! Geometric symmetries of the cube and symmetry-based move reduction
//!
//! The cube is invariant under reflecting any axis (`x -> 3 - x`) and under
//! quarter turns within any pair of axes. Together these generate 48
//! transforms: every permutation of the three axes combined with every
//! subset of reflections.
//!
//! Orbits depend on coordinates only, never on occupancy. Under these
//! transforms a cell's class is fixed by how many of its coordinates are on
//! the outside (0 or 3), giving four orbits: 8 corners, 24 edge cells,
//! 24 face cells and the 8 central cells.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::board::{Board, BoardKey, Pos, BOARD_SIZE, TOTAL_CELLS};

const LAST: u8 = BOARD_SIZE as u8 - 1;

/// One symmetry of the cube: coordinate `i` of the image is coordinate
/// `axes[i]` of the source, reflected when `flip[i]` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symmetry {
    axes: [usize; 3],
    flip: [bool; 3],
}

impl Symmetry {
    /// Image of a cell
    #[inline]
    pub fn apply(&self, pos: Pos) -> Pos {
        let src = pos.coords();
        let mut out = [0u8; 3];
        for i in 0..3 {
            let v = src[self.axes[i]];
            out[i] = if self.flip[i] { LAST - v } else { v };
        }
        Pos::new(out[0], out[1], out[2])
    }

    /// All 48 symmetries, identity first
    pub fn all() -> &'static [Symmetry] {
        static ALL: OnceLock<Vec<Symmetry>> = OnceLock::new();
        ALL.get_or_init(|| {
            const PERMS: [[usize; 3]; 6] = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
            let mut out = Vec::with_capacity(48);
            for axes in PERMS {
                for bits in 0..8u8 {
                    out.push(Symmetry {
                        axes,
                        flip: [bits & 1 != 0, bits & 2 != 0, bits & 4 != 0],
                    });
                }
            }
            out
        })
    }
}

/// Smallest cell index in each cell's orbit
fn orbit_ids() -> &'static [u8; TOTAL_CELLS] {
    static IDS: OnceLock<[u8; TOTAL_CELLS]> = OnceLock::new();
    IDS.get_or_init(|| {
        let mut ids = [0u8; TOTAL_CELLS];
        for pos in Pos::all() {
            let min = Symmetry::all()
                .iter()
                .map(|s| s.apply(pos).to_index())
                .min()
                .unwrap_or(pos.to_index());
            ids[pos.to_index()] = min as u8;
        }
        ids
    })
}

/// Canonical representative of a cell's orbit
#[inline]
pub fn orbit_id(pos: Pos) -> usize {
    orbit_ids()[pos.to_index()] as usize
}

/// Every cell equivalent to `pos`, ascending
pub fn orbit(pos: Pos) -> Vec<Pos> {
    let id = orbit_id(pos);
    Pos::all().filter(|&p| orbit_id(p) == id).collect()
}

/// Keep the first move seen from each orbit, preserving order.
pub fn representatives(moves: &[Pos]) -> Vec<Pos> {
    let mut seen = [false; TOTAL_CELLS];
    moves
        .iter()
        .copied()
        .filter(|&mov| !std::mem::replace(&mut seen[orbit_id(mov)], true))
        .collect()
}

/// Per-search cache of reduced move sets keyed by board contents.
#[derive(Debug, Default)]
pub struct SymmetryCache {
    reduced: HashMap<BoardKey, Vec<Pos>>,
    hits: u64,
}

impl SymmetryCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One legal move per orbit for this board.
    pub fn reduce(&mut self, board: &Board) -> Vec<Pos> {
        let key = board.key();
        if let Some(moves) = self.reduced.get(&key) {
            self.hits += 1;
            return moves.clone();
        }
        let moves = representatives(&board.legal_moves());
        self.reduced.insert(key, moves.clone());
        moves
    }

    pub fn clear(&mut self) {
        self.reduced.clear();
        self.hits = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reduced.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reduced.is_empty()
    }

    /// Lookups answered from the cache since the last clear
    #[must_use]
    pub fn hits(&self) -> u64 {
        self.hits
    }
}

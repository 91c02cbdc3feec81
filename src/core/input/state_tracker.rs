//=========================================================================
// State Tracker
//=========================================================================
//
// Snapshot-diff edge detection for one input domain (keys or buttons).
//
// Architecture:
//   is_active(code) for 0..cardinality → new snapshot
//   just_pressed  = new \ old
//   just_released = old \ new
//   current       = new
//
// Every refresh samples the full domain. Edges are only meaningful as
// the diff of two complete snapshots, so there is no incremental path.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== StateTracker ========================================================

/// Tracks the active set of one fixed-size code domain and its edges.
#[derive(Debug, Clone)]
pub struct StateTracker {
    cardinality: u16,

    //--- Persistent State (survives refresh) ------------------------------
    current: HashSet<u16>,

    //--- Edges (recomputed wholly each refresh) ---------------------------
    just_pressed: HashSet<u16>,
    just_released: HashSet<u16>,
}

impl StateTracker {
    /// Creates a tracker for codes `0..cardinality`, all inactive.
    pub fn new(cardinality: u16) -> Self {
        Self {
            cardinality,
            current: HashSet::new(),
            just_pressed: HashSet::new(),
            just_released: HashSet::new(),
        }
    }

    //--- Refresh ----------------------------------------------------------

    /// Samples every code through `is_active` and recomputes both edge sets.
    pub fn refresh<F>(&mut self, mut is_active: F)
    where
        F: FnMut(u16) -> bool,
    {
        let next: HashSet<u16> = (0..self.cardinality).filter(|&code| is_active(code)).collect();

        self.just_pressed = next.difference(&self.current).copied().collect();
        self.just_released = self.current.difference(&next).copied().collect();
        self.current = next;
    }

    /// Forgets all state, as if every code had never been active.
    pub fn clear(&mut self) {
        self.current.clear();
        self.just_pressed.clear();
        self.just_released.clear();
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Domain size this tracker samples.
    pub fn cardinality(&self) -> u16 {
        self.cardinality
    }

    /// `true` while the code is active. Out-of-range codes are never active.
    pub fn is_down(&self, code: u16) -> bool {
        self.current.contains(&code)
    }

    /// `true` only on the refresh where the code went inactive → active.
    pub fn is_just_pressed(&self, code: u16) -> bool {
        self.just_pressed.contains(&code)
    }

    /// `true` only on the refresh where the code went active → inactive.
    pub fn is_just_released(&self, code: u16) -> bool {
        self.just_released.contains(&code)
    }

    /// Iterates the currently active codes (unordered).
    pub fn down(&self) -> impl Iterator<Item = u16> + '_ {
        self.current.iter().copied()
    }

    /// Iterates the codes pressed on the last refresh (unordered).
    pub fn pressed(&self) -> impl Iterator<Item = u16> + '_ {
        self.just_pressed.iter().copied()
    }

    /// Iterates the codes released on the last refresh (unordered).
    pub fn released(&self) -> impl Iterator<Item = u16> + '_ {
        self.just_released.iter().copied()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

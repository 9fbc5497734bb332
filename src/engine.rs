use log::debug;

use crate::data::{Dir, Occupant, Pos, Terrain};
use crate::grid::Grid;

/// Resolves one directional move of the player.
///
/// Returns the player position after the move and whether anything moved.
/// Blocked moves (wall, edge, unpushable box) are silent no-ops, not errors.
/// Only `Terrain::Wall` blocks - slots behave exactly like floor here; the
/// terrain/occupant correlation matters only to [`is_solved`].
pub fn resolve(grid: &mut Grid, player: Pos, dir: Dir) -> (Pos, bool) {
    let target = player + dir;
    if !grid.contains(target) || grid[target].terrain == Terrain::Wall {
        return (player, false);
    }

    match grid[target].occupant {
        Occupant::None => {}
        Occupant::Box => {
            let beyond = target + dir;
            // a single box per push - anything occupying the cell beyond,
            // including another box, blocks the move
            if !grid.contains(beyond)
                || grid[beyond].terrain == Terrain::Wall
                || grid[beyond].occupant != Occupant::None
            {
                return (player, false);
            }
            grid[beyond].occupant = Occupant::Box;
            debug!("pushed box {:?} -> {:?}", target, beyond);
        }
        Occupant::Player => unreachable!("the grid holds a single player"),
    }

    grid[target].occupant = Occupant::Player;
    grid[player].occupant = Occupant::None;
    (target, true)
}

/// True iff no box rests on plain floor. A grid without boxes is solved.
pub fn is_solved(grid: &Grid) -> bool {
    grid.cells().all(|(_, cell, _)| {
        cell.occupant != Occupant::Box || cell.terrain == Terrain::Slot
    })
}

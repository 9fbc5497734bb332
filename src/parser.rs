use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::data::{self, Cell, Occupant, Pos, Terrain};
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErr {
    InvalidChar(usize, usize),
    NoPlayer,
    MultiplePlayers,
}

impl Display for ParseErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParseErr::InvalidChar(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParseErr::NoPlayer => write!(f, "No player"),
            ParseErr::MultiplePlayers => write!(f, "More than one player"),
        }
    }
}

impl Error for ParseErr {}

impl FromStr for Grid {
    type Err = ParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses level text into a grid, asserting the single-player invariant.
pub fn parse(level: &str) -> Result<Grid, ParseErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n');

    let mut rows = Vec::new();
    let mut player = None;
    for (r, line) in level.lines().enumerate() {
        let mut row = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            let cell = match cur_char {
                data::WALL => Cell::new(Terrain::Wall, Occupant::None),
                data::FLOOR => Cell::new(Terrain::Floor, Occupant::None),
                data::SLOT => Cell::new(Terrain::Slot, Occupant::None),
                data::BOX => Cell::new(Terrain::Floor, Occupant::Box),
                data::BOX_IN_SLOT => Cell::new(Terrain::Slot, Occupant::Box),
                data::PLAYER | data::PLAYER_IN_SLOT => {
                    if player.is_some() {
                        return Err(ParseErr::MultiplePlayers);
                    }
                    player = Some(Pos::new(r as i32, c as i32));
                    let terrain = if cur_char == data::PLAYER {
                        Terrain::Floor
                    } else {
                        Terrain::Slot
                    };
                    Cell::new(terrain, Occupant::Player)
                }
                _ => return Err(ParseErr::InvalidChar(r, c)),
            };
            row.push(cell);
        }
        rows.push(row);
    }

    if player.is_none() {
        return Err(ParseErr::NoPlayer);
    }
    Ok(Grid::new(rows))
}

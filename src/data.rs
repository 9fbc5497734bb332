use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// Symbols of the level text format.
///
/// Note `.` is the player standing on a slot, not a bare slot like in XSB.
pub const WALL: char = '#';
pub const FLOOR: char = ' ';
pub const SLOT: char = 'X';
pub const PLAYER: char = '@';
pub const PLAYER_IN_SLOT: char = '.';
pub const BOX: char = 'O';
pub const BOX_IN_SLOT: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i32,
    pub c: i32,
}

impl Pos {
    pub fn new(r: i32, c: i32) -> Pos {
        Pos { r, c }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    /// Parses one character of lurd notation, case insensitive.
    pub fn from_char(c: char) -> Option<Dir> {
        match c.to_ascii_lowercase() {
            'u' => Some(Dir::Up),
            'd' => Some(Dir::Down),
            'l' => Some(Dir::Left),
            'r' => Some(Dir::Right),
            _ => None,
        }
    }

    fn deltas(self) -> (i32, i32) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
            Dir::Right => (0, 1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
            Dir::Right => write!(f, "r"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.deltas();
        Pos { r: self.r + dr, c: self.c + dc }
    }
}

/// Immutable floor type of a cell, fixed for the lifetime of a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terrain {
    Wall,
    Floor,
    Slot,
}

/// Mutable content of a cell. Exactly one cell holds the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occupant {
    None,
    Player,
    Box,
}

/// The original format crams box-on-slot and player-on-slot into extra
/// symbols; splitting the two independent facts keeps movement code free of
/// symbol matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub terrain: Terrain,
    pub occupant: Occupant,
}

impl Cell {
    pub fn new(terrain: Terrain, occupant: Occupant) -> Cell {
        Cell { terrain, occupant }
    }

    pub fn to_char(self) -> char {
        match (self.terrain, self.occupant) {
            (Terrain::Wall, _) => WALL,
            (Terrain::Floor, Occupant::None) => FLOOR,
            (Terrain::Floor, Occupant::Player) => PLAYER,
            (Terrain::Floor, Occupant::Box) => BOX,
            (Terrain::Slot, Occupant::None) => SLOT,
            (Terrain::Slot, Occupant::Player) => PLAYER_IN_SLOT,
            (Terrain::Slot, Occupant::Box) => BOX_IN_SLOT,
        }
    }
}

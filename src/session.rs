use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use log::debug;

use crate::data::{Dir, Pos};
use crate::engine;
use crate::grid::Grid;
use crate::parser::ParseErr;
use crate::LoadLevel;

/// A level failed to load. Bundled levels ship as validated content, so this
/// signals a packaging defect rather than a user mistake; callers are
/// expected to abort or report, not to retry.
#[derive(Debug)]
pub enum LoadError {
    Asset(usize, Box<dyn Error>),
    Parse(usize, ParseErr),
}

impl Display for LoadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Asset(index, err) => {
                write!(f, "can't load level {}: {}", index + 1, err)
            }
            LoadError::Parse(index, err) => {
                write!(f, "level {} is corrupt: {}", index + 1, err)
            }
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadError::Asset(_, err) => Some(err.as_ref()),
            LoadError::Parse(_, err) => Some(err),
        }
    }
}

/// Recoverable level-selection errors; the active grid stays untouched.
#[derive(Debug)]
pub enum SelectError {
    InvalidInput,
    OutOfRange(usize),
    Load(LoadError),
}

impl Display for SelectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::InvalidInput => write!(f, "invalid number"),
            SelectError::OutOfRange(max) => write!(f, "level out of range (1-{})", max),
            SelectError::Load(err) => write!(f, "{}", err),
        }
    }
}

impl Error for SelectError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SelectError::Load(err) => Some(err),
            _ => None,
        }
    }
}

/// The active level: its grid, the pristine snapshot taken at load time and
/// the cached player position. All game state is reachable only through the
/// session handle; there is no process-wide singleton.
pub struct Session<L> {
    loader: L,
    index: usize,
    grid: Grid,
    snapshot: Grid,
    player_pos: Pos,
}

impl<L: LoadLevel> Session<L> {
    /// Creates a session with the first level loaded.
    pub fn new(loader: L) -> Result<Session<L>, LoadError> {
        let (grid, player_pos) = fetch(&loader, 0)?;
        let snapshot = grid.clone();
        Ok(Session { loader, index: 0, grid, snapshot, player_pos })
    }

    /// Loads the level at `index` (0-based), replacing grid and snapshot.
    pub fn load(&mut self, index: usize) -> Result<(), LoadError> {
        let (grid, player_pos) = fetch(&self.loader, index)?;
        debug!("loaded level {}, player at {:?}", index + 1, player_pos);
        self.snapshot = grid.clone();
        self.grid = grid;
        self.player_pos = player_pos;
        self.index = index;
        Ok(())
    }

    /// Restores the grid to its state right after load.
    pub fn reset(&mut self) {
        self.grid = self.snapshot.clone();
        self.player_pos = match self.grid.player_pos() {
            Some(pos) => pos,
            // the snapshot was validated at load time and never mutated
            None => unreachable!("snapshot has no player"),
        };
    }

    /// Switches to a 1-indexed level given as free text.
    pub fn select_level(&mut self, input: &str) -> Result<(), SelectError> {
        let n: usize = input.trim().parse().map_err(|_| SelectError::InvalidInput)?;
        let max = self.loader.level_count();
        if n < 1 || n > max {
            return Err(SelectError::OutOfRange(max));
        }
        self.load(n - 1).map_err(SelectError::Load)
    }

    /// Feeds one directional input to the move resolver.
    ///
    /// The grid and the cached player position are updated together; blocked
    /// moves return `false` and change nothing.
    pub fn push_move(&mut self, dir: Dir) -> bool {
        let (pos, moved) = engine::resolve(&mut self.grid, self.player_pos, dir);
        self.player_pos = pos;
        moved
    }

    pub fn is_solved(&self) -> bool {
        engine::is_solved(&self.grid)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    /// Current level, 1-indexed like the selection input.
    pub fn level(&self) -> usize {
        self.index + 1
    }

    pub fn level_count(&self) -> usize {
        self.loader.level_count()
    }
}

impl<L> Debug for Session<L> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("index", &self.index)
            .field("player_pos", &self.player_pos)
            .field("grid", &self.grid)
            .finish_non_exhaustive()
    }
}

fn fetch<L: LoadLevel>(loader: &L, index: usize) -> Result<(Grid, Pos), LoadError> {
    let text = loader
        .load_level(index)
        .map_err(|err| LoadError::Asset(index, err))?;
    let grid: Grid = text.parse().map_err(|err| LoadError::Parse(index, err))?;
    // the parser guarantees exactly one player
    let player_pos = match grid.player_pos() {
        Some(pos) => pos,
        None => return Err(LoadError::Parse(index, ParseErr::NoPlayer)),
    };
    Ok((grid, player_pos))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestLevels {
        levels: Vec<&'static str>,
        count: usize,
    }

    impl TestLevels {
        fn new(levels: Vec<&'static str>) -> TestLevels {
            let count = levels.len();
            TestLevels { levels, count }
        }
    }

    impl LoadLevel for TestLevels {
        fn load_level(&self, index: usize) -> Result<String, Box<dyn Error>> {
            match self.levels.get(index) {
                Some(text) => Ok(text.to_string()),
                None => Err(format!("no level {}", index + 1).into()),
            }
        }

        fn level_count(&self) -> usize {
            self.count
        }
    }

    const LEVEL_1: &str = "#####\n#@OX#\n#####";
    const LEVEL_2: &str = "######\n#@ OX#\n######";

    fn session() -> Session<TestLevels> {
        Session::new(TestLevels::new(vec![LEVEL_1, LEVEL_2])).unwrap()
    }

    #[test]
    fn loads_first_level() {
        let session = session();
        assert_eq!(session.level(), 1);
        assert_eq!(session.player_pos(), Pos::new(1, 1));
        assert_eq!(session.grid().to_string(), format!("{}\n", LEVEL_1));
        assert!(!session.is_solved());
    }

    #[test]
    fn moves_update_player_and_win_state() {
        let mut session = session();

        assert!(session.push_move(Dir::Right));
        assert_eq!(session.player_pos(), Pos::new(1, 2));
        assert_eq!(session.grid().to_string(), "#####\n# @*#\n#####\n");
        assert!(session.is_solved());

        // blocked afterwards - the box sits on the slot in front of a wall
        assert!(!session.push_move(Dir::Right));
        assert_eq!(session.player_pos(), Pos::new(1, 2));
    }

    #[test]
    fn reset_restores_loaded_state() {
        let mut session = session();
        let loaded = session.grid().clone();

        session.push_move(Dir::Right);
        assert_ne!(*session.grid(), loaded);

        session.reset();
        assert_eq!(*session.grid(), loaded);
        assert_eq!(session.player_pos(), Pos::new(1, 1));

        // reset is value-deep, moving again works the same
        assert!(session.push_move(Dir::Right));
        assert!(session.is_solved());
    }

    #[test]
    fn select_level_switches_and_validates() {
        let mut session = session();

        session.select_level("2").unwrap();
        assert_eq!(session.level(), 2);
        assert_eq!(session.grid().to_string(), format!("{}\n", LEVEL_2));

        // whitespace around the number is fine
        session.select_level(" 1 ").unwrap();
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn select_level_rejects_bad_input() {
        let loader = TestLevels {
            levels: vec![LEVEL_1],
            count: 51,
        };
        let mut session = Session::new(loader).unwrap();
        let before = session.grid().clone();

        assert!(matches!(
            session.select_level("abc"),
            Err(SelectError::InvalidInput)
        ));
        assert!(matches!(
            session.select_level("0"),
            Err(SelectError::OutOfRange(51))
        ));
        assert!(matches!(
            session.select_level("52"),
            Err(SelectError::OutOfRange(51))
        ));
        assert!(matches!(
            session.select_level("-1"),
            Err(SelectError::InvalidInput)
        ));

        assert_eq!(*session.grid(), before);
        assert_eq!(session.level(), 1);
    }

    #[test]
    fn missing_asset_is_a_load_error() {
        let loader = TestLevels {
            levels: vec![LEVEL_1],
            count: 51,
        };
        let mut session = Session::new(loader).unwrap();

        // in range per the loader, but the asset is missing
        let err = session.select_level("2").unwrap_err();
        assert!(matches!(err, SelectError::Load(LoadError::Asset(1, _))));
        assert_eq!(err.to_string(), "can't load level 2: no level 2");
    }

    #[test]
    fn corrupt_level_is_a_load_error() {
        let loader = TestLevels::new(vec!["#####\n#OX #\n#####"]);
        let err = Session::new(loader).unwrap_err();
        assert!(matches!(err, LoadError::Parse(0, ParseErr::NoPlayer)));
    }
}

use std::fmt;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    fn from_symbol(symbol: char) -> Option<Mark> {
        match symbol {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | '_' | ' ' => Some(Mark::Empty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        Some(Self::new(index % BOARD_SIDE, index / BOARD_SIDE))
    }

    pub fn to_index(&self) -> Option<usize> {
        if self.x >= BOARD_SIDE || self.y >= BOARD_SIDE {
            return None;
        }
        Some(self.y * BOARD_SIDE + self.x)
    }
}

/// Nine cells in row-major order. Boards are plain values: every copy is
/// independent, which is what the search relies on when it branches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parses nine symbols such as `"XX..O...."`. `.`, `_` and space are empty cells.
    pub fn parse(text: &str) -> Result<Self, String> {
        let symbols: Vec<char> = text.chars().collect();
        if symbols.len() != CELL_COUNT {
            return Err(format!(
                "Board must have exactly {} cells, got {}",
                CELL_COUNT,
                symbols.len()
            ));
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = Mark::from_symbol(symbol)
                .ok_or_else(|| format!("Unknown cell symbol '{}' at index {}", symbol, index))?;
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.get(index) == Some(Mark::Empty)
    }

    /// Returns a copy with `mark` placed at `index`, or `None` when the cell is
    /// out of range or already taken.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Board> {
        if !self.is_empty_at(index) {
            return None;
        }
        let mut next = *self;
        next.cells[index] = mark;
        Some(next)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn filled_count(&self) -> usize {
        CELL_COUNT - self.count(Mark::Empty)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|mark| mark.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(mark: Mark, cells: [usize; 3]) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }

    pub fn start(&self) -> Position {
        Position::new(self.cells[0] % BOARD_SIDE, self.cells[0] / BOARD_SIDE)
    }

    pub fn end(&self) -> Position {
        Position::new(self.cells[2] % BOARD_SIDE, self.cells[2] / BOARD_SIDE)
    }
}

/// Static classification of a board. Positive numbers favor X (the human).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    XWins,
    OWins,
    Draw,
    InProgress,
}

impl Evaluation {
    pub const X_WIN_SCORE: i32 = 10;
    pub const O_WIN_SCORE: i32 = -10;
    pub const DRAW_SCORE: i32 = 0;
    /// Legacy numeric code for a game that is still running. Not a score.
    pub const IN_PROGRESS_CODE: i32 = -1;

    pub fn code(&self) -> i32 {
        match self {
            Evaluation::XWins => Self::X_WIN_SCORE,
            Evaluation::OWins => Self::O_WIN_SCORE,
            Evaluation::Draw => Self::DRAW_SCORE,
            Evaluation::InProgress => Self::IN_PROGRESS_CODE,
        }
    }

    pub fn terminal_score(&self) -> Option<i32> {
        match self {
            Evaluation::InProgress => None,
            terminal => Some(terminal.code()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self != Evaluation::InProgress
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    HumanWins,
    ComputerWins,
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        *self != GameOutcome::InProgress
    }
}

impl From<Evaluation> for GameOutcome {
    fn from(evaluation: Evaluation) -> Self {
        match evaluation {
            Evaluation::XWins => GameOutcome::HumanWins,
            Evaluation::OWins => GameOutcome::ComputerWins,
            Evaluation::Draw => GameOutcome::Draw,
            Evaluation::InProgress => GameOutcome::InProgress,
        }
    }
}

use std::fmt;

use smallvec::SmallVec;

/// A position in a grid, with `x` increasing to the right (columns) and `y`
/// increasing going down (rows).
pub type Pos = glam::IVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    #[inline]
    pub fn offset(self) -> Pos {
        match self {
            Direction::Up => Pos::NEG_Y,
            Direction::Right => Pos::X,
            Direction::Down => Pos::Y,
            Direction::Left => Pos::NEG_X,
        }
    }

    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    #[inline]
    pub fn turn_left(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Right => Direction::Up,
            Direction::Down => Direction::Right,
            Direction::Left => Direction::Down,
        }
    }

    #[inline]
    pub fn turn_right(self) -> Self {
        self.turn_left().reverse()
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// A rectangular grid of ASCII bytes, as found in most puzzle inputs.
#[derive(Clone, PartialEq, Eq)]
pub struct CharGrid {
    grid: grid::Grid<u8>,
}

impl CharGrid {
    /// Parses the grid from lines of text.
    ///
    /// Returns `None` if there are no lines or if the lines differ in length.
    pub fn parse(input: &str) -> Option<Self> {
        let lines: Vec<&str> = input
            .lines()
            .map(|line| line.trim_end())
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_lines(&lines)
    }

    pub fn from_lines(lines: &[&str]) -> Option<Self> {
        let n_cols = lines.first()?.len();
        if n_cols == 0 || lines.iter().any(|line| line.len() != n_cols) {
            return None;
        }

        let cells: Vec<u8> = lines.iter().flat_map(|line| line.bytes()).collect();
        Some(Self {
            grid: grid::Grid::from_vec(cells, n_cols),
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The position of the bottom right cell.
    #[inline]
    pub fn bottom_right(&self) -> Pos {
        Self::make_pos(self.rows() - 1, self.cols() - 1)
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Option<u8> {
        let (row, col) = Self::make_row_col(pos)?;
        self.grid.get(row, col).copied()
    }

    #[inline]
    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut u8> {
        let (row, col) = Self::make_row_col(pos)?;
        self.grid.get_mut(row, col)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        self.get(pos).is_some()
    }

    /// All cells in row-major order, with their positions.
    pub fn positions(&self) -> impl Iterator<Item = (Pos, u8)> + '_ {
        let n_cols = self.cols();
        self.grid.iter().enumerate().map(move |(i, &cell)| {
            let pos = Self::make_pos(i / n_cols, i % n_cols);
            (pos, cell)
        })
    }

    /// The first position holding `cell`, in row-major order.
    pub fn find(&self, cell: u8) -> Option<Pos> {
        self.positions()
            .find(|&(_, c)| c == cell)
            .map(|(pos, _)| pos)
    }

    /// The in-bounds orthogonal neighbours of `pos`.
    pub fn neighbors(&self, pos: Pos) -> SmallVec<[(Direction, Pos); 4]> {
        Direction::ALL
            .into_iter()
            .map(|dir| (dir, pos + dir.offset()))
            .filter(|&(_, next)| self.contains(next))
            .collect()
    }

    pub fn row(&self, row: usize) -> impl Iterator<Item = u8> + '_ {
        self.grid.iter_row(row).copied()
    }

    pub fn col(&self, col: usize) -> impl Iterator<Item = u8> + '_ {
        self.grid.iter_col(col).copied()
    }

    /// The raw cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = u8> + '_ {
        self.grid.iter().copied()
    }

    #[inline(always)]
    fn make_pos(row: usize, col: usize) -> Pos {
        Pos {
            x: col as i32,
            y: row as i32,
        }
    }

    #[inline(always)]
    fn make_row_col(pos: Pos) -> Option<(usize, usize)> {
        let row = pos.y.try_into().ok()?;
        let col = pos.x.try_into().ok()?;
        Some((row, col))
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            if row != 0 {
                writeln!(f)?;
            }
            for cell in self.row(row) {
                write!(f, "{}", cell as char)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CharGrid {}x{}:", self.rows(), self.cols())?;
        fmt::Display::fmt(self, f)
    }
}

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::sim::Status;

/// Rejected samples `place_food` tolerates before choosing among the free
/// cells directly.
const FOOD_SAMPLE_ATTEMPTS: usize = 64;

/// Body the snake starts with, head first.
pub const START_BODY: [Cell; 3] = [Cell::new(5, 5), Cell::new(4, 5), Cell::new(3, 5)];
pub const START_DIRECTION: Direction = Direction::Right;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Every cell of the grid, row by row.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell { x, y }))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Delta {
    x: i32,
    y: i32,
}

impl From<Direction> for Delta {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Delta { x: 0, y: -1 },
            Direction::Down => Delta { x: 0, y: 1 },
            Direction::Right => Delta { x: 1, y: 0 },
            Direction::Left => Delta { x: -1, y: 0 },
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u16,
    pub y: u16,
}

impl Cell {
    pub const fn new(x: u16, y: u16) -> Self {
        Cell { x, y }
    }

    fn wrapped_add(&self, delta: Delta, size: Size) -> Cell {
        let x = (self.x as i32 + delta.x).rem_euclid(size.width as i32) as u16;
        let y = (self.y as i32 + delta.y).rem_euclid(size.height as i32) as u16;
        Cell { x, y }
    }

    /// The adjacent cell in `direction`, re-entering from the opposite edge
    /// when stepping off the grid.
    pub fn neighbour(&self, direction: Direction, size: Size) -> Cell {
        self.wrapped_add(direction.into(), size)
    }
}

/// Authoritative snake and food data.
///
/// The body is a ring over a `Vec` whose capacity covers the whole grid, so
/// neither movement nor growth reallocates. Walking the ring from `head`
/// forwards (wrapping at the end) visits the snake from head to tail; the
/// slot just before `head` is the tail.
#[derive(Debug)]
pub struct GridState {
    pub(crate) size: Size,
    pub(crate) body: Vec<Cell>,
    pub(crate) head: usize,
    pub(crate) food: Cell,
    pub(crate) direction: Direction,
    pub(crate) committed: Direction,
    pub(crate) counter: u32,
    pub(crate) frq: u32,
    pub(crate) status: Status,
    rng: StdRng,
}

impl GridState {
    /// Builds a board in its starting configuration. `size` must leave room
    /// for [`START_BODY`].
    pub fn new(size: Size, frq: u32, rng: StdRng) -> Self {
        debug_assert!(size.width > 5 && size.height > 5, "grid too small: {:?}", size);

        let mut state = GridState {
            size,
            body: Vec::with_capacity(size.cell_count()),
            head: 0,
            food: Cell::default(),
            direction: START_DIRECTION,
            committed: START_DIRECTION,
            counter: 0,
            frq: frq.max(1),
            status: Status::Running,
            rng,
        };
        state.reset();
        state
    }

    pub fn reset(&mut self) {
        self.body.clear();
        self.body.extend_from_slice(&START_BODY);
        self.head = 0;
        self.direction = START_DIRECTION;
        self.committed = START_DIRECTION;
        self.status = Status::Running;
        self.counter = 0;
        self.place_food();
        info!("Board reset, food at {:?}", self.food);
    }

    /// Ring slot holding `cell`, if any.
    pub fn occupant_index(&self, cell: Cell) -> Option<usize> {
        self.body.iter().position(|part| *part == cell)
    }

    /// Moves the food to a random free cell.
    ///
    /// Returns `false` and marks the board as won when the body covers every
    /// cell; the food is left where it was in that case.
    pub fn place_food(&mut self) -> bool {
        if self.body.len() < self.size.cell_count() {
            for _ in 0..FOOD_SAMPLE_ATTEMPTS {
                let cell = Cell {
                    x: self.rng.gen_range(0..self.size.width),
                    y: self.rng.gen_range(0..self.size.height),
                };
                if self.occupant_index(cell).is_none() {
                    self.food = cell;
                    return true;
                }
            }

            debug!("Sampling found no free cell, picking from the remaining ones");
            let free: Vec<Cell> = self
                .size
                .cells()
                .filter(|cell| self.occupant_index(*cell).is_none())
                .collect();
            if let Some(cell) = free.choose(&mut self.rng) {
                self.food = *cell;
                return true;
            }
        }

        info!("Body fills all {} cells, nothing left to eat", self.size.cell_count());
        self.status = Status::Won;
        false
    }

    /// Lengthens the snake by re-inserting `tail` right behind the tail, i.e.
    /// at the head slot with the head shifted one slot along.
    pub fn grow_after(&mut self, tail: Cell) {
        self.body.insert(self.head, tail);
        self.head += 1;
    }

    /// Body cells from head to tail.
    pub fn segments(&self) -> impl Iterator<Item = Cell> + '_ {
        let (behind, ahead) = self.body.split_at(self.head);
        ahead.iter().chain(behind).copied()
    }

    pub fn head(&self) -> Cell {
        self.body[self.head]
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> usize {
        self.body.len()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

use log::{debug, info};

use crate::grid::{Direction, GridState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Running,
    GameOver,
    /// The body covers the whole grid.
    Won,
}

/// What the input side asks of the game on a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Turn(Direction),
    Reset,
}

#[derive(Debug, PartialEq, Eq)]
pub enum StepResult {
    Ongoing,   // Moved, nothing else happened
    Nommed,    // Ate the food and grew by one
    Filled,    // Ate the last free cell, game won
    Collision, // Hit self, game over
    Halted,    // Not running, nothing moved
}

impl GridState {
    /// Queues a turn for the next step. Reversing onto the last committed
    /// direction is refused, as is any turn outside of `Running`.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if self.status != Status::Running || direction == self.committed.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Turn(direction) => {
                if !self.steer(direction) {
                    debug!("Ignored turn {:?} while heading {:?}", direction, self.committed);
                }
            }
            Intent::Reset => self.reset(),
        }
    }

    /// Advances one frame: applies `intent`, then steps the snake once every
    /// `frq` frames. Returns the step outcome on frames that moved; a frame
    /// carrying a reset never moves.
    pub fn on_frame(&mut self, intent: Option<Intent>) -> Option<StepResult> {
        if let Some(intent) = intent {
            self.apply(intent);
            // the reset frame only restarts the cadence
            if intent == Intent::Reset {
                return None;
            }
        }

        if self.status != Status::Running {
            return None;
        }

        self.counter += 1;
        if self.counter < self.frq {
            return None;
        }
        self.counter = 0;
        Some(self.step())
    }

    /// Moves the snake one cell.
    ///
    /// The tail slot is overwritten with the new head position and becomes
    /// the head, so no other segment is touched. On food the old tail value is
    /// put back via [`GridState::grow_after`].
    pub fn step(&mut self) -> StepResult {
        if self.status != Status::Running {
            return StepResult::Halted;
        }

        let len = self.body.len();
        let last = (self.head + len - 1) % len;
        let vacated = self.body[last];
        let next = self.body[self.head].neighbour(self.direction, self.size);

        self.body[last] = next;
        self.head = last;
        self.committed = self.direction;

        let mut result = StepResult::Ongoing;
        if next == self.food {
            self.grow_after(vacated);
            debug!("Ate food at {:?}, length now {}", next, self.body.len());
            result = if self.place_food() {
                StepResult::Nommed
            } else {
                StepResult::Filled
            };
        }

        if self.hits_itself() {
            info!("Snake ran into itself at {:?}, score {}", next, self.score());
            self.status = Status::GameOver;
            return StepResult::Collision;
        }

        result
    }

    fn hits_itself(&self) -> bool {
        let head = self.body[self.head];
        self.body
            .iter()
            .enumerate()
            .any(|(i, part)| i != self.head && *part == head)
    }
}

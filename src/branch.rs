//! Types for representing branches and branch outcomes.

/// A branch outcome.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    /// Not taken
    N = 0,
    /// Taken
    T = 1,
}

impl Outcome {
    pub fn from_bool(b: bool) -> Self {
        match b {
            true => Self::T,
            false => Self::N,
        }
    }

    /// The single history bit corresponding to this outcome.
    pub fn bit(self) -> usize {
        self as usize
    }
}

impl std::fmt::Debug for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Self::T => "t",
            Self::N => "n",
        };
        write!(f, "{}", s)
    }
}

impl std::ops::Not for Outcome {
    type Output = Self;
    fn not(self) -> Self {
        match self {
            Self::N => Self::T,
            Self::T => Self::N,
        }
    }
}

impl From<bool> for Outcome {
    fn from(x: bool) -> Self {
        Self::from_bool(x)
    }
}

impl From<Outcome> for bool {
    fn from(x: Outcome) -> Self {
        match x {
            Outcome::T => true,
            Outcome::N => false,
        }
    }
}

/// A record of one resolved branch: the program counter value and the
/// direction the branch actually went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BranchEvent {
    pub pc: u64,
    pub outcome: Outcome,
}

impl BranchEvent {
    pub fn new(pc: u64, outcome: Outcome) -> Self {
        Self { pc, outcome }
    }

    pub fn taken(pc: u64) -> Self {
        Self { pc, outcome: Outcome::T }
    }

    pub fn not_taken(pc: u64) -> Self {
        Self { pc, outcome: Outcome::N }
    }
}

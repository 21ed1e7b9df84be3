#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Street {
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 0,
            Self::Flop => 3,
            Self::Turn => 4,
            Self::Rive => 5,
        }
    }

    /// board cards still to come before showdown
    pub const fn n_remaining(&self) -> usize {
        5 - self.n_observed()
    }
}

/// board sizes are the only thing that identifies a street
impl From<usize> for Street {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Pref,
            3 => Self::Flop,
            4 => Self::Turn,
            5 => Self::Rive,
            _ => panic!("no other board sizes"),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_size_roundtrip() {
        assert!(Street::from(0).n_observed() == 0);
        assert!(Street::from(3).n_observed() == 3);
        assert!(Street::from(4).n_observed() == 4);
        assert!(Street::from(5).n_observed() == 5);
    }

    #[test]
    fn observed_and_remaining_sum_to_board() {
        for street in [Street::Pref, Street::Flop, Street::Turn, Street::Rive] {
            assert!(street.n_observed() + street.n_remaining() == 5);
        }
    }
}

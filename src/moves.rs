//! The binary move every player makes each round.
use std::fmt;

/// A single player's choice for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Cooperate,
    Defect,
}

impl Move {
    /// The bit used to address the payoff table: Cooperate is 0, Defect 1.
    pub(crate) fn bit(self) -> usize {
        match self {
            Move::Cooperate => 0,
            Move::Defect => 1,
        }
    }

    /// Parse a single move letter, case-insensitive.
    pub fn from_char(ch: char) -> Option<Move> {
        match ch {
            'C' | 'c' => Some(Move::Cooperate),
            'D' | 'd' => Some(Move::Defect),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Move::Cooperate => 'C',
            Move::Defect => 'D',
        }
    }

    pub fn is_defect(self) -> bool {
        self == Move::Defect
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_accepts_both_cases() {
        assert_eq!(Move::from_char('c'), Some(Move::Cooperate));
        assert_eq!(Move::from_char('C'), Some(Move::Cooperate));
        assert_eq!(Move::from_char('d'), Some(Move::Defect));
        assert_eq!(Move::from_char('D'), Some(Move::Defect));
        assert_eq!(Move::from_char('x'), None);
    }

    #[test]
    fn test_display_matches_char() {
        assert_eq!(Move::Cooperate.to_string(), "C");
        assert_eq!(Move::Defect.to_string(), "D");
    }

    #[test]
    fn test_bits_address_both_halves() {
        assert_eq!(Move::Cooperate.bit(), 0);
        assert_eq!(Move::Defect.bit(), 1);
    }
}

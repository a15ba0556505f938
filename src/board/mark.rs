use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Mark {
    X = 0,
    O = 1,
}

impl Mark {
    const ALL: [Mark; 2] = [Mark::X, Mark::O];

    pub fn opposite(&self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// X is the maximizing player by convention.
    pub fn maximize_score(&self) -> bool {
        match self {
            Mark::X => true,
            Mark::O => false,
        }
    }

    /// Converts an X-positive score into this player's perspective.
    /// Every perspective flip in the engine goes through here, so the
    /// sign convention lives in exactly one place.
    #[inline]
    pub fn signed(&self, score: f64) -> f64 {
        match self {
            Mark::X => score,
            Mark::O => -score,
        }
    }

    pub fn random() -> Self {
        *Self::ALL.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark_str = match self {
            Mark::X => "X",
            Mark::O => "O",
        };
        write!(f, "{}", mark_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Mark {
    type Err = ParseError;
    fn from_str(mark: &str) -> Result<Self, Self::Err> {
        match mark {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            "random" => Ok(Mark::random()),
            _ => Err("invalid mark; options are: x, o, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Mark::ALL.contains(&Mark::random()));
    }

    #[test]
    fn test_parse_x() {
        assert_eq!(Mark::X, Mark::from_str("x").unwrap());
        assert_eq!(Mark::X, Mark::from_str("X").unwrap());
    }

    #[test]
    fn test_parse_o() {
        assert_eq!(Mark::O, Mark::from_str("o").unwrap());
        assert_eq!(Mark::O, Mark::from_str("O").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_mark = Mark::from_str("random").unwrap();
        assert!(Mark::ALL.contains(&rand_mark));
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Mark::X.opposite(), Mark::O);
        assert_eq!(Mark::O.opposite(), Mark::X);
    }

    #[test]
    fn test_signed_flips_for_o_only() {
        assert_eq!(Mark::X.signed(2.5), 2.5);
        assert_eq!(Mark::O.signed(2.5), -2.5);
    }
}

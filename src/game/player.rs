use std::fmt;

/// The symbol identifying one player's pieces on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker(char);

impl Marker {
    pub const fn new(symbol: char) -> Self {
        Marker(symbol)
    }

    pub fn symbol(self) -> char {
        self.0
    }
}

impl From<char> for Marker {
    fn from(symbol: char) -> Self {
        Marker(symbol)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant in the game. Created once before play starts and never
/// changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    marker: Marker,
}

impl Player {
    pub fn new(marker: impl Into<Marker>) -> Self {
        Player {
            marker: marker.into(),
        }
    }

    pub fn marker(&self) -> Marker {
        self.marker
    }
}

/// Which of the two players is meant: the one who moves first or second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
    }

    #[test]
    fn test_player_keeps_marker() {
        let player = Player::new('#');
        assert_eq!(player.marker(), Marker::new('#'));
        assert_eq!(player.marker().symbol(), '#');
    }

    #[test]
    fn test_marker_display() {
        assert_eq!(Marker::new('\u{2663}').to_string(), "\u{2663}");
    }
}

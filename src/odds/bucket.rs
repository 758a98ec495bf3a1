use crate::BLACKJACK;
use crate::DEALER_STAND;

/// The only totals a hand can end at. Everything below 17 keeps drawing;
/// everything above 21 is a bust.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Bucket {
    Seventeen = 0,
    Eighteen = 1,
    Nineteen = 2,
    Twenty = 3,
    TwentyOne = 4,
    Bust = 5,
}

impl Bucket {
    pub const ALL: [Bucket; 6] = [
        Bucket::Seventeen,
        Bucket::Eighteen,
        Bucket::Nineteen,
        Bucket::Twenty,
        Bucket::TwentyOne,
        Bucket::Bust,
    ];

    /// Classify a hand total, or None if the hand is still live.
    pub fn terminal(value: u8) -> Option<Bucket> {
        match value {
            17 => Some(Bucket::Seventeen),
            18 => Some(Bucket::Eighteen),
            19 => Some(Bucket::Nineteen),
            20 => Some(Bucket::Twenty),
            21 => Some(Bucket::TwentyOne),
            v if v > BLACKJACK => Some(Bucket::Bust),
            v => {
                debug_assert!(v < DEALER_STAND);
                None
            }
        }
    }

    /// The hand total this bucket stands on. None for Bust.
    pub fn total(&self) -> Option<u8> {
        match self {
            Bucket::Seventeen => Some(17),
            Bucket::Eighteen => Some(18),
            Bucket::Nineteen => Some(19),
            Bucket::Twenty => Some(20),
            Bucket::TwentyOne => Some(21),
            Bucket::Bust => None,
        }
    }
}

impl std::fmt::Display for Bucket {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.total() {
            Some(total) => write!(f, "{}", total),
            None => write!(f, "Bust"),
        }
    }
}

use super::action::Action;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Dealer up-card columns, by point value. Ten-valued ranks share a column.
const UPS: [u8; 10] = [2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

/// How hit/stand gets decided once double/split/surrender are off the table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Answer straight from the table.
    Table,
    /// Compare one-ply hit vs stand expected values from the live shoe.
    #[default]
    ExpectedValue,
}

/// The three lookup tables (hard/soft/pair), keyed by hand total and dealer
/// up-card value. Lookup precedence is soft, then pair, then hard; note a
/// pair of aces is soft 12 and routes to the soft table.
#[derive(Debug, Clone)]
pub struct Tables {
    hard: HashMap<(u8, u8), Action>,
    soft: HashMap<(u8, u8), Action>,
    pair: HashMap<(u8, u8), Action>,
    pub mode: Mode,
}

impl Tables {
    /// Baseline recommendation for this hand against this up-card.
    /// A missing entry means the tables are incomplete, which is fatal.
    pub fn lookup(&self, hand: &Hand, up: Rank) -> Action {
        let total = hand.value();
        let (name, table) = if hand.is_soft() {
            ("soft", &self.soft)
        } else if hand.is_splittable() {
            ("pair", &self.pair)
        } else {
            ("hard", &self.hard)
        };
        *table.get(&(total, up.value())).unwrap_or_else(|| {
            panic!("incomplete {} strategy table: total {} against {}", name, total, up)
        })
    }

    /// The standard multi-deck basic strategy, shipped with the crate.
    pub fn basic() -> Self {
        Self {
            hard: Self::parse(&HARD),
            soft: Self::parse(&SOFT),
            pair: Self::parse(&PAIR),
            mode: Mode::default(),
        }
    }

    /// Load the three tables from JSON: `{"hard": {"12": {"2": "H", ...}}}`,
    /// with up-card columns in the card symbol vocabulary.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        #[derive(serde::Deserialize)]
        struct Raw {
            hard: BTreeMap<u8, BTreeMap<String, String>>,
            soft: BTreeMap<u8, BTreeMap<String, String>>,
            pair: BTreeMap<u8, BTreeMap<String, String>>,
        }
        let text = std::fs::read_to_string(path)?;
        let raw = serde_json::from_str::<Raw>(&text)?;
        let build = |rows: BTreeMap<u8, BTreeMap<String, String>>| {
            rows.into_iter()
                .flat_map(|(total, row)| {
                    row.into_iter().map(move |(up, code)| {
                        let up = Rank::from(up.as_str()).value();
                        ((total, up), Action::from(code.as_str()))
                    })
                })
                .collect::<HashMap<_, _>>()
        };
        Ok(Self {
            hard: build(raw.hard),
            soft: build(raw.soft),
            pair: build(raw.pair),
            mode: Mode::default(),
        })
    }

    /// Every total maps to the same action; isolates the EV comparison
    /// in decision tests from the baseline recommendation.
    #[cfg(test)]
    pub fn uniform(action: Action) -> Self {
        let flat = (2..=21u8)
            .flat_map(|total| UPS.into_iter().map(move |up| ((total, up), action)))
            .collect::<HashMap<_, _>>();
        Self {
            hard: flat.clone(),
            soft: flat.clone(),
            pair: flat,
            mode: Mode::default(),
        }
    }

    fn parse(rows: &[(u8, &str)]) -> HashMap<(u8, u8), Action> {
        rows.iter()
            .flat_map(|(total, codes)| {
                let codes = codes.split_whitespace().collect::<Vec<_>>();
                assert!(codes.len() == UPS.len(), "malformed strategy row: {}", codes.join(" "));
                UPS.into_iter()
                    .zip(codes)
                    .map(move |(up, code)| ((*total, up), Action::from(code)))
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

//                          up:  2  3  4  5  6  7  8  9  10 A
const HARD: [(u8, &str); 17] = [
    (5, /*  */ "H  H  H  H  H  H  H  H  H  H"),
    (6, /*  */ "H  H  H  H  H  H  H  H  H  H"),
    (7, /*  */ "H  H  H  H  H  H  H  H  H  H"),
    (8, /*  */ "H  H  H  H  H  H  H  H  H  H"),
    (9, /*  */ "H  D  D  D  D  H  H  H  H  H"),
    (10, /* */ "D  D  D  D  D  D  D  D  H  H"),
    (11, /* */ "D  D  D  D  D  D  D  D  D  H"),
    (12, /* */ "H  H  S  S  S  H  H  H  H  H"),
    (13, /* */ "S  S  S  S  S  H  H  H  H  H"),
    (14, /* */ "S  S  S  S  S  H  H  H  H  H"),
    (15, /* */ "S  S  S  S  S  H  H  H  Sr H"),
    (16, /* */ "S  S  S  S  S  H  H  Sr Sr Sr"),
    (17, /* */ "S  S  S  S  S  S  S  S  S  S"),
    (18, /* */ "S  S  S  S  S  S  S  S  S  S"),
    (19, /* */ "S  S  S  S  S  S  S  S  S  S"),
    (20, /* */ "S  S  S  S  S  S  S  S  S  S"),
    (21, /* */ "S  S  S  S  S  S  S  S  S  S"),
];
const SOFT: [(u8, &str); 10] = [
    (12, /* */ "P  P  P  P  P  P  P  P  P  P"),
    (13, /* */ "H  H  H  D  D  H  H  H  H  H"),
    (14, /* */ "H  H  H  D  D  H  H  H  H  H"),
    (15, /* */ "H  H  D  D  D  H  H  H  H  H"),
    (16, /* */ "H  H  D  D  D  H  H  H  H  H"),
    (17, /* */ "H  D  D  D  D  H  H  H  H  H"),
    (18, /* */ "S  D  D  D  D  S  S  H  H  H"),
    (19, /* */ "S  S  S  S  S  S  S  S  S  S"),
    (20, /* */ "S  S  S  S  S  S  S  S  S  S"),
    (21, /* */ "S  S  S  S  S  S  S  S  S  S"),
];
const PAIR: [(u8, &str); 9] = [
    (4, /*  */ "P  P  P  P  P  P  H  H  H  H"),
    (6, /*  */ "P  P  P  P  P  P  H  H  H  H"),
    (8, /*  */ "H  H  H  P  P  H  H  H  H  H"),
    (10, /* */ "D  D  D  D  D  D  D  D  H  H"),
    (12, /* */ "P  P  P  P  P  H  H  H  H  H"),
    (14, /* */ "P  P  P  P  P  P  H  H  H  H"),
    (16, /* */ "P  P  P  P  P  P  P  P  P  P"),
    (18, /* */ "P  P  P  P  P  S  P  P  S  S"),
    (20, /* */ "S  S  S  S  S  S  S  S  S  S"),
];

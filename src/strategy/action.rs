use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;

/// Closed set of player actions. Strategy tables speak in these; the
/// round orchestrator handles every variant exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Hit,
    Stand,
    Double,
    Split,
    Surrender,
}

/// Table code isomorphism ("H", "S", "D", "P", "Sr").
impl From<&str> for Action {
    fn from(code: &str) -> Self {
        match code {
            "H" => Action::Hit,
            "S" => Action::Stand,
            "D" => Action::Double,
            "P" => Action::Split,
            "Sr" => Action::Surrender,
            _ => panic!("invalid action code: {}", code),
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Hit => write!(f, "{}", "HIT".cyan()),
            Action::Stand => write!(f, "{}", "STAND".green()),
            Action::Double => write!(f, "{}", "DOUBLE".yellow()),
            Action::Split => write!(f, "{}", "SPLIT".magenta()),
            Action::Surrender => write!(f, "{}", "SURRENDER".red()),
        }
    }
}

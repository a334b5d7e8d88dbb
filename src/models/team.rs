//! League team model: a participant and its drafted roster.

use serde::{Deserialize, Serialize};

use super::Franchise;

/// Number of franchises every team drafts.
pub const ROSTER_SIZE: usize = 4;

/// A league participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team name
    pub name: String,

    /// Drafted franchises, fixed for the season
    pub roster: Vec<Franchise>,
}

impl Team {
    pub fn new(name: impl Into<String>, roster: Vec<Franchise>) -> Self {
        Self {
            name: name.into(),
            roster,
        }
    }

    /// Whether the franchise is on this team's roster.
    pub fn owns(&self, franchise: Franchise) -> bool {
        self.roster.contains(&franchise)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_owns() {
        let team = Team::new(
            "Pick Six Club",
            vec![
                Franchise::ChicagoBears,
                Franchise::NewYorkJets,
                Franchise::CarolinaPanthers,
                Franchise::TennesseeTitans,
            ],
        );

        assert!(team.owns(Franchise::NewYorkJets));
        assert!(!team.owns(Franchise::KansasCityChiefs));
    }

    #[test]
    fn test_team_deserialize() {
        let json = r#"{"name":"Pick Six Club","roster":["CHI","Jets","Carolina Panthers","TEN"]}"#;
        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.roster.len(), ROSTER_SIZE);
        assert_eq!(team.roster[1], Franchise::NewYorkJets);
    }
}

//! The 32 NFL franchises that league teams draft as "QBs".

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown franchise: {0}")]
pub struct UnknownFranchise(pub String);

/// An NFL franchise, scored as a single quarterback unit.
///
/// Serialized as its full display name ("Chicago Bears").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Franchise {
    ArizonaCardinals,
    AtlantaFalcons,
    BaltimoreRavens,
    BuffaloBills,
    CarolinaPanthers,
    ChicagoBears,
    CincinnatiBengals,
    ClevelandBrowns,
    DallasCowboys,
    DenverBroncos,
    DetroitLions,
    GreenBayPackers,
    HoustonTexans,
    IndianapolisColts,
    JacksonvilleJaguars,
    KansasCityChiefs,
    LasVegasRaiders,
    LosAngelesChargers,
    LosAngelesRams,
    MiamiDolphins,
    MinnesotaVikings,
    NewEnglandPatriots,
    NewOrleansSaints,
    NewYorkGiants,
    NewYorkJets,
    PhiladelphiaEagles,
    PittsburghSteelers,
    SanFrancisco49ers,
    SeattleSeahawks,
    TampaBayBuccaneers,
    TennesseeTitans,
    WashingtonCommanders,
}

impl Franchise {
    pub const ALL: [Franchise; 32] = [
        Franchise::ArizonaCardinals,
        Franchise::AtlantaFalcons,
        Franchise::BaltimoreRavens,
        Franchise::BuffaloBills,
        Franchise::CarolinaPanthers,
        Franchise::ChicagoBears,
        Franchise::CincinnatiBengals,
        Franchise::ClevelandBrowns,
        Franchise::DallasCowboys,
        Franchise::DenverBroncos,
        Franchise::DetroitLions,
        Franchise::GreenBayPackers,
        Franchise::HoustonTexans,
        Franchise::IndianapolisColts,
        Franchise::JacksonvilleJaguars,
        Franchise::KansasCityChiefs,
        Franchise::LasVegasRaiders,
        Franchise::LosAngelesChargers,
        Franchise::LosAngelesRams,
        Franchise::MiamiDolphins,
        Franchise::MinnesotaVikings,
        Franchise::NewEnglandPatriots,
        Franchise::NewOrleansSaints,
        Franchise::NewYorkGiants,
        Franchise::NewYorkJets,
        Franchise::PhiladelphiaEagles,
        Franchise::PittsburghSteelers,
        Franchise::SanFrancisco49ers,
        Franchise::SeattleSeahawks,
        Franchise::TampaBayBuccaneers,
        Franchise::TennesseeTitans,
        Franchise::WashingtonCommanders,
    ];

    /// Full display name, e.g. "Green Bay Packers".
    pub fn name(self) -> &'static str {
        match self {
            Franchise::ArizonaCardinals => "Arizona Cardinals",
            Franchise::AtlantaFalcons => "Atlanta Falcons",
            Franchise::BaltimoreRavens => "Baltimore Ravens",
            Franchise::BuffaloBills => "Buffalo Bills",
            Franchise::CarolinaPanthers => "Carolina Panthers",
            Franchise::ChicagoBears => "Chicago Bears",
            Franchise::CincinnatiBengals => "Cincinnati Bengals",
            Franchise::ClevelandBrowns => "Cleveland Browns",
            Franchise::DallasCowboys => "Dallas Cowboys",
            Franchise::DenverBroncos => "Denver Broncos",
            Franchise::DetroitLions => "Detroit Lions",
            Franchise::GreenBayPackers => "Green Bay Packers",
            Franchise::HoustonTexans => "Houston Texans",
            Franchise::IndianapolisColts => "Indianapolis Colts",
            Franchise::JacksonvilleJaguars => "Jacksonville Jaguars",
            Franchise::KansasCityChiefs => "Kansas City Chiefs",
            Franchise::LasVegasRaiders => "Las Vegas Raiders",
            Franchise::LosAngelesChargers => "Los Angeles Chargers",
            Franchise::LosAngelesRams => "Los Angeles Rams",
            Franchise::MiamiDolphins => "Miami Dolphins",
            Franchise::MinnesotaVikings => "Minnesota Vikings",
            Franchise::NewEnglandPatriots => "New England Patriots",
            Franchise::NewOrleansSaints => "New Orleans Saints",
            Franchise::NewYorkGiants => "New York Giants",
            Franchise::NewYorkJets => "New York Jets",
            Franchise::PhiladelphiaEagles => "Philadelphia Eagles",
            Franchise::PittsburghSteelers => "Pittsburgh Steelers",
            Franchise::SanFrancisco49ers => "San Francisco 49ers",
            Franchise::SeattleSeahawks => "Seattle Seahawks",
            Franchise::TampaBayBuccaneers => "Tampa Bay Buccaneers",
            Franchise::TennesseeTitans => "Tennessee Titans",
            Franchise::WashingtonCommanders => "Washington Commanders",
        }
    }

    /// Standard two/three-letter abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Franchise::ArizonaCardinals => "ARI",
            Franchise::AtlantaFalcons => "ATL",
            Franchise::BaltimoreRavens => "BAL",
            Franchise::BuffaloBills => "BUF",
            Franchise::CarolinaPanthers => "CAR",
            Franchise::ChicagoBears => "CHI",
            Franchise::CincinnatiBengals => "CIN",
            Franchise::ClevelandBrowns => "CLE",
            Franchise::DallasCowboys => "DAL",
            Franchise::DenverBroncos => "DEN",
            Franchise::DetroitLions => "DET",
            Franchise::GreenBayPackers => "GB",
            Franchise::HoustonTexans => "HOU",
            Franchise::IndianapolisColts => "IND",
            Franchise::JacksonvilleJaguars => "JAX",
            Franchise::KansasCityChiefs => "KC",
            Franchise::LasVegasRaiders => "LV",
            Franchise::LosAngelesChargers => "LAC",
            Franchise::LosAngelesRams => "LAR",
            Franchise::MiamiDolphins => "MIA",
            Franchise::MinnesotaVikings => "MIN",
            Franchise::NewEnglandPatriots => "NE",
            Franchise::NewOrleansSaints => "NO",
            Franchise::NewYorkGiants => "NYG",
            Franchise::NewYorkJets => "NYJ",
            Franchise::PhiladelphiaEagles => "PHI",
            Franchise::PittsburghSteelers => "PIT",
            Franchise::SanFrancisco49ers => "SF",
            Franchise::SeattleSeahawks => "SEA",
            Franchise::TampaBayBuccaneers => "TB",
            Franchise::TennesseeTitans => "TEN",
            Franchise::WashingtonCommanders => "WAS",
        }
    }

    /// Nickname only, e.g. "Packers".
    pub fn nickname(self) -> &'static str {
        let name = self.name();
        name.rsplit(' ').next().unwrap_or(name)
    }
}

impl fmt::Display for Franchise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Franchise {
    type Err = UnknownFranchise;

    /// Accepts the full name, the nickname or the abbreviation, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Franchise::ALL
            .into_iter()
            .find(|f| {
                f.name().eq_ignore_ascii_case(needle)
                    || f.nickname().eq_ignore_ascii_case(needle)
                    || f.abbreviation().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| UnknownFranchise(s.to_string()))
    }
}

impl TryFrom<String> for Franchise {
    type Error = UnknownFranchise;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Franchise> for String {
    fn from(franchise: Franchise) -> Self {
        franchise.name().to_string()
    }
}

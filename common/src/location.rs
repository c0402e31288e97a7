use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.lat, self.lng)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Egypt,
    Sa,
}

impl Branch {
    pub fn key(&self) -> &'static str {
        match self {
            Branch::Egypt => "egypt",
            Branch::Sa => "sa",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PinColor {
    Red,
    Blue,
}

impl fmt::Display for PinColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinColor::Red => write!(f, "red"),
            PinColor::Blue => write!(f, "blue"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Location {
    pub branch: Branch,
    pub label: String,
    pub address: String,
    pub coordinate: Coordinate,
    pub pin: PinColor,
}

/// Which markers the map shows. One tab per scope on the locations page.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
pub enum MapScope {
    #[default]
    All,
    Branch(Branch),
}

impl MapScope {
    pub const TABS: [MapScope; 3] = [
        MapScope::All,
        MapScope::Branch(Branch::Egypt),
        MapScope::Branch(Branch::Sa),
    ];

    pub fn includes(&self, branch: Branch) -> bool {
        match self {
            MapScope::All => true,
            MapScope::Branch(only) => *only == branch,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct UnknownScope(pub String);

impl std::error::Error for UnknownScope {}

impl fmt::Display for UnknownScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown map scope `{}` (expected all, egypt or sa)", self.0)
    }
}

impl FromStr for MapScope {
    type Err = UnknownScope;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "all" => Ok(MapScope::All),
            "egypt" => Ok(MapScope::Branch(Branch::Egypt)),
            "sa" => Ok(MapScope::Branch(Branch::Sa)),
            other => Err(UnknownScope(other.to_string())),
        }
    }
}

impl fmt::Display for MapScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapScope::All => write!(f, "all"),
            MapScope::Branch(branch) => write!(f, "{}", branch.key()),
        }
    }
}

use serde::{Deserialize, Serialize};

/// A body of water under inspection: a lake, canal, river stretch, etc.
/// Reference data, managed outside the core flows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Water {
    pub id: i64,
    /// Unique display name, e.g. "Grote Plas".
    pub name: String,
    pub kind: WaterKind,
    /// Managing region or association area, e.g. "HV Lelystad-Dronten".
    pub region: Option<String>,
    /// Free-form description including local fishing rules.
    pub description: Option<String>,
    /// GPS coordinates for map display.
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Fixed set of water types, for data integrity in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterKind {
    Lake,
    River,
    Canal,
    CityCanal,
    Pond,
    Ditch,
    Other,
}

impl WaterKind {
    /// Stable string form used in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lake => "lake",
            Self::River => "river",
            Self::Canal => "canal",
            Self::CityCanal => "city_canal",
            Self::Pond => "pond",
            Self::Ditch => "ditch",
            Self::Other => "other",
        }
    }

    /// Parse the storage string form. Unknown values map to `Other`.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "lake" => Self::Lake,
            "river" => Self::River,
            "canal" => Self::Canal,
            "city_canal" => Self::CityCanal,
            "pond" => Self::Pond,
            "ditch" => Self::Ditch,
            _ => Self::Other,
        }
    }
}

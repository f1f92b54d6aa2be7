//! Dining Table Model

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};

/// Prefix the API uses for take-away pseudo tables
pub const TAKE_AWAY_TAG: &str = "take away";

/// Table number (桌号)
///
/// The API sends plain integers for dining tables and a text tag such as
/// `"Take Away"` for take-away slots. Numeric values are written back as
/// JSON numbers so order payloads keep the server's column type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableNumber(String);

impl TableNumber {
    pub fn new(value: impl Into<String>) -> ModelResult<Self> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(ModelError::EmptyTableNumber);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if this is a regular dining table
    pub fn as_number(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    /// Whether this is a take-away slot rather than a physical table
    pub fn is_take_away(&self) -> bool {
        self.0.to_lowercase().starts_with(TAKE_AWAY_TAG)
    }
}

impl From<i64> for TableNumber {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for TableNumber {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for TableNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for TableNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_number() {
            Some(n) => serializer.serialize_i64(n),
            None => serializer.serialize_str(&self.0),
        }
    }
}

struct TableNumberVisitor;

impl Visitor<'_> for TableNumberVisitor {
    type Value = TableNumber;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a table number or take-away tag")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(TableNumber::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(TableNumber(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        TableNumber::new(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for TableNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TableNumberVisitor)
    }
}

/// Floor area a table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLocation {
    #[default]
    Inside,
    Outside,
    /// Any area this client does not know how to show
    #[serde(other)]
    Other,
}

impl TableLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inside => "inside",
            Self::Outside => "outside",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for TableLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableLocation {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inside" => Ok(Self::Inside),
            "outside" => Ok(Self::Outside),
            other => Err(ModelError::UnknownLocation(other.to_string())),
        }
    }
}

/// Position and size on the floor plan, in percent of the layout area
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: i64,
    pub location: TableLocation,
    pub table_number: TableNumber,
    /// Take-away sequence number, only set for take-away slots
    #[serde(default)]
    pub ta_number: Option<TableNumber>,
    #[serde(default)]
    pub width_percentage: f64,
    #[serde(default)]
    pub height_percentage: f64,
    #[serde(default)]
    pub x_position_percentage: f64,
    #[serde(default)]
    pub y_position_percentage: f64,
}

impl DiningTable {
    pub fn layout(&self) -> LayoutRect {
        LayoutRect {
            x: self.x_position_percentage,
            y: self.y_position_percentage,
            width: self.width_percentage,
            height: self.height_percentage,
        }
    }

    /// Label shown on the floor plan
    pub fn label(&self) -> String {
        if self.table_number.is_take_away() {
            match &self.ta_number {
                Some(n) => format!("Take Away {}", n),
                None => "Take Away".to_string(),
            }
        } else {
            self.table_number.to_string()
        }
    }
}

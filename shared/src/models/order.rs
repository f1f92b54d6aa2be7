//! Order Line Model

use chrono::{DateTime, NaiveDateTime};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::TableNumber;
use crate::error::{ModelError, ModelResult};

/// Shown when a line has no options
pub const NO_OPTION: &str = "No option";
/// Shown when a line has no comment
pub const NO_COMMENT: &str = "No comment";
/// Shown for an option id the server could not resolve
pub const UNRESOLVED_OPTION: &str = "none";
/// Shown when neither the line nor the catalog knows the product name
pub const UNKNOWN_PRODUCT: &str = "Unknown Product";

/// Order line lifecycle
///
/// `pending` lines are staged for the kitchen ticket, `open` lines have been
/// printed. `closed`, `deleted` and `discarded` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Open,
    Closed,
    Deleted,
    Discarded,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Deleted => "deleted",
            Self::Discarded => "discarded",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Closed | Self::Deleted | Self::Discarded)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "deleted" => Ok(Self::Deleted),
            "discarded" => Ok(Self::Discarded),
            other => Err(ModelError::UnknownStatus(other.to_string())),
        }
    }
}

/// Selected option ids of one order line
///
/// Keeps insertion order and never holds the same id twice. On the wire it
/// is a comma-delimited string (`"2,4"`); older rows may carry a bare number
/// or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionSet(Vec<i64>);

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the delimited wire form. Blank segments are skipped.
    pub fn parse(raw: &str) -> ModelResult<Self> {
        let mut set = Self::new();
        for part in raw.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let id = part
                .parse()
                .map_err(|_| ModelError::InvalidOptionId(part.to_string()))?;
            set.insert(id);
        }
        Ok(set)
    }

    /// Returns false if the id was already present
    pub fn insert(&mut self, id: i64) -> bool {
        if self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.0.len();
        self.0.retain(|&x| x != id);
        self.0.len() != before
    }

    /// Flip membership, returning whether the id is now selected
    pub fn toggle(&mut self, id: i64) -> bool {
        if self.remove(id) {
            false
        } else {
            self.0.push(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    /// Delimited wire form, e.g. `"2,4"`; empty string for no options
    pub fn to_wire(&self) -> String {
        self.0
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromIterator<i64> for OptionSet {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl Serialize for OptionSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

struct OptionSetVisitor;

impl<'de> Visitor<'de> for OptionSetVisitor {
    type Value = OptionSet;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a comma-delimited option id string, an id, a list of ids or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        OptionSet::parse(v).map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(std::iter::once(v).collect())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let id = i64::try_from(v).map_err(E::custom)?;
        Ok(std::iter::once(id).collect())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionSet::new())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(OptionSet::new())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut set = OptionSet::new();
        while let Some(id) = seq.next_element::<i64>()? {
            set.insert(id);
        }
        Ok(set)
    }
}

impl<'de> Deserialize<'de> for OptionSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(OptionSetVisitor)
    }
}

/// One product (plus options and comment) on a table's order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: i64,
    /// Creation time as stored by the server (`YYYY-MM-DD HH:MM:SS`)
    #[serde(default)]
    pub timestamp: Option<String>,
    pub table_number: TableNumber,
    pub product_number: i64,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub option_number: OptionSet,
    #[serde(default)]
    pub option_details: Option<String>,
    /// Free-text comment
    #[serde(default)]
    pub option_text: Option<String>,
}

impl OrderLine {
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        let raw = self.timestamp.as_deref()?.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_local()))
    }

    /// Comment, if the line has a non-blank one
    pub fn comment(&self) -> Option<&str> {
        self.option_text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

/// Body of `POST /orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOrderLine {
    pub product_number: i64,
    pub category_number: i64,
    /// Delimited option ids, see [`OptionSet::to_wire`]
    pub option_number: String,
    pub option_text: String,
    pub table_number: TableNumber,
    pub status: OrderStatus,
}

/// Ticket line staged for `POST /print_order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintItem {
    pub id: i64,
    pub product_name: String,
    pub option_details: String,
    pub option_text: String,
    pub product_number: i64,
}

/// Body of `POST /print_order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintOrderRequest {
    pub table_number: TableNumber,
    pub orders: Vec<PrintItem>,
}

/// Generic `{ "message": .. }` / `{ "error": .. }` reply
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Whole-table status changes, each a single `POST ?table_number=`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkTransition {
    /// Close every open line of the table (`/close_orders`)
    Close,
    /// Discard every line of the table (`/discard_orders`)
    Discard,
    /// Promote pending lines to open after printing (`/update_orders`)
    Promote,
}

impl BulkTransition {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Close => "close_orders",
            Self::Discard => "discard_orders",
            Self::Promote => "update_orders",
        }
    }

    /// Status the affected lines end up in
    pub fn target_status(&self) -> OrderStatus {
        match self {
            Self::Close => OrderStatus::Closed,
            Self::Discard => OrderStatus::Deleted,
            Self::Promote => OrderStatus::Open,
        }
    }
}

impl fmt::Display for BulkTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.endpoint())
    }
}

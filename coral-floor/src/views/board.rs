//! Table Board view

use serde::Serialize;
use shared::models::{DiningTable, LayoutRect, TableLocation, TableNumber};
use std::collections::{HashMap, HashSet};

/// Shown when the active location has no tables
pub const EMPTY_BOARD: &str = "No tables available.";

/// Stable identity of a tile, independent of its rendered label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TableKey(TableNumber);

impl From<&TableNumber> for TableKey {
    fn from(n: &TableNumber) -> Self {
        Self(n.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableTile {
    pub key: TableKey,
    pub label: String,
    pub layout: LayoutRect,
    /// Table has at least one open line
    pub highlighted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoardView {
    pub location: TableLocation,
    pub tiles: Vec<TableTile>,
    pub empty_message: Option<String>,
    #[serde(skip)]
    index: HashMap<TableKey, Vec<usize>>,
}

impl BoardView {
    pub fn empty(location: TableLocation) -> Self {
        Self {
            location,
            empty_message: Some(EMPTY_BOARD.to_string()),
            ..Default::default()
        }
    }

    /// One tile per table, highlighted if its number is in `open_tables`
    pub fn build(
        location: TableLocation,
        tables: &[DiningTable],
        open_tables: &HashSet<TableNumber>,
    ) -> Self {
        if tables.is_empty() {
            return Self::empty(location);
        }

        let mut view = Self {
            location,
            ..Default::default()
        };
        for table in tables {
            let key = TableKey::from(&table.table_number);
            view.index.entry(key.clone()).or_default().push(view.tiles.len());
            view.tiles.push(TableTile {
                key,
                label: table.label(),
                layout: table.layout(),
                highlighted: open_tables.contains(&table.table_number),
            });
        }
        view
    }

    /// Tiles registered under `key` (take-away slots may share one)
    pub fn tiles_for(&self, key: &TableKey) -> impl Iterator<Item = &TableTile> {
        self.index
            .get(key)
            .into_iter()
            .flatten()
            .filter_map(|&i| self.tiles.get(i))
    }

    /// Mark a table highlighted; false if no tile has that number
    pub fn highlight(&mut self, table_number: &TableNumber) -> bool {
        let Some(indices) = self.index.get(&TableKey::from(table_number)) else {
            return false;
        };
        for &i in indices {
            if let Some(tile) = self.tiles.get_mut(i) {
                tile.highlighted = true;
            }
        }
        true
    }

    pub fn is_highlighted(&self, table_number: &TableNumber) -> bool {
        self.tiles_for(&TableKey::from(table_number))
            .any(|t| t.highlighted)
    }
}

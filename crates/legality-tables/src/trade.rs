//! Trade template tables
//!
//! One row per language id. A row holds every expected nickname of the
//! group followed by the matching expected trainer names:
//!
//! ```text
//! [nick_0 .. nick_{n-1}, trainer_0 .. trainer_{n-1}]
//! ```
//!
//! An empty row means the group has no localization for that language.

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Games sharing one trade template table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeGroup {
    Rse,
    Frlg,
    Dppt,
    Hgss,
    Bw,
    B2w2,
    Xy,
    Ao,
    Sm,
    Usum,
}

impl TradeGroup {
    pub fn key(self) -> &'static str {
        match self {
            TradeGroup::Rse => "rse",
            TradeGroup::Frlg => "frlg",
            TradeGroup::Dppt => "dppt",
            TradeGroup::Hgss => "hgss",
            TradeGroup::Bw => "bw",
            TradeGroup::B2w2 => "b2w2",
            TradeGroup::Xy => "xy",
            TradeGroup::Ao => "ao",
            TradeGroup::Sm => "sm",
            TradeGroup::Usum => "usum",
        }
    }
}

impl fmt::Display for TradeGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Language-indexed trade table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TradeTable {
    rows: Vec<Vec<String>>,
}

impl TradeTable {
    /// Build a table, rejecting rows whose halves cannot line up
    pub fn new(group: TradeGroup, rows: Vec<Vec<String>>) -> Result<Self, TableError> {
        for (language, row) in rows.iter().enumerate() {
            if row.len() % 2 != 0 {
                return Err(TableError::AsymmetricRow {
                    group: group.key().to_string(),
                    language,
                    len: row.len(),
                });
            }
        }
        Ok(Self { rows })
    }

    /// Row for a language index; indexes past the table fall back to row 0
    pub fn row(&self, language: usize) -> TradeRow<'_> {
        let row = self
            .rows
            .get(language)
            .or_else(|| self.rows.first())
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        TradeRow(row)
    }

    /// Rows in language order
    pub fn rows(&self) -> impl Iterator<Item = (usize, TradeRow<'_>)> {
        self.rows.iter().enumerate().map(|(i, r)| (i, TradeRow(r.as_slice())))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One language's nickname/trainer pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeRow<'a>(&'a [String]);

impl<'a> TradeRow<'a> {
    /// Number of templates described by the row
    pub fn template_count(&self) -> usize {
        self.0.len() / 2
    }

    /// No localization for this language
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Expected nickname of template `index`
    pub fn nickname(&self, index: usize) -> Option<&'a str> {
        if index >= self.template_count() {
            return None;
        }
        self.0.get(index).map(String::as_str)
    }

    /// Expected trainer name of template `index`
    pub fn trainer(&self, index: usize) -> Option<&'a str> {
        if index >= self.template_count() {
            return None;
        }
        self.0.get(self.template_count() + index).map(String::as_str)
    }

    /// Both expected strings of template `index`
    pub fn pair(&self, index: usize) -> Option<(&'a str, &'a str)> {
        Some((self.nickname(index)?, self.trainer(index)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_row_halves() {
        let table = TradeTable::new(
            TradeGroup::Dppt,
            vec![vec![], row(&["KAZZA", "FOPPA", "MINDY", "MEISTER"])],
        )
        .unwrap();

        let r = table.row(1);
        assert_eq!(r.template_count(), 2);
        assert_eq!(r.pair(1), Some(("FOPPA", "MEISTER")));
        assert_eq!(r.nickname(2), None);
        assert_eq!(r.trainer(2), None);
    }

    #[test]
    fn test_out_of_range_language_uses_first_row() {
        let table = TradeTable::new(TradeGroup::Xy, vec![row(&["A", "B"])]).unwrap();
        assert_eq!(table.row(9).nickname(0), Some("A"));
    }

    #[test]
    fn test_empty_row_is_sentinel() {
        let table = TradeTable::new(TradeGroup::Xy, vec![vec![], vec![]]).unwrap();
        assert!(table.row(1).is_empty());
        assert_eq!(table.row(1).nickname(0), None);
    }

    #[test]
    fn test_odd_row_rejected() {
        let err = TradeTable::new(TradeGroup::Bw, vec![vec![], row(&["A", "B", "C"])]).unwrap_err();
        assert!(matches!(err, TableError::AsymmetricRow { language: 1, len: 3, .. }));
    }
}

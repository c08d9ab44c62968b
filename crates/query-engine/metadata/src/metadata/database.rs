//! Metadata information regarding the database and tracked information.

use std::fmt;

/// The scalar types a column can hold in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScalarType {
    Int,
    Float,
    /// Text. Dates are stored as `YYYY-MM-DD` text.
    String,
}

impl ScalarType {
    /// The scalar type a declared SQLite column type resolves to, following
    /// SQLite's column affinity rules. `None` for BLOB and NUMERIC affinity.
    pub fn from_declared_type(declared: &str) -> Option<ScalarType> {
        let declared = declared.to_ascii_uppercase();
        if declared.contains("INT") {
            Some(ScalarType::Int)
        } else if ["CHAR", "CLOB", "TEXT"]
            .iter()
            .any(|affinity| declared.contains(affinity))
        {
            Some(ScalarType::String)
        } else if ["REAL", "FLOA", "DOUB"]
            .iter()
            .any(|affinity| declared.contains(affinity))
        {
            Some(ScalarType::Float)
        } else {
            None
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => write!(f, "INTEGER"),
            Self::Float => write!(f, "FLOAT"),
            Self::String => write!(f, "TEXT"),
        }
    }
}

/// Information about a database table object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableInfo {
    pub table_name: &'static str,
    pub columns: &'static [ColumnInfo],
}

/// Information about a database column object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: &'static str,
    pub r#type: ScalarType,
}

impl TableInfo {
    /// Look up a declared column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// The names of all declared columns, in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        let columns: &'static [ColumnInfo] = self.columns;
        columns.iter().map(|column| column.name)
    }
}

//! Check the live store against the statically declared tables.

use query_engine_metadata::metadata::{ScalarType, TableInfo};

use crate::error::Error;
use crate::session::Session;

const TABLE_COLUMNS_QUERY: &str = "SELECT name, type FROM pragma_table_info(?1)";

/// Verify that every declared table exists with at least its declared columns,
/// and that each declared column has a compatible declared type.
pub async fn check_tables(session: &mut Session, tables: &[&TableInfo]) -> Result<(), Error> {
    for table in tables {
        let present: Vec<(String, String)> =
            sqlx::query_as::<_, (String, String)>(TABLE_COLUMNS_QUERY)
                .bind(table.table_name)
                .fetch_all(session.connection())
                .await
                .map_err(Error::Introspection)?;

        if present.is_empty() {
            return Err(Error::MissingTable(table.table_name.to_string()));
        }

        for column in table.columns {
            let Some((_, found)) = present.iter().find(|(name, _)| name == column.name) else {
                return Err(Error::MissingColumn {
                    table: table.table_name.to_string(),
                    column: column.name.to_string(),
                });
            };
            if ScalarType::from_declared_type(found) != Some(column.r#type) {
                return Err(Error::MismatchedType {
                    table: table.table_name.to_string(),
                    column: column.name.to_string(),
                    expected: column.r#type,
                    found: found.clone(),
                });
            }
        }
    }

    tracing::debug!(tables = tables.len(), "store schema matches declared tables");
    Ok(())
}

//! Build the execution plans behind each API operation.

use chrono::NaiveDate;

use query_engine_metadata::metadata::tables::{measurement, station};
use query_engine_sql::sql::ast;
use query_engine_sql::sql::execution_plan::ExecutionPlan;
use query_engine_sql::sql::helpers;

use crate::date::to_sql_date;

/// Column aliases of the result sets, shared with the row types that decode them.
pub mod columns {
    pub const LATEST_DATE: &str = "max_date";
    pub const DATE: &str = "date";
    pub const PRCP: &str = "prcp";
    pub const STATION: &str = "station";
    pub const COUNT: &str = "count";
    pub const TOBS: &str = "tobs";
    pub const TMIN: &str = "TMIN";
    pub const TMAX: &str = "TMAX";
    pub const TAVG: &str = "TAVG";
}

fn column(table: &ast::TableAlias, name: &str) -> ast::Expression {
    ast::Expression::ColumnReference(helpers::make_column(table, name))
}

fn select_from(
    table: &str,
    select_list: impl FnOnce(&ast::TableAlias) -> Vec<(ast::ColumnAlias, ast::Expression)>,
) -> (ast::Select, ast::TableAlias) {
    let (from, alias) = helpers::from_table(table);
    let mut select = helpers::simple_select(select_list(&alias));
    select.from = Some(from);
    (select, alias)
}

fn latest_date_select() -> (ast::Select, ast::TableAlias) {
    select_from(measurement::TABLE, |table| {
        vec![(
            helpers::make_column_alias(columns::LATEST_DATE),
            helpers::aggregate(
                ast::Function::Max,
                helpers::make_column(table, measurement::DATE),
            ),
        )]
    })
}

/// The most recent measurement date across all stations.
pub fn latest_date() -> ExecutionPlan {
    let (select, _) = latest_date_select();
    ExecutionPlan::new("latest_date", select)
}

/// The most recent measurement date of one station.
pub fn latest_date_for_station(station_id: &str) -> ExecutionPlan {
    let (mut select, table) = latest_date_select();
    select.where_ = ast::Where(helpers::compare_column(
        helpers::make_column(&table, measurement::STATION),
        ast::BinaryOperator::Equals,
        station_id.to_string(),
    ));
    ExecutionPlan::new("latest_date_for_station", select)
}

/// Every (date, precipitation) pair on or after `cutoff`, across all stations.
pub fn precipitation_since(cutoff: NaiveDate) -> ExecutionPlan {
    let (mut select, table) = select_from(measurement::TABLE, |table| {
        vec![
            (
                helpers::make_column_alias(columns::DATE),
                column(table, measurement::DATE),
            ),
            (
                helpers::make_column_alias(columns::PRCP),
                column(table, measurement::PRCP),
            ),
        ]
    });
    select.where_ = ast::Where(helpers::compare_column(
        helpers::make_column(&table, measurement::DATE),
        ast::BinaryOperator::GreaterThanOrEqualTo,
        to_sql_date(cutoff),
    ));
    ExecutionPlan::new("precipitation", select)
}

/// Every station code.
pub fn station_ids() -> ExecutionPlan {
    let (select, _) = select_from(station::TABLE, |table| {
        vec![(
            helpers::make_column_alias(columns::STATION),
            column(table, station::STATION),
        )]
    });
    ExecutionPlan::new("stations", select)
}

/// The station with the most measurements.
///
/// Ties are not broken: the first row the store returns among equal counts wins.
pub fn most_active_station() -> ExecutionPlan {
    let measurement_table = helpers::make_table_alias(measurement::TABLE);
    let count = ast::Expression::Count(helpers::make_column(
        &measurement_table,
        measurement::STATION,
    ));

    let (mut select, station_table) = select_from(station::TABLE, |table| {
        vec![
            (
                helpers::make_column_alias(columns::STATION),
                column(table, station::STATION),
            ),
            (helpers::make_column_alias(columns::COUNT), count.clone()),
        ]
    });
    select.joins = vec![ast::Join::InnerJoin(ast::InnerJoin {
        reference: ast::TableReference::DBTable(ast::TableName(measurement::TABLE.to_string())),
        alias: measurement_table.clone(),
        on: helpers::columns_equal(
            helpers::make_column(&measurement_table, measurement::STATION),
            helpers::make_column(&station_table, station::STATION),
        ),
    })];
    select.group_by = ast::GroupBy {
        elements: vec![column(&station_table, station::STATION)],
    };
    select.order_by = ast::OrderBy {
        elements: vec![ast::OrderByElement {
            target: count,
            direction: ast::OrderByDirection::Desc,
        }],
    };
    select.limit = ast::Limit { limit: Some(1) };
    ExecutionPlan::new("most_active_station", select)
}

/// The temperature observations of one station on or after `cutoff`.
pub fn temperatures_since(station_id: &str, cutoff: NaiveDate) -> ExecutionPlan {
    let (mut select, table) = select_from(measurement::TABLE, |table| {
        vec![(
            helpers::make_column_alias(columns::TOBS),
            column(table, measurement::TOBS),
        )]
    });
    select.where_ = ast::Where(helpers::and(
        helpers::compare_column(
            helpers::make_column(&table, measurement::STATION),
            ast::BinaryOperator::Equals,
            station_id.to_string(),
        ),
        helpers::compare_column(
            helpers::make_column(&table, measurement::DATE),
            ast::BinaryOperator::GreaterThanOrEqualTo,
            to_sql_date(cutoff),
        ),
    ));
    ExecutionPlan::new("tobs", select)
}

/// Minimum, maximum and average temperature from `start`, up to and including `end`
/// when given.
pub fn temperature_stats(start: NaiveDate, end: Option<NaiveDate>) -> ExecutionPlan {
    let (mut select, table) = select_from(measurement::TABLE, |table| {
        [
            (columns::TMIN, ast::Function::Min),
            (columns::TMAX, ast::Function::Max),
            (columns::TAVG, ast::Function::Avg),
        ]
        .into_iter()
        .map(|(alias, function)| {
            (
                helpers::make_column_alias(alias),
                helpers::aggregate(function, helpers::make_column(table, measurement::TOBS)),
            )
        })
        .collect()
    });

    let lower = helpers::compare_column(
        helpers::make_column(&table, measurement::DATE),
        ast::BinaryOperator::GreaterThanOrEqualTo,
        to_sql_date(start),
    );
    let upper = match end {
        None => helpers::true_expr(),
        Some(end) => helpers::compare_column(
            helpers::make_column(&table, measurement::DATE),
            ast::BinaryOperator::LessThanOrEqualTo,
            to_sql_date(end),
        ),
    };
    select.where_ = ast::Where(helpers::and(lower, upper));
    ExecutionPlan::new("temperature_stats", select)
}

use query_engine_sql::sql::{ast, convert::select_to_sql, helpers, string};

#[test]
fn it_converts_simple_select() {
    let (from, table) = helpers::from_table("station");
    let mut select = helpers::simple_select(vec![(
        helpers::make_column_alias("station"),
        ast::Expression::ColumnReference(helpers::make_column(&table, "station")),
    )]);
    select.from = Some(from);

    assert_eq!(
        select_to_sql(&select),
        string::SQL {
            sql: "SELECT \"station\".\"station\" AS \"station\" FROM \"station\" AS \"station\""
                .to_string(),
            params: vec![],
            param_index: 0,
        }
    );
}

#[test]
fn it_converts_select_without_from() {
    let select = helpers::simple_select(vec![(
        helpers::make_column_alias("one"),
        helpers::true_expr(),
    )]);

    assert_eq!(select_to_sql(&select).sql, "SELECT true AS \"one\"");
}

#[test]
fn it_binds_string_values_as_params() {
    let (from, table) = helpers::from_table("measurement");
    let mut select = helpers::simple_select(vec![(
        helpers::make_column_alias("tobs"),
        ast::Expression::ColumnReference(helpers::make_column(&table, "tobs")),
    )]);
    select.from = Some(from);
    select.where_ = ast::Where(helpers::and(
        helpers::compare_column(
            helpers::make_column(&table, "date"),
            ast::BinaryOperator::GreaterThanOrEqualTo,
            "2017-01-01".to_string(),
        ),
        helpers::compare_column(
            helpers::make_column(&table, "date"),
            ast::BinaryOperator::LessThanOrEqualTo,
            "2017-01-31".to_string(),
        ),
    ));

    let sql = select_to_sql(&select);
    insta::assert_snapshot!(sql.sql, @r#"SELECT "measurement"."tobs" AS "tobs" FROM "measurement" AS "measurement" WHERE (("measurement"."date" >= ?1) AND ("measurement"."date" <= ?2))"#);
    assert_eq!(
        sql.params,
        vec![
            string::Param::String("2017-01-01".to_string()),
            string::Param::String("2017-01-31".to_string()),
        ]
    );
}

#[test]
fn it_converts_joins_grouping_and_ordering() {
    let (from, station) = helpers::from_table("station");
    let measurement = helpers::make_table_alias("measurement");
    let count = ast::Expression::Count(helpers::make_column(&measurement, "station"));

    let mut select =
        helpers::simple_select(vec![(helpers::make_column_alias("count"), count.clone())]);
    select.from = Some(from);
    select.joins = vec![ast::Join::InnerJoin(ast::InnerJoin {
        reference: ast::TableReference::DBTable(ast::TableName("measurement".to_string())),
        alias: measurement.clone(),
        on: helpers::columns_equal(
            helpers::make_column(&measurement, "station"),
            helpers::make_column(&station, "station"),
        ),
    })];
    select.group_by = ast::GroupBy {
        elements: vec![ast::Expression::ColumnReference(helpers::make_column(
            &station, "station",
        ))],
    };
    select.order_by = ast::OrderBy {
        elements: vec![ast::OrderByElement {
            target: count,
            direction: ast::OrderByDirection::Desc,
        }],
    };
    select.limit = ast::Limit { limit: Some(1) };

    insta::assert_snapshot!(select_to_sql(&select).sql, @r#"SELECT COUNT("measurement"."station") AS "count" FROM "station" AS "station" INNER JOIN "measurement" AS "measurement" ON ("measurement"."station" = "station"."station") GROUP BY "station"."station" ORDER BY COUNT("measurement"."station") DESC LIMIT 1"#);
}

#[test]
fn and_drops_trivially_true_sides() {
    let table = helpers::make_table_alias("measurement");
    let comparison = helpers::compare_column(
        helpers::make_column(&table, "station"),
        ast::BinaryOperator::Equals,
        "USC00519281".to_string(),
    );

    assert_eq!(
        helpers::and(helpers::true_expr(), comparison.clone()),
        comparison
    );
    assert_eq!(
        helpers::and(comparison.clone(), helpers::true_expr()),
        comparison
    );
}

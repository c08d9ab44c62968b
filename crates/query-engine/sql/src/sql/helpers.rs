//! Helpers for building sql::ast types in certain shapes and patterns.

use super::ast::*;

// Empty clauses //

/// An empty `WHERE` clause.
pub fn empty_where() -> Where {
    Where(true_expr())
}

/// An empty `GROUP BY` clause.
pub fn empty_group_by() -> GroupBy {
    GroupBy { elements: vec![] }
}

/// An empty `ORDER BY` clause.
pub fn empty_order_by() -> OrderBy {
    OrderBy { elements: vec![] }
}

/// An empty `LIMIT` clause.
pub fn empty_limit() -> Limit {
    Limit { limit: None }
}

/// A `true` expression.
pub fn true_expr() -> Expression {
    Expression::Value(Value::True)
}

// Aliasing //

/// Create table aliases using this function so we build everything in one place.
pub fn make_table_alias(name: &str) -> TableAlias {
    TableAlias {
        name: name.to_string(),
    }
}

/// Create column aliases using this function so we build everything in one place.
pub fn make_column_alias(name: &str) -> ColumnAlias {
    ColumnAlias {
        name: name.to_string(),
    }
}

/// A reference to a column of an aliased table.
pub fn make_column(table: &TableAlias, name: &str) -> ColumnReference {
    ColumnReference {
        table: TableReference::AliasedTable(table.clone()),
        name: ColumnName(name.to_string()),
    }
}

/// A FROM clause over a database table, aliased as itself.
pub fn from_table(table: &str) -> (From, TableAlias) {
    let alias = make_table_alias(table);
    (
        From::Table {
            reference: TableReference::DBTable(TableName(table.to_string())),
            alias: alias.clone(),
        },
        alias,
    )
}

// Expressions //

/// `left AND right`, dropping trivially true sides.
pub fn and(left: Expression, right: Expression) -> Expression {
    if left == true_expr() {
        right
    } else if right == true_expr() {
        left
    } else {
        Expression::And {
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A comparison between a column and a bound string parameter.
pub fn compare_column(
    column: ColumnReference,
    operator: BinaryOperator,
    value: String,
) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(Expression::ColumnReference(column)),
        operator,
        right: Box::new(Expression::Value(Value::String(value))),
    }
}

/// An equality between two columns.
pub fn columns_equal(left: ColumnReference, right: ColumnReference) -> Expression {
    Expression::BinaryOperation {
        left: Box::new(Expression::ColumnReference(left)),
        operator: BinaryOperator::Equals,
        right: Box::new(Expression::ColumnReference(right)),
    }
}

/// A single-argument aggregate over a column.
pub fn aggregate(function: Function, column: ColumnReference) -> Expression {
    Expression::FunctionCall {
        function,
        args: vec![Expression::ColumnReference(column)],
    }
}

// SELECTs //

/// Build a simple select with a select list and the rest are empty.
pub fn simple_select(select_list: Vec<(ColumnAlias, Expression)>) -> Select {
    Select {
        select_list: SelectList(select_list),
        from: None,
        joins: vec![],
        where_: empty_where(),
        group_by: empty_group_by(),
        order_by: empty_order_by(),
        limit: empty_limit(),
    }
}

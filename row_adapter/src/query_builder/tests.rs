//! Query builder unit tests

#[cfg(test)]
mod tests {
    use crate::query_builder::ordering::InvalidSortOrder;
    use crate::query_builder::{QueryBuilder, QueryFilter, SortOrder};
    use serde_json::json;

    // ========================================
    // SortOrder contract
    // ========================================

    #[test]
    fn test_sort_order_numeric_values() {
        assert_eq!(SortOrder::Unspecified.as_i32(), -1);
        assert_eq!(SortOrder::Ascending.as_i32(), 0);
        assert_eq!(SortOrder::Descending.as_i32(), 1);
    }

    #[test]
    fn test_sort_order_closed_set() {
        assert_eq!(SortOrder::try_from(-1), Ok(SortOrder::Unspecified));
        assert_eq!(SortOrder::try_from(0), Ok(SortOrder::Ascending));
        assert_eq!(SortOrder::try_from(1), Ok(SortOrder::Descending));

        assert_eq!(SortOrder::try_from(2), Err(InvalidSortOrder(2)));
        assert_eq!(SortOrder::try_from(-2), Err(InvalidSortOrder(-2)));
        assert_eq!(SortOrder::try_from(i32::MAX), Err(InvalidSortOrder(i32::MAX)));
    }

    #[test]
    fn test_sort_order_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&SortOrder::Unspecified).unwrap(), "-1");
        assert_eq!(serde_json::to_string(&SortOrder::Ascending).unwrap(), "0");
        assert_eq!(serde_json::to_string(&SortOrder::Descending).unwrap(), "1");

        let parsed: SortOrder = serde_json::from_str("-1").unwrap();
        assert_eq!(parsed, SortOrder::Unspecified);

        assert!(serde_json::from_str::<SortOrder>("5").is_err());
    }

    #[test]
    fn test_sort_order_sql_keywords() {
        assert_eq!(SortOrder::Ascending.as_sql(), Some("ASC"));
        assert_eq!(SortOrder::Descending.as_sql(), Some("DESC"));
        assert_eq!(SortOrder::Unspecified.as_sql(), None);
    }

    // ========================================
    // ORDER BY generation
    // ========================================

    #[test]
    fn test_order_clause_generation() {
        let query = QueryBuilder::new()
            .order_by("created_at", SortOrder::Descending)
            .order_by("name", SortOrder::Ascending);

        assert_eq!(
            query.build_order_clause(),
            "ORDER BY created_at DESC, name ASC"
        );
    }

    #[test]
    fn test_order_clause_unspecified_omits_direction() {
        let query = QueryBuilder::new().order_by("name", SortOrder::Unspecified);
        assert_eq!(query.build_order_clause(), "ORDER BY name");
    }

    #[test]
    fn test_order_clause_empty() {
        let query = QueryBuilder::new();
        assert_eq!(query.build_order_clause(), "");
    }

    // ========================================
    // WHERE generation
    // ========================================

    #[test]
    fn test_where_clause_parameter_numbering() {
        let query = QueryBuilder::new()
            .filter(QueryFilter::eq("status", json!("active")))
            .filter(QueryFilter::gt("age", json!(18)));

        let (where_clause, values) = query.build_where_clause();

        assert_eq!(where_clause, "WHERE status = $1 AND age > $2");
        assert_eq!(values, vec![json!("active"), json!(18)]);
    }

    #[test]
    fn test_where_clause_nested_groups() {
        let query = QueryBuilder::new().filter(QueryFilter::and(vec![
            QueryFilter::or(vec![
                QueryFilter::eq("status", json!("active")),
                QueryFilter::eq("status", json!("pending")),
            ]),
            QueryFilter::is_not_null("email"),
        ]));

        let (where_clause, values) = query.build_where_clause();

        assert_eq!(
            where_clause,
            "WHERE ((status = $1 OR status = $2) AND email IS NOT NULL)"
        );
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_in_clause_placeholders() {
        let query = QueryBuilder::new().filter(QueryFilter::in_values(
            "status",
            vec![json!("a"), json!("b"), json!("c")],
        ));

        let (where_clause, values) = query.build_where_clause();

        assert_eq!(where_clause, "WHERE status IN ($1, $2, $3)");
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn test_empty_in_clauses() {
        // Empty IN can never match
        let query = QueryBuilder::new().filter(QueryFilter::in_values("status", vec![]));
        let (where_clause, values) = query.build_where_clause();
        assert_eq!(where_clause, "WHERE 1=0");
        assert!(values.is_empty());

        // Empty NOT IN always matches
        let query = QueryBuilder::new().filter(QueryFilter::not_in_values("status", vec![]));
        let (where_clause, _) = query.build_where_clause();
        assert_eq!(where_clause, "WHERE 1=1");
    }

    #[test]
    fn test_like_and_null_operators() {
        let query = QueryBuilder::new()
            .filter(QueryFilter::like("name", "ada%"))
            .filter(QueryFilter::is_null("deleted_at"));

        let (where_clause, values) = query.build_where_clause();

        assert_eq!(where_clause, "WHERE name LIKE $1 AND deleted_at IS NULL");
        assert_eq!(values, vec![json!("ada%")]);
    }

    // ========================================
    // LIMIT/OFFSET and full build
    // ========================================

    #[test]
    fn test_limit_offset_clause() {
        let query = QueryBuilder::new().limit(10).offset(20);
        assert_eq!(query.build_limit_clause(), "LIMIT 10 OFFSET 20");

        let query = QueryBuilder::new().limit(5);
        assert_eq!(query.build_limit_clause(), "LIMIT 5");

        let query = QueryBuilder::new();
        assert_eq!(query.build_limit_clause(), "");
    }

    #[test]
    fn test_full_build() {
        let query = QueryBuilder::new()
            .filter(QueryFilter::eq("status", json!("active")))
            .order_by("created_at", SortOrder::Descending)
            .limit(25);

        let (where_clause, order_clause, limit_clause, values) = query.build();

        assert_eq!(where_clause, "WHERE status = $1");
        assert_eq!(order_clause, "ORDER BY created_at DESC");
        assert_eq!(limit_clause, "LIMIT 25");
        assert_eq!(values.len(), 1);
    }
}

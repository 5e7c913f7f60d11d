use super::select::SelectQuery;

/// Sets LIMIT and OFFSET on a query. Each is applied only when given and
/// independently of the other.
pub fn limit_and_offset(
    mut query: SelectQuery,
    limit: Option<i64>,
    offset: Option<i64>,
) -> SelectQuery {
    if limit.is_some() {
        query.limit = limit;
    }
    if offset.is_some() {
        query.offset = offset;
    }
    query
}

/// `LIMIT n OFFSET m` suffix. Values are integers and are written into the SQL
/// text directly; no placeholder is created for them.
pub fn pagination_suffix(limit: Option<i64>, offset: Option<i64>) -> Option<String> {
    match (limit, offset) {
        (None, None) => None,
        (Some(limit), None) => Some(format!("LIMIT {}", limit)),
        (None, Some(offset)) => Some(format!("OFFSET {}", offset)),
        (Some(limit), Some(offset)) => Some(format!("LIMIT {} OFFSET {}", limit, offset)),
    }
}

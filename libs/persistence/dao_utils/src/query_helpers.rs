use tokio_postgres::Row;

// Type alias for PostgreSQL parameter references
pub type PgParam = dyn tokio_postgres::types::ToSql + Sync;

pub fn first_row_or_not_found<T, E, F>(
    rows: &[Row], mapper: F, not_found_error: E,
) -> Result<T, E>
where
    F: FnOnce(&Row) -> Result<T, E>,
{
    match rows.first() {
        Some(row) => mapper(row),
        None => Err(not_found_error),
    }
}

/// Turns an `execute` row count into `not_found_error` when nothing matched.
pub fn ensure_affected<E>(affected: u64, not_found_error: E) -> Result<(), E> {
    if affected == 0 {
        Err(not_found_error)
    }
    else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_affected() {
        assert_eq!(ensure_affected(1, "missing"), Ok(()));
        assert_eq!(ensure_affected(3, "missing"), Ok(()));
        assert_eq!(ensure_affected(0, "missing"), Err("missing"));
    }

    #[test]
    fn test_first_row_of_empty_set() {
        let rows: Vec<Row> = Vec::new();
        let result = first_row_or_not_found(&rows, |_| Ok(1), "missing");
        assert_eq!(result, Err("missing"));
    }
}

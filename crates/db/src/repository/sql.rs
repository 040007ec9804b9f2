//! SQL text for the generic Postgres repository, derived from [`Resource`]
//! metadata. Table and column names come from compile-time constants, never
//! from user input; all values are bound as parameters.

use crate::resource::Resource;

pub fn select_all<R: Resource>() -> String {
    format!("SELECT * FROM {} ORDER BY {} ASC", R::TABLE, R::KEY_COLUMN)
}

pub fn select_by_key<R: Resource>() -> String {
    format!("SELECT * FROM {} WHERE {} = $1", R::TABLE, R::KEY_COLUMN)
}

/// Insert a row whose key is generated by the database.
pub fn insert_generated<R: Resource>() -> String {
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
        R::TABLE,
        R::COLUMNS.join(", "),
        placeholders(1, R::COLUMNS.len()),
    )
}

/// Insert a row with an explicit key, overwriting every column on conflict.
/// The key binds as `$1`, the remaining columns follow in `COLUMNS` order.
pub fn upsert<R: Resource>() -> String {
    let assignments = R::COLUMNS
        .iter()
        .map(|column| format!("{column} = EXCLUDED.{column}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "INSERT INTO {table} ({key}, {columns}) VALUES ({values}) \
         ON CONFLICT ({key}) DO UPDATE SET {assignments} RETURNING *",
        table = R::TABLE,
        key = R::KEY_COLUMN,
        columns = R::COLUMNS.join(", "),
        values = placeholders(1, R::COLUMNS.len() + 1),
    )
}

/// Overwrite an existing row. The key binds as `$1`, the remaining columns
/// follow in `COLUMNS` order, as for [`upsert`].
pub fn update_by_key<R: Resource>() -> String {
    let assignments = R::COLUMNS
        .iter()
        .enumerate()
        .map(|(i, column)| format!("{column} = ${}", i + 2))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET {} WHERE {} = $1 RETURNING *",
        R::TABLE,
        assignments,
        R::KEY_COLUMN,
    )
}

pub fn delete_by_key<R: Resource>() -> String {
    format!("DELETE FROM {} WHERE {} = $1", R::TABLE, R::KEY_COLUMN)
}

fn placeholders(first: usize, count: usize) -> String {
    (first..first + count)
        .map(|n| format!("${n}"))
        .collect::<Vec<_>>()
        .join(", ")
}

use super::schema;
use super::schema::Columns;
use super::schema::Polygon;
use crate::Result;
use rusqlite::params;
use rusqlite::Connection;
use serde_json::Value;

pub fn insert(name: impl Into<String>, coordinates: Value, conn: &Connection) -> Result<Polygon> {
    let sql = format!(
        r#"
            INSERT INTO {table} ({name}, {coordinates})
            VALUES (?1, json(?2))
            RETURNING {projection}
        "#,
        table = schema::TABLE_NAME,
        name = Columns::Name.as_str(),
        coordinates = Columns::Coordinates.as_str(),
        projection = Polygon::projection(),
    );
    conn.query_row(&sql, params![name.into(), coordinates], Polygon::mapper())
        .map_err(Into::into)
}

pub fn select_all(conn: &Connection) -> Result<Vec<Polygon>> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            ORDER BY {id}
        "#,
        projection = Polygon::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.prepare(&sql)?
        .query_map({}, Polygon::mapper())?
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

pub fn select_by_id(id: i64, conn: &Connection) -> Result<Polygon> {
    let sql = format!(
        r#"
            SELECT {projection}
            FROM {table}
            WHERE {id} = ?1
        "#,
        projection = Polygon::projection(),
        table = schema::TABLE_NAME,
        id = Columns::Id.as_str(),
    );
    conn.query_row(&sql, params![id], Polygon::mapper())
        .map_err(Into::into)
}

pub fn set_name(id: i64, name: impl Into<String>, conn: &Connection) -> Result<Polygon> {
    let sql = format!(
        r#"
            UPDATE {table}
            SET {name} = ?2, {updated_at} = strftime('%Y-%m-%dT%H:%M:%fZ')
            WHERE {id} = ?1
        "#,
        table = schema::TABLE_NAME,
        name = Columns::Name.as_str(),
        updated_at = Columns::UpdatedAt.as_str(),
        id = Columns::Id.as_str(),
    );
    conn.execute(&sql, params![id, name.into()])?;
    select_by_id(id, conn)
}

use super::blocking_queries;
use super::schema::Polygon;
use crate::Result;
use deadpool_sqlite::Pool;
use serde_json::Value;

pub async fn insert(
    name: impl Into<String>,
    coordinates: Value,
    pool: &Pool,
) -> Result<Polygon> {
    let name = name.into();
    pool.get()
        .await?
        .interact(|conn| blocking_queries::insert(name, coordinates, conn))
        .await?
}

pub async fn select_all(pool: &Pool) -> Result<Vec<Polygon>> {
    pool.get()
        .await?
        .interact(|conn| blocking_queries::select_all(conn))
        .await?
}

pub async fn select_by_id(id: i64, pool: &Pool) -> Result<Polygon> {
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::select_by_id(id, conn))
        .await?
}

pub async fn set_name(id: i64, name: impl Into<String>, pool: &Pool) -> Result<Polygon> {
    let name = name.into();
    pool.get()
        .await?
        .interact(move |conn| blocking_queries::set_name(id, name, conn))
        .await?
}

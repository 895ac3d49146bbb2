use rusqlite::Row;
use serde_json::Value;
use time::OffsetDateTime;

pub const TABLE_NAME: &str = "polygon";

pub enum Columns {
    Id,
    Name,
    Coordinates,
    CreatedAt,
    UpdatedAt,
}

impl Columns {
    pub fn as_str(&self) -> &'static str {
        match self {
            Columns::Id => "id",
            Columns::Name => "name",
            Columns::Coordinates => "coordinates",
            Columns::CreatedAt => "created_at",
            Columns::UpdatedAt => "updated_at",
        }
    }
}

pub struct Polygon {
    pub id: i64,
    pub name: String,
    pub coordinates: Value,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Polygon {
    pub fn projection() -> String {
        [
            Columns::Id,
            Columns::Name,
            Columns::Coordinates,
            Columns::CreatedAt,
            Columns::UpdatedAt,
        ]
        .iter()
        .map(Columns::as_str)
        .collect::<Vec<_>>()
        .join(", ")
    }

    pub fn mapper() -> fn(&Row) -> rusqlite::Result<Polygon> {
        |row: &Row| -> rusqlite::Result<Polygon> {
            let coordinates: String = row.get(2)?;
            Ok(Polygon {
                id: row.get(0)?,
                name: row.get(1)?,
                coordinates: serde_json::from_str(&coordinates).unwrap_or_default(),
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
            })
        }
    }

    #[cfg(test)]
    pub fn mock_coordinates() -> Value {
        serde_json::json!([
            {
                "type": "Feature",
                "properties": {},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                }
            }
        ])
    }
}

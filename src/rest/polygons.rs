use crate::db;
use crate::db::polygon::schema::Polygon;
use crate::rest::error::RestApiError;
use crate::rest::error::RestResult as Res;
use crate::service;
use actix_web::get;
use actix_web::post;
use actix_web::web::Data;
use actix_web::web::Json;
use deadpool_sqlite::Pool;
use geojson::Feature;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use time::OffsetDateTime;
use tracing::warn;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse<T: Serialize> {
    message_key: &'static str,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

impl<T: Serialize> SuccessResponse<T> {
    fn new(message: &'static str) -> Self {
        Self {
            message_key: "Success",
            message,
            data: None,
        }
    }

    fn with_data(message: &'static str, data: T) -> Self {
        Self {
            message_key: "Success",
            message,
            data: Some(data),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostArgs {
    polygon_name: String,
    polygon_coordinates: Vec<Feature>,
}

#[post("/")]
pub async fn post(args: Json<PostArgs>, pool: Data<Pool>) -> Res<SuccessResponse<()>> {
    let args = args.into_inner();
    let ring = service::polygon::first_ring(&args.polygon_coordinates);
    if let Err(violation) = service::polygon::validate_ring(&ring) {
        warn!(%violation, name = args.polygon_name, "Rejected polygon submission");
        return Err(RestApiError::bad_request("Invalid polygon data"));
    }
    let coordinates = serde_json::to_value(&args.polygon_coordinates)
        .map_err(|it| RestApiError::bad_request(it.to_string()))?;
    db::polygon::queries::insert(args.polygon_name, coordinates, &pool)
        .await
        .map_err(|it| RestApiError::bad_request(it.to_string()))?;
    Ok(Json(SuccessResponse::new("Polygon added successfully")))
}

#[derive(Serialize)]
pub struct RenameOutcome {
    pub id: i64,
    pub updated: bool,
}

#[post("/name")]
pub async fn post_name(
    args: Json<Vec<(i64, String)>>,
    pool: Data<Pool>,
) -> Res<SuccessResponse<Vec<RenameOutcome>>> {
    let mut outcomes = vec![];
    for (id, name) in args.into_inner() {
        match db::polygon::queries::set_name(id, name, &pool).await {
            Ok(_) => outcomes.push(RenameOutcome { id, updated: true }),
            Err(e) => {
                warn!(id, error = %e, "Failed to rename polygon");
                outcomes.push(RenameOutcome { id, updated: false });
            }
        }
    }
    Ok(Json(SuccessResponse::with_data(
        "Polygon name updated successfully",
        outcomes,
    )))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonView {
    pub id: i64,
    pub polygon_name: String,
    pub polygon_coordinates: Value,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Polygon> for PolygonView {
    fn from(val: Polygon) -> Self {
        PolygonView {
            id: val.id,
            polygon_name: val.name,
            polygon_coordinates: val.coordinates,
            created_at: val.created_at,
            updated_at: val.updated_at,
        }
    }
}

#[get("/")]
pub async fn get(pool: Data<Pool>) -> Res<SuccessResponse<Vec<PolygonView>>> {
    db::polygon::queries::select_all(&pool)
        .await
        .map(|it| {
            Json(SuccessResponse::with_data(
                "Polygons retrieved successfully",
                it.into_iter().map(PolygonView::from).collect(),
            ))
        })
        .map_err(|it| RestApiError::internal(it.to_string()))
}

#[cfg(test)]
mod test {
    use crate::db;
    use crate::db::polygon::schema::Polygon;
    use crate::db::test::pool;
    use crate::Result;
    use actix_web::test::TestRequest;
    use actix_web::web::Data;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    fn post_body(name: &str, outer_ring: Value) -> Value {
        json!({
            "polygonName": name,
            "polygonCoordinates": [
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [outer_ring]
                    }
                }
            ]
        })
    }

    #[test]
    async fn post_valid_polygon() -> Result<()> {
        let pool = pool();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .service(super::post),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(post_body(
                "test",
                json!([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]),
            ))
            .to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!("Success", res["messageKey"]);
        assert_eq!("Polygon added successfully", res["message"]);
        // The stored record and its id aren't echoed back
        assert!(res.get("data").is_none());
        assert_eq!(1, db::polygon::queries::select_all(&pool).await?.len());
        Ok(())
    }

    #[test]
    async fn post_self_intersecting_polygon() -> Result<()> {
        let pool = pool();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .service(super::post),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(post_body(
                "bowtie",
                json!([[0.0, 0.0], [1.0, 1.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]),
            ))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(400, res.status().as_u16());
        let res: Value = test::read_body_json(res).await;
        assert_eq!("Error", res["messageKey"]);
        assert_eq!("Invalid polygon data", res["message"]);
        assert!(db::polygon::queries::select_all(&pool).await?.is_empty());
        Ok(())
    }

    #[test]
    async fn post_open_polygon() -> Result<()> {
        let pool = pool();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .service(super::post),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(post_body(
                "open",
                json!([[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]),
            ))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(400, res.status().as_u16());
        assert!(db::polygon::queries::select_all(&pool).await?.is_empty());
        Ok(())
    }

    #[test]
    async fn post_without_features() -> Result<()> {
        let pool = pool();
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .service(super::post),
        )
        .await;
        let req = TestRequest::post()
            .uri("/")
            .set_json(json!({"polygonName": "empty", "polygonCoordinates": []}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(400, res.status().as_u16());
        assert!(db::polygon::queries::select_all(&pool).await?.is_empty());
        Ok(())
    }

    #[test]
    async fn post_name_best_effort() -> Result<()> {
        let pool = pool();
        let polygon =
            db::polygon::queries::insert("old", Polygon::mock_coordinates(), &pool).await?;
        let missing_id = polygon.id + 1;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool.clone()))
                .service(super::post_name),
        )
        .await;
        let req = TestRequest::post()
            .uri("/name")
            .set_json(json!([[polygon.id, "new"], [missing_id, "new"]]))
            .to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!("Success", res["messageKey"]);
        assert_eq!("Polygon name updated successfully", res["message"]);
        assert_eq!(true, res["data"][0]["updated"]);
        assert_eq!(false, res["data"][1]["updated"]);
        assert_eq!(
            "new",
            db::polygon::queries::select_by_id(polygon.id, &pool)
                .await?
                .name
        );
        Ok(())
    }

    #[test]
    async fn get_empty_store() -> Result<()> {
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool()))
                .service(super::get),
        )
        .await;
        let req = TestRequest::get().uri("/").to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!("Success", res["messageKey"]);
        assert!(res["data"].as_array().unwrap().is_empty());
        Ok(())
    }

    #[test]
    async fn get_not_empty_store() -> Result<()> {
        let pool = pool();
        let polygon =
            db::polygon::queries::insert("test", Polygon::mock_coordinates(), &pool).await?;
        let app = test::init_service(
            App::new()
                .app_data(Data::new(pool))
                .service(super::get),
        )
        .await;
        let req = TestRequest::get().uri("/").to_request();
        let res: Value = test::call_and_read_body_json(&app, req).await;
        let data = res["data"].as_array().unwrap();
        assert_eq!(1, data.len());
        assert_eq!(polygon.id, data[0]["id"].as_i64().unwrap());
        assert_eq!("test", data[0]["polygonName"]);
        assert_eq!(Polygon::mock_coordinates(), data[0]["polygonCoordinates"]);
        Ok(())
    }
}

use actix_web::{post, web, HttpResponse};
use serde_json::{json, Value};

use crate::services::{build_workbook, scan_pages};

const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

#[post("/fetch-footprint")]
async fn fetch_footprint(body: web::Json<Value>) -> HttpResponse {
    let links = match parse_links(&body) {
        Some(links) => links,
        None => {
            return HttpResponse::BadRequest()
                .json(json!({ "message": "Please provide valid links." }))
        }
    };

    log::info!("Scanning footprints for {} links", links.len());
    let results = scan_pages(&links).await;

    match build_workbook(&results) {
        Ok(buffer) => HttpResponse::Ok()
            .content_type(XLSX_CONTENT_TYPE)
            .insert_header((
                "Content-Disposition",
                "attachment; filename=footprints.xlsx",
            ))
            .body(buffer),
        Err(e) => {
            log::error!("Failed to build the report workbook: {:?}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// `links` must be a non-empty array of strings; anything else is rejected
/// before any fetch happens.
fn parse_links(body: &Value) -> Option<Vec<String>> {
    let values = body.get("links")?.as_array()?;
    if values.is_empty() {
        return None;
    }

    values
        .iter()
        .map(|v| v.as_str().map(|s| s.to_string()))
        .collect()
}

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use monitoring_console::repository::DieselRepository;
use monitoring_console::routes;
use serde_json::{Value, json};

mod common;

fn occurrence_body() -> Value {
    json!({
        "registrationDate": "2026-10-15",
        "occurrenceDate": "2026-10-15",
        "startTime": "08:00",
        "endTime": "08:45",
        "location": "Loading dock A",
        "camera": "NVR3-CAM07",
        "type": "Vandalism",
        "operator": "Arnaldo",
        "shift": "Day",
        "technicalDescription": "Graffiti on the east wall",
        "actionTaken": "Area cordoned off"
    })
}

macro_rules! app {
    ($test_db:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(DieselRepository::new($test_db.pool())))
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn health_responds() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;

    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn camera_registry_over_http() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/cameras/initialize")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["created"], 288);

    let req = test::TestRequest::patch()
        .uri("/api/v1/cameras/NVR4-CAM10")
        .set_json(json!({"status": "Defective", "observation": "lens cracked"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "Defective");
    assert_eq!(body["observation"], "lens cracked");

    let req = test::TestRequest::get()
        .uri("/api/v1/cameras/stats")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["total"], 288);
    assert_eq!(body["defective"], 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/recorders/4/cameras")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 32);
    assert_eq!(body[9]["status"], "Defective");

    let req = test::TestRequest::get()
        .uri("/api/v1/cameras?status=Defective")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], "NVR4-CAM10");
}

#[actix_web::test]
async fn camera_errors_map_to_statuses() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);
    let req = test::TestRequest::post()
        .uri("/api/v1/cameras/initialize")
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/recorders/10/cameras")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::patch()
        .uri("/api/v1/cameras/NVR1-CAM01")
        .set_json(json!({"status": "Exploded"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("Exploded"));

    let req = test::TestRequest::get()
        .uri("/api/v1/cameras/NVR1-CAM99")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn occurrence_lifecycle_over_http() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);

    let req = test::TestRequest::post()
        .uri("/api/v1/occurrences")
        .set_json(occurrence_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["classification"], "InProgress");
    assert_eq!(created["type"], "Vandalism");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/occurrences/{id}"))
        .set_json(json!({"classification": "Closed", "agenciesContacted": "Civil police"}))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["classification"], "Closed");
    assert_eq!(updated["location"], "Loading dock A");

    let req = test::TestRequest::get()
        .uri("/api/v1/occurrences?search=DOCK&type=Vandalism&classification=Closed")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/occurrences/stats")
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["total"], 1);
    assert_eq!(stats["rate"], 100);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/occurrences/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/occurrences/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn incomplete_occurrence_is_unprocessable() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);
    let mut body = occurrence_body();
    body["technicalDescription"] = json!("   ");

    let req = test::TestRequest::post()
        .uri("/api/v1/occurrences")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn blanking_required_field_is_rejected() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);
    let req = test::TestRequest::post()
        .uri("/api/v1/occurrences")
        .set_json(occurrence_body())
        .to_request();
    let created: Value = test::call_and_read_body_json(&app, req).await;
    let id = created["id"].as_str().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/occurrences/{id}"))
        .set_json(json!({"location": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[actix_web::test]
async fn reports_and_dashboard() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);
    let req = test::TestRequest::post()
        .uri("/api/v1/occurrences")
        .set_json(occurrence_body())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/reports?period=all")
        .to_request();
    let report: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(report["period"], "all");
    assert_eq!(report["occurrences"].as_array().unwrap().len(), 1);
    assert_eq!(report["stats"]["pending"], 1);

    let req = test::TestRequest::get()
        .uri("/api/v1/reports?period=fortnight")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::get()
        .uri("/api/v1/reports/download?period=all&format=csv")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("report-all-"));
    let bytes = test::read_body(resp).await;
    let csv = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(csv.contains("Loading dock A"));
    assert!(csv.contains("Vandalismo"));

    let req = test::TestRequest::get().uri("/api/v1/dashboard").to_request();
    let dashboard: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(dashboard["occurrences"]["total"], 1);
    assert_eq!(dashboard["cameras"]["total"], 0);
    assert_eq!(dashboard["byType"].as_array().unwrap().len(), 12);
    assert_eq!(dashboard["byClassification"]["inProgress"], 1);
}

#[actix_web::test]
async fn unknown_filter_values_list_nothing() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);
    let req = test::TestRequest::post()
        .uri("/api/v1/occurrences")
        .set_json(occurrence_body())
        .to_request();
    test::call_service(&app, req).await;

    for uri in [
        "/api/v1/occurrences?type=Arson",
        "/api/v1/occurrences?classification=Archived",
        "/api/v1/occurrences?search=Dock%20&type=Vandalism&classification=Archived",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]), "{uri}");
    }

    let req = test::TestRequest::get()
        .uri("/api/v1/occurrences?type=Vandalism")
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn padded_camera_id_is_not_found() {
    let test_db = common::TestDb::new();
    let app = app!(test_db);
    let req = test::TestRequest::post()
        .uri("/api/v1/cameras/initialize")
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/api/v1/cameras/NVR03-CAM07")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

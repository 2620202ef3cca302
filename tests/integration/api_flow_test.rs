// HTTP API flow against the full route table

use actix_web::{test, App};
use minibrs::config::StorageConfig;
use minibrs::groups::Group;
use minibrs::modules::configure_routes;
use minibrs::students::Student;
use minibrs::tasks::Task;
use minibrs::AppServices;
use serde_json::{json, Value};
use uuid::Uuid;

macro_rules! app {
    ($services:expr) => {{
        let services: AppServices = $services;
        test::init_service(
            App::new()
                .configure(|cfg| services.configure(cfg))
                .configure(configure_routes),
        )
        .await
    }};
}

fn assert_error_shape(body: &Value, code: u16) {
    assert_eq!(body["error"]["code"], code);
    assert!(body["error"]["message"].is_string());
}

#[actix_web::test]
async fn test_group_student_task_flow() {
    let app = app!(AppServices::in_memory());

    let req = test::TestRequest::post()
        .uri("/api/groups")
        .set_json(json!({"name": "IT-21", "course": 2}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let group: Group = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/students")
        .set_json(json!({"name": "Anna", "groupId": group.id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let anna: Student = test::read_body_json(resp).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/group/{}", group.id))
        .to_request();
    let students: Vec<Student> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(students, vec![anna.clone()]);

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{}/tasks", anna.id))
        .to_request();
    let tasks: Vec<Task> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(tasks.len(), 3);

    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{}/status", tasks[1].id))
        .set_json(json!({"status": "SUBMITTED"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get()
        .uri(&format!("/api/groups/{}/report", group.id))
        .to_request();
    let report: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(report["totalCompleted"], 1);
    assert_eq!(report["totalTasks"], 3);
    assert_eq!(report["students"][0]["student"]["name"], "Anna");

    let req = test::TestRequest::get()
        .uri("/api/tasks?status=SUBMITTED")
        .to_request();
    let submitted: Vec<Task> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(submitted.len(), 1);
    assert_eq!(submitted[0].number, 2);
}

#[actix_web::test]
async fn test_delete_group_cascades_over_http() {
    let services = AppServices::in_memory();
    let group = services.groups.create_group("IT-21", 2).unwrap();
    let anna = services.students.create_student("Anna", group.id).unwrap();
    let app = app!(services.clone());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/groups/{}", group.id))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["message"].as_str().unwrap().contains("deleted"));

    let req = test::TestRequest::get()
        .uri(&format!("/api/students/{}", anna.id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    assert_eq!(services.tasks.get_total_tasks_count(), 0);
}

#[actix_web::test]
async fn test_update_student_keeps_group_when_omitted() {
    let services = AppServices::in_memory();
    let group = services.groups.create_group("IT-21", 2).unwrap();
    let anna = services.students.create_student("Anna", group.id).unwrap();
    let app = app!(services);

    let req = test::TestRequest::put()
        .uri(&format!("/api/students/{}", anna.id))
        .set_json(json!({"name": "Anna K."}))
        .to_request();
    let updated: Student = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated.name, "Anna K.");
    assert_eq!(updated.group_id, group.id);
}

#[actix_web::test]
async fn test_error_responses_share_one_shape() {
    let app = app!(AppServices::in_memory());

    // Unknown id
    let req = test::TestRequest::get()
        .uri(&format!("/api/groups/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_error_shape(&body, 404);

    // Malformed id in the path
    let req = test::TestRequest::get().uri("/api/tasks/42").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_error_shape(&body, 400);

    // Unknown status in the body
    let req = test::TestRequest::put()
        .uri(&format!("/api/tasks/{}/status", Uuid::new_v4()))
        .set_json(json!({"status": "DONE"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_error_shape(&body, 400);

    // Business rule violation
    let req = test::TestRequest::post()
        .uri("/api/groups")
        .set_json(json!({"name": "", "course": 1}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_error_shape(&body, 400);

    // Bad query value
    let req = test::TestRequest::get()
        .uri("/api/groups?courseNumber=two")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_error_shape(&body, 400);
}

#[actix_web::test]
async fn test_health_and_readiness() {
    let dir = tempfile::tempdir().unwrap();
    let services = AppServices::open(&StorageConfig::new(dir.path())).unwrap();
    let app = app!(services);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::get().uri("/ready").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["ready"], true);
}

#[actix_web::test]
async fn test_readiness_of_in_memory_app() {
    let app = app!(AppServices::in_memory());

    let req = test::TestRequest::get().uri("/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["ready"], false);
    assert_eq!(body["checks"]["storage"], false);
}

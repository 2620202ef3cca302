use std::sync::Arc;

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::students::models::{
    CreateStudentRequest, StudentSearchQuery, UpdateStudentRequest,
};
use crate::modules::students::services::StudentService;

/// List students, optionally by exact name
/// GET /api/students
pub async fn list_students(
    service: web::Data<Arc<StudentService>>,
    query: web::Query<StudentSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let name = query.into_inner().name;
    let students = web::block(move || match name {
        Some(name) => service.find_students_by_name(&name),
        None => Ok(service.get_all_students()),
    })
    .await??;

    Ok(HttpResponse::Ok().json(students))
}

/// GET /api/students/{id}
pub async fn get_student(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let student_id = path.into_inner();
    let student = web::block(move || service.get_student_by_id(student_id)).await??;

    Ok(HttpResponse::Ok().json(student))
}

/// GET /api/students/group/{group_id}
pub async fn list_group_students(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let group_id = path.into_inner();
    let students = web::block(move || service.get_students_by_group(group_id)).await??;

    Ok(HttpResponse::Ok().json(students))
}

/// Enroll a student; the three tasks are created with it
/// POST /api/students
pub async fn create_student(
    service: web::Data<Arc<StudentService>>,
    request: web::Json<CreateStudentRequest>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let request = request.into_inner();
    let student =
        web::block(move || service.create_student(&request.name, request.group_id)).await??;

    Ok(HttpResponse::Created().json(student))
}

/// PUT /api/students/{id}
pub async fn update_student(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateStudentRequest>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let student_id = path.into_inner();
    let request = request.into_inner();
    let student = web::block(move || {
        service.update_student(student_id, &request.name, request.group_id)
    })
    .await??;

    Ok(HttpResponse::Ok().json(student))
}

/// DELETE /api/students/{id}
pub async fn delete_student(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let student_id = path.into_inner();
    web::block(move || service.delete_student(student_id)).await??;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Student {} deleted", student_id)
    })))
}

/// GET /api/students/{id}/tasks
pub async fn list_student_tasks(
    service: web::Data<Arc<StudentService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let student_id = path.into_inner();
    let tasks = web::block(move || service.get_student_tasks(student_id)).await??;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Configure student routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students")
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/group/{group_id}", web::get().to(list_group_students))
            .route("/{id}", web::get().to(get_student))
            .route("/{id}", web::put().to(update_student))
            .route("/{id}", web::delete().to(delete_student))
            .route("/{id}/tasks", web::get().to(list_student_tasks)),
    );
}

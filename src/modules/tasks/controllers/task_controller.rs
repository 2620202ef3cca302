use std::sync::Arc;

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::tasks::models::{TaskSearchQuery, UpdateTaskStatusRequest};
use crate::modules::tasks::services::TaskService;

/// List tasks, optionally filtered by student and status
/// GET /api/tasks
pub async fn list_tasks(
    service: web::Data<Arc<TaskService>>,
    query: web::Query<TaskSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let query = query.into_inner();
    let tasks = web::block(move || service.search_tasks(&query)).await??;

    Ok(HttpResponse::Ok().json(tasks))
}

/// GET /api/tasks/{id}
pub async fn get_task(
    service: web::Data<Arc<TaskService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let task_id = path.into_inner();
    let task = web::block(move || service.get_task_by_id(task_id)).await??;

    Ok(HttpResponse::Ok().json(task))
}

/// Mark a task submitted or not submitted
/// PUT /api/tasks/{id}/status
pub async fn update_task_status(
    service: web::Data<Arc<TaskService>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateTaskStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let task_id = path.into_inner();
    let status = request.into_inner().status;
    let task = web::block(move || service.update_task_status(task_id, status)).await??;

    Ok(HttpResponse::Ok().json(task))
}

/// Configure task routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tasks")
            .route("", web::get().to(list_tasks))
            .route("/{id}", web::get().to(get_task))
            .route("/{id}/status", web::put().to(update_task_status)),
    );
}

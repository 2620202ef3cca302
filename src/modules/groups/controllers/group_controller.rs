use std::sync::Arc;

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::core::error::AppError;
use crate::modules::groups::models::{CreateGroupRequest, GroupSearchQuery, UpdateGroupRequest};
use crate::modules::groups::services::GroupService;

/// List groups, optionally filtered by name and course
/// GET /api/groups
pub async fn list_groups(
    service: web::Data<Arc<GroupService>>,
    query: web::Query<GroupSearchQuery>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let query = query.into_inner();
    let groups = web::block(move || service.search_groups(&query)).await??;

    Ok(HttpResponse::Ok().json(groups))
}

/// GET /api/groups/{id}
pub async fn get_group(
    service: web::Data<Arc<GroupService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let group_id = path.into_inner();
    let group = web::block(move || service.get_group_by_id(group_id)).await??;

    Ok(HttpResponse::Ok().json(group))
}

/// POST /api/groups
pub async fn create_group(
    service: web::Data<Arc<GroupService>>,
    request: web::Json<CreateGroupRequest>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let request = request.into_inner();
    let group = web::block(move || service.create_group(&request.name, request.course)).await??;

    Ok(HttpResponse::Created().json(group))
}

/// PUT /api/groups/{id}
pub async fn update_group(
    service: web::Data<Arc<GroupService>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateGroupRequest>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let group_id = path.into_inner();
    let request = request.into_inner();
    let group =
        web::block(move || service.update_group(group_id, &request.name, request.course)).await??;

    Ok(HttpResponse::Ok().json(group))
}

/// Delete a group with its students and their tasks
/// DELETE /api/groups/{id}
pub async fn delete_group(
    service: web::Data<Arc<GroupService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let group_id = path.into_inner();
    web::block(move || service.delete_group(group_id)).await??;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": format!("Group {} deleted", group_id)
    })))
}

/// GET /api/groups/{id}/report
pub async fn group_report(
    service: web::Data<Arc<GroupService>>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let service = service.get_ref().clone();
    let group_id = path.into_inner();
    let report = web::block(move || service.get_group_report(group_id)).await??;

    Ok(HttpResponse::Ok().json(report))
}

/// Configure group routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/groups")
            .route("", web::get().to(list_groups))
            .route("", web::post().to(create_group))
            .route("/{id}", web::get().to(get_group))
            .route("/{id}", web::put().to(update_group))
            .route("/{id}", web::delete().to(delete_group))
            .route("/{id}/report", web::get().to(group_report)),
    );
}

//! Course management endpoints
//!
//! Every course route sits behind the authentication gate and the shared
//! course access policy.

use crate::domain::{Course, CreateCourseRequest, Department, Role, UpdateCourseRequest};
use crate::server::middleware::{PermissionPolicy, RequireAuth, RequirePermission};
use crate::server::AppState;
use crate::storage::CourseStore;
use crate::utils::error::{ApiError, Result};
use actix_web::{web, HttpResponse};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// Access policy shared by every course route
pub const COURSE_ACCESS_POLICY: PermissionPolicy = PermissionPolicy::new(
    &[Role::Administrator, Role::Manager],
    &[Department::Sales, Department::Marketing],
);

/// Configure course routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Scope middleware runs in reverse registration order; authentication
    // must precede the policy check.
    cfg.service(
        web::scope("/courses")
            .wrap(RequirePermission::new(COURSE_ACCESS_POLICY))
            .wrap(RequireAuth)
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_course))
            .route("/{id}", web::patch().to(update_course))
            .route("/{id}", web::delete().to(delete_course)),
    );
}

/// Single course response
#[derive(Debug, Serialize)]
struct CourseResponse {
    course: Course,
}

/// Course listing response
#[derive(Debug, Serialize)]
struct CourseListResponse {
    courses: Vec<Course>,
}

/// List all courses
async fn list_courses(state: web::Data<AppState>) -> Result<HttpResponse> {
    let courses = state.storage.courses.list().await?;

    Ok(HttpResponse::Ok().json(CourseListResponse { courses }))
}

/// Fetch a single course by id
async fn get_course(state: web::Data<AppState>, path: web::Path<String>) -> Result<HttpResponse> {
    let id = parse_course_id(&path)?;
    let course = state.storage.courses.get(id).await?;

    Ok(HttpResponse::Ok().json(CourseResponse { course }))
}

/// Create a new course
async fn create_course(
    state: web::Data<AppState>,
    request: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();
    request.validate()?;

    let course = Course {
        id: Uuid::new_v4(),
        title: request.title,
        topic: request.topic,
        learning_formats: request.learning_formats,
        bestseller: request.bestseller,
        start_date: request.start_date,
    };

    let created = state.storage.courses.insert(course).await?;
    info!("Course created: {}", created.id);

    Ok(HttpResponse::Created().json(CourseResponse { course: created }))
}

/// Apply a partial update to an existing course
async fn update_course(
    state: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<UpdateCourseRequest>,
) -> Result<HttpResponse> {
    let id = parse_course_id(&path)?;
    let request = request.into_inner();
    request.validate()?;

    let mut course = state.storage.courses.get(id).await?;
    request.apply(&mut course);

    let updated = state.storage.courses.update(course).await?;
    info!("Course updated: {}", updated.id);

    Ok(HttpResponse::Ok().json(CourseResponse { course: updated }))
}

/// Delete a course
async fn delete_course(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let id = parse_course_id(&path)?;
    state.storage.courses.delete(id).await?;
    info!("Course deleted: {}", id);

    Ok(HttpResponse::NoContent().finish())
}

/// Non-UUID path segments cannot name a stored course, so they map to the
/// same error as an unknown id.
fn parse_course_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw)
        .map_err(|_| ApiError::not_found(format!("Course With Id {} Not Found", raw)))
}

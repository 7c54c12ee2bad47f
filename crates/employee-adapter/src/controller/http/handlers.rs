//! Request handlers
//!
//! Each handler parses path and body, calls one `EmployeeService`
//! operation, and shapes the JSON response. Handlers are generic over the
//! repository so the same router serves every storage backend.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use employee_domain::{EmployeeId, EmployeeRepository};

use super::dto::{decode_employee, encode_employees, DeleteResponse, EmployeeBody};
use super::error::ApiError;
use super::SharedService;

pub async fn list<R: EmployeeRepository>(
    State(service): State<SharedService<R>>,
) -> Result<Json<Vec<EmployeeBody>>, ApiError> {
    let employees = service.list().await?;
    Ok(Json(encode_employees(&employees)))
}

pub async fn create<R: EmployeeRepository>(
    State(service): State<SharedService<R>>,
    body: Bytes,
) -> Result<Json<EmployeeBody>, ApiError> {
    let input = decode_employee(&body)?;
    let employee = service.create(input).await?;
    Ok(Json(EmployeeBody::from(&employee)))
}

pub async fn get_by_id<R: EmployeeRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeBody>, ApiError> {
    let employee = service.get(EmployeeId::new(id)).await?;
    Ok(Json(EmployeeBody::from(&employee)))
}

pub async fn update<R: EmployeeRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Json<EmployeeBody>, ApiError> {
    let input = decode_employee(&body)?;
    let employee = service.update(EmployeeId::new(id), input).await?;
    Ok(Json(EmployeeBody::from(&employee)))
}

pub async fn delete<R: EmployeeRepository>(
    State(service): State<SharedService<R>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    service.delete(EmployeeId::new(id)).await?;
    Ok(Json(DeleteResponse { deleted: true }))
}

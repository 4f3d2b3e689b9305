use actix_web::{web, HttpResponse};
use log::debug;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde::{Deserialize, Serialize};

use crate::entity::memo;
use crate::error::AppError;
use crate::response::ResponseDto;
use crate::session::with_session;

pub const NOT_FOUND_MSG: &str = "발견된 메모가 없습니다.";
pub const DELETED_MSG: &str = "메모가 삭제되었습니다.";

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::post().to(create))
            .route(web::get().to(list)),
    )
    .service(
        web::resource("/{memo_id:\\d+}")
            .route(web::put().to(update))
            .route(web::delete().to(remove)),
    );
}

#[derive(Deserialize)]
struct CreateMemoRequest {
    title: String,
    content: String,
}

/// Fields that are missing or empty keep their stored value.
#[derive(Deserialize)]
struct UpdateMemoRequest {
    title: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct MemoDto {
    id: i32,
    title: Option<String>,
    content: Option<String>,
}

async fn create(
    db: web::Data<DatabaseConnection>,
    payload: web::Json<CreateMemoRequest>,
) -> Result<HttpResponse, AppError> {
    let CreateMemoRequest { title, content } = payload.into_inner();
    let memo_model = memo::ActiveModel {
        title: Set(Some(title)),
        content: Set(Some(content)),
        ..Default::default()
    };

    let inserted = with_session(db.get_ref(), |txn| {
        Box::pin(async move { Ok(memo_model.insert(txn).await?) })
    })
    .await?;
    debug!("memo created id={}", inserted.id);

    Ok(HttpResponse::Ok().json(to_dto(inserted)))
}

async fn list(db: web::Data<DatabaseConnection>) -> Result<HttpResponse, AppError> {
    let rows = with_session(db.get_ref(), |txn| {
        Box::pin(async move { Ok(memo::Entity::find().all(txn).await?) })
    })
    .await?;

    let list = rows.into_iter().map(to_dto).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(list))
}

async fn update(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
    payload: web::Json<UpdateMemoRequest>,
) -> Result<HttpResponse, AppError> {
    let memo_id = path.into_inner();
    let UpdateMemoRequest { title, content } = payload.into_inner();

    let updated = with_session(db.get_ref(), |txn| {
        Box::pin(async move {
            let Some(exist) = memo::Entity::find_by_id(memo_id).one(txn).await? else {
                return Ok(None);
            };

            let mut memo_model: memo::ActiveModel = exist.clone().into();
            if let Some(title) = provided(title) {
                memo_model.title = Set(Some(title));
            }
            if let Some(content) = provided(content) {
                memo_model.content = Set(Some(content));
            }
            if !memo_model.is_changed() {
                return Ok(Some(exist));
            }
            Ok(Some(memo_model.update(txn).await?))
        })
    })
    .await?;

    match updated {
        Some(model) => {
            debug!("memo updated id={}", model.id);
            Ok(HttpResponse::Ok().json(ResponseDto::success(to_dto(model))))
        }
        None => Ok(HttpResponse::Ok().json(ResponseDto::<MemoDto>::fail(NOT_FOUND_MSG))),
    }
}

async fn remove(
    db: web::Data<DatabaseConnection>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let memo_id = path.into_inner();

    let removed = with_session(db.get_ref(), |txn| {
        Box::pin(async move {
            let Some(exist) = memo::Entity::find_by_id(memo_id).one(txn).await? else {
                return Ok(false);
            };
            memo::Entity::delete_by_id(exist.id).exec(txn).await?;
            Ok(true)
        })
    })
    .await?;

    if !removed {
        return Ok(HttpResponse::Ok().json(ResponseDto::<()>::fail(NOT_FOUND_MSG)));
    }
    debug!("memo deleted id={}", memo_id);
    Ok(HttpResponse::Ok().json(ResponseDto::message(DELETED_MSG)))
}

fn provided(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn to_dto(model: memo::Model) -> MemoDto {
    MemoDto {
        id: model.id,
        title: model.title,
        content: model.content,
    }
}

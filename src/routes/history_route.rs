use actix_web::{get, post, web, HttpResponse};
use askama::Template;
use sqlx::SqlitePool;

use crate::dal::search_log_db::{self, SearchRow};

#[derive(Template)]
#[template(path = "history.html")]
struct HistoryTemplate {
    searches: Vec<SearchRow>,
    empty: bool,
}

#[get("/history")]
async fn history(pool: web::Data<SqlitePool>) -> HttpResponse {
    render_history(&pool).await
}

#[post("/history")]
async fn clear_history(pool: web::Data<SqlitePool>) -> HttpResponse {
    if let Err(error) = search_log_db::clear_searches(&pool).await {
        log::error!("Failed to clear the search log: {:?}", error);
    }

    render_history(&pool).await
}

async fn render_history(pool: &SqlitePool) -> HttpResponse {
    let searches = search_log_db::list_searches(pool).await.unwrap_or_default();
    let empty = searches.is_empty();

    HttpResponse::Ok().body(HistoryTemplate { searches, empty }.render().unwrap())
}

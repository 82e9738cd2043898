use actix_web::{get, post, web, HttpResponse};
use askama::Template;
use reqwest::Client;
use serde::Deserialize;
use sqlx::SqlitePool;

use crate::{
    domain::snippet::Snippet,
    services::{
        citizendium::Citizendium,
        encyclopedia::{self, SearchError, Source},
        wikipedia::Wikipedia,
    },
};

enum SourceOutcome {
    NotAsked,
    Snippets(Vec<Snippet>),
    Failed(String),
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    key_word: String,
    wikipedia: SourceOutcome,
    citizendium: SourceOutcome,
}

fn blank() -> IndexTemplate {
    IndexTemplate {
        key_word: String::new(),
        wikipedia: SourceOutcome::NotAsked,
        citizendium: SourceOutcome::NotAsked,
    }
}

fn render(template: IndexTemplate) -> HttpResponse {
    HttpResponse::Ok().body(template.render().unwrap())
}

#[get("/")]
async fn index() -> HttpResponse {
    render(blank())
}

#[derive(Deserialize)]
struct SearchForm {
    key_word: String,
}

#[post("/")]
async fn search(
    form: web::Form<SearchForm>,
    pool: web::Data<SqlitePool>,
    http: web::Data<Client>,
    wikipedia: web::Data<Wikipedia>,
    citizendium: web::Data<Citizendium>,
) -> HttpResponse {
    let key_word = form.key_word.trim().to_string();
    if key_word.is_empty() {
        return render(blank());
    }

    // Each source runs on its own; one failing never hides the other.
    let wikipedia = attempt(wikipedia.get_ref(), &http, &pool, &key_word).await;
    let citizendium = attempt(citizendium.get_ref(), &http, &pool, &key_word).await;

    render(IndexTemplate {
        key_word,
        wikipedia,
        citizendium,
    })
}

async fn attempt<S: Source>(
    source: &S,
    http: &Client,
    pool: &SqlitePool,
    key_word: &str,
) -> SourceOutcome {
    match encyclopedia::search(source, http, pool, key_word).await {
        Ok(snippets) => SourceOutcome::Snippets(snippets),
        Err(error) => {
            log::error!("{} lookup for {:?} failed: {:?}", source.name(), key_word, error);
            SourceOutcome::Failed(user_message(source.name(), &error))
        }
    }
}

fn user_message(source: &str, error: &SearchError) -> String {
    match error {
        SearchError::Connectivity(_) => "You are not connected to the Internet".to_string(),
        SearchError::Timeout(_) => format!("{} took too long to respond", source),
        SearchError::Fetch { code, reason } => format!("{}: {}", code, reason),
        SearchError::Extraction(detail) => format!("An unexpected error occurred: {}", detail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_errors_surface_the_code_and_reason() {
        let error = SearchError::Fetch {
            code: 404,
            reason: "Page does not exist",
        };

        assert_eq!(user_message("Wikipedia", &error), "404: Page does not exist");
    }

    #[test]
    fn extraction_errors_keep_their_detail() {
        let error = SearchError::Extraction(anyhow::anyhow!("no top marker"));

        assert_eq!(
            user_message("Citizendium", &error),
            "An unexpected error occurred: no top marker"
        );
    }
}

use chrono::Local;
use sqlx::SqlitePool;

/// One recorded lookup. Date and time are stored as text, stamped when the
/// row is written.
#[derive(Debug, sqlx::FromRow)]
pub struct SearchRow {
    pub id: i64,
    pub website: String,
    pub key_word: String,
    pub date: String,
    pub time: String,
}

pub async fn create_search_log_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        create table if not exists search_log (
            id integer primary key autoincrement,
            website text not null,
            key_word text not null,
            date text not null,
            time text not null
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn insert_search(
    pool: &SqlitePool,
    website: &str,
    key_word: &str,
) -> Result<(), sqlx::Error> {
    let now = Local::now();

    sqlx::query(
        r#"
        insert into search_log
            (website, key_word, date, time)
        values
            ($1, $2, $3, $4)
        "#,
    )
    .bind(website)
    .bind(key_word)
    .bind(now.format("%Y-%m-%d").to_string())
    .bind(now.format("%H:%M").to_string())
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn list_searches(pool: &SqlitePool) -> Result<Vec<SearchRow>, sqlx::Error> {
    sqlx::query_as::<_, SearchRow>(
        r#"
        select
            id,
            website,
            key_word,
            date,
            time
        from
            search_log
        order by id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn clear_searches(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("delete from search_log").execute(pool).await?;

    Ok(())
}

pub async fn is_empty(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("select count(*) from search_log")
        .fetch_one(pool)
        .await?;

    Ok(count == 0)
}

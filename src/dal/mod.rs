pub mod search_log_db;

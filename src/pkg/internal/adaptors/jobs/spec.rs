use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobEntry {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price_pi: f64,
}

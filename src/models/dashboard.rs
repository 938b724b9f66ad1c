// src/models/dashboard.rs

use serde::Serialize;
use utoipa::ToSchema;

// Os cards do dashboard: total de linhas de cada cadastro mestre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCounts {
    pub companies: i64,
    pub people: i64,
    pub users: i64,
    pub items: i64,
}

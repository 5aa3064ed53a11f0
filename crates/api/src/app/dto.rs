use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// -------------------------
// Auth
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: &'static str,
}

impl LoginResponse {
    pub fn bearer(token: String) -> Self {
        Self { token, token_type: "Bearer" }
    }
}

// -------------------------
// Status
// -------------------------

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub code: u16,
    pub status: &'static str,
    pub commit: String,
}

// -------------------------
// Decision log
// -------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize)]
pub struct Votes {
    #[serde(rename = "votesFor")]
    pub votes_for: u32,
    pub against: u32,
    pub abstain: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub category: String,
    pub status: DecisionStatus,
    pub votes: Votes,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_date: Option<NaiveDate>,
    pub documents: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SortView {
    pub sorted: bool,
    pub unsorted: bool,
    pub empty: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageableView {
    pub sort: SortView,
    pub page_number: usize,
    pub page_size: usize,
    pub offset: usize,
    pub paged: bool,
    pub unpaged: bool,
}

/// Page envelope mirroring the shape the frontend consumes.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionLogResponse {
    pub content: Vec<Decision>,
    pub total_elements: usize,
    pub total_pages: usize,
    pub size: usize,
    pub number: usize,
    pub first: bool,
    pub last: bool,
    pub number_of_elements: usize,
    pub pageable: PageableView,
}

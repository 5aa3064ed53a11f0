//! Decision log for residents: paginated, filterable, sortable mock data.
//!
//! Data lives in memory; a real deployment would query a database and keep
//! the same response envelope.

use axum::{Json, extract::Query};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::app::dto::{
    Decision, DecisionLogResponse, DecisionStatus, PageableView, SortView, Votes,
};

#[derive(Debug, Deserialize)]
pub struct DecisionLogQuery {
    #[serde(default)]
    pub page: usize,
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_sort")]
    pub sort: String,
    pub category: Option<String>,
    pub status: Option<String>,
}

fn default_size() -> usize {
    10
}

fn default_sort() -> String {
    "date".to_string()
}

/// GET /mieszkaniec/decision-log
pub async fn decision_log(Query(query): Query<DecisionLogQuery>) -> Json<DecisionLogResponse> {
    let mut decisions = mock_decisions();

    if let Some(category) = &query.category {
        decisions.retain(|d| &d.category == category);
    }
    if let Some(status) = query.status.as_deref().and_then(parse_status) {
        decisions.retain(|d| d.status == status);
    }

    match query.sort.as_str() {
        "date" => decisions.sort_by(|a, b| b.date.cmp(&a.date)),
        "category" => decisions.sort_by(|a, b| a.category.cmp(&b.category)),
        "status" => decisions.sort_by(|a, b| a.status.cmp(&b.status)),
        _ => {}
    }

    let size = query.size.max(1);
    let page = query.page;
    let total_elements = decisions.len();
    let total_pages = total_elements.div_ceil(size);
    // `page` comes straight off the query string; keep the arithmetic
    // saturating so absurd values clamp instead of overflowing.
    let offset = page.saturating_mul(size);
    let end = offset.saturating_add(size).min(total_elements);
    let content: Vec<Decision> = if offset < total_elements {
        decisions[offset..end].to_vec()
    } else {
        Vec::new()
    };

    let number_of_elements = content.len();
    Json(DecisionLogResponse {
        content,
        total_elements,
        total_pages,
        size,
        number: page,
        first: page == 0,
        last: page.saturating_add(1) >= total_pages,
        number_of_elements,
        pageable: PageableView {
            sort: SortView { sorted: true, unsorted: false, empty: false },
            page_number: page,
            page_size: size,
            offset,
            paged: true,
            unpaged: false,
        },
    })
}

fn parse_status(value: &str) -> Option<DecisionStatus> {
    match value {
        "active" => Some(DecisionStatus::Active),
        "completed" => Some(DecisionStatus::Completed),
        "cancelled" => Some(DecisionStatus::Cancelled),
        _ => None,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // All mock dates are valid literals.
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn mock_decisions() -> Vec<Decision> {
    vec![
        Decision {
            id: "1".into(),
            title: "Remont klatki schodowej".into(),
            description: "Zatwierdzenie planu remontu klatki schodowej A, obejmującego malowanie ścian, wymianę oświetlenia i naprawę poręczy.".into(),
            date: date(2024, 1, 15),
            category: "Remonty".into(),
            status: DecisionStatus::Active,
            votes: Votes { votes_for: 45, against: 12, abstain: 8 },
            approval_date: Some(date(2024, 1, 20)),
            documents: vec!["Plan_remontu.pdf".into(), "Kosztorys.pdf".into()],
        },
        Decision {
            id: "2".into(),
            title: "Wymiana systemu ogrzewania".into(),
            description: "Decyzja o wymianie przestarzałego systemu ogrzewania na nowoczesny system gazowy z indywidualnymi licznikami.".into(),
            date: date(2024, 1, 10),
            category: "Infrastruktura".into(),
            status: DecisionStatus::Completed,
            votes: Votes { votes_for: 52, against: 8, abstain: 5 },
            approval_date: Some(date(2024, 1, 15)),
            documents: vec!["Analiza_kosztów.pdf".into(), "Umowa_z_firmą.pdf".into()],
        },
        Decision {
            id: "3".into(),
            title: "Zwiększenie opłat za administrację".into(),
            description: "Podwyższenie miesięcznych opłat za administrację o 15% w związku z rosnącymi kosztami utrzymania budynku.".into(),
            date: date(2024, 1, 5),
            category: "Finanse".into(),
            status: DecisionStatus::Active,
            votes: Votes { votes_for: 38, against: 25, abstain: 2 },
            approval_date: None,
            documents: vec!["Analiza_finansowa.pdf".into()],
        },
        Decision {
            id: "4".into(),
            title: "Instalacja systemu monitoringu".into(),
            description: "Zatwierdzenie instalacji systemu kamer monitoringu w częściach wspólnych budynku.".into(),
            date: date(2023, 12, 20),
            category: "Bezpieczeństwo".into(),
            status: DecisionStatus::Completed,
            votes: Votes { votes_for: 48, against: 15, abstain: 2 },
            approval_date: Some(date(2023, 12, 25)),
            documents: vec!["Specyfikacja_techniczna.pdf".into(), "Umowa_instalacyjna.pdf".into()],
        },
        Decision {
            id: "5".into(),
            title: "Zmiana regulaminu wspólnoty".into(),
            description: "Aktualizacja regulaminu wspólnoty mieszkaniowej w związku z nowymi przepisami prawa.".into(),
            date: date(2023, 12, 10),
            category: "Regulamin".into(),
            status: DecisionStatus::Active,
            votes: Votes { votes_for: 42, against: 18, abstain: 5 },
            approval_date: None,
            documents: vec!["Nowy_regulamin.pdf".into(), "Porównanie_zmian.pdf".into()],
        },
    ]
}

use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::borrowers::domain::Borrower;
use crate::core::library::ItemKind;
use crate::items::domain::LibraryItem;
use crate::utils::date::serializer;


// LoanDto records a successful lend of an item to a borrower.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct LoanDto {
    pub loan_id: String,
    pub branch_id: String,
    pub borrower_id: i64,
    pub item_id: i64,
    pub item_kind: ItemKind,
    pub title: String,
    #[serde(with = "serializer")]
    pub lent_at: NaiveDateTime,
}

impl LoanDto {
    pub fn new(branch_id: &str, borrower_id: i64, item_id: i64, item_kind: ItemKind, title: &str) -> Self {
        Self {
            loan_id: Uuid::new_v4().to_string(),
            branch_id: branch_id.to_string(),
            borrower_id,
            item_id,
            item_kind,
            title: title.to_string(),
            lent_at: Utc::now().naive_utc(),
        }
    }

    pub fn from_borrower_item(branch_id: &str, borrower: &dyn Borrower, item: &dyn LibraryItem) -> Self {
        LoanDto::new(branch_id, borrower.id(), item.id(), item.kind(), item.title())
    }
}

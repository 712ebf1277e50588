use crate::borrowers::domain::Borrower;
use crate::checkout::dto::LoanDto;
use crate::core::library::LibraryResult;
use crate::core::locale::Heading;
use crate::items::domain::SharedItem;

pub mod service;

pub trait LendingService {
    fn lend(&self, borrower: &mut dyn Borrower, item: &SharedItem) -> LibraryResult<LoanDto>;
    fn show_item(&self, item: &SharedItem) -> LibraryResult<()>;
    fn show_borrowed_items(&self, borrower: &dyn Borrower) -> LibraryResult<()>;
    fn show_last_borrowed(&self, borrower: &dyn Borrower) -> LibraryResult<()>;
    fn show_heading(&self, heading: Heading) -> LibraryResult<()>;
}

use crate::core::domain::Identifiable;
use crate::core::library::LibraryResult;
use crate::items::domain::SharedItem;

pub mod model;

pub trait Borrower: Identifiable {
    fn name(&self) -> &str;
    fn borrowed_items(&self) -> &[SharedItem];
    fn last_borrowed(&self) -> Option<&SharedItem>;
    fn lend(&mut self, item: &SharedItem) -> LibraryResult<()>;
}

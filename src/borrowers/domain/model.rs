use std::rc::Rc;
use crate::borrowers::domain::Borrower;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::items::domain::SharedItem;
use crate::items::domain::seal::Seal;

// BorrowerEntity abstracts a library member together with the history of items lent to it.
// The history only holds handles; the items themselves are owned by whoever created them.
#[derive(Debug)]
pub struct BorrowerEntity {
    borrower_id: i64,
    pub name: String,
    borrowed_items: Vec<SharedItem>,
    last_borrowed: Option<SharedItem>,
}

impl BorrowerEntity {
    pub fn new(borrower_id: i64, name: &str) -> Self {
        Self {
            borrower_id,
            name: name.to_string(),
            borrowed_items: vec![],
            last_borrowed: None,
        }
    }
}

impl Identifiable for BorrowerEntity {
    fn id(&self) -> i64 {
        self.borrower_id
    }
}

impl Borrower for BorrowerEntity {
    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn borrowed_items(&self) -> &[SharedItem] {
        self.borrowed_items.as_slice()
    }

    fn last_borrowed(&self) -> Option<&SharedItem> {
        self.last_borrowed.as_ref()
    }

    fn lend(&mut self, item: &SharedItem) -> LibraryResult<()> {
        {
            let mut lent = item.try_borrow_mut().map_err(|err| LibraryError::runtime(
                format!("item is in use and cannot be lent {:?}", err).as_str(), None))?;
            let item_id = lent.id();
            // leaves item and history untouched when the item is already out
            lent.availability_mut(Seal::new()).check_out(item_id)?;
        }
        self.borrowed_items.push(Rc::clone(item));
        self.last_borrowed = Some(Rc::clone(item));
        Ok(())
    }
}

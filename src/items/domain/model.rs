use serde::Serialize;
use crate::core::library::{ItemStatus, LibraryError, LibraryResult};

/// Availability guards the lent/available flag of an item; only the lending protocol
/// inside this crate may flip it, and nothing flips it back.
///
/// A lent item cannot be reset from outside the crate:
///
/// ```compile_fail
/// use lending::items::domain::model::Availability;
/// use lending::items::factory::create_book;
///
/// let book = create_book(2, "El Hobbit", "JRR Tolkien", 400, None);
/// *book.borrow_mut().availability_mut() = Availability::new();
/// ```
///
/// Nor can a checked-out item be materialized from serialized data:
///
/// ```compile_fail
/// use lending::items::domain::book::BookEntity;
///
/// let _book: BookEntity = serde_json::from_str(
///     r#"{"book_id":1,"title":"t","author":"a","page_count":1,"genre":null,"availability":{"status":"CheckedOut"}}"#)
///     .expect("parse book");
/// ```
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Availability {
    status: ItemStatus,
}

impl Availability {
    pub(crate) fn new() -> Self {
        Self {
            status: ItemStatus::Available,
        }
    }

    pub fn status(&self) -> ItemStatus {
        self.status
    }

    pub fn is_available(&self) -> bool {
        self.status == ItemStatus::Available
    }

    pub(crate) fn check_out(&mut self, item_id: i64) -> LibraryResult<()> {
        if self.status != ItemStatus::Available {
            return Err(LibraryError::unavailable(
                format!("item {} is already lent", item_id).as_str(), Some("409".to_string())));
        }
        self.status = ItemStatus::CheckedOut;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::ItemStatus;
    use crate::items::domain::model::Availability;

    #[test]
    fn test_should_start_available() {
        let availability = Availability::new();
        assert!(availability.is_available());
        assert_eq!(ItemStatus::Available, availability.status());
    }

    #[test]
    fn test_should_check_out_once() {
        let mut availability = Availability::new();
        availability.check_out(7).expect("should check out");
        assert_eq!(ItemStatus::CheckedOut, availability.status());
        let err = availability.check_out(7).expect_err("should reject second check out");
        assert!(err.is_unavailable());
        assert_eq!(ItemStatus::CheckedOut, availability.status());
    }

    #[test]
    fn test_should_serialize_status() {
        let mut availability = Availability::new();
        availability.check_out(7).expect("should check out");
        let json = serde_json::to_string(&availability).expect("serialize availability");
        assert_eq!("{\"status\":\"CheckedOut\"}", json.as_str());
    }
}

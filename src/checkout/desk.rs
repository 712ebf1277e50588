use tracing::debug;
use crate::borrowers::domain::model::BorrowerEntity;
use crate::checkout::domain::LendingService;
use crate::core::library::LibraryResult;
use crate::core::locale::Heading;
use crate::items::domain::SharedItem;
use crate::items::factory::{create_book, create_magazine};

// Runs the lending desk demonstration: list the catalog, lend three items, report the
// borrower history, retry an item that is already out and list the catalog again.
pub fn run(desk: &dyn LendingService) -> LibraryResult<()> {
    desk.show_heading(Heading::Welcome)?;

    let book1 = create_book(1, "El Señor de los Anillos", "JRR Tolkien", 500, Some("Fantasia"));
    let book2 = create_book(2, "El Hobbit", "JRR Tolkien", 400, Some("Fantasia"));
    let magazine = create_magazine(3, "National Geographic", "National Geographic", 20);
    let mut borrower = BorrowerEntity::new(1, "Mauricio Heredia");
    let items = vec![book1.clone(), book2.clone(), magazine.clone()];

    desk.show_heading(Heading::AvailableItems)?;
    show_all(desk, &items)?;

    desk.show_heading(Heading::Lending)?;
    desk.lend(&mut borrower, &book1)?;
    desk.lend(&mut borrower, &magazine)?;
    desk.lend(&mut borrower, &book2)?;

    desk.show_borrowed_items(&borrower)?;
    desk.show_last_borrowed(&borrower)?;

    desk.show_heading(Heading::CurrentState)?;
    show_all(desk, &items)?;

    desk.show_heading(Heading::RetryUnavailable)?;
    match desk.lend(&mut borrower, &book2) {
        Err(err) if err.is_unavailable() => debug!("second lend of item 2 rejected: {}", err),
        other => {
            other?;
        }
    }

    desk.show_heading(Heading::Polymorphism)?;
    show_all(desk, &items)
}

fn show_all(desk: &dyn LendingService, items: &[SharedItem]) -> LibraryResult<()> {
    for item in items {
        desk.show_item(item)?;
    }
    Ok(())
}

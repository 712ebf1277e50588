use std::cell::RefCell;
use std::fmt::Debug;
use std::rc::Rc;
use crate::core::domain::Identifiable;
use crate::core::library::{ItemKind, ItemStatus};
use crate::core::locale::Locale;
use crate::items::domain::model::Availability;
use crate::items::domain::seal::Seal;

pub mod book;
pub mod magazine;
pub mod model;

pub(crate) mod seal {
    // Seal can only be built inside this crate, so only the lending protocol can reach
    // the mutable availability of an item.
    #[derive(Debug, Clone, Copy)]
    pub struct Seal(());

    impl Seal {
        pub(crate) fn new() -> Self {
            Seal(())
        }
    }
}

// SharedItem is a non-owning handle held by both the catalog owner and borrowers.
pub type SharedItem = Rc<RefCell<dyn LibraryItem>>;

pub trait LibraryItem: Identifiable + Debug {
    fn kind(&self) -> ItemKind;
    fn title(&self) -> &str;
    fn author(&self) -> &str;
    fn availability(&self) -> &Availability;
    fn availability_mut(&mut self, seal: Seal) -> &mut Availability;
    fn render_info(&self, locale: Locale) -> String;

    fn status(&self) -> ItemStatus {
        self.availability().status()
    }

    fn is_available(&self) -> bool {
        self.availability().is_available()
    }
}

use std::cell::RefCell;
use std::rc::Rc;
use crate::items::domain::{LibraryItem, SharedItem};
use crate::items::domain::book::BookEntity;
use crate::items::domain::magazine::MagazineEntity;

pub fn share<T: LibraryItem + 'static>(item: T) -> SharedItem {
    Rc::new(RefCell::new(item))
}

pub fn create_book(id: i64, title: &str, author: &str, page_count: u32, genre: Option<&str>) -> SharedItem {
    share(BookEntity::new(id, title, author, page_count, genre))
}

pub fn create_magazine(id: i64, title: &str, author: &str, issue_number: u32) -> SharedItem {
    share(MagazineEntity::new(id, title, author, issue_number))
}

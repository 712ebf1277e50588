use serde::Serialize;
use crate::core::domain::Identifiable;
use crate::core::library::ItemKind;
use crate::core::locale::Locale;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::Availability;
use crate::items::domain::seal::Seal;

// BookEntity abstracts a bound book that can be lent from the desk.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct BookEntity {
    book_id: i64,
    pub title: String,
    pub author: String,
    pub page_count: u32,
    pub genre: Option<String>,
    availability: Availability,
}

impl BookEntity {
    pub fn new(book_id: i64, title: &str, author: &str, page_count: u32, genre: Option<&str>) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            page_count,
            genre: genre.map(str::to_string),
            availability: Availability::new(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> i64 {
        self.book_id
    }
}

impl LibraryItem for BookEntity {
    fn kind(&self) -> ItemKind {
        ItemKind::Book
    }

    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn availability(&self) -> &Availability {
        &self.availability
    }

    fn availability_mut(&mut self, _seal: Seal) -> &mut Availability {
        &mut self.availability
    }

    fn render_info(&self, locale: Locale) -> String {
        let labels = locale.labels();
        // an empty genre counts as absent
        let genre = match self.genre.as_deref() {
            Some(genre) if !genre.is_empty() => format!(", {}: {}", labels.genre, genre),
            _ => String::new(),
        };
        format!("📖 {} - ID: {}, {}: {}, {}: {}, {}: {}{}, {}: {}",
                labels.book, self.book_id,
                labels.title, self.title,
                labels.author, self.author,
                labels.pages, self.page_count, genre,
                labels.available, locale.yes_no(self.is_available()))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Identifiable;
    use crate::core::library::{ItemKind, ItemStatus};
    use crate::core::locale::Locale;
    use crate::items::domain::LibraryItem;
    use crate::items::domain::seal::Seal;
    use crate::items::domain::book::BookEntity;

    #[test]
    fn test_should_build_book() {
        let book = BookEntity::new(1, "El Hobbit", "JRR Tolkien", 400, Some("Fantasia"));
        assert_eq!(1, book.id());
        assert_eq!("El Hobbit", book.title());
        assert_eq!("JRR Tolkien", book.author());
        assert_eq!(ItemKind::Book, book.kind());
        assert_eq!(ItemStatus::Available, book.status());
        assert!(book.is_available());
    }

    #[test]
    fn test_should_render_book_with_genre() {
        let book = BookEntity::new(1, "El Señor de los Anillos", "JRR Tolkien", 500, Some("Fantasia"));
        assert_eq!("📖 Libro - ID: 1, Título: El Señor de los Anillos, Autor: JRR Tolkien, Páginas: 500, Género: Fantasia, Disponible: Sí",
                   book.render_info(Locale::Es));
    }

    #[test]
    fn test_should_omit_missing_genre() {
        let book = BookEntity::new(4, "Ficciones", "Borges", 200, None);
        let info = book.render_info(Locale::Es);
        assert_eq!("📖 Libro - ID: 4, Título: Ficciones, Autor: Borges, Páginas: 200, Disponible: Sí", info);
        assert!(!info.contains("Género"));
    }

    #[test]
    fn test_should_omit_empty_genre() {
        let book = BookEntity::new(4, "Ficciones", "Borges", 200, Some(""));
        assert!(!book.render_info(Locale::Es).contains("Género"));
    }

    #[test]
    fn test_should_render_book_in_english() {
        let mut book = BookEntity::new(2, "The Hobbit", "JRR Tolkien", 310, None);
        book.availability_mut(Seal::new()).check_out(2).expect("should check out");
        assert_eq!("📖 Book - ID: 2, Title: The Hobbit, Author: JRR Tolkien, Pages: 310, Available: No",
                   book.render_info(Locale::En));
    }

    #[test]
    fn test_should_allow_editing_descriptive_fields() {
        let mut book = BookEntity::new(1, "draft", "anon", 10, None);
        book.title = "Final".to_string();
        book.author = "Someone".to_string();
        assert_eq!("Final", book.title());
        assert_eq!("Someone", book.author());
    }
}

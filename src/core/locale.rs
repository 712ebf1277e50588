use serde::{Deserialize, Serialize};

// Labels abstracts the fixed words used when rendering a catalog item.
#[derive(Debug, PartialEq)]
pub struct Labels {
    pub book: &'static str,
    pub magazine: &'static str,
    pub title: &'static str,
    pub author: &'static str,
    pub pages: &'static str,
    pub genre: &'static str,
    pub issue: &'static str,
    pub available: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
}

const SPANISH: Labels = Labels {
    book: "Libro",
    magazine: "Revista",
    title: "Título",
    author: "Autor",
    pages: "Páginas",
    genre: "Género",
    issue: "Edición",
    available: "Disponible",
    yes: "Sí",
    no: "No",
};

const ENGLISH: Labels = Labels {
    book: "Book",
    magazine: "Magazine",
    title: "Title",
    author: "Author",
    pages: "Pages",
    genre: "Genre",
    issue: "Issue",
    available: "Available",
    yes: "Yes",
    no: "No",
};

// Heading defines the section titles printed by the lending desk program
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Heading {
    Welcome,
    AvailableItems,
    Lending,
    CurrentState,
    RetryUnavailable,
    Polymorphism,
}

#[derive(Debug, Default, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    pub fn labels(&self) -> &'static Labels {
        match self {
            Locale::Es => &SPANISH,
            Locale::En => &ENGLISH,
        }
    }

    pub fn yes_no(&self, value: bool) -> &'static str {
        let labels = self.labels();
        if value { labels.yes } else { labels.no }
    }

    pub fn lend_succeeded(&self) -> String {
        match self {
            Locale::Es => "Material prestado exitosamente.".to_string(),
            Locale::En => "Item lent successfully.".to_string(),
        }
    }

    pub fn lend_rejected(&self) -> String {
        match self {
            Locale::Es => "El material ya estaba prestado.".to_string(),
            Locale::En => "The item was already lent.".to_string(),
        }
    }

    pub fn borrowed_header(&self, name: &str) -> String {
        match self {
            Locale::Es => format!("Materiales prestados por {}:", name),
            Locale::En => format!("Items borrowed by {}:", name),
        }
    }

    pub fn no_borrowed_items(&self) -> String {
        match self {
            Locale::Es => "No hay materiales prestados.".to_string(),
            Locale::En => "No items borrowed yet.".to_string(),
        }
    }

    pub fn last_loan_header(&self, name: &str) -> String {
        match self {
            Locale::Es => format!("Última prestación de {}:", name),
            Locale::En => format!("Last loan of {}:", name),
        }
    }

    pub fn no_loans_yet(&self, name: &str) -> String {
        match self {
            Locale::Es => format!("{} no ha realizado ninguna prestación aún.", name),
            Locale::En => format!("{} has not borrowed anything yet.", name),
        }
    }

    pub fn heading(&self, heading: Heading) -> &'static str {
        match (self, heading) {
            (Locale::Es, Heading::Welcome) => "Bienvenido a la biblioteca digital.",
            (Locale::Es, Heading::AvailableItems) => "Materiales disponibles:",
            (Locale::Es, Heading::Lending) => "Realizando préstamos:",
            (Locale::Es, Heading::CurrentState) => "Estado actual de los materiales:",
            (Locale::Es, Heading::RetryUnavailable) => "Intentando prestar un material no disponible:",
            (Locale::Es, Heading::Polymorphism) => "Demostración de polimorfismo:",
            (Locale::En, Heading::Welcome) => "Welcome to the digital library.",
            (Locale::En, Heading::AvailableItems) => "Available items:",
            (Locale::En, Heading::Lending) => "Lending items:",
            (Locale::En, Heading::CurrentState) => "Current state of the items:",
            (Locale::En, Heading::RetryUnavailable) => "Trying to lend an unavailable item:",
            (Locale::En, Heading::Polymorphism) => "Polymorphism demo:",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::locale::{Heading, Locale};

    #[test]
    fn test_should_default_to_spanish() {
        assert_eq!(Locale::Es, Locale::default());
        assert_eq!("Sí", Locale::default().yes_no(true));
        assert_eq!("No", Locale::default().yes_no(false));
    }

    #[test]
    fn test_should_parse_locale_from_config() {
        let locale: Locale = serde_json::from_str("\"En\"").expect("parse locale");
        assert_eq!(Locale::En, locale);
        assert!(serde_json::from_str::<Locale>("\"fr\"").is_err());
    }

    #[test]
    fn test_should_build_notifications() {
        assert_eq!("Materiales prestados por Ana:", Locale::Es.borrowed_header("Ana"));
        assert_eq!("Ana no ha realizado ninguna prestación aún.", Locale::Es.no_loans_yet("Ana"));
        assert_eq!("Last loan of Ana:", Locale::En.last_loan_header("Ana"));
        assert_eq!("Bienvenido a la biblioteca digital.", Locale::Es.heading(Heading::Welcome));
    }
}

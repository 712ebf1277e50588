use serde::Serialize;
use crate::core::domain::Identifiable;
use crate::core::library::ItemKind;
use crate::core::locale::Locale;
use crate::items::domain::LibraryItem;
use crate::items::domain::model::Availability;
use crate::items::domain::seal::Seal;

// MagazineEntity abstracts a single issue of a periodical.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct MagazineEntity {
    magazine_id: i64,
    pub title: String,
    pub author: String,
    pub issue_number: u32,
    availability: Availability,
}

impl MagazineEntity {
    pub fn new(magazine_id: i64, title: &str, author: &str, issue_number: u32) -> Self {
        Self {
            magazine_id,
            title: title.to_string(),
            author: author.to_string(),
            issue_number,
            availability: Availability::new(),
        }
    }
}

impl Identifiable for MagazineEntity {
    fn id(&self) -> i64 {
        self.magazine_id
    }
}

impl LibraryItem for MagazineEntity {
    fn kind(&self) -> ItemKind {
        ItemKind::Magazine
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
        format!("📰 {} - ID: {}, {}: {}, {}: {}, {}: {}, {}: {}",
                labels.magazine, self.magazine_id,
                labels.title, self.title,
                labels.author, self.author,
                labels.issue, self.issue_number,
                labels.available, locale.yes_no(self.is_available()))
    }
}

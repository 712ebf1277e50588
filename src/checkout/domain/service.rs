use std::collections::HashMap;
use tracing::{debug, info, warn};
use crate::borrowers::domain::Borrower;
use crate::checkout::domain::LendingService;
use crate::checkout::dto::LoanDto;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::locale::{Heading, Locale};
use crate::gateway::events::EventPublisher;
use crate::gateway::output::OutputChannel;
use crate::items::domain::SharedItem;

pub struct LendingServiceImpl {
    branch_id: String,
    locale: Locale,
    output: Box<dyn OutputChannel>,
    events_publisher: Box<dyn EventPublisher>,
}

impl LendingServiceImpl {
    pub fn new(config: &Configuration, output: Box<dyn OutputChannel>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            locale: config.locale,
            output,
            events_publisher,
        }
    }

    // notifications are best-effort, a lend that already happened is never undone by them
    fn notify(&self, line: &str) {
        if let Err(err) = self.output.emit(line) {
            warn!("failed to emit notification {:?}: {}", line, err);
        }
    }

    fn publish(&self, event: serde_json::Result<DomainEvent>) {
        let res = event.map_err(LibraryError::from)
            .and_then(|event| self.events_publisher.publish(&event));
        if let Err(err) = res {
            warn!("failed to publish lending event: {}", err);
        }
    }

    fn emit_all(&self, lines: Vec<String>) -> LibraryResult<()> {
        for line in lines {
            self.output.emit(line.as_str())?;
        }
        Ok(())
    }
}

impl LendingService for LendingServiceImpl {
    fn lend(&self, borrower: &mut dyn Borrower, item: &SharedItem) -> LibraryResult<LoanDto> {
        match borrower.lend(item) {
            Ok(()) => {
                let loan = LoanDto::from_borrower_item(self.branch_id.as_str(), &*borrower, &*item.borrow());
                info!(borrower_id = loan.borrower_id, item_id = loan.item_id, "lent {} {}", loan.item_kind, loan.title);
                self.notify(self.locale.lend_succeeded().as_str());
                self.publish(DomainEvent::lent(
                    "item_lent", "checkout", loan.item_id.to_string().as_str(),
                    &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]), &loan));
                Ok(loan)
            }
            Err(err) if err.is_unavailable() => {
                let (item_id, status) = {
                    let rejected = item.borrow();
                    (rejected.id(), rejected.status())
                };
                debug!(borrower_id = borrower.id(), item_id, status = %status, "lend rejected: {}", err);
                self.notify(self.locale.lend_rejected().as_str());
                self.publish(DomainEvent::rejected(
                    "item_rejected", "checkout", item_id.to_string().as_str(),
                    &HashMap::from([("branch_id".to_string(), self.branch_id.to_string())]),
                    &HashMap::from([("borrower_id", borrower.id()), ("item_id", item_id)])));
                Err(err)
            }
            Err(err) => {
                warn!(borrower_id = borrower.id(), "lend failed: {}", err);
                Err(err)
            }
        }
    }

    fn show_item(&self, item: &SharedItem) -> LibraryResult<()> {
        self.output.emit(item.borrow().render_info(self.locale).as_str())
    }

    fn show_borrowed_items(&self, borrower: &dyn Borrower) -> LibraryResult<()> {
        self.emit_all(borrowed_items_report(borrower, self.locale))
    }

    fn show_last_borrowed(&self, borrower: &dyn Borrower) -> LibraryResult<()> {
        self.emit_all(last_borrowed_report(borrower, self.locale))
    }

    fn show_heading(&self, heading: Heading) -> LibraryResult<()> {
        self.output.emit(self.locale.heading(heading))
    }
}

// Numbered rendering of the borrower history, or a single line when nothing was lent yet.
pub fn borrowed_items_report(borrower: &dyn Borrower, locale: Locale) -> Vec<String> {
    let items = borrower.borrowed_items();
    if items.is_empty() {
        return vec![locale.no_borrowed_items()];
    }
    let mut lines = vec![locale.borrowed_header(borrower.name())];
    for (index, item) in items.iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, item.borrow().render_info(locale)));
    }
    lines
}

pub fn last_borrowed_report(borrower: &dyn Borrower, locale: Locale) -> Vec<String> {
    match borrower.last_borrowed() {
        Some(item) => vec![
            locale.last_loan_header(borrower.name()),
            item.borrow().render_info(locale),
        ],
        None => vec![locale.no_loans_yet(borrower.name())],
    }
}

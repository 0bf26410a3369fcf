//! List page state and its reducer.
//!
//! The page owns one `RwSignal<InvoiceListState>`; every change is expressed
//! as an [`InvoiceListAction`] and applied by [`InvoiceListState::apply`].

use contracts::domain::a001_invoice::aggregate::Invoice;
use contracts::domain::a001_invoice::list::InvoiceListQuery;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Field the server searches in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SearchField {
    #[default]
    ClientName,
}

impl SearchField {
    pub fn placeholder(self) -> &'static str {
        match self {
            SearchField::ClientName => "Cari berdasarkan nama klien...",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct InvoiceListState {
    /// Snapshot of the last successful fetch; replaced wholesale
    pub invoices: Vec<Invoice>,

    // pagination (1-based)
    pub page: u32,
    pub total_pages: u32,

    // search
    pub search_query: String,
    pub search_field: SearchField,

    pub status: LoadStatus,
}

impl Default for InvoiceListState {
    fn default() -> Self {
        Self {
            invoices: Vec::new(),
            page: 1,
            total_pages: 1,
            search_query: String::new(),
            search_field: SearchField::default(),
            status: LoadStatus::Idle,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum InvoiceListAction {
    SearchChanged(String),
    PageRequested(u32),
    FetchStarted,
    FetchSucceeded { invoices: Vec<Invoice>, total_pages: u32 },
    FetchFailed,
}

impl InvoiceListState {
    pub fn apply(self, action: InvoiceListAction) -> Self {
        match action {
            InvoiceListAction::SearchChanged(query) => Self {
                search_query: query,
                page: 1,
                ..self
            },
            InvoiceListAction::PageRequested(page) => {
                let page = page.clamp(1, self.last_page());
                Self { page, ..self }
            }
            InvoiceListAction::FetchStarted => Self {
                status: LoadStatus::Loading,
                ..self
            },
            InvoiceListAction::FetchSucceeded {
                invoices,
                total_pages,
            } => Self {
                invoices,
                total_pages,
                status: LoadStatus::Loaded,
                ..self
            },
            InvoiceListAction::FetchFailed => Self {
                status: LoadStatus::Failed,
                ..self
            },
        }
    }

    /// Highest valid page; the server may report 0 pages for an empty result.
    pub fn last_page(&self) -> u32 {
        self.total_pages.max(1)
    }

    pub fn query(&self) -> InvoiceListQuery {
        InvoiceListQuery {
            page: self.page,
            search: self.search_query.clone(),
        }
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.last_page()
    }
}

pub fn create_state() -> RwSignal<InvoiceListState> {
    RwSignal::new(InvoiceListState::default())
}

pub fn dispatch(state: RwSignal<InvoiceListState>, action: InvoiceListAction) {
    state.update(|s| {
        let current = std::mem::take(s);
        *s = current.apply(action);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invoice(id: &str) -> Invoice {
        Invoice {
            id: id.to_string(),
            ..Invoice::default()
        }
    }

    #[test]
    fn test_search_resets_page() {
        let state = InvoiceListState {
            page: 3,
            total_pages: 5,
            ..InvoiceListState::default()
        };
        let next = state.apply(InvoiceListAction::SearchChanged("acme".into()));
        assert_eq!(next.page, 1);
        assert_eq!(next.search_query, "acme");
        assert_eq!(next.query().search, "acme");
    }

    #[test]
    fn test_fetch_replaces_list_wholesale() {
        let state = InvoiceListState::default()
            .apply(InvoiceListAction::FetchSucceeded {
                invoices: vec![invoice("1"), invoice("2")],
                total_pages: 2,
            })
            .apply(InvoiceListAction::FetchStarted)
            .apply(InvoiceListAction::FetchSucceeded {
                invoices: vec![invoice("3")],
                total_pages: 1,
            });
        let ids: Vec<&str> = state.invoices.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3"]);
        assert_eq!(state.total_pages, 1);
        assert_eq!(state.status, LoadStatus::Loaded);
    }

    #[test]
    fn test_fetch_status_transitions() {
        let state = InvoiceListState::default();
        assert_eq!(state.status, LoadStatus::Idle);
        let state = state.apply(InvoiceListAction::FetchStarted);
        assert_eq!(state.status, LoadStatus::Loading);
        let state = state.apply(InvoiceListAction::FetchFailed);
        assert_eq!(state.status, LoadStatus::Failed);
    }

    #[test]
    fn test_page_is_clamped() {
        let state = InvoiceListState {
            total_pages: 3,
            ..InvoiceListState::default()
        };
        assert_eq!(state.clone().apply(InvoiceListAction::PageRequested(0)).page, 1);
        assert_eq!(state.clone().apply(InvoiceListAction::PageRequested(2)).page, 2);
        assert_eq!(state.apply(InvoiceListAction::PageRequested(9)).page, 3);
    }

    #[test]
    fn test_navigation_flags() {
        let empty = InvoiceListState {
            total_pages: 0,
            ..InvoiceListState::default()
        };
        assert!(!empty.has_prev());
        assert!(!empty.has_next());

        let middle = InvoiceListState {
            page: 2,
            total_pages: 3,
            ..InvoiceListState::default()
        };
        assert!(middle.has_prev());
        assert!(middle.has_next());
    }

    #[test]
    fn test_search_field_defaults_to_client_name() {
        let state = InvoiceListState::default();
        assert_eq!(state.search_field, SearchField::ClientName);
        assert_eq!(state.search_field.placeholder(), "Cari berdasarkan nama klien...");
    }
}

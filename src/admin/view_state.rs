//! State of the question bank page.
//!
//! The page keeps filters, pagination and row selection in one
//! serializable value. [`reduce`] takes the current value and an event and
//! returns the next value plus the request the page should issue, if any.
//! Nothing here performs I/O.

use serde::{Deserialize, Serialize};

use crate::dto::question_dto::{ListQuestionsQuery, DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::models::question::{Question, QuestionType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeFilter {
    #[default]
    All,
    Single,
    Multiple,
    Programming,
}

impl TypeFilter {
    pub fn question_type(self) -> Option<QuestionType> {
        match self {
            TypeFilter::All => None,
            TypeFilter::Single => Some(QuestionType::Single),
            TypeFilter::Multiple => Some(QuestionType::Multiple),
            TypeFilter::Programming => Some(QuestionType::Programming),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Filters {
    #[serde(rename = "type")]
    pub question_type: TypeFilter,
    pub keyword: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current: i64,
    pub page_size: i64,
    pub total: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

/// Transient toast shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", content = "text", rename_all = "lowercase")]
pub enum Notice {
    Success(String),
    Warning(String),
    Error(String),
}

/// A list request tagged with the generation it was issued under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    pub generation: u64,
    pub page: i64,
    pub page_size: i64,
    pub question_type: Option<QuestionType>,
    pub keyword: Option<String>,
}

impl ListRequest {
    pub fn to_query(&self) -> ListQuestionsQuery {
        ListQuestionsQuery {
            page: Some(self.page),
            page_size: Some(self.page_size),
            question_type: self.question_type.map(|t| t.as_str().to_string()),
            keyword: self.keyword.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum Effect {
    Fetch(ListRequest),
    Delete { ids: Vec<i64> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum ViewEvent {
    /// Initial load.
    Opened,
    TypeFilterChanged { value: TypeFilter },
    /// Typing in the keyword box; fetches only on [`ViewEvent::SearchSubmitted`].
    KeywordEdited { value: String },
    SearchSubmitted,
    PageChanged { page: i64, page_size: i64 },
    SelectionChanged { ids: Vec<i64> },
    ListLoaded { generation: u64, items: Vec<Question>, total: i64 },
    ListFailed { generation: u64, message: String },
    DeleteRequested { ids: Vec<i64> },
    /// The batch-delete button; acts on the current selection.
    BatchDeleteRequested,
    DeleteSucceeded { count: u64 },
    DeleteFailed { message: String },
    /// A create, update or batch create finished.
    Saved { message: String },
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionBankView {
    pub filters: Filters,
    pub pagination: Pagination,
    pub selection: Vec<i64>,
    pub items: Vec<Question>,
    pub loading: bool,
    /// Generation of the most recently issued list request.
    pub generation: u64,
    pub notice: Option<Notice>,
}

impl QuestionBankView {
    fn fetch(mut self, page: i64) -> (Self, Option<Effect>) {
        self.generation += 1;
        self.loading = true;
        let request = ListRequest {
            generation: self.generation,
            page,
            page_size: self.pagination.page_size,
            question_type: self.filters.question_type.question_type(),
            keyword: Some(self.filters.keyword.clone()).filter(|k| !k.is_empty()),
        };
        self.pagination.current = page;
        (self, Some(Effect::Fetch(request)))
    }

    fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

pub fn reduce(mut state: QuestionBankView, event: ViewEvent) -> (QuestionBankView, Option<Effect>) {
    state.notice = None;

    match event {
        ViewEvent::Opened => {
            let page = state.pagination.current;
            state.fetch(page)
        }
        ViewEvent::TypeFilterChanged { value } => {
            state.filters.question_type = value;
            state.fetch(DEFAULT_PAGE)
        }
        ViewEvent::KeywordEdited { value } => {
            state.filters.keyword = value;
            (state, None)
        }
        ViewEvent::SearchSubmitted => state.fetch(DEFAULT_PAGE),
        ViewEvent::PageChanged { page, page_size } => {
            state.pagination.page_size = page_size.max(1);
            state.selection.clear();
            state.fetch(page.max(1))
        }
        ViewEvent::SelectionChanged { ids } => {
            state.selection = ids;
            (state, None)
        }
        ViewEvent::ListLoaded {
            generation,
            items,
            total,
        } => {
            if !state.is_current(generation) {
                return (state, None);
            }
            state.loading = false;
            state.items = items;
            state.pagination.total = total;
            (state, None)
        }
        ViewEvent::ListFailed {
            generation,
            message,
        } => {
            if !state.is_current(generation) {
                return (state, None);
            }
            state.loading = false;
            state.notice = Some(Notice::Error(message));
            (state, None)
        }
        ViewEvent::DeleteRequested { ids } => (state, Some(Effect::Delete { ids })),
        ViewEvent::BatchDeleteRequested => {
            if state.selection.is_empty() {
                state.notice = Some(Notice::Warning(
                    "Select the questions to delete first".to_string(),
                ));
                return (state, None);
            }
            let ids = state.selection.clone();
            (state, Some(Effect::Delete { ids }))
        }
        ViewEvent::DeleteSucceeded { count } => {
            state.selection.clear();
            let page = state.pagination.current;
            let (mut state, effect) = state.fetch(page);
            state.notice = Some(Notice::Success(format!("Deleted {} question(s)", count)));
            (state, effect)
        }
        ViewEvent::DeleteFailed { message } => {
            state.notice = Some(Notice::Error(message));
            (state, None)
        }
        ViewEvent::Saved { message } => {
            let page = state.pagination.current;
            let (mut state, effect) = state.fetch(page);
            state.notice = Some(Notice::Success(message));
            (state, effect)
        }
    }
}

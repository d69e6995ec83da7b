use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::error::{Error, Result};
use crate::models::question::{Difficulty, Language, NewQuestion, QuestionType};
use crate::utils::validation::{error_with_message, reject_nul};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Body of `POST /api/questions`. Every field is optional at the JSON level
/// so missing values are reported as validation errors instead of
/// deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_question"))]
pub struct CreateQuestionPayload {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub question_type: Option<String>,
    pub option_a: Option<String>,
    pub option_b: Option<String>,
    pub option_c: Option<String>,
    pub option_d: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<String>,
    pub language: Option<String>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn validate_create_question(payload: &CreateQuestionPayload) -> std::result::Result<(), ValidationError> {
    reject_nul([
        payload.title.as_deref(),
        payload.question_type.as_deref(),
        payload.option_a.as_deref(),
        payload.option_b.as_deref(),
        payload.option_c.as_deref(),
        payload.option_d.as_deref(),
        payload.answer.as_deref(),
        payload.difficulty.as_deref(),
        payload.language.as_deref(),
    ])?;

    let missing: Vec<&str> = [
        ("title", &payload.title),
        ("type", &payload.question_type),
        ("difficulty", &payload.difficulty),
    ]
    .into_iter()
    .filter(|(_, value)| !present(value))
    .map(|(name, _)| name)
    .collect();
    if !missing.is_empty() {
        return Err(error_with_message(
            "missing_fields",
            format!("Missing required fields: {}", missing.join(", ")),
        ));
    }

    let type_raw = payload.question_type.as_deref().unwrap_or_default();
    let question_type: QuestionType = type_raw
        .parse()
        .map_err(|_| error_with_message("invalid_type", format!("Invalid question type: {}", type_raw)))?;

    match question_type {
        QuestionType::Programming => {
            if !present(&payload.language) || !present(&payload.answer) {
                return Err(error_with_message(
                    "programming_fields",
                    "Programming questions require a language and an answer",
                ));
            }
        }
        QuestionType::Single | QuestionType::Multiple => {
            let options = [
                &payload.option_a,
                &payload.option_b,
                &payload.option_c,
                &payload.option_d,
            ];
            if !options.into_iter().all(present) || !present(&payload.answer) {
                return Err(error_with_message(
                    "choice_fields",
                    "Choice questions require options A-D and an answer",
                ));
            }
        }
    }

    let difficulty_raw = payload.difficulty.as_deref().unwrap_or_default();
    if difficulty_raw.parse::<Difficulty>().is_err() {
        return Err(error_with_message(
            "invalid_difficulty",
            format!("Invalid difficulty: {}", difficulty_raw),
        ));
    }

    if question_type == QuestionType::Programming {
        let language_raw = payload.language.as_deref().unwrap_or_default();
        if language_raw.parse::<Language>().is_err() {
            return Err(error_with_message(
                "invalid_language",
                format!("Invalid programming language: {}", language_raw),
            ));
        }
    }

    Ok(())
}

impl TryFrom<CreateQuestionPayload> for NewQuestion {
    type Error = Error;

    /// Expects a payload that already passed validation. Choice questions
    /// drop any language and programming questions drop any options.
    fn try_from(payload: CreateQuestionPayload) -> Result<Self> {
        let question_type: QuestionType = payload.question_type.as_deref().unwrap_or_default().parse()?;
        let difficulty: Difficulty = payload.difficulty.as_deref().unwrap_or_default().parse()?;
        let title = payload
            .title
            .ok_or_else(|| Error::BadRequest("Missing required fields: title".into()))?;

        let question = if question_type.is_choice() {
            NewQuestion {
                title,
                question_type,
                option_a: payload.option_a,
                option_b: payload.option_b,
                option_c: payload.option_c,
                option_d: payload.option_d,
                answer: payload.answer,
                difficulty,
                language: None,
            }
        } else {
            let language = payload
                .language
                .as_deref()
                .map(str::parse::<Language>)
                .transpose()?;
            NewQuestion {
                title,
                question_type,
                option_a: None,
                option_b: None,
                option_c: None,
                option_d: None,
                answer: payload.answer,
                difficulty,
                language,
            }
        };
        Ok(question)
    }
}

/// One element of `POST /api/questions/batch`. Typically a generated
/// question echoed back by the UI; its `id` is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BatchQuestionItem {
    pub title: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    #[serde(default)]
    pub option_a: Option<String>,
    #[serde(default)]
    pub option_b: Option<String>,
    #[serde(default)]
    pub option_c: Option<String>,
    #[serde(default)]
    pub option_d: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub language: Option<Language>,
}

impl From<BatchQuestionItem> for NewQuestion {
    fn from(item: BatchQuestionItem) -> Self {
        Self {
            title: item.title,
            question_type: item.question_type,
            option_a: item.option_a,
            option_b: item.option_b,
            option_c: item.option_c,
            option_d: item.option_d,
            answer: item.answer,
            difficulty: item.difficulty,
            language: item.language,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_batch_text"))]
pub struct BatchCreatePayload {
    pub questions: Vec<BatchQuestionItem>,
}

fn validate_batch_text(payload: &BatchCreatePayload) -> std::result::Result<(), ValidationError> {
    for item in &payload.questions {
        reject_nul([
            Some(item.title.as_str()),
            item.option_a.as_deref(),
            item.option_b.as_deref(),
            item.option_c.as_deref(),
            item.option_d.as_deref(),
            item.answer.as_deref(),
        ])?;
    }
    Ok(())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BatchCreateResult {
    pub count: u64,
}

/// Body of `PUT /api/questions/:id`. Absent fields are left untouched;
/// an explicit `null` clears a nullable column.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_text"))]
pub struct UpdateQuestionPayload {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub question_type: Option<QuestionType>,
    #[serde(default, deserialize_with = "crate::utils::patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub option_a: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::utils::patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub option_b: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::utils::patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub option_c: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::utils::patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub option_d: Option<Option<String>>,
    #[serde(default, deserialize_with = "crate::utils::patch::nullable")]
    #[schema(value_type = Option<String>)]
    pub answer: Option<Option<String>>,
    pub difficulty: Option<Difficulty>,
    #[serde(default, deserialize_with = "crate::utils::patch::nullable")]
    #[schema(value_type = Option<Language>)]
    pub language: Option<Option<Language>>,
}

fn set_text(field: &Option<Option<String>>) -> Option<&str> {
    field.as_ref().and_then(|v| v.as_deref())
}

fn validate_update_text(payload: &UpdateQuestionPayload) -> std::result::Result<(), ValidationError> {
    reject_nul([
        payload.title.as_deref(),
        set_text(&payload.option_a),
        set_text(&payload.option_b),
        set_text(&payload.option_c),
        set_text(&payload.option_d),
        set_text(&payload.answer),
    ])
}

impl UpdateQuestionPayload {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.question_type.is_none()
            && self.option_a.is_none()
            && self.option_b.is_none()
            && self.option_c.is_none()
            && self.option_d.is_none()
            && self.answer.is_none()
            && self.difficulty.is_none()
            && self.language.is_none()
    }
}

/// Question id as sent by clients: a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QuestionId {
    Number(i64),
    Text(String),
}

impl TryFrom<QuestionId> for i64 {
    type Error = Error;

    fn try_from(id: QuestionId) -> Result<Self> {
        match id {
            QuestionId::Number(n) => Ok(n),
            QuestionId::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| Error::BadRequest(format!("Invalid question id: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionsPayload {
    #[schema(value_type = Vec<i64>)]
    pub ids: Vec<QuestionId>,
}

impl DeleteQuestionsPayload {
    pub fn into_ids(self) -> Result<Vec<i64>> {
        self.ids.into_iter().map(i64::try_from).collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteQuestionsResult {
    pub count: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, IntoParams)]
#[serde(default, rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
#[validate(schema(function = "validate_list_text"))]
pub struct ListQuestionsQuery {
    /// 1-based page number, defaults to 1.
    #[validate(range(min = 1, message = "page must be at least 1"))]
    pub page: Option<i64>,
    /// Page size, defaults to 10.
    #[validate(range(min = 1, message = "pageSize must be at least 1"))]
    #[param(rename = "pageSize")]
    pub page_size: Option<i64>,
    /// `single`, `multiple`, `programming` or `all`.
    #[serde(rename = "type")]
    #[param(rename = "type")]
    pub question_type: Option<String>,
    /// Case-insensitive substring matched against the title and options.
    pub keyword: Option<String>,
}

fn validate_list_text(query: &ListQuestionsQuery) -> std::result::Result<(), ValidationError> {
    reject_nul([query.keyword.as_deref(), query.question_type.as_deref()])
}

impl ListQuestionsQuery {
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// `None` for an absent, empty or `all` type filter.
    pub fn type_filter(&self) -> Result<Option<QuestionType>> {
        match self.question_type.as_deref().map(str::trim) {
            None | Some("") | Some("all") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }

    pub fn keyword(&self) -> Option<String> {
        self.keyword.clone().filter(|k| !k.is_empty())
    }
}

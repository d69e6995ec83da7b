//! The "add question" dialog: choose manual entry or generation, then
//! either fill the form or go through the generation preview.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::admin::generate_preview::GeneratePreview;
use crate::dto::question_dto::CreateQuestionPayload;
use crate::models::question::Question;
use crate::utils::validation::describe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddMode {
    #[default]
    Manual,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "dialog", rename_all = "camelCase")]
pub enum Dialog {
    #[default]
    Closed,
    ChooseMode { mode: AddMode },
    /// `editing` is set when the form was opened from a table row.
    Form { editing: Option<Question> },
    Generate { preview: GeneratePreview },
}

/// What the form submits: a new question or a full-record update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum FormSubmission {
    Create { payload: CreateQuestionPayload },
    Update { id: i64, payload: CreateQuestionPayload },
}

pub fn open_add_dialog() -> Dialog {
    Dialog::ChooseMode {
        mode: AddMode::Manual,
    }
}

pub fn open_edit_form(question: Question) -> Dialog {
    Dialog::Form {
        editing: Some(question),
    }
}

pub fn select_mode(dialog: Dialog, mode: AddMode) -> Dialog {
    match dialog {
        Dialog::ChooseMode { .. } => Dialog::ChooseMode { mode },
        other => other,
    }
}

pub fn confirm_mode(dialog: Dialog) -> Dialog {
    match dialog {
        Dialog::ChooseMode {
            mode: AddMode::Manual,
        } => Dialog::Form { editing: None },
        Dialog::ChooseMode { mode: AddMode::Ai } => Dialog::Generate {
            preview: GeneratePreview::default(),
        },
        other => other,
    }
}

/// Runs the same per-type checks as the server before anything is sent.
/// Edits are checked too, although the server does not re-check them.
pub fn submit_form(dialog: &Dialog, values: CreateQuestionPayload) -> Result<FormSubmission, String> {
    let Dialog::Form { editing } = dialog else {
        return Err("The question form is not open".to_string());
    };
    values.validate().map_err(|errors| describe(&errors))?;

    Ok(match editing {
        Some(question) => FormSubmission::Update {
            id: question.id,
            payload: values,
        },
        None => FormSubmission::Create { payload: values },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::question_dto::UpdateQuestionPayload;
    use crate::models::question::{Difficulty, Language, QuestionType};
    use chrono::Utc;

    fn programming_values() -> CreateQuestionPayload {
        CreateQuestionPayload {
            title: Some("FizzBuzz".into()),
            question_type: Some("programming".into()),
            answer: Some("for i in range(1, 101): ...".into()),
            difficulty: Some("easy".into()),
            language: Some("python".into()),
            ..Default::default()
        }
    }

    #[test]
    fn manual_branch_opens_an_empty_form() {
        let dialog = confirm_mode(open_add_dialog());
        assert_eq!(dialog, Dialog::Form { editing: None });

        let submission = submit_form(&dialog, programming_values()).unwrap();
        assert!(matches!(submission, FormSubmission::Create { .. }));
    }

    #[test]
    fn ai_branch_opens_the_preview() {
        let dialog = confirm_mode(select_mode(open_add_dialog(), AddMode::Ai));
        assert!(matches!(dialog, Dialog::Generate { .. }));
    }

    #[test]
    fn edit_form_submits_an_update() {
        let question = Question {
            id: 12,
            title: "Old title".into(),
            question_type: QuestionType::Programming,
            option_a: None,
            option_b: None,
            option_c: None,
            option_d: None,
            answer: Some("pass".into()),
            difficulty: Difficulty::Easy,
            language: None,
            created_at: Utc::now(),
        };
        let dialog = open_edit_form(question);
        let submission = submit_form(&dialog, programming_values()).unwrap();
        assert!(matches!(submission, FormSubmission::Update { id: 12, .. }));
    }

    #[test]
    fn edit_submission_is_accepted_by_the_update_endpoint() {
        let submission = FormSubmission::Update {
            id: 12,
            payload: programming_values(),
        };
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["action"], "update");
        assert_eq!(json["id"], 12);

        let update: UpdateQuestionPayload = serde_json::from_value(json["payload"].clone()).unwrap();
        assert!(update.validate().is_ok());
        assert_eq!(update.title.as_deref(), Some("FizzBuzz"));
        assert_eq!(update.question_type, Some(QuestionType::Programming));
        assert_eq!(update.difficulty, Some(Difficulty::Easy));
        assert_eq!(update.language, Some(Some(Language::Python)));
        assert_eq!(update.answer, Some(Some("for i in range(1, 101): ...".to_string())));
        assert_eq!(update.option_a, Some(None));
    }

    #[test]
    fn incomplete_form_is_not_submitted() {
        let dialog = Dialog::Form { editing: None };
        let mut values = programming_values();
        values.language = None;
        let err = submit_form(&dialog, values).unwrap_err();
        assert_eq!(err, "Programming questions require a language and an answer");
    }

    #[test]
    fn submitting_without_an_open_form_fails() {
        assert!(submit_form(&Dialog::Closed, programming_values()).is_err());
    }
}

//! State of the generation dialog: request form, preview list and the
//! per-item checkboxes that decide what gets saved.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::admin::view_state::Notice;
use crate::dto::generate_dto::GenerateQuestionsPayload;
use crate::dto::question_dto::{BatchCreatePayload, BatchQuestionItem};
use crate::services::generation_service::GeneratedQuestion;

/// Largest count the dialog's number input allows.
pub const MAX_FORM_COUNT: u32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "camelCase")]
pub enum PreviewEffect {
    Generate(GenerateQuestionsPayload),
    Save(BatchCreatePayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum PreviewEvent {
    FormChanged { form: GenerateQuestionsPayload },
    GenerateClicked,
    Generated { questions: Vec<GeneratedQuestion> },
    GenerateFailed { message: String },
    Toggled { id: Uuid },
    SaveClicked,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePreview {
    pub form: GenerateQuestionsPayload,
    pub questions: Vec<GeneratedQuestion>,
    /// Checked ids in the order they were checked.
    pub selected: Vec<Uuid>,
    pub preview_visible: bool,
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl GeneratePreview {
    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    /// The checked questions, in preview order.
    pub fn chosen(&self) -> Vec<GeneratedQuestion> {
        self.questions
            .iter()
            .filter(|q| self.is_selected(q.id))
            .cloned()
            .collect()
    }
}

pub fn reduce(mut state: GeneratePreview, event: PreviewEvent) -> (GeneratePreview, Option<PreviewEffect>) {
    state.notice = None;

    match event {
        PreviewEvent::FormChanged { mut form } => {
            form.count = form.count.clamp(1, MAX_FORM_COUNT);
            state.form = form;
            (state, None)
        }
        PreviewEvent::GenerateClicked => {
            state.loading = true;
            let request = state.form.clone();
            (state, Some(PreviewEffect::Generate(request)))
        }
        PreviewEvent::Generated { questions } => {
            state.loading = false;
            state.questions = questions;
            state.selected.clear();
            state.preview_visible = true;
            (state, None)
        }
        PreviewEvent::GenerateFailed { message } => {
            state.loading = false;
            state.notice = Some(Notice::Error(message));
            (state, None)
        }
        PreviewEvent::Toggled { id } => {
            if state.is_selected(id) {
                state.selected.retain(|selected| *selected != id);
            } else if state.questions.iter().any(|q| q.id == id) {
                state.selected.push(id);
            }
            (state, None)
        }
        PreviewEvent::SaveClicked => {
            let chosen = state.chosen();
            if chosen.is_empty() {
                state.notice = Some(Notice::Warning("Select at least one question".to_string()));
                return (state, None);
            }
            let questions: Vec<BatchQuestionItem> = chosen.into_iter().map(Into::into).collect();
            (state, Some(PreviewEffect::Save(BatchCreatePayload { questions })))
        }
        PreviewEvent::Reset => (GeneratePreview::default(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{Language, QuestionType};
    use crate::services::generation_service::GenerationService;

    fn generated(count: u32) -> Vec<GeneratedQuestion> {
        GenerationService::new(10)
            .generate(&GenerateQuestionsPayload {
                question_type: QuestionType::Single,
                count,
                language: None,
            })
            .unwrap()
    }

    #[test]
    fn defaults_match_the_dialog() {
        let state = GeneratePreview::default();
        assert_eq!(state.form.question_type, QuestionType::Single);
        assert_eq!(state.form.count, 3);
        assert_eq!(state.form.language, Some(Language::Go));
        assert!(!state.preview_visible);
    }

    #[test]
    fn form_count_is_clamped_to_the_input_range() {
        let form = GenerateQuestionsPayload {
            count: 25,
            ..Default::default()
        };
        let (state, _) = reduce(GeneratePreview::default(), PreviewEvent::FormChanged { form });
        assert_eq!(state.form.count, MAX_FORM_COUNT);
    }

    #[test]
    fn generate_issues_the_form_as_request() {
        let (state, effect) = reduce(GeneratePreview::default(), PreviewEvent::GenerateClicked);
        assert!(state.loading);
        assert_eq!(effect, Some(PreviewEffect::Generate(GenerateQuestionsPayload::default())));
    }

    #[test]
    fn only_checked_items_are_saved() {
        let questions = generated(5);
        let (state, _) = reduce(
            GeneratePreview::default(),
            PreviewEvent::Generated {
                questions: questions.clone(),
            },
        );
        assert!(state.preview_visible);

        let (state, _) = reduce(state, PreviewEvent::Toggled { id: questions[3].id });
        let (state, _) = reduce(state, PreviewEvent::Toggled { id: questions[0].id });
        let (state, _) = reduce(state, PreviewEvent::Toggled { id: questions[2].id });
        let (state, _) = reduce(state, PreviewEvent::Toggled { id: questions[2].id });

        let (_, effect) = reduce(state, PreviewEvent::SaveClicked);
        let Some(PreviewEffect::Save(payload)) = effect else {
            panic!("expected a save effect");
        };
        let titles: Vec<_> = payload.questions.iter().map(|q| q.title.as_str()).collect();
        assert_eq!(titles, vec![questions[0].title.as_str(), questions[3].title.as_str()]);
    }

    #[test]
    fn saving_nothing_warns() {
        let (state, _) = reduce(
            GeneratePreview::default(),
            PreviewEvent::Generated {
                questions: generated(2),
            },
        );
        let (state, effect) = reduce(state, PreviewEvent::SaveClicked);
        assert_eq!(effect, None);
        assert!(matches!(state.notice, Some(Notice::Warning(_))));
    }

    #[test]
    fn unknown_ids_cannot_be_selected() {
        let (state, _) = reduce(
            GeneratePreview::default(),
            PreviewEvent::Toggled { id: Uuid::new_v4() },
        );
        assert!(state.selected.is_empty());
    }

    #[test]
    fn reset_clears_everything() {
        let (state, _) = reduce(
            GeneratePreview::default(),
            PreviewEvent::Generated {
                questions: generated(2),
            },
        );
        let (state, _) = reduce(state, PreviewEvent::Reset);
        assert_eq!(state, GeneratePreview::default());
    }
}

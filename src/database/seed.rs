use crate::models::question::{Difficulty, Language, NewQuestion, QuestionType};

/// The fixed sample rows written by the `seed` binary.
pub fn sample_questions() -> Vec<NewQuestion> {
    vec![
        NewQuestion::choice(
            "Which statement about JavaScript variable declarations is correct?",
            QuestionType::Single,
            [
                "Variables declared with var have no block scope",
                "Variables declared with let have no block scope",
                "Variables declared with const can be reassigned",
                "Variables declared with let cannot be used before declaration",
            ],
            "A",
            Difficulty::Easy,
        ),
        NewQuestion::choice(
            "Which of the following are primitive data types in JavaScript?",
            QuestionType::Multiple,
            ["String", "Number", "Array", "Boolean"],
            "A,B,D",
            Difficulty::Medium,
        ),
        NewQuestion::programming(
            "Write a function that takes an array of integers and returns the sum of its largest and smallest values.",
            Language::Javascript,
            None,
            Difficulty::Medium,
        ),
        NewQuestion::choice(
            "Which statement about goroutines in Go is correct?",
            QuestionType::Single,
            [
                "A goroutine is an operating system thread",
                "Goroutines are lighter weight than threads",
                "Goroutines cannot communicate with each other",
                "Creating a goroutine requires an explicit thread pool",
            ],
            "B",
            Difficulty::Hard,
        ),
        NewQuestion::programming(
            "Write a Go function that uses a channel to communicate between two goroutines.",
            Language::Go,
            None,
            Difficulty::Hard,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_two_programming_samples() {
        let samples = sample_questions();
        assert_eq!(samples.len(), 5);

        let languages: Vec<_> = samples
            .iter()
            .filter(|q| q.question_type == QuestionType::Programming)
            .map(|q| q.language)
            .collect();
        assert_eq!(languages, vec![Some(Language::Javascript), Some(Language::Go)]);
    }
}

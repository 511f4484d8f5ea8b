use serde::{Deserialize, Serialize};

/// Quiz question consumed by the quiz screen.
///
/// The enrichment pipeline never builds these; it only produces the
/// dataset they are generated from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub word: String,
    pub correct_answer: String,
    pub options: Vec<String>,
    #[serde(rename = "type")]
    pub kind: QuestionType,
}

impl Question {
    /// Whether `answer` matches the correct option
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Definition,
    Translation,
    Example,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_wire_shape() {
        let json = r#"{
            "id": 7,
            "word": "ephemeral",
            "correctAnswer": "geçici",
            "options": ["geçici", "kalıcı", "büyük", "hızlı"],
            "type": "translation"
        }"#;

        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.kind, QuestionType::Translation);
        assert_eq!(question.options.len(), 4);
        assert!(question.is_correct("geçici"));
        assert!(!question.is_correct("kalıcı"));
    }
}

use validator::ValidationError;

use crate::models::question::QuestionCategory;

/// Accepts `technical`, `behavioral` or `mixed`.
pub fn validate_category(value: &str) -> Result<(), ValidationError> {
    value
        .parse::<QuestionCategory>()
        .map(|_| ())
        .map_err(|_| invalid("question_type", "must be one of technical, behavioral, mixed"))
}

/// Accepts `technical` or `behavioral`.
pub fn validate_question_type(value: &str) -> Result<(), ValidationError> {
    match value {
        "technical" | "behavioral" => Ok(()),
        _ => Err(invalid("question_type", "must be one of technical, behavioral")),
    }
}

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionType;

    #[test]
    fn category_accepts_mixed_but_type_does_not() {
        assert!(validate_category("mixed").is_ok());
        assert!(validate_question_type("mixed").is_err());
        assert!(validate_question_type("behavioral").is_ok());
        assert!(validate_category("Technical").is_err());
    }

    #[test]
    fn question_type_matches_model_labels() {
        for t in [QuestionType::Technical, QuestionType::Behavioral] {
            assert!(validate_question_type(t.as_str()).is_ok());
        }
    }
}

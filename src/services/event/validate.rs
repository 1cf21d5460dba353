// Event validation
// Field checks for candidate events coming out of the host's form layer

use thiserror::Error;

use crate::models::event::EventDraft;

/// Maximum title length, in Unicode scalar values.
pub const TITLE_MAX_CHARS: usize = 100;
/// Maximum description length, in Unicode scalar values.
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// A single validation failure. The `Display` output is the exact message
/// surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Title must be 100 characters or less")]
    TitleTooLong,
    #[error("Description must be 500 characters or less")]
    DescriptionTooLong,
    #[error("Start date is required")]
    StartDateRequired,
    #[error("End date is required")]
    EndDateRequired,
    #[error("End date must be after start date")]
    EndBeforeStart,
}

/// Check a candidate event for required fields, length limits, and
/// temporal ordering. An empty result means the draft is valid.
///
/// Checks are evaluated independently and every applicable error is
/// collected, so a form can surface all problems at once. The title limit
/// applies to the untrimmed string; equal start and end timestamps are
/// valid.
pub fn validate_event(draft: &EventDraft) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    match &draft.title {
        None => errors.push(ValidationError::TitleRequired),
        Some(title) => {
            if title.trim().is_empty() {
                errors.push(ValidationError::TitleRequired);
            }
            if title.chars().count() > TITLE_MAX_CHARS {
                errors.push(ValidationError::TitleTooLong);
            }
        }
    }

    if let Some(description) = &draft.description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            errors.push(ValidationError::DescriptionTooLong);
        }
    }

    if draft.start.is_none() {
        errors.push(ValidationError::StartDateRequired);
    }
    if draft.end.is_none() {
        errors.push(ValidationError::EndDateRequired);
    }

    if let (Some(start), Some(end)) = (draft.start, draft.end) {
        if end < start {
            errors.push(ValidationError::EndBeforeStart);
        }
    }

    errors
}

/// Render a validation result as plain message strings, for hosts that
/// display them directly.
pub fn error_messages(errors: &[ValidationError]) -> Vec<String> {
    errors.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Local};
    use test_case::test_case;

    fn valid_draft() -> EventDraft {
        let start = Local::now();
        EventDraft {
            title: Some("Team Meeting".to_string()),
            start: Some(start),
            end: Some(start + Duration::hours(1)),
            ..EventDraft::default()
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate_event(&valid_draft()).is_empty());
    }

    #[test]
    fn test_empty_draft_reports_all_required_fields() {
        let errors = validate_event(&EventDraft::default());

        assert_eq!(
            errors,
            vec![
                ValidationError::TitleRequired,
                ValidationError::StartDateRequired,
                ValidationError::EndDateRequired,
            ]
        );
    }

    #[test_case(None ; "missing title")]
    #[test_case(Some("") ; "empty title")]
    #[test_case(Some("   ") ; "whitespace only title")]
    fn test_title_required(title: Option<&str>) {
        let mut draft = valid_draft();
        draft.title = title.map(String::from);

        assert_eq!(validate_event(&draft), vec![ValidationError::TitleRequired]);
    }

    #[test]
    fn test_title_at_limit_is_valid() {
        let mut draft = valid_draft();
        draft.title = Some("x".repeat(100));

        assert!(validate_event(&draft).is_empty());
    }

    #[test]
    fn test_title_over_limit() {
        let mut draft = valid_draft();
        draft.title = Some("x".repeat(101));

        assert_eq!(validate_event(&draft), vec![ValidationError::TitleTooLong]);
    }

    #[test]
    fn test_title_limit_counts_untrimmed_length() {
        // 99 spaces + 2 chars = 101 untrimmed: both required-after-trim is
        // satisfied and the length check fires on the raw string
        let mut draft = valid_draft();
        draft.title = Some(format!("{}ab", " ".repeat(99)));

        assert_eq!(validate_event(&draft), vec![ValidationError::TitleTooLong]);
    }

    #[test]
    fn test_title_limit_counts_chars_not_bytes() {
        // 100 multibyte characters are within the limit
        let mut draft = valid_draft();
        draft.title = Some("é".repeat(100));

        assert!(validate_event(&draft).is_empty());
    }

    #[test]
    fn test_description_over_limit() {
        let mut draft = valid_draft();
        draft.description = Some("d".repeat(501));

        assert_eq!(
            validate_event(&draft),
            vec![ValidationError::DescriptionTooLong]
        );
    }

    #[test]
    fn test_description_at_limit_is_valid() {
        let mut draft = valid_draft();
        draft.description = Some("d".repeat(500));

        assert!(validate_event(&draft).is_empty());
    }

    #[test]
    fn test_end_before_start_is_the_only_error() {
        let start = Local::now();
        let draft = EventDraft {
            title: Some("x".to_string()),
            start: Some(start),
            end: Some(start - Duration::hours(1)),
            ..EventDraft::default()
        };

        assert_eq!(validate_event(&draft), vec![ValidationError::EndBeforeStart]);
    }

    #[test]
    fn test_equal_start_and_end_is_valid() {
        let start = Local::now();
        let mut draft = valid_draft();
        draft.start = Some(start);
        draft.end = Some(start);

        assert!(validate_event(&draft).is_empty());
    }

    #[test]
    fn test_color_and_category_are_unconstrained() {
        let mut draft = valid_draft();
        draft.color = Some("not a hex color".to_string());
        draft.category = Some("anything at all".to_string());

        assert!(validate_event(&draft).is_empty());
    }

    #[test]
    fn test_whitespace_overlong_title_reports_both_errors() {
        let mut draft = valid_draft();
        draft.title = Some(" ".repeat(101));

        let errors = validate_event(&draft);
        assert!(errors.contains(&ValidationError::TitleRequired));
        assert!(errors.contains(&ValidationError::TitleTooLong));
    }

    #[test]
    fn test_error_messages_match_user_facing_strings() {
        let messages = error_messages(&validate_event(&EventDraft::default()));

        assert_eq!(
            messages,
            vec![
                "Title is required",
                "Start date is required",
                "End date is required",
            ]
        );
    }
}

use gauge_core::error::CoreError;
use gauge_core::models::assessment::{AssessmentStatus, Progress};
use gauge_core::models::response::ResponseValue;
use gauge_core::templates::{default_template, DEFAULT_TEMPLATE_ID};

fn now() -> jiff::Timestamp {
    "2024-03-15T09:30:00Z".parse().unwrap()
}

#[test]
fn new_draft_starts_fully_unanswered() {
    let template = default_template();
    let draft = template.new_draft("Finance", "Q1 2024", now());

    assert_eq!(draft.status, AssessmentStatus::Draft);
    assert_eq!(draft.template_id, DEFAULT_TEMPLATE_ID);
    assert_eq!(draft.scores.len(), template.dimensions.len());
    for (score, dimension) in draft.scores.iter().zip(&template.dimensions) {
        assert_eq!(score.dimension_id, dimension.id);
        assert_eq!(score.responses.len(), dimension.sub_questions.len());
        assert!(score
            .responses
            .iter()
            .all(|r| r.response == ResponseValue::Unanswered));
        assert_eq!(score.overridden_score, None);
    }
    assert_eq!(draft.progress(template).answered, 0);
}

#[test]
fn default_template_has_seven_dimensions() {
    let template = default_template();
    assert_eq!(template.dimensions.len(), 7);
    assert_eq!(template.dimensions[0].name, "Do We Know the Rules?");
    assert_eq!(template.question_count(), 35);
    assert!(template.dimensions.iter().all(|d| !d.sub_questions.is_empty()));
}

#[test]
fn progress_counts_answered_questions() {
    let template = default_template();
    let mut draft = template.new_draft("Finance", "Q1 2024", now());
    draft
        .set_response(1, 1, ResponseValue::Yes, now())
        .unwrap();
    draft
        .set_response(2, 3, ResponseValue::No, now())
        .unwrap();

    assert_eq!(draft.scores[1].response_for(3), Some(ResponseValue::No));
    assert_eq!(draft.scores[1].response_for(4), Some(ResponseValue::Unanswered));

    let progress = draft.progress(template);
    assert_eq!(progress, Progress { answered: 2, total: 35 });
    assert!(!progress.is_complete());
    assert!((progress.percentage() - 2.0 / 35.0 * 100.0).abs() < 1e-9);
    assert_eq!(Progress { answered: 0, total: 0 }.percentage(), 0.0);
}

#[test]
fn set_response_rejects_unknown_ids() {
    let mut draft = default_template().new_draft("Finance", "Q1 2024", now());
    assert!(matches!(
        draft.set_response(99, 1, ResponseValue::Yes, now()),
        Err(CoreError::UnknownDimension(99))
    ));
    assert!(matches!(
        draft.set_response(1, 99, ResponseValue::Yes, now()),
        Err(CoreError::UnknownSubQuestion { dimension_id: 1, sub_question_id: 99 })
    ));
}

#[test]
fn incomplete_submission_requires_notes() {
    let template = default_template();
    let mut draft = template.new_draft("Finance", "Q1 2024", now());
    let progress = draft.progress(template);

    let err = draft.submit(progress, Some("   ".into()), None, now()).unwrap_err();
    assert!(matches!(err, CoreError::MissingSubmissionNotes { answered: 0, total: 35 }));
    assert_eq!(draft.status, AssessmentStatus::Draft);

    draft
        .submit(progress, Some("Key staff on leave".into()), Some(900), now())
        .unwrap();
    assert_eq!(draft.status, AssessmentStatus::Submitted);
    assert_eq!(draft.submission_notes.as_deref(), Some("Key staff on leave"));
    assert_eq!(draft.duration, Some(900));
}

#[test]
fn complete_submission_needs_no_notes() {
    let template = default_template();
    let mut draft = template.new_draft("Finance", "Q1 2024", now());
    for dimension in &template.dimensions {
        for question in &dimension.sub_questions {
            draft
                .set_response(dimension.id, question.id, ResponseValue::Yes, now())
                .unwrap();
        }
    }

    let progress = draft.progress(template);
    assert!(progress.is_complete());
    draft.submit(progress, None, None, now()).unwrap();
    assert_eq!(draft.status, AssessmentStatus::Submitted);
    assert_eq!(draft.submission_notes, None);
}

#[test]
fn submitted_assessments_are_read_only_for_department_heads() {
    let template = default_template();
    let mut assessment = template.new_draft("Finance", "Q1 2024", now());
    let progress = assessment.progress(template);
    assessment
        .submit(progress, Some("partial".into()), None, now())
        .unwrap();

    assert!(matches!(
        assessment.set_response(1, 1, ResponseValue::No, now()),
        Err(CoreError::NotEditable { .. })
    ));
    assert!(matches!(
        assessment.submit(progress, Some("again".into()), None, now()),
        Err(CoreError::InvalidTransition { action: "submit", .. })
    ));
}

#[test]
fn lock_and_unlock_round_trip_to_draft() {
    let mut assessment = default_template().new_draft("Finance", "Q1 2024", now());

    assert!(matches!(
        assessment.unlock(),
        Err(CoreError::InvalidTransition { from: AssessmentStatus::Draft, .. })
    ));

    assessment.lock().unwrap();
    assert_eq!(assessment.status, AssessmentStatus::Locked);
    assert!(assessment.lock().is_err());
    assert!(assessment.save_draft(now()).is_err());

    assessment.unlock().unwrap();
    assert_eq!(assessment.status, AssessmentStatus::Draft);
    assessment.set_comments(1, "revisiting", now()).unwrap();
    assert_eq!(assessment.scores[0].comments, "revisiting");
}

#[test]
fn save_draft_clears_submission_notes() {
    let mut assessment = default_template().new_draft("Finance", "Q1 2024", now());
    assessment.submission_notes = Some("stale".into());
    assessment.save_draft(now()).unwrap();
    assert_eq!(assessment.submission_notes, None);
}

#[test]
fn overrides_apply_in_any_status_within_range() {
    let mut assessment = default_template().new_draft("Finance", "Q1 2024", now());
    assessment.lock().unwrap();

    assessment.apply_override(2, Some(65.0)).unwrap();
    assert_eq!(assessment.score_for(2).unwrap().overridden_score, Some(65.0));

    assert!(matches!(
        assessment.apply_override(2, Some(101.0)),
        Err(CoreError::OverrideOutOfRange(_))
    ));
    assert!(assessment.apply_override(2, Some(f64::NAN)).is_err());
    assert!(matches!(
        assessment.apply_override(42, Some(10.0)),
        Err(CoreError::UnknownDimension(42))
    ));

    assessment.apply_override(2, None).unwrap();
    assert_eq!(assessment.score_for(2).unwrap().overridden_score, None);
}

use gauge_core::models::assessment::{Assessment, AssessmentStatus};
use gauge_core::models::heatmap::{HeatmapData, ScoreAndColor, Trend};
use gauge_core::models::response::{DimensionScore, ResponseValue, SubQuestionResponse};
use gauge_core::models::snapshot::Snapshot;
use gauge_core::models::template::{AssessmentTemplate, Dimension, SubQuestion};
use gauge_export::csv::{escape_csv, heatmap_csv, responses_csv, snapshot_responses_csv};
use indexmap::IndexMap;

fn template() -> AssessmentTemplate {
    AssessmentTemplate {
        id: "tpl".into(),
        name: "Governance, 2024".into(),
        description: String::new(),
        dimensions: vec![Dimension {
            id: 1,
            name: "Do We Know the Rules?".into(),
            sub_questions: vec![
                SubQuestion {
                    id: 1,
                    text: "Is there a \"data owner\"?".into(),
                },
                SubQuestion {
                    id: 2,
                    text: "Training complete".into(),
                },
            ],
            retention_policy: None,
        }],
    }
}

fn assessment() -> Assessment {
    Assessment {
        id: "a1".into(),
        department_name: "Finance".into(),
        period: "Q1 2024".into(),
        status: AssessmentStatus::Submitted,
        last_saved: "2024-03-30T12:00:00Z".parse().unwrap(),
        scores: vec![
            DimensionScore {
                dimension_id: 1,
                responses: vec![
                    SubQuestionResponse {
                        sub_question_id: 1,
                        response: ResponseValue::Yes,
                    },
                    SubQuestionResponse {
                        sub_question_id: 2,
                        response: ResponseValue::WorkInProgress,
                    },
                    SubQuestionResponse {
                        sub_question_id: 9,
                        response: ResponseValue::No,
                    },
                ],
                comments: "line one\nline two".into(),
                overridden_score: Some(10.0),
            },
            DimensionScore {
                dimension_id: 7,
                responses: vec![SubQuestionResponse {
                    sub_question_id: 1,
                    response: ResponseValue::Yes,
                }],
                comments: String::new(),
                overridden_score: None,
            },
        ],
        template_id: "tpl".into(),
        submission_notes: None,
        duration: None,
        due_date: None,
    }
}

#[test]
fn escape_quotes_only_when_needed() {
    assert_eq!(escape_csv("plain"), "plain");
    assert_eq!(escape_csv(""), "");
    assert_eq!(escape_csv("a,b"), "\"a,b\"");
    assert_eq!(escape_csv("say \"hi\""), "\"say \"\"hi\"\"\"");
    assert_eq!(escape_csv("two\nlines"), "\"two\nlines\"");
}

#[test]
fn responses_export_has_header_and_one_row_per_resolved_response() {
    let template = template();
    let assessment = assessment();
    let csv = responses_csv(&[(&assessment, &template)]);

    let expected = [
        "Department Name,Assessment Period,Assessment Status,Template Name,Dimension Name,Dimension Score (%),Sub-Question Text,Response,Dimension Comments",
        "Finance,Q1 2024,Submitted,\"Governance, 2024\",Do We Know the Rules?,75.0,\"Is there a \"\"data owner\"\"?\",Yes,\"line one\nline two\"",
        "Finance,Q1 2024,Submitted,\"Governance, 2024\",Do We Know the Rules?,75.0,Training complete,Work in Progress,\"line one\nline two\"",
    ]
    .join("\n");
    assert_eq!(csv, expected);
}

#[test]
fn unanswered_dimension_score_is_not_available() {
    let template = template();
    let mut assessment = assessment();
    for response in &mut assessment.scores[0].responses {
        response.response = ResponseValue::Unanswered;
    }

    let csv = responses_csv(&[(&assessment, &template)]);
    let row = csv.lines().nth(1).unwrap();
    assert!(row.contains(",N/A,"), "{row}");
    assert!(row.contains(",Unanswered,"), "{row}");
}

#[test]
fn empty_export_is_just_the_header() {
    let csv = responses_csv(&[]);
    assert!(csv.starts_with("Department Name,"));
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn snapshot_export_skips_unknown_templates() {
    let mut orphan = assessment();
    orphan.id = "a2".into();
    orphan.department_name = "Legal".into();
    orphan.template_id = "missing".into();

    let snapshot = Snapshot {
        assessments: vec![assessment(), orphan],
        templates: vec![template()],
    };
    let csv = snapshot_responses_csv(&snapshot);
    assert!(csv.contains("Finance"));
    assert!(!csv.contains("Legal"));
}

#[test]
fn heatmap_export_columns_follow_first_seen_order() {
    let mut finance = IndexMap::new();
    finance.insert("Rules".to_string(), ScoreAndColor::from_score(Some(62.5)));
    finance.insert("Owners".to_string(), ScoreAndColor::from_score(None));
    let mut legal = IndexMap::new();
    legal.insert("Ethics".to_string(), ScoreAndColor::from_score(Some(100.0)));

    let rows = vec![
        HeatmapData {
            department_name: "Finance".into(),
            assessment_id: "a1".into(),
            status: AssessmentStatus::Draft,
            scores: finance,
            historical_overall_scores: vec![40.0, 62.5],
            overall_score: 62.5,
            trend: Trend::Improving,
        },
        HeatmapData {
            department_name: "Legal".into(),
            assessment_id: "b1".into(),
            status: AssessmentStatus::Locked,
            scores: legal,
            historical_overall_scores: vec![100.0],
            overall_score: 100.0,
            trend: Trend::New,
        },
    ];

    let csv = heatmap_csv(&rows);
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(
        lines,
        [
            "Department Name,Status,Overall Score (%),Trend,Rules,Owners,Ethics",
            "Finance,Draft,62.5,improving,62.5,N/A,N/A",
            "Legal,Locked,100.0,new,N/A,N/A,100.0",
        ]
    );
}

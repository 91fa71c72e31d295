mod common;

use resume_tailor::profile::ProfileDocument;
use resume_tailor::types::{JobDescription, TailorResult, TitleSource};
use resume_tailor::{Tailor, TailorConfig};

use common::{data_profile, DATA_JD};

#[test]
fn golden_end_to_end_tailoring() {
    let tailor = Tailor::default();
    let resume = tailor.tailor(&data_profile(), &JobDescription::new(DATA_JD));

    let json = serde_json::to_string_pretty(&resume).unwrap();

    let expected = r#"{
  "targetTitle": "Python Engineer",
  "summary": "Data Engineer with hands-on experience in Python, Airflow, and AWS, focused on delivering measurable results.",
  "experience": [
    {
      "company": "Acme Data",
      "title": "Data Engineer",
      "bullets": [
        "Migrated batch data pipelines to Airflow on AWS",
        "Built Python ETL pipelines processing 2TB daily",
        "Maintained internal wiki and onboarding docs",
        "Mentored two junior engineers"
      ]
    },
    {
      "company": "Globex",
      "title": "Software Developer",
      "bullets": [
        "Wrote Python scripts to automate releases",
        "Developed REST services in Java"
      ]
    }
  ],
  "projects": [
    {
      "name": "Pipeline Monitor",
      "bullets": [
        "Dashboard for Airflow pipeline health",
        "Written in Rust"
      ]
    }
  ],
  "skills": [
    "Python",
    "Airflow",
    "AWS",
    "Java",
    "Rust",
    "SQL",
    "Git"
  ]
}"#;

    assert_eq!(json.trim(), expected.trim(), "Golden snapshot mismatch");
}

#[test]
fn golden_tailoring_metadata() {
    let document = ProfileDocument::ingest(data_profile()).unwrap();
    let tailor = Tailor::default();

    let result: TailorResult = tailor.tailor_document(&document, &JobDescription::new(DATA_JD));
    let meta = &result.selection;

    assert_eq!(meta.profile_version, document.version);
    assert_eq!(meta.config_version, TailorConfig::v0().version());
    assert_eq!(meta.title_source, TitleSource::Derived);

    assert_eq!(meta.bullets_considered, 9);
    assert_eq!(meta.bullets_selected, 8);
    assert_eq!(meta.bullets_excluded_by_cap, 1);
    assert_eq!(meta.bullets_excluded_by_budget, 0);

    let keywords = serde_json::to_value(&meta.keywords).unwrap();
    let expected = serde_json::json!([
        { "term": "data pipelines", "weight": 2.0 },
        { "term": "python", "weight": 1.5 },
        { "term": "aws", "weight": 1.5 },
        { "term": "airflow", "weight": 1.5 },
        { "term": "engineer", "weight": 1.0 },
        { "term": "build", "weight": 1.0 },
        { "term": "data", "weight": 1.0 },
        { "term": "pipelines", "weight": 1.0 }
    ]);
    assert_eq!(keywords, expected);

    let entries = serde_json::to_value(&meta.entries).unwrap();
    let expected = serde_json::json!([
        {
            "entry_id": "exp-acme",
            "bullets_considered": 5,
            "bullets_selected": 4,
            "matched_terms": ["data", "data pipelines", "pipelines", "airflow", "aws", "python"],
            "term_matches": 7
        },
        {
            "entry_id": "exp-globex",
            "bullets_considered": 2,
            "bullets_selected": 2,
            "matched_terms": ["python"],
            "term_matches": 1
        },
        {
            "entry_id": "proj-monitor",
            "bullets_considered": 2,
            "bullets_selected": 2,
            "matched_terms": ["airflow"],
            "term_matches": 1
        }
    ]);
    assert_eq!(entries, expected);

    assert_eq!(result.resume, tailor.tailor(&document.profile, &JobDescription::new(DATA_JD)));
}

#[test]
fn golden_total_budget_is_shared_round_robin() {
    let config = TailorConfig {
        max_total_bullets: Some(5),
        ..TailorConfig::v0()
    };
    let tailor = Tailor::new(resume_tailor::selection::KeywordScorer, config).unwrap();
    let document = ProfileDocument::ingest(data_profile()).unwrap();

    let result = tailor.tailor_document(&document, &JobDescription::new(DATA_JD));

    let counts: Vec<usize> = result
        .resume
        .experience
        .iter()
        .map(|e| e.bullets.len())
        .chain(result.resume.projects.iter().map(|p| p.bullets.len()))
        .collect();
    assert_eq!(counts, vec![2, 2, 1]);

    assert_eq!(
        result.resume.experience[0].bullets,
        vec![
            "Migrated batch data pipelines to Airflow on AWS".to_string(),
            "Built Python ETL pipelines processing 2TB daily".to_string(),
        ]
    );
    assert_eq!(result.selection.bullets_selected, 5);
    assert_eq!(result.selection.bullets_excluded_by_cap, 1);
    assert_eq!(result.selection.bullets_excluded_by_budget, 3);
}

mod common;

use chrono::NaiveDate;
use resume_tailor::compose::{
    compose_summary, compose_title_and_summary, join_list, most_recent_experience,
    parse_date_key, DateKey,
};
use resume_tailor::keywords::extract_keywords;
use resume_tailor::profile::MasterProfile;
use resume_tailor::types::{JobDescription, TitleSource};
use resume_tailor::{tailor_resume, TailorConfig};

use common::{data_profile, experience, strings};

fn date(y: i32, m: u32, d: u32) -> DateKey {
    DateKey::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

#[test]
fn date_formats_people_type() {
    assert_eq!(parse_date_key("2021-06-15"), date(2021, 6, 15));
    assert_eq!(parse_date_key("2021-06"), date(2021, 6, 1));
    assert_eq!(parse_date_key("2021/06"), date(2021, 6, 1));
    assert_eq!(parse_date_key("06/2021"), date(2021, 6, 1));
    assert_eq!(parse_date_key("Jun 2021"), date(2021, 6, 1));
    assert_eq!(parse_date_key("June 2021"), date(2021, 6, 1));
    assert_eq!(parse_date_key("December 2019"), date(2019, 12, 1));
    assert_eq!(parse_date_key("Sep 2020"), date(2020, 9, 1));
    assert_eq!(parse_date_key("2021"), date(2021, 1, 1));
    assert_eq!(parse_date_key(" Present "), DateKey::Ongoing);
    assert_eq!(parse_date_key("current"), DateKey::Ongoing);
    assert_eq!(parse_date_key("sometime"), DateKey::Unknown);
    assert_eq!(parse_date_key(""), DateKey::Unknown);
}

#[test]
fn most_recent_prefers_ongoing_then_latest_end() {
    let mut old = experience("old", "Initech", "Analyst", &[]);
    old.end_date = Some("2019-05".into());
    let mut newer = experience("newer", "Globex", "Developer", &[]);
    newer.end_date = Some("Mar 2022".into());
    let mut current = experience("current", "Hooli", "Lead", &[]);
    current.start_date = Some("2022-04".into());
    current.end_date = Some("Present".into());

    let mut profile = MasterProfile {
        name: "Sam".into(),
        experience: vec![old, newer, current],
        ..MasterProfile::default()
    };
    assert_eq!(most_recent_experience(&profile).unwrap().id.as_str(), "current");

    profile.experience.pop();
    assert_eq!(most_recent_experience(&profile).unwrap().id.as_str(), "newer");
}

#[test]
fn most_recent_ties_go_to_first_listed() {
    let profile = MasterProfile {
        name: "Sam".into(),
        experience: vec![
            experience("first", "A", "One", &[]),
            experience("second", "B", "Two", &[]),
        ],
        ..MasterProfile::default()
    };
    assert_eq!(most_recent_experience(&profile).unwrap().id.as_str(), "first");
    assert!(most_recent_experience(&MasterProfile::default()).is_none());
}

#[test]
fn list_joining() {
    assert_eq!(join_list(&[]), "");
    assert_eq!(join_list(&["Rust"]), "Rust");
    assert_eq!(join_list(&["Rust", "Go"]), "Rust and Go");
    assert_eq!(join_list(&["Rust", "Go", "SQL"]), "Rust, Go, and SQL");
}

#[test]
fn summary_template() {
    assert_eq!(
        compose_summary("Data Engineer", &["Python", "SQL"]),
        "Data Engineer with hands-on experience in Python and SQL, focused on delivering measurable results."
    );
    assert_eq!(
        compose_summary("Professional", &[]),
        "Professional focused on delivering measurable results."
    );
}

#[test]
fn summary_uses_top_n_skills() {
    let config = TailorConfig {
        summary_skill_count: 2,
        ..TailorConfig::v0()
    };
    let skills = strings(&["Go", "Rust", "SQL"]);
    let composed = compose_title_and_summary(
        &data_profile(),
        &JobDescription::default(),
        &extract_keywords(""),
        &skills,
        &config,
    );

    assert_eq!(
        composed.summary,
        "Data Engineer with hands-on experience in Go and Rust, focused on delivering measurable results."
    );
    assert_eq!(composed.target_title, "Data Engineer");
    assert_eq!(composed.title_source, TitleSource::RecentExperience);
}

#[test]
fn blank_titles_fall_through_to_fallback() {
    let profile = MasterProfile {
        name: "Sam".into(),
        experience: vec![experience("e", "Acme", "   ", &[])],
        ..MasterProfile::default()
    };
    let config = TailorConfig {
        fallback_title: "Candidate".into(),
        ..TailorConfig::v0()
    };
    let composed = compose_title_and_summary(
        &profile,
        &JobDescription::default().with_title("  "),
        &extract_keywords("just words here"),
        &[],
        &config,
    );

    assert_eq!(composed.target_title, "Candidate");
    assert_eq!(composed.title_source, TitleSource::Fallback);
    assert_eq!(composed.summary, "Candidate focused on delivering measurable results.");
}

#[test]
fn full_month_names_pick_the_latest_role() {
    let mut analyst = experience("analyst", "Initech", "Analyst", &[]);
    analyst.end_date = Some("December 2019".into());
    let mut staff = experience("staff", "Hooli", "Staff Engineer", &[]);
    staff.end_date = Some("March 2023".into());

    let profile = MasterProfile {
        name: "Sam".into(),
        experience: vec![analyst, staff],
        ..MasterProfile::default()
    };

    let resume = tailor_resume(&profile, "");
    assert_eq!(resume.target_title, "Staff Engineer");
    assert_eq!(
        resume.summary,
        "Staff Engineer focused on delivering measurable results."
    );
}

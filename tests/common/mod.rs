#![allow(dead_code)]

use resume_tailor::profile::{Bullet, Experience, MasterProfile, Project, Skills};

pub const DATA_JD: &str =
    "Seeking a Python engineer to build data pipelines on AWS. Experience with Airflow is a plus.";

pub fn bullets(prefix: &str, texts: &[&str]) -> Vec<Bullet> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| Bullet::new(format!("{prefix}-b{}", i + 1), *text))
        .collect()
}

pub fn experience(id: &str, company: &str, title: &str, texts: &[&str]) -> Experience {
    let mut entry = Experience::new(id, company, title);
    entry.bullets = bullets(id, texts);
    entry
}

pub fn project(id: &str, name: &str, texts: &[&str]) -> Project {
    let mut entry = Project::new(id, name);
    entry.bullets = bullets(id, texts);
    entry
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Two roles, one project, skills spread over four categories.
pub fn data_profile() -> MasterProfile {
    let mut acme = experience(
        "exp-acme",
        "Acme Data",
        "Data Engineer",
        &[
            "Maintained internal wiki and onboarding docs",
            "Built Python ETL pipelines processing 2TB daily",
            "Mentored two junior engineers",
            "Migrated batch data pipelines to Airflow on AWS",
            "Organized quarterly hackathons",
        ],
    );
    acme.start_date = Some("2021-03".into());
    acme.end_date = Some("Present".into());

    let mut globex = experience(
        "exp-globex",
        "Globex",
        "Software Developer",
        &[
            "Developed REST services in Java",
            "Wrote Python scripts to automate releases",
        ],
    );
    globex.start_date = Some("2018-06".into());
    globex.end_date = Some("2021-02".into());

    MasterProfile {
        name: "Jordan Lee".into(),
        email: "jordan@example.com".into(),
        experience: vec![acme, globex],
        projects: vec![project(
            "proj-monitor",
            "Pipeline Monitor",
            &["Dashboard for Airflow pipeline health", "Written in Rust"],
        )],
        skills: Skills {
            languages: strings(&["Python", "Java", "Rust"]),
            data: strings(&["Airflow", "SQL"]),
            cloud: strings(&["AWS"]),
            tools: strings(&["Git", "python"]),
            ..Skills::default()
        },
        ..MasterProfile::default()
    }
}

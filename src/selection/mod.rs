pub mod budgeting;
pub mod ranking;
pub mod skills;

use tracing::debug;

use crate::compose::compose_title_and_summary;
use crate::config::{ConfigError, TailorConfig};
use crate::keywords::{KeywordExtractor, KeywordSet};
use crate::profile::{Bullet, MasterProfile, ProfileDocument};
use crate::types::{
	ContentVersion, EntryId, EntryWhy, JobDescription, KeywordWeight, TailorMetadata, TailorResult,
	TailoredExperience, TailoredProject, TailoredResume, TitleSource,
};
pub use budgeting::{apply_budget, BudgetResult, BulletBudget};
pub use ranking::{rank_bullets, score, KeywordScorer, RankedBullets, ScoreDetails, ScoredBullet, Scorer};
pub use skills::rank_skills;

/// Keywords reported in the tailoring metadata.
const REPORTED_KEYWORDS: usize = 10;

/// The ranked bullets of one entry and how many of them it keeps.
#[derive(Debug, Clone)]
pub struct EntrySelection<'a> {
	pub ranked: RankedBullets<'a>,
	pub keep: usize,
}

impl<'a> EntrySelection<'a> {
	/// Kept bullets, best first.
	pub fn kept(&self) -> &[ScoredBullet<'a>] {
		&self.ranked.ranked[..self.keep]
	}

	/// Kept bullet texts as they appear in the tailored resume.
	pub fn texts(&self) -> Vec<String> {
		self.kept()
			.iter()
			.map(|b| b.bullet.text.trim().to_string())
			.collect()
	}

	pub fn why(&self, entry_id: &EntryId) -> EntryWhy {
		let mut matched_terms: Vec<String> = Vec::new();
		let mut term_matches = 0;
		for scored in self.kept() {
			term_matches += scored.details.term_matches;
			for term in &scored.details.matched_terms {
				if !matched_terms.contains(term) {
					matched_terms.push(term.clone());
				}
			}
		}

		EntryWhy {
			entry_id: entry_id.clone(),
			bullets_considered: self.ranked.ranked.len(),
			bullets_selected: self.keep,
			matched_terms,
			term_matches,
		}
	}
}

/// Outcome of selecting bullets across several entries under one budget.
#[derive(Debug, Clone)]
pub struct BulletSelection<'a> {
	/// One per input list, in input order.
	pub entries: Vec<EntrySelection<'a>>,
	pub budget: BudgetResult,
}

/// Ranks the bullets of every entry, then caps each entry and shares the
/// total budget across all of them in input order. Every entry is kept,
/// possibly with zero bullets.
pub fn select_bullets<'a, S: Scorer>(
	scorer: &S,
	bullet_lists: &[&'a [Bullet]],
	keywords: &KeywordSet,
	budget: &BulletBudget,
) -> BulletSelection<'a> {
	let ranked: Vec<RankedBullets<'a>> = bullet_lists
		.iter()
		.map(|bullets| rank_bullets(scorer, bullets, keywords))
		.collect();
	let lens: Vec<usize> = ranked.iter().map(|r| r.ranked.len()).collect();
	let result = apply_budget(&lens, budget);

	let entries = ranked
		.into_iter()
		.zip(&result.allocations)
		.map(|(ranked, &keep)| EntrySelection { ranked, keep })
		.collect();

	BulletSelection {
		entries,
		budget: result,
	}
}

/// The tailoring engine. Stateless: every call reads only its arguments.
pub struct Tailor<S = KeywordScorer> {
	scorer: S,
	config: TailorConfig,
	config_version: ContentVersion,
	extractor: KeywordExtractor,
}

impl Default for Tailor<KeywordScorer> {
	fn default() -> Self {
		let config = TailorConfig::v0();
		Self {
			scorer: KeywordScorer,
			config_version: config.version(),
			extractor: KeywordExtractor::from_config(&config),
			config,
		}
	}
}

struct Run {
	resume: TailoredResume,
	title_source: TitleSource,
	keywords: Vec<KeywordWeight>,
	entries: Vec<EntryWhy>,
	budget: BudgetResult,
}

impl<S> Tailor<S>
where
	S: Scorer,
{
	pub fn new(scorer: S, config: TailorConfig) -> Result<Self, ConfigError> {
		config.validate()?;
		Ok(Self {
			scorer,
			config_version: config.version(),
			extractor: KeywordExtractor::from_config(&config),
			config,
		})
	}

	pub fn config(&self) -> &TailorConfig {
		&self.config
	}

	pub fn budget(&self) -> BulletBudget {
		BulletBudget {
			per_entry: self.config.max_bullets_per_entry,
			total: self.config.max_total_bullets,
		}
	}

	pub fn extract_keywords(&self, jd_text: &str) -> KeywordSet {
		self.extractor.extract(jd_text)
	}

	pub fn score(&self, text: &str, keywords: &KeywordSet) -> f64 {
		self.scorer.score_value(&self.scorer.score(text, keywords))
	}

	pub fn select_bullets<'a>(
		&self,
		bullet_lists: &[&'a [Bullet]],
		keywords: &KeywordSet,
	) -> BulletSelection<'a> {
		select_bullets(&self.scorer, bullet_lists, keywords, &self.budget())
	}

	pub fn rank_skills(&self, profile: &MasterProfile, keywords: &KeywordSet) -> Vec<String> {
		rank_skills(&self.scorer, &profile.skills, keywords)
	}

	/// Tailor a profile to a job description. Never fails: empty or missing
	/// input degrades to profile order everywhere.
	pub fn tailor(&self, profile: &MasterProfile, job: &JobDescription) -> TailoredResume {
		self.run(profile, job).resume
	}

	/// Tailor a versioned profile document and report how the result was built.
	pub fn tailor_document(&self, document: &ProfileDocument, job: &JobDescription) -> TailorResult {
		let run = self.run(&document.profile, job);

		let selection = TailorMetadata {
			profile_version: document.version.clone(),
			config_version: self.config_version.clone(),
			title_source: run.title_source,
			keywords: run.keywords,
			entries: run.entries,
			bullets_considered: run.budget.bullets_considered,
			bullets_selected: run.budget.bullets_selected,
			bullets_excluded_by_cap: run.budget.bullets_excluded_by_cap,
			bullets_excluded_by_budget: run.budget.bullets_excluded_by_budget,
		};

		TailorResult {
			resume: run.resume,
			selection,
		}
	}

	fn run(&self, profile: &MasterProfile, job: &JobDescription) -> Run {
		// 1. Keyword phase
		let keywords = self.extractor.extract(&job.jd_text);

		// 2. Ranking and budgeting, experience first then projects
		let bullet_lists: Vec<&[Bullet]> = profile
			.experience
			.iter()
			.map(|e| e.bullets.as_slice())
			.chain(profile.projects.iter().map(|p| p.bullets.as_slice()))
			.collect();
		let selection = self.select_bullets(&bullet_lists, &keywords);
		let (experience_sel, project_sel) = selection.entries.split_at(profile.experience.len());

		let entry_ids = profile
			.experience
			.iter()
			.map(|e| &e.id)
			.chain(profile.projects.iter().map(|p| &p.id));
		let entries: Vec<EntryWhy> = entry_ids
			.zip(&selection.entries)
			.map(|(id, entry)| {
				log_entry(id, entry);
				entry.why(id)
			})
			.collect();

		// 3. Assembly
		let experience: Vec<TailoredExperience> = profile
			.experience
			.iter()
			.zip(experience_sel)
			.map(|(entry, selected)| TailoredExperience {
				company: entry.company.clone(),
				title: entry.title.clone(),
				bullets: selected.texts(),
			})
			.collect();

		let projects: Vec<TailoredProject> = profile
			.projects
			.iter()
			.zip(project_sel)
			.map(|(entry, selected)| TailoredProject {
				name: entry.name.clone(),
				bullets: selected.texts(),
			})
			.collect();

		// 4. Skills and composition
		let skills = rank_skills(&self.scorer, &profile.skills, &keywords);
		let composition = compose_title_and_summary(profile, job, &keywords, &skills, &self.config);

		let reported = keywords
			.top(REPORTED_KEYWORDS)
			.into_iter()
			.map(|k| KeywordWeight {
				term: k.term.clone(),
				weight: k.weight,
			})
			.collect();

		Run {
			resume: TailoredResume {
				target_title: composition.target_title,
				summary: composition.summary,
				experience,
				projects,
				skills,
			},
			title_source: composition.title_source,
			keywords: reported,
			entries,
			budget: selection.budget,
		}
	}
}

fn log_entry(id: &EntryId, entry: &EntrySelection<'_>) {
	debug!(
		entry = %id,
		considered = entry.ranked.ranked.len(),
		kept = entry.keep,
		fallback = entry.ranked.all_zero,
		"bullets selected"
	);
}

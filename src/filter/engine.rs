use std::collections::BTreeSet;

use crate::models::Job;

use super::category::role_category;

/// In-memory search/filter state for a loaded job list. Re-evaluated
/// synchronously on every change; there is no debouncing and no pagination,
/// which is fine at the sizes a single listing page holds.
#[derive(Debug, Default, Clone)]
pub struct JobFilter {
    search: String,
    categories: BTreeSet<String>,
    skills: BTreeSet<String>,
}

impl JobFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Symmetric set toggle: selecting a category a second time deselects it.
    pub fn toggle_category(&mut self, category: &str) {
        if !self.categories.remove(category) {
            self.categories.insert(category.to_string());
        }
    }

    /// Symmetric set toggle, same semantics as categories.
    pub fn toggle_skill(&mut self, skill: &str) {
        if !self.skills.remove(skill) {
            self.skills.insert(skill.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.categories.clear();
        self.skills.clear();
    }

    pub fn selected_categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    pub fn selected_skills(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// A job passes when all three clauses hold: search term, category set,
    /// skill set. Empty clauses pass everything.
    pub fn matches(&self, job: &Job) -> bool {
        let matches_search = self.search.is_empty() || {
            let term = self.search.to_lowercase();
            job.title.to_lowercase().contains(&term)
                || job.company_name.to_lowercase().contains(&term)
                || job.description.to_lowercase().contains(&term)
        };

        let matches_category =
            self.categories.is_empty() || self.categories.contains(role_category(&job.title));

        let matches_skills =
            self.skills.is_empty() || job.skills.iter().any(|skill| self.skills.contains(skill));

        matches_search && matches_category && matches_skills
    }

    pub fn apply<'a>(&self, jobs: &'a [Job]) -> Vec<&'a Job> {
        jobs.iter().filter(|job| self.matches(job)).collect()
    }
}

/// Sorted distinct categories derived from the loaded jobs.
pub fn available_categories(jobs: &[Job]) -> Vec<String> {
    let categories: BTreeSet<&str> = jobs.iter().map(|job| role_category(&job.title)).collect();
    categories.into_iter().map(str::to_string).collect()
}

/// Sorted distinct skills across the loaded jobs.
pub fn available_skills(jobs: &[Job]) -> Vec<String> {
    let skills: BTreeSet<&String> = jobs.iter().flat_map(|job| job.skills.iter()).collect();
    skills.into_iter().cloned().collect()
}

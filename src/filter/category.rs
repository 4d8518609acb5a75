/// Ordered category rules: each job belongs to exactly one category, decided
/// by case-insensitive substring match on its title. First matching rule
/// wins, so the ordering here is part of the contract.
pub const CATEGORY_RULES: &[(&[&str], &str)] = &[
    (&["engineer", "developer"], "Engineer"),
    (&["design"], "Design"),
    (&["manager", "management"], "Management"),
    (&["support"], "Support"),
    (&["marketing"], "Marketing"),
    (&["sales"], "Sales"),
];

pub const FALLBACK_CATEGORY: &str = "Other";

/// Derive the role category for a job title.
pub fn role_category(title: &str) -> &'static str {
    let lower = title.to_lowercase();
    for (needles, label) in CATEGORY_RULES {
        if needles.iter().any(|needle| lower.contains(needle)) {
            return label;
        }
    }
    FALLBACK_CATEGORY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_case_insensitively() {
        assert_eq!(role_category("Junior Engineer"), "Engineer");
        assert_eq!(role_category("FRONTEND DEVELOPER"), "Engineer");
        assert_eq!(role_category("Product Designer"), "Design");
        assert_eq!(role_category("Office Management Trainee"), "Management");
        assert_eq!(role_category("Customer Support Rep"), "Support");
        assert_eq!(role_category("Marketing Intern"), "Marketing");
        assert_eq!(role_category("Sales Associate"), "Sales");
    }

    #[test]
    fn unmatched_titles_fall_back_to_other() {
        assert_eq!(role_category("Data Analyst"), "Other");
        assert_eq!(role_category(""), "Other");
    }

    #[test]
    fn first_matching_rule_wins() {
        // "Design Engineer" contains needles for both Engineer and Design;
        // the Engineer rule is listed first so it takes the title.
        assert_eq!(role_category("Design Engineer"), "Engineer");
        assert_eq!(role_category("Engineering Manager"), "Engineer");
        assert_eq!(role_category("Design Manager"), "Design");
    }
}

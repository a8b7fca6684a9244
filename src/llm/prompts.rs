use crate::models::Category;

/// Reply length cap for a single label.
pub const MAX_LABEL_TOKENS: u32 = 10;

const CATEGORY_GUIDE: &[(Category, &str)] = &[
    (Category::Math, "Mathematics, algebra, geometry, calculus"),
    (
        Category::Ela,
        "English language arts, reading, writing, literacy, literature (but not ESL/foreign language)",
    ),
    (Category::Sci, "Science, biology, chemistry, physics, astronomy, etc."),
    (
        Category::Hist,
        "History, social studies, geography, civics, economics, government",
    ),
    (
        Category::Cte,
        "Career/technical education, vocational, technology, business, computer science",
    ),
    (Category::Art, "Visual arts, theater, etc"),
    (
        Category::Other,
        "Everything else (arts, PE, foreign languages, health, etc.)",
    ),
];

#[derive(Debug, Clone)]
pub struct ClassificationRequest<'a> {
    pub subject: &'a str,
}

impl<'a> ClassificationRequest<'a> {
    pub fn new(subject: &'a str) -> Self {
        Self { subject }
    }

    pub fn to_prompt(&self) -> String {
        let mut prompt = String::from(
            "I want you to categorize the following subject into one of these categories:\n",
        );

        for (category, description) in CATEGORY_GUIDE {
            prompt.push_str(&format!("- {}: {}\n", category, description));
        }

        prompt.push_str(&format!("\nSubject: \"{}\"\nCategory:", self.subject));
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_lists_coarse_set_only() {
        let prompt = ClassificationRequest::new("Robotics Club").to_prompt();
        for category in Category::COARSE {
            assert!(prompt.contains(&format!("- {}:", category)));
        }
        assert!(!prompt.contains("- LANG:"));
        assert!(!prompt.contains("- SPED:"));
    }

    #[test]
    fn test_prompt_interpolates_subject() {
        let prompt = ClassificationRequest::new("Robotics Club").to_prompt();
        assert!(prompt.ends_with("Subject: \"Robotics Club\"\nCategory:"));
    }

    #[test]
    fn test_empty_subject_still_builds() {
        let prompt = ClassificationRequest::new("").to_prompt();
        assert!(prompt.contains("Subject: \"\""));
    }
}

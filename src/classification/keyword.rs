use crate::models::Category;
use crate::taxonomy::SubjectTaxonomy;

/// Case-insensitive substring matcher over the taxonomy.
///
/// Matching is containment, not whole-word: "Mathematical Reasoning" hits the
/// `math` trigger and "Earth Systems" hits `art`. Only case is normalized;
/// punctuation and whitespace must appear verbatim.
pub struct KeywordClassifier {
    taxonomy: SubjectTaxonomy,
}

impl KeywordClassifier {
    pub fn new(taxonomy: SubjectTaxonomy) -> Self {
        Self { taxonomy }
    }

    /// First category in declaration order with any trigger contained in
    /// `subject`, or `None`.
    pub fn classify(&self, subject: &str) -> Option<Category> {
        if subject.is_empty() {
            return None;
        }

        let lower = subject.to_lowercase();
        self.taxonomy
            .entries()
            .iter()
            .find(|entry| entry.keywords.iter().any(|k| lower.contains(k)))
            .map(|entry| entry.category)
    }

    pub fn taxonomy(&self) -> &SubjectTaxonomy {
        &self.taxonomy
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(SubjectTaxonomy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(subject: &str) -> Option<Category> {
        KeywordClassifier::default().classify(subject)
    }

    #[test]
    fn test_known_subjects() {
        assert_eq!(classify("Algebra II"), Some(Category::Math));
        assert_eq!(classify("Reading & Writing"), Some(Category::Ela));
        assert_eq!(classify("AP Chemistry"), Some(Category::Sci));
        assert_eq!(classify("World History"), Some(Category::Hist));
        assert_eq!(classify("Business Management"), Some(Category::Cte));
        assert_eq!(classify("Choral Ensemble"), Some(Category::Art));
        assert_eq!(classify("Spanish (World Language)"), Some(Category::Lang));
        assert_eq!(classify("Physical Education"), Some(Category::Pe));
        assert_eq!(classify("Special Education"), Some(Category::Sped));
        assert_eq!(classify("Early Learning Center"), Some(Category::El));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(classify("Intro to Programming"), None);
        assert_eq!(classify("Homeroom"), None);
    }

    #[test]
    fn test_empty_subject() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("   "), None);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("GEOMETRY"), Some(Category::Math));
        assert_eq!(classify("gEoMeTrY"), Some(Category::Math));
    }

    #[test]
    fn test_earlier_category_wins() {
        assert_eq!(classify("Math and English"), Some(Category::Math));
        assert_eq!(classify("English through Math"), Some(Category::Math));
        assert_eq!(classify("Health Science"), Some(Category::Sci));
        assert_eq!(classify("Earth Science"), Some(Category::Sci));
    }

    #[test]
    fn test_substring_containment() {
        assert_eq!(classify("Mathematical Reasoning"), Some(Category::Math));
        // "earth" contains the ART trigger
        assert_eq!(classify("Earth & Space"), Some(Category::Art));
    }

    #[test]
    fn test_punctuation_is_not_normalized() {
        assert_eq!(classify("Social-Studies"), None);
        assert_eq!(classify("Social Studies"), Some(Category::Hist));
        // "arts" still carries the ART trigger
        assert_eq!(classify("Language-Arts"), Some(Category::Art));
        assert_eq!(classify("Language Arts"), Some(Category::Ela));
    }

    #[test]
    fn test_only_the_trigger_category_matches() {
        let classifier = KeywordClassifier::default();
        for entry in classifier.taxonomy().entries() {
            for keyword in entry.keywords {
                let found = classifier.classify(&keyword.to_uppercase());
                let earliest = classifier
                    .taxonomy()
                    .entries()
                    .iter()
                    .find(|e| e.keywords.iter().any(|k| keyword.contains(k)))
                    .map(|e| e.category);
                assert_eq!(found, earliest, "trigger {:?}", keyword);
            }
        }
    }
}

use crate::models::Category;

/// Trigger substrings per category, in priority order. The first category with
/// any trigger contained in a subject wins, so the order here is significant.
pub const KEYWORD_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Math,
        &["mathematics", "math", "algebra", "geometry", "calculus"],
    ),
    (
        Category::Ela,
        &["ela", "english", "language arts", "reading", "writing", "literature"],
    ),
    (
        Category::Sci,
        &["science", "biology", "chemistry", "physics", "astronomy", "stem"],
    ),
    (
        Category::Hist,
        &["history", "social studies", "geography", "civics", "government", "economics"],
    ),
    (
        Category::Cte,
        &[
            "cte",
            "career",
            "technical",
            "vocational",
            "technology",
            "business",
            "computer science",
        ],
    ),
    (
        Category::Art,
        &["art", "visual & performing art", "dance", "music", "choral"],
    ),
    (
        Category::Lang,
        &["world language", "modern languages", "foreign language"],
    ),
    (Category::Health, &["health"]),
    (Category::Pe, &["physical education"]),
    (Category::Rel, &["religion"]),
    (Category::Lib, &["library"]),
    (Category::Sel, &["social emotional", "social and emotional"]),
    (Category::El, &["early learning"]),
    (Category::Sped, &["special education"]),
];

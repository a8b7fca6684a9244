use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Normalized subject category. The set is closed; nothing extends it at runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Math,
    Ela,
    Sci,
    Hist,
    Cte,
    Art,
    Lang,
    Health,
    Pe,
    Rel,
    Lib,
    Sel,
    El,
    Sped,
    Other,
}

impl Category {
    pub const ALL: [Category; 15] = [
        Category::Math,
        Category::Ela,
        Category::Sci,
        Category::Hist,
        Category::Cte,
        Category::Art,
        Category::Lang,
        Category::Health,
        Category::Pe,
        Category::Rel,
        Category::Lib,
        Category::Sel,
        Category::El,
        Category::Sped,
        Category::Other,
    ];

    /// The 7-way set offered to the remote classifier.
    pub const COARSE: [Category; 7] = [
        Category::Math,
        Category::Ela,
        Category::Sci,
        Category::Hist,
        Category::Cte,
        Category::Art,
        Category::Other,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Math => "MATH",
            Category::Ela => "ELA",
            Category::Sci => "SCI",
            Category::Hist => "HIST",
            Category::Cte => "CTE",
            Category::Art => "ART",
            Category::Lang => "LANG",
            Category::Health => "HEALTH",
            Category::Pe => "PE",
            Category::Rel => "REL",
            Category::Lib => "LIB",
            Category::Sel => "SEL",
            Category::El => "EL",
            Category::Sped => "SPED",
            Category::Other => "OTHER",
        }
    }

    pub fn is_coarse(&self) -> bool {
        Self::COARSE.contains(self)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| format!("unknown category code: {}", s))
    }
}

/// Outcome attached to a row as `normalized_subject`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", content = "label", rename_all = "snake_case")]
pub enum Classification {
    /// Resolved locally from the keyword table.
    Keyword(Category),
    /// Raw label returned by the remote classifier, trusted as-is.
    Fallback(String),
}

impl Classification {
    pub fn label(&self) -> &str {
        match self {
            Classification::Keyword(category) => category.code(),
            Classification::Fallback(label) => label,
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

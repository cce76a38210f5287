//! Fixed keyword tables used for category-level skill matching and industry grouping.
//!
//! Keywords are lowercase and avoid one- and two-letter tokens: membership is
//! decided by bidirectional substring containment, so a keyword like "go" would
//! match "mongodb" and "ui" would match "build".

use std::collections::BTreeSet;

/// Skill category -> canonical keywords
pub const SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &[
            "programming", "software development", "coding", "javascript", "typescript",
            "python", "java", "rust", "golang", "c++", ".net", "ruby", "php", "kotlin",
            "swift", "scala",
        ],
    ),
    (
        "frontend",
        &[
            "frontend", "front-end", "react", "vue", "angular", "svelte", "html", "css",
            "javascript", "typescript", "next.js", "tailwind", "web development",
        ],
    ),
    (
        "backend",
        &[
            "backend", "back-end", "node", "express.js", "django", "flask", "spring boot",
            "rest api", "api development", "microservices", "graphql", "database", "sql",
            "postgres",
        ],
    ),
    (
        "data",
        &[
            "data", "analytics", "machine learning", "deep learning", "statistics",
            "artificial intelligence", "tableau", "power bi", "pandas", "sql",
        ],
    ),
    (
        "devops",
        &[
            "devops", "docker", "kubernetes", "aws", "azure", "gcp", "cloud", "ci/cd",
            "terraform", "linux", "infrastructure",
        ],
    ),
    (
        "mobile",
        &[
            "mobile", "android", "ios development", "react native", "flutter", "swift",
            "kotlin",
        ],
    ),
    (
        "design",
        &[
            "design", "ux design", "ui design", "user experience", "user interface", "figma",
            "sketch", "adobe", "photoshop", "illustrator", "prototyping", "wireframing",
        ],
    ),
    (
        "product",
        &[
            "product management", "product manager", "roadmap", "agile", "scrum",
            "user research",
        ],
    ),
    (
        "marketing",
        &[
            "marketing", "seo", "content", "social media", "branding", "copywriting",
            "advertising", "growth",
        ],
    ),
    (
        "sales",
        &[
            "sales", "business development", "negotiation", "account management", "crm",
            "lead generation",
        ],
    ),
    (
        "finance",
        &[
            "finance", "financial", "accounting", "budgeting", "investment", "bookkeeping",
            "excel",
        ],
    ),
    (
        "soft_skills",
        &[
            "communication", "teamwork", "problem solving", "critical thinking",
            "collaboration", "time management", "adaptability", "public speaking",
            "presentation", "empathy", "creativity",
        ],
    ),
    (
        "leadership",
        &[
            "leadership", "management", "mentoring", "coaching", "team lead", "strategy",
        ],
    ),
];

/// Industry group -> industry keywords
pub const INDUSTRY_GROUPS: &[(&str, &[&str])] = &[
    (
        "tech",
        &[
            "technology", "tech", "software", "saas", "information technology",
            "telecommunications", "cybersecurity", "internet", "e-commerce",
        ],
    ),
    (
        "business",
        &[
            "business", "finance", "banking", "consulting", "insurance", "accounting",
            "investment", "real estate", "retail",
        ],
    ),
    (
        "creative",
        &[
            "creative", "media", "design", "advertising", "entertainment", "arts", "fashion",
            "publishing", "marketing", "gaming",
        ],
    ),
    (
        "healthcare",
        &[
            "healthcare", "health", "medical", "pharmaceutical", "biotech", "hospital",
            "wellness",
        ],
    ),
    (
        "education",
        &[
            "education", "edtech", "teaching", "academia", "university", "school", "e-learning",
        ],
    ),
    (
        "public_sector",
        &["government", "non-profit", "nonprofit", "public sector", "policy"],
    ),
    (
        "industrial",
        &[
            "manufacturing", "engineering", "energy", "automotive", "construction",
            "logistics", "aerospace",
        ],
    ),
];

/// Lowercase and trim
#[inline]
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Bidirectional substring containment on normalized strings. Empty never matches.
#[inline]
pub fn contains_either(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(b) || b.contains(a)
}

fn groups_in(table: &'static [(&'static str, &'static [&'static str])], value: &str) -> BTreeSet<&'static str> {
    table
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| contains_either(value, k)))
        .map(|(name, _)| *name)
        .collect()
}

/// Categories a normalized skill string belongs to (possibly none)
pub fn skill_categories(skill: &str) -> BTreeSet<&'static str> {
    groups_in(SKILL_CATEGORIES, skill)
}

/// Industry groups a normalized industry string belongs to (possibly none)
pub fn industry_groups(industry: &str) -> BTreeSet<&'static str> {
    groups_in(INDUSTRY_GROUPS, industry)
}

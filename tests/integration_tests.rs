// Integration tests for Academy Match

use academy_match::core::Matcher;
use academy_match::models::{CandidateSkillProfile, MentorMatch, MentorProfile};
use academy_match::services::{InMemoryProfileStore, MentorMatchingService};
use std::sync::Arc;

const SPECIALIZATIONS: &[&str] = &[
    "React", "Node.js", "Python", "Machine Learning", "Figma", "Product Management",
    "Public Speaking", "Kubernetes", "Financial Modeling", "SEO", "Team Leadership", "SQL",
];

const INDUSTRIES: &[&str] = &[
    "Software", "Finance", "Healthcare", "Education", "Media", "Manufacturing", "",
];

/// Deterministic pseudo-random mentor pool
fn generate_pool(size: usize) -> Vec<MentorProfile> {
    let mut seed: u64 = 0x5eed;
    let mut next = move |bound: u64| {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) % bound
    };

    (0..size)
        .map(|i| {
            let spec_count = 1 + next(3) as usize;
            let specializations = (0..spec_count)
                .map(|_| SPECIALIZATIONS[next(SPECIALIZATIONS.len() as u64) as usize].to_string())
                .collect();
            let max_mentees = 1 + next(6) as i32;

            MentorProfile {
                id: format!("mentor-{:03}", i),
                full_name: Some(format!("Mentor {}", i)),
                specializations,
                industry: INDUSTRIES[next(INDUSTRIES.len() as u64) as usize].to_string(),
                years_experience: next(35) as i32 - 2,
                max_mentees,
                current_mentees: next(max_mentees as u64 + 2) as i32,
                is_accepting_mentees: next(5) != 0,
                avg_rating: if next(4) == 0 { None } else { Some(next(51) as f64 / 10.0) },
                total_observations: next(40) as i32,
                total_endorsements: next(15) as i32,
            }
        })
        .collect()
}

fn candidate() -> CandidateSkillProfile {
    CandidateSkillProfile {
        skills: vec![
            "react".to_string(),
            "python".to_string(),
            "public speaking".to_string(),
        ],
        industry: Some("Software".to_string()),
    }
}

fn service_with(pool: Vec<MentorProfile>) -> MentorMatchingService {
    let store = InMemoryProfileStore::new()
        .with_candidate("cand-1", candidate())
        .with_mentors(pool);
    MentorMatchingService::new(Arc::new(store), Matcher::default())
}

fn assert_scores_in_range(m: &MentorMatch) {
    let s = &m.score;
    for value in [
        s.total,
        s.skill_match,
        s.industry_match,
        s.availability_score,
        s.experience_score,
        s.rating_score,
    ] {
        assert!((0.0..=100.0).contains(&value), "score {} out of range for {}", value, m.mentor.id);
    }
}

#[tokio::test]
async fn test_integration_end_to_end_matching() {
    let pool = generate_pool(200);
    let service = service_with(pool.clone());

    let matches = service.find_mentor_matches("cand-1", 25).await.unwrap();

    assert!(!matches.is_empty());
    assert!(matches.len() <= 25);

    for m in &matches {
        assert_scores_in_range(m);

        // excluded mentors never appear
        assert!(m.mentor.is_accepting_mentees);
        assert!(m.mentor.current_mentees < m.mentor.max_mentees);

        // total is the weighted sum, within rounding
        let s = &m.score;
        let weighted = 0.35 * s.skill_match
            + 0.20 * s.industry_match
            + 0.15 * s.availability_score
            + 0.15 * s.experience_score
            + 0.15 * s.rating_score;
        assert!((s.total - weighted).abs() <= 1.0, "total {} vs weighted {}", s.total, weighted);
    }

    for pair in matches.windows(2) {
        assert!(pair[0].score.total >= pair[1].score.total, "Matches not sorted by score");
    }
}

#[tokio::test]
async fn test_matching_is_idempotent() {
    let service = service_with(generate_pool(120));

    let first = service.find_mentor_matches("cand-1", 50).await.unwrap();
    let second = service.find_mentor_matches("cand-1", 50).await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_full_and_closed_mentors_never_returned() {
    let pool = generate_pool(300);
    let excluded: Vec<String> = pool
        .iter()
        .filter(|m| !m.is_accepting_mentees || m.current_mentees >= m.max_mentees)
        .map(|m| m.id.clone())
        .collect();
    assert!(!excluded.is_empty());

    let service = service_with(pool);
    let matches = service.find_mentor_matches("cand-1", 300).await.unwrap();

    assert!(matches.iter().all(|m| !excluded.contains(&m.mentor.id)));
}

#[tokio::test]
async fn test_raising_rating_never_lowers_rating_score() {
    let mut mentor = generate_pool(1).remove(0);
    mentor.is_accepting_mentees = true;
    mentor.max_mentees = 3;
    mentor.current_mentees = 0;

    let matcher = Matcher::default();
    let mut previous = 0.0;
    for tenths in 0..=50 {
        mentor.avg_rating = Some(tenths as f64 / 10.0);
        let m = matcher.score_mentor(&candidate(), mentor.clone());
        assert!(m.score.rating_score >= previous);
        previous = m.score.rating_score;
    }
}

#[tokio::test]
async fn test_check_compatibility_agrees_with_ranking() {
    let service = service_with(generate_pool(80));
    let ranked = service.find_mentor_matches("cand-1", 80).await.unwrap();

    for expected in ranked.iter().take(10) {
        let found = service
            .check_compatibility("cand-1", &expected.mentor.id)
            .await
            .unwrap()
            .expect("ranked mentor should be compatible");
        assert_eq!(&found, expected);
    }
}

#[tokio::test]
async fn test_quick_recommendations_skill_order() {
    let service = service_with(generate_pool(150));

    let picks = service
        .quick_recommendations(&["kubernetes", "sql"], 5)
        .await
        .unwrap();

    assert_eq!(picks.len(), 5);
    assert!(picks.iter().all(|m| m.has_capacity()));

    let scores: Vec<f64> = picks
        .iter()
        .map(|m| academy_match::match_skills(&["kubernetes", "sql"], &m.specializations).score)
        .collect();
    for pair in scores.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[tokio::test]
async fn test_unknown_candidate_yields_no_matches() {
    let service = service_with(generate_pool(20));
    let matches = service.find_mentor_matches("nobody", 10).await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_bundled_fixtures() {
    let store = InMemoryProfileStore::from_json_file("config/fixtures.json").unwrap();
    let service = MentorMatchingService::new(Arc::new(store), Matcher::default());

    let matches = service.find_mentor_matches("cand-001", 10).await.unwrap();
    let ids: Vec<&str> = matches.iter().map(|m| m.mentor.id.as_str()).collect();

    // mentor-002 is full and mentor-005 is not accepting
    assert!(!ids.contains(&"mentor-002"));
    assert!(!ids.contains(&"mentor-005"));
    assert_eq!(ids[0], "mentor-001");
    assert!(matches[0].match_reasons.iter().any(|r| r.starts_with("Strong skill match")));
}

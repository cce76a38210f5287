// Criterion benchmarks for Academy Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use academy_match::core::{match_skills, Matcher};
use academy_match::models::{CandidateSkillProfile, MentorProfile};

const SPECIALIZATIONS: &[&str] = &[
    "React", "Node.js", "Python", "Machine Learning", "Figma", "Product Management",
    "Public Speaking", "Kubernetes", "Financial Modeling", "SEO",
];

fn create_mentor(id: usize) -> MentorProfile {
    MentorProfile {
        id: format!("mentor-{}", id),
        full_name: None,
        specializations: (0..3)
            .map(|k| SPECIALIZATIONS[(id + k * 7) % SPECIALIZATIONS.len()].to_string())
            .collect(),
        industry: if id % 2 == 0 { "Software" } else { "Finance" }.to_string(),
        years_experience: (id % 30) as i32,
        max_mentees: 5,
        current_mentees: (id % 5) as i32,
        is_accepting_mentees: true,
        avg_rating: Some((id % 50) as f64 / 10.0),
        total_observations: (id % 40) as i32,
        total_endorsements: (id % 12) as i32,
    }
}

fn create_candidate() -> CandidateSkillProfile {
    CandidateSkillProfile {
        skills: vec![
            "react".to_string(),
            "typescript".to_string(),
            "python".to_string(),
            "public speaking".to_string(),
        ],
        industry: Some("Software".to_string()),
    }
}

fn bench_skill_matching(c: &mut Criterion) {
    let candidate = create_candidate();
    let specializations = vec!["Senior React Developer".to_string(), "Node.js".to_string()];

    c.bench_function("match_skills", |b| {
        b.iter(|| match_skills(black_box(&candidate.skills), black_box(&specializations)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let candidate = create_candidate();

    let mut group = c.benchmark_group("matching");

    for mentor_count in [10, 50, 100, 500, 1000].iter() {
        let mentors: Vec<MentorProfile> = (0..*mentor_count).map(create_mentor).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(mentor_count),
            mentor_count,
            |b, _| {
                b.iter(|| matcher.find_matches(black_box(&candidate), black_box(mentors.clone()), 10));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_skill_matching, bench_matching);
criterion_main!(benches);

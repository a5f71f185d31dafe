// Criterion benchmarks for Relief Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use relief_match::core::{availability_overlap, word_overlap_similarity, Matcher};
use relief_match::models::{Availability, Requester, Skill, TaskRequest, Volunteer};
use std::collections::HashSet;

const DAYS: [&str; 7] = ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"];
const SLOTS: [&str; 3] = ["morning", "afternoon", "evening"];
const TASKS: [&str; 6] = [
    "Deliver water to shelter",
    "Sort donated clothing",
    "Clear storm debris",
    "Cook hot meals",
    "Replant garden area",
    "Drive supplies to clinic",
];

fn create_availability(seed: usize) -> Availability {
    DAYS.iter()
        .enumerate()
        .filter(|(i, _)| (i + seed) % 2 == 0)
        .map(|(i, day)| {
            let slots: HashSet<String> = SLOTS
                .iter()
                .take(1 + (i + seed) % SLOTS.len())
                .map(|s| s.to_string())
                .collect();
            (day.to_string(), slots)
        })
        .collect()
}

fn create_volunteer() -> Volunteer {
    Volunteer {
        id: "bench_volunteer".to_string(),
        availability: create_availability(0),
        tasks_willing: ["Cook meals", "Drive truck", "Certified first aid", "Clear debris"]
            .iter()
            .map(|s| Skill { title: s.to_string() })
            .collect(),
        has_specialty: None,
    }
}

fn create_requester(id: usize) -> Requester {
    Requester {
        id: id.to_string(),
        name: format!("Requester {}", id),
        address: String::new(),
        availability: create_availability(id),
        tasks_requested: (0..3)
            .map(|t| TaskRequest {
                title: TASKS[(id + t) % TASKS.len()].to_string(),
                urgency: ((id + t) % 10) as i32 + 1,
                specialty_required: (id + t) % 4 == 0,
                category: "relief".to_string(),
            })
            .collect(),
    }
}

fn bench_word_overlap(c: &mut Criterion) {
    c.bench_function("word_overlap_similarity", |b| {
        b.iter(|| {
            word_overlap_similarity(
                black_box("Certified first aid responder"),
                black_box("Provide first aid at shelter"),
            )
        });
    });
}

fn bench_availability_overlap(c: &mut Criterion) {
    let volunteer = create_availability(0);
    let requester = create_availability(2);

    c.bench_function("availability_overlap", |b| {
        b.iter(|| availability_overlap(black_box(&volunteer), black_box(&requester)));
    });
}

fn bench_matching(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
    let matcher = Matcher::with_defaults();
    let volunteer = create_volunteer();

    let mut group = c.benchmark_group("matching");

    for requester_count in [10, 50, 100, 500].iter() {
        let requesters: Vec<Requester> = (0..*requester_count).map(create_requester).collect();

        group.bench_with_input(
            BenchmarkId::new("match_requester_tasks", requester_count),
            requester_count,
            |b, _| {
                b.iter(|| {
                    runtime.block_on(matcher.match_requester_tasks(
                        black_box(&volunteer),
                        black_box(&requesters),
                    ))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_word_overlap,
    bench_availability_overlap,
    bench_matching
);

criterion_main!(benches);

// benches/benchmarks.rs - Performance benchmarks (criterion)
//
// Hot paths that run per keystroke in a richer front end:
//   1. Answer scoring on short and long drafts
//   2. Practice catalog filtering
//   3. A full scripted interview

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use interviewmate::catalog::{
    filter, mock_questions, practice_questions, Difficulty, Domain, Scope, Selection,
};
use interviewmate::interview::ScriptedInterview;
use interviewmate::mock::evaluate;

// ─── Evaluator ──────────────────────────────────────────────────────────────

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let catalog = mock_questions();
    let question = &catalog[2];
    let short = "cache eviction, for example LRU".to_string();
    let long = format!(
        "{} consistency models, for instance quorum reads and hinted handoff",
        "partitioning replication failover ".repeat(200)
    );

    group.bench_function("short_answer", |b| {
        b.iter(|| evaluate(black_box(&short), black_box(question)))
    });
    group.bench_function("long_answer", |b| {
        b.iter(|| evaluate(black_box(&long), black_box(question)))
    });
    group.finish();
}

// ─── Catalog ────────────────────────────────────────────────────────────────

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");
    let all = practice_questions();

    group.bench_function("no_criteria", |b| {
        b.iter(|| filter(black_box(&all), "", Scope::All, Scope::All))
    });
    group.bench_function("search_and_scopes", |b| {
        b.iter(|| {
            filter(
                black_box(&all),
                black_box("design"),
                Scope::Only(Domain::SystemDesign),
                Scope::Only(Difficulty::Hard),
            )
        })
    });
    group.finish();
}

// ─── Interview ──────────────────────────────────────────────────────────────

fn bench_interview(c: &mut Criterion) {
    let selection = Selection::new(Domain::WebDev, Difficulty::Medium);
    c.bench_function("interview_full_run", |b| {
        b.iter(|| {
            let mut iv = ScriptedInterview::start(selection, 5);
            for _ in 0..6 {
                let _ = iv.submit_answer(black_box("an answer"));
            }
            iv
        })
    });
}

// ─── Main ───────────────────────────────────────────────────────────────────

criterion_group!(benches, bench_evaluate, bench_filter, bench_interview);
criterion_main!(benches);

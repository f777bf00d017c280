//! Benchmarks for the derived task list view.
//!
//! These benchmarks measure filtering, date grouping and deadline
//! classification over a populated store.

use chrono::Duration;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use todo_tui::state::derived::{grouped_tasks, DeadlineStatus};
use todo_tui::store::{Filter, TaskStore};
use todo_tui::utils::datetime::parse_deadline;

fn populated_store(size: i64) -> TaskStore {
    let mut store = TaskStore::new();
    let start = parse_deadline("2024-01-01T00:00").unwrap_or_default();
    let now = start;
    for i in 0..size {
        let deadline = (start + Duration::hours(i * 7)).format("%Y-%m-%dT%H:%M");
        let id = store.add_task(format!("task {}", i), deadline.to_string());
        if i % 3 == 0 {
            store.toggle_complete(id, now);
        }
    }
    store
}

fn bench_grouped_tasks(c: &mut Criterion) {
    let store = populated_store(500);
    c.bench_function("grouped_tasks_all_500", |b| {
        b.iter(|| grouped_tasks(black_box(store.tasks()), Filter::All, "%Y-%m-%d").len())
    });
    c.bench_function("grouped_tasks_active_500", |b| {
        b.iter(|| grouped_tasks(black_box(store.tasks()), Filter::Active, "%Y-%m-%d").len())
    });
}

fn bench_classify(c: &mut Criterion) {
    let store = populated_store(500);
    let now = parse_deadline("2024-02-01T12:00").unwrap_or_default();
    c.bench_function("classify_500", |b| {
        b.iter(|| {
            store
                .tasks()
                .iter()
                .map(|task| DeadlineStatus::classify(black_box(task.deadline.as_deref()), now))
                .filter(|status| *status == DeadlineStatus::Overdue)
                .count()
        })
    });
}

criterion_group!(benches, bench_grouped_tasks, bench_classify);
criterion_main!(benches);

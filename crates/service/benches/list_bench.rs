use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::todo::{
    domain::NewTodoPayload,
    query::ListTodosParams,
    repository::mock::InMemoryTodoRepository,
    TodoService,
};

fn bench_list(c: &mut Criterion) {
    let repo = Arc::new(InMemoryTodoRepository::default());
    let svc = TodoService::new(repo.clone());

    // pre-create todos outside of the benchmark using a tokio runtime
    let rt = tokio::runtime::Runtime::new().unwrap();
    for i in 0..1_000 {
        let payload = NewTodoPayload {
            owner: Some(if i % 7 == 0 { format!("OHMNET-{i}") } else { format!("owner-{i}") }),
            status: Some(serde_json::Value::Bool(i % 2 == 0)),
            category: Some(format!("category-{}", i % 13)),
            body: Some(format!("body {i}")),
        };
        rt.block_on(svc.create(payload)).unwrap();
    }

    let filtered = ListTodosParams { owner: Some("ohm".into()), sortby: Some("category".into()), sortorder: Some("desc".into()) };
    c.bench_function("todo_list_owner_filter_sorted", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.list(&filtered)).unwrap();
        });
    });

    let all = ListTodosParams::default();
    c.bench_function("todo_list_all_default_sort", |b| {
        b.iter(|| {
            let _ = rt.block_on(svc.list(&all)).unwrap();
        });
    });
}

criterion_group!(benches, bench_list);
criterion_main!(benches);

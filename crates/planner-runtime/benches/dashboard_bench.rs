use criterion::{black_box, criterion_group, criterion_main, Criterion};
use planner_core::{CampsField, FieldKey, SortKey, EVENTS};
use planner_runtime::{reduce, Action, AppState, Dashboard};

fn bench_recompute(c: &mut Criterion) {
    let state = AppState::default();
    c.bench_function("compute_all 5 events", |b| {
        b.iter(|| {
            black_box(planner_econ::compute_all(
                &EVENTS,
                &state.inputs,
                &state.difficulties,
                state.sort,
            ))
        })
    });
    c.bench_function("edit + rebuild dashboard", |b| {
        b.iter(|| {
            let next = reduce(
                &state,
                Action::EditField {
                    key: FieldKey::camps(CampsField::Students),
                    text: black_box("$1,250").to_string(),
                },
            )
            .and_then(|s| reduce(&s, Action::Sort(SortKey::ProfitPerPerson)));
            if let Ok(next) = next {
                black_box(Dashboard::build(&next).table());
            }
        })
    });
}

criterion_group!(benches, bench_recompute);
criterion_main!(benches);

//! Benchmarks for the learning hot path: reward scoring and table updates

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use pathway_core::{CatalogSpec, CourseId, CurriculumGraph, Grade, StudentProfile, StudentState, TrainingConfig};
use pathway_rl::{
    ActionValueTable, CandidateAction, RewardModel, StateKey, SyntheticStudentPool, Trainer,
};

fn reference_state() -> StudentState {
    StudentState::from_profile(StudentProfile {
        id: 1,
        completed_courses: vec![
            CourseId::from("IntroProgramming"),
            CourseId::from("MathBasics"),
        ],
        grades: [
            (CourseId::from("IntroProgramming"), Grade::A),
            (CourseId::from("MathBasics"), Grade::B),
        ]
        .into_iter()
        .collect(),
        gpa: 3.5,
        term: 2,
        interests: vec!["AI".to_string()],
    })
    .unwrap()
}

fn bench_reward_scoring(c: &mut Criterion) {
    let graph = CurriculumGraph::from_spec(&CatalogSpec::default_catalog()).unwrap();
    let model = RewardModel::new(&graph);
    let state = reference_state();
    let action = CandidateAction::new(vec![
        CourseId::from("OOP"),
        CourseId::from("WebDevelopment"),
        CourseId::from("DatabaseSystems"),
    ]);

    c.bench_function("reward_score_three_courses", |b| {
        b.iter(|| model.score(black_box(&state), black_box(&action)));
    });
}

fn bench_table_update(c: &mut Criterion) {
    let state = reference_state();
    let state_key = StateKey::from_state(&state);
    let action_key = CandidateAction::new(vec![CourseId::from("OOP")]).key();
    let mut table = ActionValueTable::new();

    c.bench_function("table_update_existing_entry", |b| {
        b.iter(|| {
            table.update(
                black_box(state_key.clone()),
                black_box(action_key.clone()),
                3.0,
                0.5,
                0.9,
            )
        });
    });
}

fn bench_training_run(c: &mut Criterion) {
    let graph = CurriculumGraph::from_spec(&CatalogSpec::default_catalog()).unwrap();
    let config = TrainingConfig {
        episodes: 100,
        ..Default::default()
    };

    c.bench_function("training_run_100_episodes", |b| {
        b.iter(|| {
            let mut pool = SyntheticStudentPool::new(&graph, 42).unwrap();
            let mut table = ActionValueTable::new();
            let mut trainer = Trainer::new(&graph, config.clone()).unwrap();
            trainer.run(&mut pool, &mut table).unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_reward_scoring,
    bench_table_update,
    bench_training_run
);
criterion_main!(benches);

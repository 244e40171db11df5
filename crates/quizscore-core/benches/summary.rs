use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizscore_core::highscore::{Highscore, QuizScore};
use quizscore_core::model::{Question, QuestionResult};
use quizscore_core::result::QuizResult;

fn make_result(answers: usize, categories: usize) -> QuizResult {
    let mut result = QuizResult::new("bench", 0).unwrap();
    let questions: Vec<Arc<Question>> = (0..categories)
        .map(|c| {
            Arc::new(
                Question::new(
                    format!("Question {c}"),
                    vec!["right".into(), "wrong".into()],
                    "right",
                    format!("Chapter {c}"),
                )
                .unwrap(),
            )
        })
        .collect();
    for i in 0..answers {
        let question = Arc::clone(&questions[i % categories]);
        let choice = if i % 3 == 0 { "wrong" } else { "right" };
        result.add_question_result(QuestionResult::new(question, choice).unwrap());
    }
    result
}

fn make_highscore(players: usize) -> Highscore {
    let mut highscore = Highscore::new();
    for i in 0..players {
        let points = ((i * 7919) % 1000) as i64;
        highscore.add_quiz_score(QuizScore::new(format!("player{i}"), points).unwrap());
    }
    highscore
}

fn bench_generate_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_summary");

    group.bench_function("answers=20,categories=5", |b| {
        let result = make_result(20, 5);
        b.iter(|| black_box(&result).generate_summary())
    });

    group.bench_function("answers=1000,categories=50", |b| {
        let result = make_result(1000, 50);
        b.iter(|| black_box(&result).generate_summary())
    });

    group.finish();
}

fn bench_highscore(c: &mut Criterion) {
    let mut group = c.benchmark_group("highscore");

    group.bench_function("top_n players=1000,n=10", |b| {
        let highscore = make_highscore(1000);
        b.iter(|| {
            let mut hs = highscore.clone();
            hs.top_n(black_box(10));
            hs
        })
    });

    group.bench_function("json_roundtrip players=100", |b| {
        let json = make_highscore(100).to_json();
        b.iter(|| {
            let mut hs = Highscore::new();
            hs.from_json(black_box(&json)).unwrap();
            hs.to_json()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generate_summary, bench_highscore);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizscore_core::model::{Answer, AnswerSet, Choice, Question, Quiz};
use quizscore_core::scorer::{DuplicatePolicy, QuizScorer};

fn make_quiz(questions: usize) -> Quiz {
    let questions = (0..questions)
        .map(|i| {
            Question::new(
                format!("q{i}"),
                format!("Question {i}"),
                vec![
                    Choice::new("a", "A", true),
                    Choice::new("b", "B", i % 2 == 0),
                    Choice::new("c", "C", false),
                    Choice::new("d", "D", false),
                ],
            )
        })
        .collect();
    Quiz::new("bench", "Benchmark", questions)
}

/// Answers every other question correctly, plus a few stray answers.
fn make_answers(quiz: &Quiz) -> AnswerSet {
    let mut set = AnswerSet::new(&quiz.id);
    for (i, q) in quiz.questions.iter().enumerate() {
        if i % 2 == 0 {
            set.push(Answer::new(q.id.clone(), q.correct_choices()));
        } else {
            set.push(Answer::new(q.id.clone(), ["d"]));
        }
    }
    for i in 0..5 {
        set.push(Answer::new(format!("stale{i}"), ["a"]));
    }
    set
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let scorer = QuizScorer::default();

    for size in [10usize, 100, 1000] {
        let quiz = make_quiz(size);
        let answers = make_answers(&quiz);
        group.bench_function(format!("{size}_questions"), |b| {
            b.iter(|| scorer.score(black_box(&quiz), black_box(&answers)))
        });
    }

    group.finish();
}

fn bench_evaluate_reject(c: &mut Criterion) {
    let scorer = QuizScorer::new(DuplicatePolicy::Reject);
    let quiz = make_quiz(100);
    let answers = make_answers(&quiz);

    c.bench_function("evaluate_reject_100", |b| {
        b.iter(|| scorer.evaluate(black_box(&quiz), black_box(&answers)))
    });
}

criterion_group!(benches, bench_score, bench_evaluate_reject);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_toml_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("toml_parsing");

    // Generate quiz TOML strings of various sizes
    let small_toml = generate_quiz_toml(5);
    let medium_toml = generate_quiz_toml(50);
    let large_toml = generate_quiz_toml(200);

    group.bench_function("5_questions", |b| {
        b.iter(|| {
            quizscore_core::parser::parse_quiz_str(
                black_box(&small_toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.bench_function("50_questions", |b| {
        b.iter(|| {
            quizscore_core::parser::parse_quiz_str(
                black_box(&medium_toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.bench_function("200_questions", |b| {
        b.iter(|| {
            quizscore_core::parser::parse_quiz_str(
                black_box(&large_toml),
                black_box("bench.toml".as_ref()),
            )
        })
    });

    group.finish();
}

fn bench_answer_parsing(c: &mut Criterion) {
    let answers: Vec<String> = (0..200)
        .map(|i| format!(r#"{{"question_id": "q{i}", "choices": ["a", "b"]}}"#))
        .collect();
    let json = format!(
        r#"{{"quiz_id": "bench", "answers": [{}]}}"#,
        answers.join(",")
    );

    c.bench_function("answers_json_200", |b| {
        b.iter(|| quizscore_core::parser::parse_answer_set_str(black_box(&json)))
    });
}

fn generate_quiz_toml(n: usize) -> String {
    let mut s = String::new();
    s.push_str(
        r#"[quiz]
id = "bench"
title = "Benchmark"
"#,
    );
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[questions]]
id = "q{i}"
text = "Question {i}"
choices = [
    {{ id = "a", text = "A", correct = true }},
    {{ id = "b", text = "B" }},
    {{ id = "c", text = "C" }},
]
"#
        ));
    }
    s
}

criterion_group!(benches, bench_toml_parsing, bench_answer_parsing);
criterion_main!(benches);

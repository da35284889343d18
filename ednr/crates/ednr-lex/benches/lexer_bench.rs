//! Lexer Benchmarks
//!
//! Measures raw tokenizing throughput.
//! Run with: `cargo bench --package ednr-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use ednr_lex::{tokenize_with, Lexer, LexerOptions};
use ednr_util::Handler;

const CONFIG_MAP: &str = r#"
{:server {:host "localhost"
          :port 8080
          :tls? false}
 :db #db/spec {:url "jdbc:postgresql://localhost/app"
               :pool-size 16}
 :features #{:search :export :audit}
 :limits [1.5M 2r1010 16rFF -0.25 1e10]
 ; comments and discards
 #_ :disabled
 :started #inst "2024-01-01T00:00:00Z"
 :chars [\a \newline λ \o101]}
"#;

const CLOJURE_SOURCE: &str = r#"
(ns app.core
  (:require [clojure.string :as str]))

(defn fib
  "Returns the nth Fibonacci number."
  [n]
  (if (<= n 1)
    n
    (+ (fib (- n 1)) (fib (- n 2)))))

(defn greet [{:keys [name title] :or {title "friend"}}]
  (str/join " " ["Hello," title name "!"]))
"#;

fn lexer_token_count(source: &str) -> usize {
    let handler = Handler::new();
    Lexer::new(source, &handler).count()
}

fn bench_lexer_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    group.throughput(Throughput::Bytes(CONFIG_MAP.len() as u64));
    group.bench_function("config_map", |b| {
        b.iter(|| lexer_token_count(black_box(CONFIG_MAP)))
    });

    group.throughput(Throughput::Bytes(CLOJURE_SOURCE.len() as u64));
    group.bench_function("clojure_source", |b| {
        b.iter(|| lexer_token_count(black_box(CLOJURE_SOURCE)))
    });

    group.finish();
}

fn bench_lexer_large(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_large");

    let source = CLOJURE_SOURCE.repeat(200);
    group.throughput(Throughput::Bytes(source.len() as u64));
    group.bench_function("repeated_source", |b| {
        b.iter(|| lexer_token_count(black_box(&source)))
    });

    let numbers: Vec<String> = (0..10_000).map(|i| i.to_string()).collect();
    let vector = format!("[{}]", numbers.join(" "));
    group.throughput(Throughput::Bytes(vector.len() as u64));
    group.bench_function("number_vector", |b| {
        b.iter(|| lexer_token_count(black_box(&vector)))
    });

    group.finish();
}

fn bench_lexer_errors(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_errors");

    let source = "42abc :::k #(f %) \"open ".repeat(100);
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("with_diagnostics", |b| {
        b.iter(|| {
            let handler = Handler::new();
            tokenize_with(black_box(&source), &handler, LexerOptions::default()).len()
        })
    });

    group.bench_function("without_diagnostics", |b| {
        b.iter(|| {
            let handler = Handler::new();
            let options = LexerOptions::new().report_diagnostics(false);
            tokenize_with(black_box(&source), &handler, options).len()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_forms,
    bench_lexer_large,
    bench_lexer_errors
);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use newslens_core::analysis::{BiasLexicon, Taxonomy};
use newslens_core::sentiment::SentimentAnalyzer;
use newslens_core::{ExtractConfig, analyze, extract_article, preprocess_html};

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("../../tests/fixtures/{}", name)).unwrap()
}

fn bench_extract(c: &mut Criterion) {
    let politics = fixture("politics.html");
    let tech = fixture("tech.html");
    let config = ExtractConfig::default();

    let mut group = c.benchmark_group("extract");

    group.bench_with_input(BenchmarkId::new("article_container", "politics"), &politics, |b, html| {
        b.iter(|| extract_article(black_box(html), None, &config))
    });

    group.bench_with_input(BenchmarkId::new("main_container", "tech"), &tech, |b, html| {
        b.iter(|| extract_article(black_box(html), None, &config))
    });

    group.finish();
}

fn bench_preprocess(c: &mut Criterion) {
    let html = fixture("politics.html");
    let config = Default::default();

    c.bench_function("preprocess", |b| b.iter(|| preprocess_html(black_box(&html), &config)));
}

fn bench_topic_classification(c: &mut Criterion) {
    let html = fixture("politics.html");
    let (document, _) = analyze(&html).unwrap();
    let taxonomy = Taxonomy::default();

    c.bench_function("topic_classification", |b| {
        b.iter(|| taxonomy.classify(black_box(&document.body)))
    });
}

fn bench_bias_detection(c: &mut Criterion) {
    let html = fixture("politics.html");
    let (document, _) = analyze(&html).unwrap();
    let lexicon = BiasLexicon::default();

    c.bench_function("bias_detection", |b| b.iter(|| lexicon.detect(black_box(&document.body))));
}

fn bench_sentiment(c: &mut Criterion) {
    let html = fixture("politics.html");
    let (document, _) = analyze(&html).unwrap();
    let analyzer = SentimentAnalyzer::default();

    c.bench_function("sentiment", |b| b.iter(|| analyzer.analyze(black_box(&document.body))));
}

fn bench_full_analysis(c: &mut Criterion) {
    let html = fixture("politics.html");

    c.bench_function("full_analysis", |b| b.iter(|| analyze(black_box(&html))));
}

criterion_group!(
    benches,
    bench_extract,
    bench_preprocess,
    bench_topic_classification,
    bench_bias_detection,
    bench_sentiment,
    bench_full_analysis
);
criterion_main!(benches);

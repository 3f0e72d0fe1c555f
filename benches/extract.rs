// benches/extract.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;

use bee_scrape::puzzle;
use bee_scrape::specs;

const WORDS: [&str; 20] = [
    "mate", "meat", "team", "tame", "mast", "math", "mesh", "term", "stem",
    "therm", "meter", "smart", "steam", "tamer", "harms", "smear", "master",
    "stream", "hamster", "hamsters",
];

// Pad fixtures up to real page size so the scan cost is representative.
fn chrome(n: usize) -> String {
    "<div class=\"ad-slot\"><p>advertisement</p></div>\n".repeat(n)
}

fn modern_doc() -> String {
    let mut lis = String::new();
    for w in WORDS {
        lis.push_str(&format!(
            r#"<li><div class="flex-list-item">{w} <a href="#">↗</a></div></li>"#
        ));
    }
    format!(
        "<html><head><script>var x = 1;</script></head><body>{}<div id=\"main-answer-list\"><ul>{}</ul></div>{}</body></html>",
        chrome(400),
        lis,
        chrome(400)
    )
}

fn legacy_doc() -> String {
    let quoted: Vec<String> = WORDS.iter().map(|w| format!("\"{w}\"")).collect();
    format!(
        "<html><head>{}<script>var docs_json = {{\"roots\":{{\"words\":[[{}],[{}]],\"x\":[1,2]}}}};</script></head><body>{}</body></html>",
        "<script>var filler = [1,2,3];</script>".repeat(50),
        quoted[..10].join(","),
        quoted[10..].join(","),
        chrome(800)
    )
}

fn bench_extract(c: &mut Criterion) {
    let modern = modern_doc();
    let legacy = legacy_doc();
    let date = NaiveDate::from_ymd_opt(2021, 5, 4).unwrap();

    c.bench_function("modern_extract", |b| {
        b.iter(|| {
            let bundle = specs::modern::extract(black_box(&modern));
            black_box(bundle.map(|b| b.answers.len()))
        })
    });

    c.bench_function("legacy_extract", |b| {
        b.iter(|| {
            let bundle = specs::legacy::extract(black_box(&legacy));
            black_box(bundle.map(|b| b.answers.len()))
        })
    });

    c.bench_function("build_record_modern", |b| {
        b.iter(|| {
            let rec = puzzle::build_record(black_box(&modern), date);
            black_box(rec.map(|r| r.answers.len()))
        })
    });

    c.bench_function("build_record_legacy", |b| {
        b.iter(|| {
            let rec = puzzle::build_record(black_box(&legacy), date);
            black_box(rec.map(|r| r.answers.len()))
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);

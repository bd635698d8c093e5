use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vnlocale_core::prelude::*;
use vnlocale_core::ranking::get_match_ranking;
use vnlocale_core::text::to_lower_case_and_remove_accents;

// ---------------------------------------------------------------------------
// Folding
// ---------------------------------------------------------------------------

fn bench_fold(c: &mut Criterion) {
    let accented = "Phường Bến Nghé, Quận 1, Thành phố Hồ Chí Minh";
    let ascii = "phuong ben nghe, quan 1, thanh pho ho chi minh";

    c.bench_function("fold_accented_detail", |b| {
        b.iter(|| to_lower_case_and_remove_accents(black_box(accented)))
    });
    c.bench_function("fold_ascii_detail", |b| {
        b.iter(|| to_lower_case_and_remove_accents(black_box(ascii)))
    });
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

fn bench_ranking(c: &mut Criterion) {
    c.bench_function("rank_word_starts_with", |b| {
        b.iter(|| get_match_ranking(black_box("Thanh pho Thu Duc"), black_box("thu"), false))
    });
    c.bench_function("rank_closeness", |b| {
        b.iter(|| get_match_ranking(black_box("Phuong Hang Trong"), black_box("phtr"), false))
    });
}

// ---------------------------------------------------------------------------
// Facade
// ---------------------------------------------------------------------------

fn bench_locale(c: &mut Criterion) {
    let dataset = Dataset::bundled().expect("bundled dataset");

    c.bench_function("build_locale", |b| {
        b.iter(|| VietnamLocale::from_dataset(black_box(dataset.clone())).unwrap())
    });

    let locale = VietnamLocale::new().expect("bundled locale");
    c.bench_function("search_ward_unscoped", |b| {
        b.iter(|| locale.search_ward(black_box("phuong 3"), None, None).len())
    });
    c.bench_function("search_ward_scoped", |b| {
        b.iter(|| {
            locale
                .search_ward(black_box("phuong"), Some("770"), Some("79"))
                .len()
        })
    });
    c.bench_function("search_province", |b| {
        b.iter(|| locale.search_province(black_box("Hồ Chí Minh")).len())
    });
}

criterion_group!(benches, bench_fold, bench_ranking, bench_locale);
criterion_main!(benches);

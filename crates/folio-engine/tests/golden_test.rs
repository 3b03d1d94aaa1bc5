//! Golden recommendation cases over the shared library dataset.

use folio_core::errors::FolioErrorCode;
use folio_core::models::{CatalogRecord, RatingRecord};
use folio_core::Strategy;
use folio_engine::{RecommendEngine, RecommendRequest};
use test_fixtures::{load_fixture, load_recommend_cases, RecommendCase, LIBRARY_CATALOG, LIBRARY_RATINGS};

const TOLERANCE: f64 = 1e-9;

fn library() -> (Vec<RatingRecord>, Vec<CatalogRecord>) {
    (load_fixture(LIBRARY_RATINGS), load_fixture(LIBRARY_CATALOG))
}

fn request(case: &RecommendCase) -> RecommendRequest {
    let strategy: Strategy = case
        .strategy
        .parse()
        .unwrap_or_else(|e| panic!("bad strategy in case: {e}"));
    RecommendRequest::new(case.seed.clone(), strategy)
        .with_top_n(case.top_n)
        .with_min_ratings(case.min_ratings)
        .with_min_support(case.min_support)
        .with_min_lift(case.min_lift)
}

#[test]
fn library_dataset_loads_into_records() {
    let (ratings, catalog) = library();
    assert_eq!(catalog.len(), 8);
    assert!(catalog.iter().all(|c| c.genre.is_some()));
    assert!(ratings.iter().any(|r| r.rating == 0));
}

#[test]
fn golden_recommend_cases() {
    let (ratings, catalog) = library();
    let engine = RecommendEngine::default();
    let cases = load_recommend_cases();
    assert!(cases.len() >= 8, "expected the full golden set, got {}", cases.len());

    for (name, case) in &cases {
        let result = engine.recommend(&ratings, &catalog, &request(case));

        if let Some(code) = &case.expected_error {
            let err = match result {
                Ok(recs) => panic!("{name}: expected {code}, got {} results", recs.len()),
                Err(e) => e,
            };
            assert_eq!(err.error_code(), code, "{name}: {err}");
            continue;
        }

        let recs = result.unwrap_or_else(|e| panic!("{name}: {e}"));
        let got: Vec<&str> = recs.iter().map(|r| r.title.as_str()).collect();
        let want: Vec<&str> = case.expected.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(got, want, "{name}: {}", case.description);

        for (rec, expected) in recs.iter().zip(&case.expected) {
            let score = rec.metric.score();
            assert!(
                (score - expected.score).abs() < TOLERANCE,
                "{name}: {} scored {score}, expected {}",
                rec.title,
                expected.score
            );
        }
        for (i, rec) in recs.iter().enumerate() {
            assert_eq!(rec.rank, i + 1, "{name}: ranks must be consecutive");
        }
    }
}

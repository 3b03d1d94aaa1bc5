use folio_core::errors::FolioErrorCode;
use folio_core::models::{CatalogRecord, RatingRecord};
use folio_engine::content::{cosine_similarity, CountVectorizer};
use folio_engine::{recommend, Recommendation};
use proptest::prelude::*;

const TITLES: [&str; 6] = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon", "Zeta"];
const AUTHORS: [&str; 3] = ["ann author", "bob writer", "cat scribe"];
const GENRES: [&str; 3] = ["fantasy", "science fiction", "romance"];

fn catalog() -> Vec<CatalogRecord> {
    TITLES
        .iter()
        .enumerate()
        .map(|(i, title)| {
            CatalogRecord::new(format!("isbn{i}"), *title, AUTHORS[i % 3]).with_genre(GENRES[i % 3])
        })
        .collect()
}

fn ratings_strategy() -> impl Strategy<Value = Vec<RatingRecord>> {
    prop::collection::vec((0u8..8, 0usize..6, 0u8..=10), 1..80).prop_map(|rows| {
        rows.into_iter()
            .map(|(u, i, r)| RatingRecord::new(format!("u{u}"), format!("isbn{i}"), r))
            .collect()
    })
}

/// Comparable form of a query result; NaN scores compare by bit pattern.
fn outcome(result: Result<Vec<Recommendation>, folio_core::RecommendError>) -> Result<Vec<(String, u64)>, &'static str> {
    result
        .map(|recs| {
            recs.into_iter()
                .map(|r| (r.title, r.metric.score().to_bits()))
                .collect()
        })
        .map_err(|e| e.error_code())
}

proptest! {
    #[test]
    fn seed_never_appears_in_results(
        ratings in ratings_strategy(),
        seed in 0usize..6,
        tag in prop::sample::select(vec!["correlation", "association", "content"]),
    ) {
        let seed_title = TITLES[seed];
        if let Ok(recs) = recommend(&ratings, &catalog(), seed_title, tag, 10, 1.5, 1) {
            prop_assert!(recs.iter().all(|r| r.title != seed_title.to_lowercase()));
        }
    }

    #[test]
    fn row_order_does_not_change_results(
        ratings in ratings_strategy(),
        seed in 0usize..6,
        tag in prop::sample::select(vec!["correlation", "association", "content"]),
    ) {
        let mut reversed = ratings.clone();
        reversed.reverse();
        let forward = outcome(recommend(&ratings, &catalog(), TITLES[seed], tag, 10, 1.5, 1));
        let backward = outcome(recommend(&reversed, &catalog(), TITLES[seed], tag, 10, 1.5, 1));
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn raising_min_lift_never_grows_association_results(
        ratings in ratings_strategy(),
        seed in 0usize..6,
        low in 1.01f64..3.0,
        bump in 0.0f64..3.0,
    ) {
        let seed_title = TITLES[seed];
        let loose = recommend(&ratings, &catalog(), seed_title, "association", 10, low, 1);
        let strict = recommend(&ratings, &catalog(), seed_title, "association", 10, low + bump, 1);
        if let (Ok(loose), Ok(strict)) = (loose, strict) {
            prop_assert!(strict.len() <= loose.len());
            for rec in &strict {
                prop_assert!(rec.metric.score() >= low + bump);
                prop_assert!(loose.iter().any(|l| l.title == rec.title));
            }
        }
    }

    #[test]
    fn cosine_is_symmetric_and_one_on_self(
        a in "[a-z]{2,6}( [a-z]{2,6}){0,4}",
        b in "[a-z]{2,6}( [a-z]{2,6}){0,4}",
    ) {
        let (_, v) = CountVectorizer::fit_transform(&[a, b]);
        prop_assert_eq!(cosine_similarity(&v[0], &v[0]), 1.0);
        prop_assert_eq!(cosine_similarity(&v[0], &v[1]), cosine_similarity(&v[1], &v[0]));
        let s = cosine_similarity(&v[0], &v[1]);
        prop_assert!((0.0..=1.0).contains(&s));
    }
}

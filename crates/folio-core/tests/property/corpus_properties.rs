use folio_core::models::{fold, CatalogRecord, Corpus, RatingRecord};
use proptest::prelude::*;

fn catalog() -> Vec<CatalogRecord> {
    (0..5)
        .map(|i| CatalogRecord::new(format!("isbn{i}"), format!("Book {i}"), "Some Author"))
        .collect()
}

proptest! {
    #[test]
    fn corpus_never_holds_implicit_ratings(
        rows in prop::collection::vec((0u8..6, 0u8..7, 0u8..=10), 0..60)
    ) {
        let ratings: Vec<RatingRecord> = rows
            .iter()
            .map(|(u, i, r)| RatingRecord::new(format!("u{u}"), format!("isbn{i}"), *r))
            .collect();
        let corpus = Corpus::from_records(&ratings, &catalog()).unwrap();

        // isbn5 and isbn6 have no catalog row.
        let expected = rows.iter().filter(|(_, i, r)| *r != 0 && *i < 5).count();
        prop_assert_eq!(corpus.len(), expected);
        prop_assert!(corpus.rows().iter().all(|row| (1..=10).contains(&row.rating)));
        prop_assert!(corpus.rows().iter().all(|row| row.title == fold(&row.title)));
    }

    #[test]
    fn fold_is_idempotent(s in "[A-Za-z0-9 ,.()'-]{0,40}") {
        let once = fold(&s);
        prop_assert_eq!(fold(&once), once.clone());
    }
}

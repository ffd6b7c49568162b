//! Free-text product matching.
//!
//! A product matches when any of its keywords occurs as a contiguous substring
//! of the lower-cased query. Matching is not word-boundary aware: the keyword
//! "taur" matches a query containing "restaurant".

use crate::keywords::fold_case;
use crate::product::Product;

/// Return every product whose keywords intersect `query`, in catalogue order.
///
/// Returns references into `products`. An empty catalogue or a query that
/// matches nothing yields an empty vec.
pub fn find_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let lowered = fold_case(query);
    products
        .iter()
        .filter(|product| matches_query(product, &lowered))
        .collect()
}

/// Check a single product against an already lower-cased query.
///
/// Stops at the first keyword found in the query.
pub fn matches_query(product: &Product, lowered_query: &str) -> bool {
    product
        .keywords()
        .iter()
        .any(|keyword| lowered_query.contains(keyword.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::extract_keywords;
    use crate::product::Links;

    fn product(name: &str) -> Product {
        Product::try_new(name, Links::new()).unwrap()
    }

    fn names<'a>(found: &[&'a Product]) -> Vec<&'a str> {
        found.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn matches_keyword_anywhere_in_query() {
        let mut links = Links::new();
        links.insert("Amazon", "a.co/1");
        let catalogue = vec![Product::try_new("Belajar Python", links).unwrap()];

        let found = find_products(&catalogue, "saya ingin belajar Python dasar");
        assert_eq!(found.len(), 1);
        assert!(std::ptr::eq(found[0], &catalogue[0]));
    }

    #[test]
    fn unrelated_query_matches_nothing() {
        let catalogue = vec![product("Hacking 101")];
        assert!(find_products(&catalogue, "resep masak").is_empty());
    }

    #[test]
    fn empty_catalogue_matches_nothing() {
        assert!(find_products(&[], "python").is_empty());
    }

    #[test]
    fn empty_query_matches_nothing() {
        let catalogue = vec![product("Belajar Python"), product("Hacking 101")];
        assert!(find_products(&catalogue, "").is_empty());
    }

    #[test]
    fn substring_match_ignores_word_boundaries() {
        let catalogue = vec![product("Minotaur Tales")];
        let found = find_products(&catalogue, "any restaurant nearby?");
        assert!(found.is_empty(), "neither 'minotaur' nor 'tales' occur");

        let catalogue = vec![product("Taur")];
        let found = find_products(&catalogue, "any RESTAURANT nearby?");
        assert_eq!(names(&found), vec!["Taur"]);
    }

    #[test]
    fn dotted_capital_i_matches_plain_query() {
        let catalogue = vec![product("İstanbul Rehberi")];
        assert_eq!(names(&find_products(&catalogue, "buku istanbul")), vec!["İstanbul Rehberi"]);
    }

    #[test]
    fn final_sigma_keyword_matches_inside_longer_word() {
        let catalogue = vec![product("ΟΔΟΣ")];
        assert_eq!(names(&find_products(&catalogue, "ΟΔΟΣΑ")), vec!["ΟΔΟΣ"]);
    }

    #[test]
    fn query_case_is_ignored() {
        let catalogue = vec![product("Ilmu Hacking")];
        assert_eq!(names(&find_products(&catalogue, "HACKING dong")), vec!["Ilmu Hacking"]);
    }

    #[test]
    fn results_follow_catalogue_order() {
        let catalogue = vec![
            product("Hacking 101"),
            product("Belajar Python"),
            product("Ilmu Hacking"),
        ];

        let found = find_products(&catalogue, "python hacking");
        assert_eq!(names(&found), vec!["Hacking 101", "Belajar Python", "Ilmu Hacking"]);
    }

    #[test]
    fn product_matches_once_even_with_many_hits() {
        let catalogue = vec![product("Python Python Python")];
        assert_eq!(find_products(&catalogue, "python").len(), 1);
    }

    #[test]
    fn repeated_calls_return_same_result() {
        let catalogue = vec![product("Belajar Python"), product("Hacking 101")];
        let first = names(&find_products(&catalogue, "belajar hacking"));
        let second = names(&find_products(&catalogue, "belajar hacking"));
        assert_eq!(first, second);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn catalogue_strategy() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec("[A-Za-z0-9]{1,8}( [A-Za-z0-9]{1,8}){0,3}", 0..12)
                .prop_map(|names| names.iter().map(|n| product(n)).collect())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: every match has a keyword contained in the lowered query.
            #[test]
            fn every_match_has_a_keyword_in_query(
                catalogue in catalogue_strategy(),
                query in "[A-Za-z0-9 ]{0,40}"
            ) {
                let lowered = fold_case(&query);
                for found in find_products(&catalogue, &query) {
                    let hit = extract_keywords(found.name())
                        .iter()
                        .any(|k| lowered.contains(k.as_str()));
                    prop_assert!(hit, "{} matched without a keyword hit", found.name());
                }
            }

            /// Property: every non-match has no keyword in the lowered query.
            #[test]
            fn non_matches_have_no_keyword_in_query(
                catalogue in catalogue_strategy(),
                query in "[A-Za-z0-9 ]{0,40}"
            ) {
                let found = find_products(&catalogue, &query);
                let lowered = fold_case(&query);
                for product in &catalogue {
                    let hit = extract_keywords(product.name())
                        .iter()
                        .any(|k| lowered.contains(k.as_str()));
                    let matched = found.iter().any(|f| std::ptr::eq(*f, product));
                    prop_assert_eq!(hit, matched);
                }
            }

            /// Property: the empty query never matches.
            #[test]
            fn empty_query_never_matches(catalogue in catalogue_strategy()) {
                prop_assert!(find_products(&catalogue, "").is_empty());
            }

            /// Property: matching is idempotent.
            #[test]
            fn matching_is_idempotent(
                catalogue in catalogue_strategy(),
                query in "[A-Za-z0-9 ]{0,40}"
            ) {
                let first: Vec<*const Product> = find_products(&catalogue, &query)
                    .into_iter()
                    .map(|p| p as *const Product)
                    .collect();
                let second: Vec<*const Product> = find_products(&catalogue, &query)
                    .into_iter()
                    .map(|p| p as *const Product)
                    .collect();
                prop_assert_eq!(first, second);
            }
        }
    }
}

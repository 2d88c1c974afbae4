//! Property-based tests for name parsing and pattern matching.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::base::strip_base;
    use crate::name::{normalize_name, parse_name};
    use crate::pattern::Matcher;
    use proptest::prelude::*;

    const NO_BASES: &[&str] = &[];

    // ============================================================================
    // parse_name property tests
    // ============================================================================

    proptest! {
        /// Property: parse_name is total - no input panics or errors
        #[test]
        fn parse_name_never_panics(input in ".*", group_focus in any::<bool>()) {
            let _ = parse_name(&input, NO_BASES, group_focus);
        }

        /// Property: parse_name is deterministic (same input = same output)
        #[test]
        fn parse_name_is_deterministic(input in ".*") {
            let first = parse_name(&input, NO_BASES, false);
            let second = parse_name(&input, NO_BASES, false);
            prop_assert_eq!(first, second);
        }

        /// Property: a registered base prefix is always recognized and the
        /// remainder parses as it would on its own
        #[test]
        fn parse_name_strips_registered_base(suffix in "[a-zA-Z0-9_-]+/[a-zA-Z0-9_-]+") {
            let base = "https://github.com/";
            let bases = [base];
            let full = format!("{}{}", base, suffix);

            let with_base = parse_name(&full, &bases, false);
            let without = parse_name(&suffix, NO_BASES, false);

            prop_assert_eq!(with_base.base.as_deref(), Some(base));
            prop_assert_eq!(with_base.group, without.group);
            prop_assert_eq!(with_base.repository, without.repository);
        }

        /// Property: a simple group/repo slug always splits on the slash
        #[test]
        fn parse_name_splits_simple_slug(
            group in "[a-zA-Z0-9_-]{1,20}",
            repo in "[a-zA-Z0-9_-]{1,20}",
        ) {
            let parsed = parse_name(&format!("{}/{}", group, repo), NO_BASES, false);
            prop_assert_eq!(parsed.group.as_deref(), Some(group.as_str()));
            prop_assert_eq!(parsed.repository.as_deref(), Some(repo.as_str()));
            prop_assert_eq!(parsed.branch, None);
        }

        /// Property: a #branch suffix round-trips through the parser
        #[test]
        fn parse_name_extracts_branch_suffix(
            slug in "[a-zA-Z0-9_-]{1,20}/[a-zA-Z0-9_-]{1,20}",
            branch in "[a-zA-Z0-9_-]{1,20}",
        ) {
            let parsed = parse_name(&format!("{}#{}", slug, branch), NO_BASES, false);
            prop_assert_eq!(parsed.branch.as_deref(), Some(branch.as_str()));
        }

        /// Property: normalization is idempotent - normalizing a normalized
        /// key changes nothing
        #[test]
        fn normalize_name_is_idempotent(input in "[a-zA-Z0-9_-]{1,20}(/[a-zA-Z0-9_-]{1,20})?") {
            let once = normalize_name(&input, NO_BASES, false);
            let twice = normalize_name(&once, NO_BASES, false);
            prop_assert_eq!(once, twice);
        }

        /// Property: case-insensitive normalization equates case variants
        #[test]
        fn normalize_name_folds_case(input in "[a-zA-Z]{1,20}/[a-zA-Z]{1,20}") {
            let lower = normalize_name(&input.to_lowercase(), NO_BASES, false);
            let upper = normalize_name(&input.to_uppercase(), NO_BASES, false);
            prop_assert_eq!(lower, upper);
        }
    }

    // ============================================================================
    // strip_base property tests
    // ============================================================================

    proptest! {
        /// Property: stripping with an empty base set is the identity and
        /// never fires the callback
        #[test]
        fn strip_base_empty_bases_is_identity(input in ".*") {
            let mut count = 0usize;
            let stripped = strip_base(&input, NO_BASES, |_| count += 1);
            prop_assert_eq!(stripped.as_ref(), input.as_str());
            prop_assert_eq!(count, 0);
        }

        /// Property: a stripped base re-prefixed reproduces the original name
        #[test]
        fn strip_base_round_trips(suffix in "[a-zA-Z0-9_/-]{1,30}") {
            let base = "git@github.com:";
            let bases = [base];
            let full = format!("{}{}", base, suffix);

            let mut found = String::new();
            let stripped = strip_base(&full, &bases, |b| found = b.to_string());
            prop_assert_eq!(format!("{}{}", found, stripped), full);
        }
    }

    // ============================================================================
    // Matcher property tests
    // ============================================================================

    proptest! {
        /// Property: bare "*" matches any string, including empty
        #[test]
        fn matcher_star_matches_everything(input in ".*") {
            let matcher = Matcher::compile(["*"], true).unwrap();
            prop_assert!(matcher.is_match(&input));
        }

        /// Property: the empty pattern list accepts everything
        #[test]
        fn matcher_empty_list_accepts_everything(input in ".*") {
            let matcher = Matcher::compile(Vec::<String>::new(), true).unwrap();
            prop_assert!(matcher.is_match(&input));
        }

        /// Property: a literal pattern (no glob characters) matches exactly
        /// itself
        #[test]
        fn matcher_literal_matches_only_itself(
            name in "[a-zA-Z0-9_.-]{1,20}",
            other in "[a-zA-Z0-9_.-]{1,20}",
        ) {
            let matcher = Matcher::compile([name.as_str()], true).unwrap();
            prop_assert!(matcher.is_match(&name));
            if other != name {
                prop_assert!(!matcher.is_match(&other));
            }
        }

        /// Property: an exclusion pattern inverts its positive counterpart
        /// when no positive patterns are present
        #[test]
        fn matcher_exclusion_is_complement(
            pattern in "[a-zA-Z0-9_-]{1,10}\\*?",
            input in "[a-zA-Z0-9_-]{1,20}",
        ) {
            let positive = Matcher::compile([pattern.as_str()], true).unwrap();
            let negated = Matcher::compile([format!("!{}", pattern)], true).unwrap();
            prop_assert_eq!(positive.is_match(&input), !negated.is_match(&input));
        }

        /// Property: matching is deterministic across calls
        #[test]
        fn matcher_is_deterministic(input in "[a-zA-Z0-9_./-]{0,30}") {
            let matcher = Matcher::compile(["**/x", "a*", "!a-secret"], true).unwrap();
            prop_assert_eq!(matcher.is_match(&input), matcher.is_match(&input));
        }
    }
}

//! Property-based tests for group identifier conversion.
//!
//! These tests use proptest to generate random identifiers and verify that
//! the conversion invariants hold for all of them.

#[cfg(test)]
mod proptest_tests {
    use crate::path::group_id_to_path;
    use proptest::prelude::*;

    proptest! {
        /// Property: the output never contains a dot
        #[test]
        fn group_id_to_path_removes_all_dots(input in "[a-z0-9.\\-_]*") {
            let result = group_id_to_path(&input);
            prop_assert!(!result.contains('.'));
        }

        /// Property: identifiers without dots map to themselves
        #[test]
        fn group_id_to_path_is_identity_without_dots(input in "[a-zA-Z0-9\\-_]*") {
            prop_assert_eq!(group_id_to_path(&input), input);
        }

        /// Property: conversion is a 1:1 character replacement
        #[test]
        fn group_id_to_path_preserves_length(input in "[a-z.]*") {
            prop_assert_eq!(group_id_to_path(&input).len(), input.len());
        }

        /// Property: the segments are exactly the dot-separated parts, empty ones included
        #[test]
        fn group_id_to_path_segments_match_identifier_parts(
            parts in prop::collection::vec("[a-z0-9]{0,6}", 1..6)
        ) {
            let group_id = parts.join(".");
            let result = group_id_to_path(&group_id);
            let segments: Vec<&str> = result.split('/').collect();
            prop_assert_eq!(segments, parts.iter().map(String::as_str).collect::<Vec<_>>());
        }
    }
}

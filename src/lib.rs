//! # Repository Locator Library
//!
//! This library provides provider-agnostic parsing and matching for
//! repository identifiers: the logic that turns a loosely structured
//! locator (clone URL, SCP-style remote, bare `owner/repo` slug, with
//! optional `#branch` suffix) into structured parts, and the glob-style
//! pattern matcher used to filter collections of named hosting entities.
//!
//! ## Quick Example
//!
//! ```
//! use repo_locator::name::parse_name;
//! use repo_locator::pattern::Matcher;
//!
//! let bases = ["https://github.com/", "git@github.com:"];
//!
//! // Decompose a locator into its parts
//! let parsed = parse_name("https://github.com/arlac77/sync-test.git#main", &bases, false);
//! assert_eq!(parsed.base.as_deref(), Some("https://github.com/"));
//! assert_eq!(parsed.group.as_deref(), Some("arlac77"));
//! assert_eq!(parsed.repository.as_deref(), Some("sync-test"));
//! assert_eq!(parsed.branch.as_deref(), Some("main"));
//!
//! // Filter names with glob patterns
//! let matcher = Matcher::compile(["sync-*", "!sync-old"], true).unwrap();
//! assert!(matcher.is_match("sync-test"));
//! assert!(!matcher.is_match("sync-old"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Name parsing (`name`)**: total, never-failing decomposition of a
//!   locator into base, group, repository, and branch, plus lookup-key
//!   normalization.
//! - **Pattern matching (`pattern`)**: compile-once glob predicates with
//!   `*`, `**`, `**/` and `!`-exclusions, applied lazily to any sequence of
//!   named items.
//! - **Base stripping (`base`)**: standalone removal of known URL/SSH
//!   prefixes, shared by the parser and by base-agnostic comparisons.
//! - **Collections (`collection`)**: insertion-ordered maps of named
//!   entities keyed by normalized name.
//! - **Entities and providers (`entities`, `provider`)**: the thin owner
//!   layer consuming the core, plus the provider that ties a base registry
//!   and case policies to an entity tree.
//!
//! All parsing and matching is synchronous, pure, and free of shared
//! mutable state; compiled matchers and parsed names are immutable values,
//! safe to share across threads. Network adapters, authentication, and git
//! operations are deliberately outside this crate.

pub mod base;
pub mod collection;
pub mod entities;
pub mod error;
pub mod name;
pub mod pattern;
pub mod provider;

#[cfg(test)]
mod name_proptest;

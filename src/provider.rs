//! # Providers
//!
//! A `Provider` ties the parsing and matching core to a concrete hosting
//! namespace: it owns the ordered registry of base prefixes its names may
//! carry, the case-sensitivity policy of its group and repository
//! namespaces, and the materialized entity tree.
//!
//! ## Design
//!
//! The entity tree is supplied through the `ProviderSource` trait, which
//! separates *what* a provider serves from *where* it came from. The bundled
//! `InMemorySource` assembles providers by hand (and backs the tests);
//! adapters that talk to a hosting API or walk a local filesystem would be
//! further implementations, out of scope here.
//!
//! Materialization happens exactly once, on first access, through a
//! single-flight memoizing guard: the first caller runs the source,
//! concurrent callers block on and share the same outcome, and the result
//! (success or failure) is cached and replayed on every later access
//! without re-invoking the source. After materialization the provider is
//! read-only, which is what makes its lookups and lazy listings freely
//! shareable across threads.

use crate::collection::EntityCollection;
use crate::entities::{Branch, Repository, RepositoryGroup};
use crate::error::{Error, Result};
use crate::name::{parse_name, ParsedName};
use crate::pattern::Matcher;
use log::debug;
use once_cell::sync::OnceCell;
use serde::Deserialize;

/// Static configuration of a provider: its identity, base registry, and
/// name-case policies.
///
/// Deserializable so adapters can feed it from an options document:
///
/// ```
/// use repo_locator::provider::ProviderConfig;
///
/// let config: ProviderConfig = serde_json::from_str(
///     r#"{ "name": "github", "bases": ["https://github.com/", "git@github.com:"] }"#,
/// ).unwrap();
/// assert_eq!(config.bases.len(), 2);
/// assert!(!config.repository_case_sensitive);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProviderConfig {
    /// Provider name, e.g. `github`.
    pub name: String,
    /// Ordered base prefixes; earlier entries win during parsing.
    pub bases: Vec<String>,
    /// Whether group names are matched case-sensitively. Most hosting
    /// services treat owner slugs as case-insensitive.
    pub group_case_sensitive: bool,
    /// Whether repository names are matched case-sensitively.
    pub repository_case_sensitive: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            bases: Vec::new(),
            group_case_sensitive: false,
            repository_case_sensitive: false,
        }
    }
}

/// Supplies the entity tree a provider materializes from.
///
/// Implementations must be safe to call from the materialization guard;
/// `load_groups` runs at most once per provider.
pub trait ProviderSource: Send + Sync {
    /// Produces the fully assembled groups (with their repositories,
    /// branches, tags, hooks, and pull requests).
    fn load_groups(&self) -> Result<Vec<RepositoryGroup>>;
}

/// A `ProviderSource` over a pre-assembled list of groups.
///
/// Builder-style: assemble groups up front, hand the source to
/// [`Provider::new`], and let the provider materialize on first access.
#[derive(Debug, Default)]
pub struct InMemorySource {
    groups: Vec<RepositoryGroup>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_group(mut self, group: RepositoryGroup) -> Self {
        self.groups.push(group);
        self
    }
}

impl ProviderSource for InMemorySource {
    fn load_groups(&self) -> Result<Vec<RepositoryGroup>> {
        Ok(self.groups.clone())
    }
}

/// Materialized provider state; immutable once built.
struct State {
    groups: EntityCollection<RepositoryGroup>,
}

/// A hosting namespace: base registry, case policies, and the entity tree.
pub struct Provider {
    config: ProviderConfig,
    source: Box<dyn ProviderSource>,
    state: OnceCell<std::result::Result<State, String>>,
}

impl Provider {
    pub fn new(config: ProviderConfig, source: Box<dyn ProviderSource>) -> Self {
        Self {
            config,
            source,
            state: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// The ordered base registry this provider recognizes.
    pub fn bases(&self) -> &[String] {
        &self.config.bases
    }

    /// Parses a locator against this provider's base registry.
    ///
    /// Pure delegation to [`parse_name`]; never fails.
    pub fn parse_name(&self, name: &str, group_focus: bool) -> ParsedName {
        parse_name(name, &self.config.bases, group_focus)
    }

    /// Materialized state, running the source on first access. Failure is
    /// cached and replayed without re-invoking the source.
    fn state(&self) -> Result<&State> {
        let cached = self.state.get_or_init(|| {
            debug!("materializing provider '{}'", self.config.name);
            match self.source.load_groups() {
                Ok(groups) => {
                    let mut collection =
                        EntityCollection::new(self.config.group_case_sensitive);
                    for group in groups {
                        collection.insert(group);
                    }
                    debug!(
                        "provider '{}' materialized with {} group(s)",
                        self.config.name,
                        collection.len()
                    );
                    Ok(State { groups: collection })
                }
                Err(error) => Err(error.to_string()),
            }
        });
        cached.as_ref().map_err(|message| Error::Initialization {
            message: message.clone(),
        })
    }

    /// Looks up a group by locator (group-focused parse: a single bare
    /// segment names the group).
    pub fn repository_group(&self, name: &str) -> Result<Option<&RepositoryGroup>> {
        let parsed = self.parse_name(name, true);
        let Some(group_name) = parsed.group else {
            return Ok(None);
        };
        Ok(self.state()?.groups.get(&group_name))
    }

    /// Looks up a repository by locator.
    ///
    /// A qualified name resolves within its parsed group; a bare repository
    /// name searches all groups in insertion order. An unresolvable locator
    /// is a `None`, not an error.
    pub fn repository(&self, name: &str) -> Result<Option<&Repository>> {
        let parsed = self.parse_name(name, false);
        self.find_repository(&parsed)
    }

    fn find_repository(&self, parsed: &ParsedName) -> Result<Option<&Repository>> {
        let Some(repository_name) = parsed.repository.as_deref() else {
            return Ok(None);
        };
        if repository_name.is_empty() {
            return Ok(None);
        }
        let state = self.state()?;
        if let Some(group_name) = parsed.group.as_deref() {
            return Ok(state
                .groups
                .get(group_name)
                .and_then(|group| group.repository(repository_name)));
        }
        for group in state.groups.iter() {
            if let Some(repository) = group.repository(repository_name) {
                return Ok(Some(repository));
            }
        }
        debug!("no repository matches bare name '{}'", repository_name);
        Ok(None)
    }

    /// Looks up a branch by locator.
    ///
    /// The branch comes from the `#branch` suffix when present and
    /// non-empty, the repository's default branch otherwise. Returns the
    /// owning repository alongside the branch.
    pub fn branch(&self, name: &str) -> Result<Option<(&Repository, &Branch)>> {
        let parsed = self.parse_name(name, false);
        let Some(repository) = self.find_repository(&parsed)? else {
            return Ok(None);
        };
        let branch_name = match parsed.branch.as_deref() {
            Some(branch) if !branch.is_empty() => branch,
            _ => repository.default_branch_name(),
        };
        Ok(repository.branch(branch_name).map(|b| (repository, b)))
    }

    /// All groups, optionally filtered by glob patterns over the group name.
    ///
    /// Lazy: entities are yielded in insertion order as the consumer pulls
    /// them. An absent filter lists everything.
    pub fn groups<'a>(
        &'a self,
        patterns: Option<&[&str]>,
    ) -> Result<impl Iterator<Item = &'a RepositoryGroup> + 'a> {
        let matcher = Matcher::compile_optional(patterns, self.config.group_case_sensitive)?;
        let state = self.state()?;
        Ok(state
            .groups
            .iter()
            .filter(move |group| matcher.is_match(group.name())))
    }

    /// All repositories across all groups, optionally filtered by glob
    /// patterns over the qualified `group/name` form.
    pub fn repositories<'a>(
        &'a self,
        patterns: Option<&[&str]>,
    ) -> Result<impl Iterator<Item = &'a Repository> + 'a> {
        let matcher =
            Matcher::compile_optional(patterns, self.config.repository_case_sensitive)?;
        let state = self.state()?;
        Ok(state
            .groups
            .iter()
            .flat_map(|group| group.repositories())
            .filter(move |repository| matcher.is_match(&repository.full_name())))
    }
}

//! # Hosting Entities
//!
//! The object model a provider serves: repository groups, repositories, and
//! the leaf entities hanging off a repository (branches, tags, hooks, pull
//! requests). These are plain data holders; all interesting logic lives in
//! the parsing and matching modules that feed them.
//!
//! ## Attribute materialization
//!
//! Each entity type declares its optional attributes as a serde-derived
//! `...Options` struct with explicit defaults. Options are materialized into
//! plain struct fields once, at construction; there is no runtime property
//! definition, and unknown option keys are rejected during deserialization.
//! Option documents typically arrive as JSON from whatever adapter assembled
//! the provider.

use crate::collection::{EntityCollection, Named};
use crate::pattern::Matcher;
use serde::Deserialize;

/// Fallback default branch when a repository declares none.
pub const DEFAULT_BRANCH: &str = "main";

/// Optional attributes of a repository group.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupOptions {
    /// Human-readable name, when it differs from the slug.
    pub display_name: Option<String>,
    /// Numeric id assigned by a hosting service.
    pub id: Option<u64>,
    pub description: Option<String>,
}

/// A namespace/owner above repositories (a user or an organization).
#[derive(Debug, Clone)]
pub struct RepositoryGroup {
    name: String,
    display_name: Option<String>,
    id: Option<u64>,
    description: Option<String>,
    repositories: EntityCollection<Repository>,
}

impl RepositoryGroup {
    /// Creates a group. `repository_case_sensitive` is the lookup policy for
    /// the repository names it will hold, as declared by the provider.
    pub fn new(name: &str, options: GroupOptions, repository_case_sensitive: bool) -> Self {
        Self {
            name: name.to_string(),
            display_name: options.display_name,
            id: options.id,
            description: options.description,
            repositories: EntityCollection::new(repository_case_sensitive),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name, falling back to the slug.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn id(&self) -> Option<u64> {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Adds a repository owned by this group, returning a mutable handle for
    /// further population. An existing repository of the same (normalized)
    /// name is replaced.
    pub fn add_repository(&mut self, name: &str, options: RepositoryOptions) -> &mut Repository {
        let repository = Repository::new(&self.name, name, options);
        self.repositories.insert(repository);
        self.repositories
            .get_mut(name)
            .expect("repository was just inserted")
    }

    /// Looks up a repository by bare name under the group's case policy.
    pub fn repository(&self, name: &str) -> Option<&Repository> {
        self.repositories.get(name)
    }

    /// All repositories in insertion order.
    pub fn repositories(&self) -> impl Iterator<Item = &Repository> {
        self.repositories.iter()
    }

    /// Repositories whose bare name satisfies `matcher`.
    pub fn repositories_matching<'a>(
        &'a self,
        matcher: &'a Matcher,
    ) -> impl Iterator<Item = &'a Repository> + 'a {
        self.repositories.matching(matcher)
    }

    pub fn repository_count(&self) -> usize {
        self.repositories.len()
    }
}

impl Named for RepositoryGroup {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Optional attributes of a repository.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryOptions {
    pub description: Option<String>,
    /// Branch used when a locator names no branch; defaults to
    /// [`DEFAULT_BRANCH`].
    pub default_branch: Option<String>,
    pub archived: bool,
    pub private: bool,
    pub homepage: Option<String>,
}

/// A repository within a group.
///
/// Branch and tag names are git refs and therefore always case-sensitive,
/// independent of the provider's repository-name policy.
#[derive(Debug, Clone)]
pub struct Repository {
    name: String,
    group: String,
    description: Option<String>,
    default_branch: String,
    archived: bool,
    private: bool,
    homepage: Option<String>,
    branches: EntityCollection<Branch>,
    tags: EntityCollection<Tag>,
    hooks: Vec<Hook>,
    pull_requests: Vec<PullRequest>,
}

impl Repository {
    pub fn new(group: &str, name: &str, options: RepositoryOptions) -> Self {
        Self {
            name: name.to_string(),
            group: group.to_string(),
            description: options.description,
            default_branch: options
                .default_branch
                .unwrap_or_else(|| DEFAULT_BRANCH.to_string()),
            archived: options.archived,
            private: options.private,
            homepage: options.homepage,
            branches: EntityCollection::new(true),
            tags: EntityCollection::new(true),
            hooks: Vec::new(),
            pull_requests: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The owning group's name.
    pub fn group(&self) -> &str {
        &self.group
    }

    /// Qualified `group/name` form, the key used by provider-wide listings.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.group, self.name)
    }

    /// Re-prefixes this repository's qualified name with a base, inverting
    /// the stripping the parser performed.
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base, self.full_name())
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn default_branch_name(&self) -> &str {
        &self.default_branch
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn add_branch(&mut self, name: &str) {
        self.branches.insert(Branch::new(name));
    }

    pub fn branch(&self, name: &str) -> Option<&Branch> {
        self.branches.get(name)
    }

    /// The branch named by [`default_branch_name`](Self::default_branch_name),
    /// if it has been materialized.
    pub fn default_branch(&self) -> Option<&Branch> {
        self.branches.get(&self.default_branch)
    }

    pub fn branches(&self) -> impl Iterator<Item = &Branch> {
        self.branches.iter()
    }

    pub fn branches_matching<'a>(
        &'a self,
        matcher: &'a Matcher,
    ) -> impl Iterator<Item = &'a Branch> + 'a {
        self.branches.matching(matcher)
    }

    pub fn add_tag(&mut self, name: &str) {
        self.tags.insert(Tag::new(name));
    }

    pub fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.get(name)
    }

    pub fn tags(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn tags_matching<'a>(
        &'a self,
        matcher: &'a Matcher,
    ) -> impl Iterator<Item = &'a Tag> + 'a {
        self.tags.matching(matcher)
    }

    pub fn add_hook(&mut self, hook: Hook) {
        self.hooks.push(hook);
    }

    pub fn hooks(&self) -> impl Iterator<Item = &Hook> {
        self.hooks.iter()
    }

    pub fn add_pull_request(&mut self, pull_request: PullRequest) {
        self.pull_requests.push(pull_request);
    }

    pub fn pull_requests(&self) -> impl Iterator<Item = &PullRequest> {
        self.pull_requests.iter()
    }
}

impl Named for Repository {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A branch head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    name: String,
}

impl Branch {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Branch {
    fn name(&self) -> &str {
        &self.name
    }
}

/// An annotated or lightweight tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
}

impl Tag {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Tag {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Optional attributes of a webhook.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookOptions {
    pub active: bool,
    /// Event names the hook subscribes to, e.g. `push`.
    pub events: Vec<String>,
}

impl Default for HookOptions {
    fn default() -> Self {
        Self {
            active: true,
            events: vec!["push".to_string()],
        }
    }
}

/// A webhook registered on a repository.
#[derive(Debug, Clone)]
pub struct Hook {
    id: u64,
    url: String,
    active: bool,
    events: Vec<String>,
}

impl Hook {
    pub fn new(id: u64, url: &str, options: HookOptions) -> Self {
        Self {
            id,
            url: url.to_string(),
            active: options.active,
            events: options.events,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }
}

/// Lifecycle state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PullRequestState {
    Open,
    Merged,
    Closed,
}

/// A pull/merge request between two branches of a repository.
#[derive(Debug, Clone)]
pub struct PullRequest {
    number: u64,
    title: String,
    source: String,
    destination: String,
    state: PullRequestState,
}

impl PullRequest {
    pub fn new(number: u64, title: &str, source: &str, destination: &str) -> Self {
        Self {
            number,
            title: title.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            state: PullRequestState::Open,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Source branch name.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Destination branch name.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn state(&self) -> PullRequestState {
        self.state
    }

    pub fn set_state(&mut self, state: PullRequestState) {
        self.state = state;
    }
}

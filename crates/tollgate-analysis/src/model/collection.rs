//! Ordered, fingerprint-unique set of issues.

use std::collections::BTreeMap;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::{Fingerprint, Issue, Severity};

/// Issue attribute used for grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueProperty {
    File,
    Package,
    Module,
    Category,
    Type,
    Origin,
    Severity,
}

impl IssueProperty {
    pub fn value_of<'a>(&self, issue: &'a Issue) -> &'a str {
        match self {
            Self::File => &issue.file,
            Self::Package => &issue.package,
            Self::Module => &issue.module,
            Self::Category => &issue.category,
            Self::Type => &issue.issue_type,
            Self::Origin => &issue.origin,
            Self::Severity => issue.severity.as_str(),
        }
    }
}

/// Insertion-ordered issues with unique fingerprints.
///
/// Adding an issue whose fingerprint is already present is a no-op.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Issue>", into = "Vec<Issue>")]
pub struct IssueCollection {
    issues: Vec<Issue>,
    fingerprints: FxHashSet<Fingerprint>,
}

impl IssueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `issue`; returns `false` if its fingerprint was already present.
    pub fn add(&mut self, issue: Issue) -> bool {
        if !self.fingerprints.insert(issue.fingerprint.clone()) {
            return false;
        }
        self.issues.push(issue);
        true
    }

    pub fn size(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.fingerprints.contains(fingerprint)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Issue> {
        self.issues.iter()
    }

    pub fn size_of(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }

    /// Counts indexed by [`Severity::index`].
    pub fn severity_counts(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for issue in &self.issues {
            counts[issue.severity.index()] += 1;
        }
        counts
    }

    pub fn filter<P>(&self, mut predicate: P) -> IssueCollection
    where
        P: FnMut(&Issue) -> bool,
    {
        self.issues
            .iter()
            .filter(|issue| predicate(issue))
            .cloned()
            .collect()
    }

    pub fn by_severity(&self, severity: Severity) -> IssueCollection {
        self.filter(|i| i.severity == severity)
    }

    /// Groups issues by `property`; keys are sorted, each group keeps
    /// insertion order.
    pub fn group_by(&self, property: IssueProperty) -> BTreeMap<String, IssueCollection> {
        let mut groups: BTreeMap<String, IssueCollection> = BTreeMap::new();
        for issue in &self.issues {
            groups
                .entry(property.value_of(issue).to_string())
                .or_default()
                .add(issue.clone());
        }
        groups
    }

    pub fn size_per_origin(&self) -> BTreeMap<String, usize> {
        let mut sizes = BTreeMap::new();
        for issue in &self.issues {
            *sizes.entry(issue.origin.clone()).or_insert(0) += 1;
        }
        sizes
    }
}

impl PartialEq for IssueCollection {
    fn eq(&self, other: &Self) -> bool {
        self.issues == other.issues
    }
}

impl Eq for IssueCollection {}

impl FromIterator<Issue> for IssueCollection {
    fn from_iter<T: IntoIterator<Item = Issue>>(iter: T) -> Self {
        let mut collection = Self::new();
        for issue in iter {
            collection.add(issue);
        }
        collection
    }
}

impl Extend<Issue> for IssueCollection {
    fn extend<T: IntoIterator<Item = Issue>>(&mut self, iter: T) {
        for issue in iter {
            self.add(issue);
        }
    }
}

impl<'a> IntoIterator for &'a IssueCollection {
    type Item = &'a Issue;
    type IntoIter = std::slice::Iter<'a, Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

impl IntoIterator for IssueCollection {
    type Item = Issue;
    type IntoIter = std::vec::IntoIter<Issue>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.into_iter()
    }
}

impl From<Vec<Issue>> for IssueCollection {
    fn from(issues: Vec<Issue>) -> Self {
        issues.into_iter().collect()
    }
}

impl From<IssueCollection> for Vec<Issue> {
    fn from(collection: IssueCollection) -> Self {
        collection.issues
    }
}

//! Case-insensitive tag sets used for mood and vacation-goal comparison.

use std::collections::BTreeSet;

/// A set of free-text tags compared without regard to letter case.
///
/// Tags are lowercased on insertion so `"Beach"` and `"beach"` collapse into
/// one entry. Surrounding whitespace is preserved; `" beach"` and `"beach"`
/// remain distinct.
///
/// # Examples
/// ```
/// use wayfarer_core::TagSet;
///
/// let moods = TagSet::from_tags(["Beach", "beach", "Party"]);
/// assert_eq!(moods.len(), 2);
/// assert!(moods.contains("BEACH"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSet {
    tags: BTreeSet<String>,
}

impl TagSet {
    /// Build a set from any iterator of tag-like values.
    #[must_use]
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags
                .into_iter()
                .map(|tag| tag.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Report whether `tag` is present, ignoring case.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_lowercase())
    }

    /// Number of distinct tags.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Report whether the set holds no tags.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Count the tags shared with `other`.
    #[must_use]
    pub fn intersection_len(&self, other: &Self) -> usize {
        self.tags.intersection(&other.tags).count()
    }

    /// Count the distinct tags present in either set.
    #[must_use]
    pub fn union_len(&self, other: &Self) -> usize {
        self.tags.union(&other.tags).count()
    }

    /// Iterate over the normalised tags in lexical order.
    #[must_use]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tags(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["beach", "party"], &["Beach", "history"], 1, 3)]
    #[case(&["beach"], &["BEACH"], 1, 1)]
    #[case(&[], &["beach"], 0, 1)]
    #[case(&["a", "b", "c"], &["d", "e"], 0, 5)]
    fn counts_ignore_case(
        #[case] left: &[&str],
        #[case] right: &[&str],
        #[case] shared: usize,
        #[case] union: usize,
    ) {
        let a = TagSet::from_tags(left);
        let b = TagSet::from_tags(right);
        assert_eq!(a.intersection_len(&b), shared);
        assert_eq!(a.union_len(&b), union);
    }

    #[rstest]
    fn duplicates_collapse() {
        let tags: TagSet = ["Historic", "historic", "HISTORIC"].into_iter().collect();
        assert_eq!(tags.len(), 1);
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["historic"]);
    }

    #[rstest]
    fn whitespace_is_significant() {
        let tags = TagSet::from_tags([" beach"]);
        assert!(!tags.contains("beach"));
    }
}

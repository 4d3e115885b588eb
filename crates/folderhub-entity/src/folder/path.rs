//! Materialized path helpers.
//!
//! A path is the chain of folder names from a root down to a folder,
//! joined by [`PATH_DELIMITER`]. Ancestry is pure string-prefix logic:
//! `b` lies below `a` iff `b` starts with `a` followed by the delimiter.

/// Separator between path segments.
pub const PATH_DELIMITER: char = '.';

/// Append a child segment to a parent path.
pub fn join(parent: &str, name: &str) -> String {
    let mut path = String::with_capacity(parent.len() + 1 + name.len());
    path.push_str(parent);
    path.push(PATH_DELIMITER);
    path.push_str(name);
    path
}

/// The parent path, or `None` for a root path.
pub fn parent(path: &str) -> Option<&str> {
    path.rfind(PATH_DELIMITER).map(|idx| &path[..idx])
}

/// The final segment of a path.
pub fn last_segment(path: &str) -> &str {
    match path.rfind(PATH_DELIMITER) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Iterate over the segments of a path, root first.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_DELIMITER)
}

/// Number of segments; a root path has depth 1.
pub fn depth(path: &str) -> usize {
    path.matches(PATH_DELIMITER).count() + 1
}

/// Whether `candidate` is a strict descendant of `ancestor`.
pub fn is_descendant(candidate: &str, ancestor: &str) -> bool {
    candidate.starts_with(ancestor) && candidate[ancestor.len()..].starts_with(PATH_DELIMITER)
}

/// Whether `candidate` is `root` itself or lies below it.
pub fn is_within(candidate: &str, root: &str) -> bool {
    candidate == root || is_descendant(candidate, root)
}

/// Replace the leading `old_prefix` of `path` with `new_prefix`.
///
/// Returns `None` when `path` is outside the subtree rooted at
/// `old_prefix`. Only whole segments match: `alpha.bravo` is not rebased
/// by the prefix `alpha.bra`.
pub fn rebase(path: &str, old_prefix: &str, new_prefix: &str) -> Option<String> {
    if !is_within(path, old_prefix) {
        return None;
    }
    let suffix = &path[old_prefix.len()..];
    let mut rebased = String::with_capacity(new_prefix.len() + suffix.len());
    rebased.push_str(new_prefix);
    rebased.push_str(suffix);
    Some(rebased)
}

/// Ancestor paths of `path`, root first, excluding `path` itself.
pub fn ancestors(path: &str) -> Vec<&str> {
    path.match_indices(PATH_DELIMITER)
        .map(|(idx, _)| &path[..idx])
        .collect()
}

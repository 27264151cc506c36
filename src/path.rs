//! Path manipulation utilities for gradle-mvn-repo

/// Convert a dotted group identifier into a relative repository path.
///
/// Every `.` becomes a `/`, so `com.example.foo` maps to `com/example/foo`.
/// Identifiers without dots map to themselves. Consecutive dots are not
/// collapsed: `com..foo` maps to `com//foo`, an empty path segment that the
/// filesystem resolves as `com/foo`.
pub fn group_id_to_path(group_id: &str) -> String {
    group_id.replace('.', "/")
}

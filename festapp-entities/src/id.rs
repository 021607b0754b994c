/// Integer surrogate key of a stored row.
pub type RowId = i64;

/// Reference value meaning "no row".
///
/// Hierarchical families use it as the root sentinel, i.e. a directory
/// with `parent_id == UNSET_ID` is a top level directory.
pub const UNSET_ID: RowId = 0;

pub fn is_set(id: RowId) -> bool {
    id != UNSET_ID
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_not_set() {
        assert!(!is_set(UNSET_ID));
        assert!(is_set(1));
        assert!(is_set(-1));
    }
}

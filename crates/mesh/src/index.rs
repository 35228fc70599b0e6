//! Resolution of raw OBJ face references into zero-based table indices.

/// Why a raw reference failed to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// OBJ references are 1-based; a literal `0` names nothing.
    Zero,
    /// The resolved index falls outside the table.
    OutOfRange,
}

/// Resolve one raw face reference against a table of `len` entries.
///
/// Positive values are 1-based indices; negative values count back from
/// the most recently appended entry, so `-1` names the last one. An
/// omitted field never reaches this function; the face parser carries
/// absence as `None`.
pub fn resolve_index(raw: i32, len: usize) -> Result<usize, ResolveError> {
    if raw == 0 {
        return Err(ResolveError::Zero);
    }

    let idx = if raw > 0 {
        (raw - 1) as isize
    } else {
        len as isize + raw as isize
    };

    if idx < 0 || idx as usize >= len {
        return Err(ResolveError::OutOfRange);
    }

    Ok(idx as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_is_one_based() {
        assert_eq!(resolve_index(1, 3), Ok(0));
        assert_eq!(resolve_index(3, 3), Ok(2));
    }

    #[test]
    fn negative_counts_from_tail() {
        assert_eq!(resolve_index(-1, 3), Ok(2));
        assert_eq!(resolve_index(-3, 3), Ok(0));
    }

    #[test]
    fn negative_matches_equivalent_positive() {
        let len = 5usize;
        for k in 1..=len as i32 {
            let negative = k - len as i32 - 1;
            assert_eq!(resolve_index(k, len), resolve_index(negative, len));
        }
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(resolve_index(0, 3), Err(ResolveError::Zero));
        assert_eq!(resolve_index(0, 0), Err(ResolveError::Zero));
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(resolve_index(4, 3), Err(ResolveError::OutOfRange));
        assert_eq!(resolve_index(-4, 3), Err(ResolveError::OutOfRange));
        assert_eq!(resolve_index(1, 0), Err(ResolveError::OutOfRange));
    }
}

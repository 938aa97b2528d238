//! First-fit selection over ordered candidates.
//!
//! Subtitle choice and keyword truncation share one policy: walk the
//! candidates in priority order and stop at the first one that satisfies the
//! predicate. There is no best-fit search and no reordering.

/// Return the first candidate accepted by `pred`, in iteration order.
pub fn first_fit<I, T, F>(candidates: I, mut pred: F) -> Option<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    candidates.into_iter().find(|c| pred(c))
}

/// Length of the longest prefix of `items` whose joined length stays within
/// `limit`, where each item after the first also pays `sep_len`.
///
/// The scan ends at the first item that would overflow, even if a later,
/// shorter item would still fit.
pub fn fit_prefix<S: AsRef<str>>(items: &[S], sep_len: usize, limit: usize) -> usize {
    let lengths = items.iter().map(|s| s.as_ref().chars().count());
    let mut running = 0usize;
    let overflow = first_fit(lengths.enumerate(), |&(i, len)| {
        running += len + if i == 0 { 0 } else { sep_len };
        running > limit
    });
    match overflow {
        Some((i, _)) => i,
        None => items.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_fit_returns_earliest_match() {
        let xs = ["alpha", "be", "gamma", "de"];
        let got = first_fit(xs.iter(), |s| s.len() <= 2);
        assert_eq!(got, Some(&"be"));
    }

    #[test]
    fn test_first_fit_none_when_nothing_matches() {
        let xs = ["alpha", "gamma"];
        assert_eq!(first_fit(xs.iter(), |s| s.is_empty()), None);
    }

    #[test]
    fn test_fit_prefix_counts_separators() {
        // "ab,cd" is 5 chars
        assert_eq!(fit_prefix(&["ab", "cd", "ef"], 1, 5), 2);
        assert_eq!(fit_prefix(&["ab", "cd", "ef"], 1, 8), 3);
        assert_eq!(fit_prefix(&["ab", "cd", "ef"], 1, 7), 2);
    }

    #[test]
    fn test_fit_prefix_stops_at_first_overflow() {
        // "c" would fit after "bbbb" is skipped, but the scan never skips
        assert_eq!(fit_prefix(&["aaa", "bbbb", "c"], 1, 5), 1);
    }

    #[test]
    fn test_fit_prefix_first_item_too_long() {
        assert_eq!(fit_prefix(&["toolongword"], 1, 4), 0);
        let empty: [&str; 0] = [];
        assert_eq!(fit_prefix(&empty, 1, 4), 0);
    }
}

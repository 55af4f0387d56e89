//! Counter-based alternation.

/// Returns the non-empty queue with the smallest priority counter.
///
/// Ties go to the queue scanned first, i.e. the lowest index. Returns
/// `None` if `non_empty` is empty.
pub fn select_round_robin(priorities: &[i64], non_empty: &[usize]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for &i in non_empty {
        match best {
            Some(b) if priorities[i] >= priorities[b] => {}
            _ => best = Some(i),
        }
    }
    best
}

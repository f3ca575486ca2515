//! Windowed partitioning and key runs.
//!
//! Window starts are `0, step, 2 * step, ...`. A `step` of `None` means
//! "advance by the window size" (non-overlapping windows); `Some(0)` is
//! clamped to 1.

/// Resolves the step a partition advances by.
#[inline]
fn effective_step(size: usize, step: Option<usize>) -> usize {
    step.unwrap_or(size).max(1)
}

/// Full windows only. See [`SequenceExt::partition`](super::SequenceExt::partition).
pub(super) fn partition<T: Clone>(
    sequence: &[T],
    size: usize,
    step: Option<usize>,
) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    if size > sequence.len() {
        tracing::debug!(
            size,
            length = sequence.len(),
            "window larger than sequence, yielding a single empty window"
        );
        return vec![Vec::new()];
    }
    (0..=sequence.len() - size)
        .step_by(effective_step(size, step))
        .map(|start| sequence[start..start + size].to_vec())
        .collect()
}

/// Full windows, then the first partial window topped up from `pad`.
pub(super) fn partition_padded<T: Clone>(
    sequence: &[T],
    size: usize,
    step: Option<usize>,
    pad: &[T],
) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    let mut windows = Vec::new();
    for start in (0..sequence.len()).step_by(effective_step(size, step)) {
        let end = (start + size).min(sequence.len());
        let mut window = sequence[start..end].to_vec();
        if window.len() < size {
            window.extend(pad.iter().take(size - window.len()).cloned());
            windows.push(window);
            break;
        }
        windows.push(window);
    }
    windows
}

/// Every window start, keeping the short windows at the tail.
pub(super) fn partition_all<T: Clone>(
    sequence: &[T],
    size: usize,
    step: Option<usize>,
) -> Vec<Vec<T>> {
    if size == 0 {
        return Vec::new();
    }
    (0..sequence.len())
        .step_by(effective_step(size, step))
        .map(|start| sequence[start..(start + size).min(sequence.len())].to_vec())
        .collect()
}

/// Maximal runs of elements whose keys compare equal.
pub(super) fn partition_by<T, K, F>(sequence: &[T], mut key_of: F) -> Vec<Vec<T>>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut runs: Vec<Vec<T>> = Vec::new();
    let mut current_key: Option<K> = None;
    for element in sequence {
        let key = key_of(element);
        if let Some(previous) = &current_key
            && *previous == key
            && let Some(run) = runs.last_mut()
        {
            run.push(element.clone());
            continue;
        }
        runs.push(vec![element.clone()]);
        current_key = Some(key);
    }
    runs
}

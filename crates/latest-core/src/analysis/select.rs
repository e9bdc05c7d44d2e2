/// Top-N selection by modification time.
///
/// Candidates are ordered by mtime (descending for newest, ascending for
/// oldest) with the path as a tie-breaker, so the same file set always
/// produces the same output. When a kind filter is active, MIME types are
/// probed lazily in that order and probing stops as soon as N matches are
/// found.
use crate::model::{Direction, FileCandidate, SelectionRequest};
use crate::probe::MimeProbe;
use std::cmp::Ordering;
use tracing::debug;

/// Select at most `request.count()` candidates.
pub fn select(
    mut candidates: Vec<FileCandidate>,
    request: &SelectionRequest,
    probe: &dyn MimeProbe,
) -> Vec<FileCandidate> {
    let n = request.count();
    let direction = request.direction();
    let order = |a: &FileCandidate, b: &FileCandidate| compare(a, b, direction);

    let Some(kind) = request.kind() else {
        // Partial sort: O(n) select + O(k log k) sort of top-k, vs O(n log n) full sort.
        if candidates.len() > n {
            candidates.select_nth_unstable_by(n - 1, order);
            candidates.truncate(n);
        }
        candidates.sort_unstable_by(order);
        return candidates;
    };

    // The comparator is total (paths are unique after enumeration), so an
    // unstable sort is still deterministic.
    candidates.sort_unstable_by(order);

    candidates
        .into_iter()
        .filter_map(|candidate| match probe.probe(candidate.path()) {
            Ok(mime) if kind.matches(&mime) => Some(candidate.with_mime(mime)),
            Ok(mime) => {
                debug!(path = %candidate.path().display(), %mime, %kind, "kind mismatch");
                None
            }
            Err(err) => {
                debug!(path = %candidate.path().display(), "probe failed: {err}");
                None
            }
        })
        .take(n)
        .collect()
}

fn compare(a: &FileCandidate, b: &FileCandidate, direction: Direction) -> Ordering {
    let by_time = match direction {
        Direction::Newest => b.modified().cmp(&a.modified()),
        Direction::Oldest => a.modified().cmp(&b.modified()),
    };
    by_time.then_with(|| a.path().cmp(b.path()))
}

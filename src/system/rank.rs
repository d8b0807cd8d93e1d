use std::cmp::Reverse;

use super::snapshot::ProcessInfo;

pub const TOP_PROCESS_COUNT: usize = 5;

/// A process as seen during enumeration, before its details are read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProcessEntry {
    pub pid: u32,
    pub memory_bytes: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Exited between enumeration and the detail read.
    Vanished,
    /// Still alive but its details could not be read (usually access denied).
    Unreadable,
}

impl SkipReason {
    pub fn label(self) -> &'static str {
        match self {
            SkipReason::Vanished => "vanished",
            SkipReason::Unreadable => "unreadable",
        }
    }
}

/// Outcome of reading one ranked candidate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProcessRead {
    Ready { name: String },
    Skipped(SkipReason),
}

/// Picks the `limit` largest entries by resident memory and reads each one.
///
/// The sort is stable, so equal memory keeps enumeration order. Candidates
/// whose read is skipped are dropped without pulling in the next entry, so
/// the result may hold fewer than `limit` rows.
pub fn rank_top<I, F>(entries: I, limit: usize, mut read: F) -> Vec<ProcessInfo>
where
    I: IntoIterator<Item = ProcessEntry>,
    F: FnMut(&ProcessEntry) -> ProcessRead,
{
    let mut entries: Vec<ProcessEntry> = entries.into_iter().collect();
    entries.sort_by_key(|e| Reverse(e.memory_bytes));

    entries
        .into_iter()
        .take(limit)
        .filter_map(|entry| match read(&entry) {
            ProcessRead::Ready { name } => Some(ProcessInfo {
                pid: entry.pid,
                name,
                memory_bytes: entry.memory_bytes,
            }),
            ProcessRead::Skipped(reason) => {
                tracing::debug!(pid = entry.pid, reason = reason.label(), "skipping process");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    fn entry(pid: u32, mb: u64) -> ProcessEntry {
        ProcessEntry {
            pid,
            memory_bytes: mb * MB,
        }
    }

    fn named(entry: &ProcessEntry) -> ProcessRead {
        ProcessRead::Ready {
            name: format!("proc{}", entry.pid),
        }
    }

    #[test]
    fn keeps_the_five_largest_in_descending_order() {
        let entries = vec![
            entry(1, 10),
            entry(2, 500),
            entry(3, 50),
            entry(4, 300),
            entry(5, 1),
            entry(6, 100),
            entry(7, 5),
        ];
        let top = rank_top(entries, TOP_PROCESS_COUNT, named);
        let pids: Vec<u32> = top.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![2, 4, 6, 3, 1]);
    }

    #[test]
    fn ties_keep_enumeration_order() {
        let entries = vec![entry(10, 300), entry(11, 500), entry(12, 300)];
        let top = rank_top(entries, TOP_PROCESS_COUNT, named);
        let pids: Vec<u32> = top.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![11, 10, 12]);
    }

    #[test]
    fn vanished_process_is_omitted_without_backfill() {
        let entries = vec![
            entry(1, 500),
            entry(2, 300),
            entry(3, 300),
            entry(4, 100),
            entry(5, 50),
            entry(6, 10),
        ];
        let top = rank_top(entries, TOP_PROCESS_COUNT, |e| {
            if e.pid == 3 {
                ProcessRead::Skipped(SkipReason::Vanished)
            } else {
                named(e)
            }
        });
        let pids: Vec<u32> = top.iter().map(|p| p.pid).collect();
        assert_eq!(pids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn only_candidates_are_read() {
        let entries: Vec<ProcessEntry> = (0..50).map(|pid| entry(pid, pid as u64)).collect();
        let mut reads = 0;
        let top = rank_top(entries, TOP_PROCESS_COUNT, |e| {
            reads += 1;
            named(e)
        });
        assert_eq!(top.len(), 5);
        assert_eq!(reads, 5);
    }

    #[test]
    fn fewer_processes_than_limit() {
        let top = rank_top(vec![entry(1, 1), entry(2, 2)], TOP_PROCESS_COUNT, named);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].pid, 2);
    }

    #[test]
    fn unreadable_and_empty_inputs() {
        let top = rank_top(vec![entry(1, 1)], TOP_PROCESS_COUNT, |_| {
            ProcessRead::Skipped(SkipReason::Unreadable)
        });
        assert!(top.is_empty());
        assert!(rank_top(Vec::new(), TOP_PROCESS_COUNT, named).is_empty());
    }
}

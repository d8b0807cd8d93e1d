use std::path::{Path, PathBuf};

use sysinfo::{Disks, Pid, ProcessRefreshKind, ProcessesToUpdate, System};

use super::MetricsSource;
use super::error::SampleError;
use super::rank::{ProcessEntry, ProcessRead, SkipReason, TOP_PROCESS_COUNT, rank_top};
use super::snapshot::MetricsSnapshot;

pub struct Collector {
    sys: System,
    disk_path: PathBuf,
}

impl Collector {
    /// Primes sysinfo and checks that memory and disk figures exist at all.
    pub fn new(disk_path: impl Into<PathBuf>) -> Result<Self, SampleError> {
        let disk_path = disk_path.into();

        let mut sys = System::new();
        sys.refresh_memory();
        sys.refresh_cpu_usage();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        if sys.total_memory() == 0 {
            return Err(SampleError::MemoryUnavailable);
        }
        if root_disk_usage(&Disks::new_with_refreshed_list(), &disk_path).is_none() {
            return Err(SampleError::DiskNotFound(disk_path));
        }

        tracing::info!(disk_path = %disk_path.display(), "collector ready");
        Ok(Collector { sys, disk_path })
    }

    fn enumerate(&self) -> Vec<ProcessEntry> {
        let mut entries: Vec<ProcessEntry> = self
            .sys
            .processes()
            .iter()
            .map(|(pid, process)| ProcessEntry {
                pid: pid.as_u32(),
                memory_bytes: process.memory(),
            })
            .collect();
        // sysinfo hands processes back in hash order; rank in pid order instead.
        entries.sort_unstable_by_key(|e| e.pid);
        entries
    }
}

impl MetricsSource for Collector {
    fn sample(&mut self) -> MetricsSnapshot {
        let _span = tracing::debug_span!("collector.sample").entered();

        self.sys.refresh_memory();
        self.sys.refresh_cpu_usage();
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory(),
        );

        let entries = self.enumerate();
        let sys = &mut self.sys;
        let top_processes = rank_top(entries, TOP_PROCESS_COUNT, |entry| {
            read_process(sys, entry.pid)
        });

        let (disk_used, disk_total) =
            match root_disk_usage(&Disks::new_with_refreshed_list(), &self.disk_path) {
                Some(usage) => usage,
                None => {
                    tracing::warn!(disk_path = %self.disk_path.display(), "disk no longer mounted");
                    (0, 0)
                }
            };

        MetricsSnapshot {
            cpu_percent: self.sys.global_cpu_usage().clamp(0.0, 100.0),
            memory_used: self.sys.used_memory(),
            memory_total: self.sys.total_memory(),
            disk_used,
            disk_total,
            top_processes,
        }
    }
}

fn read_process(sys: &mut System, pid: u32) -> ProcessRead {
    let pid = Pid::from_u32(pid);
    sys.refresh_processes_specifics(
        ProcessesToUpdate::Some(&[pid]),
        true,
        ProcessRefreshKind::nothing(),
    );
    match sys.process(pid) {
        None => ProcessRead::Skipped(SkipReason::Vanished),
        Some(process) => {
            let name = process.name().to_string_lossy().into_owned();
            if name.is_empty() {
                ProcessRead::Skipped(SkipReason::Unreadable)
            } else {
                ProcessRead::Ready { name }
            }
        }
    }
}

fn root_disk_usage(disks: &Disks, path: &Path) -> Option<(u64, u64)> {
    let (mount, (total, available)) = select_mount(
        disks
            .list()
            .iter()
            .map(|d| (d.mount_point(), (d.total_space(), d.available_space()))),
        path,
    )?;
    // sysinfo only knows available space, which also counts reserved blocks as used.
    Some(filesystem_usage(mount).unwrap_or((total.saturating_sub(available), total)))
}

/// The mount that most specifically contains `path`, with its payload.
fn select_mount<'a, T, I>(mounts: I, path: &Path) -> Option<(&'a Path, T)>
where
    I: IntoIterator<Item = (&'a Path, T)>,
{
    mounts
        .into_iter()
        .filter(|(mount, _)| path.starts_with(mount))
        .max_by_key(|(mount, _)| mount.components().count())
}

/// (used, total) from statvfs: used is `(f_blocks - f_bfree) * f_frsize`.
#[cfg(unix)]
fn filesystem_usage(mount: &Path) -> Option<(u64, u64)> {
    let stat = nix::sys::statvfs::statvfs(mount).ok()?;
    let fragment = u64::from(stat.fragment_size());
    let blocks = u64::from(stat.blocks());
    let free = u64::from(stat.blocks_free());
    Some((blocks.saturating_sub(free) * fragment, blocks * fragment))
}

#[cfg(not(unix))]
fn filesystem_usage(_mount: &Path) -> Option<(u64, u64)> {
    None
}

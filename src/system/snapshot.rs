use crate::format::percent_of;

#[derive(Clone, Debug, PartialEq)]
pub struct ProcessInfo {
    pub pid: u32,
    pub name: String,
    pub memory_bytes: u64,
}

/// One sampling tick worth of host metrics. Built fresh each tick and
/// dropped once rendered.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricsSnapshot {
    pub cpu_percent: f32,
    pub memory_used: u64,
    pub memory_total: u64,
    pub disk_used: u64,
    pub disk_total: u64,
    pub top_processes: Vec<ProcessInfo>,
}

impl MetricsSnapshot {
    pub fn memory_percent(&self) -> f64 {
        percent_of(self.memory_used, self.memory_total)
    }

    pub fn disk_percent(&self) -> f64 {
        percent_of(self.disk_used, self.disk_total)
    }
}

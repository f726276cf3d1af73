//! Logical view paths and the stale set each kind of mutation produces.

/// Aggregate dashboard served at the site root.
pub const HOME: &str = "/";
/// Dashboard alias page, cached independently of [`HOME`].
pub const DASHBOARD: &str = "/dashboard";
pub const APPOINTMENTS: &str = "/appointments";
pub const INVOICES: &str = "/invoices";
pub const PATIENTS: &str = "/patients";

/// Every path the web layer caches.
pub const CACHED_PATHS: [&str; 5] = [HOME, DASHBOARD, APPOINTMENTS, INVOICES, PATIENTS];

/// The kind of record a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Appointment,
    Invoice,
    Patient,
}

impl EntityKind {
    /// Paths that must be re-rendered after a successful mutation of this kind.
    pub fn stale_paths(self) -> &'static [&'static str] {
        match self {
            EntityKind::Appointment => &[APPOINTMENTS, HOME],
            EntityKind::Invoice => &[INVOICES],
            EntityKind::Patient => &[PATIENTS, DASHBOARD],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Appointment => "appointment",
            EntityKind::Invoice => "invoice",
            EntityKind::Patient => "patient",
        }
    }
}

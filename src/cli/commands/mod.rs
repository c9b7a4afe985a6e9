use anyhow::Result;

use elearn::guard::Guard;
use elearn::session::Session;

pub mod auth;
pub mod config;
pub mod dashboard;
pub mod dosen;
pub mod jadwal;
pub mod materi;
pub mod presensi;

/// Gate for protected commands: resolves the session or fails with a hint.
pub(crate) fn require_session(guard: &Guard) -> Result<Session> {
    guard.require().ok_or_else(|| {
        anyhow::anyhow!("Not logged in. Run `elearn login --username <user>` first.")
    })
}

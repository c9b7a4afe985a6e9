//! Dashboard command handlers.

use anyhow::Result;

use elearn::api::ApiClient;
use elearn::guard::Guard;

pub async fn summary(guard: &Guard, client: &ApiClient) -> Result<()> {
    super::require_session(guard)?;

    let summary = client.dashboard_summary().await?;

    println!("Dashboard");
    println!("  Lecturers:        {}", summary.total_admin);
    println!("  Students:         {}", summary.total_mahasiswa);
    println!("  Courses:          {}", summary.total_mata_kuliah);
    println!("  Classes:          {}", summary.total_kelas);
    println!("  Materials:        {}", summary.total_materi);
    println!("  Sessions today:   {}", summary.presensi_hari_ini);

    Ok(())
}

//! Schedule command handlers.

use anyhow::Result;

use elearn::api::ApiClient;
use elearn::guard::Guard;

pub async fn list(guard: &Guard, client: &ApiClient) -> Result<()> {
    super::require_session(guard)?;

    let schedule = client.my_course_classes().await?;
    if schedule.is_empty() {
        println!("No course classes assigned.");
        return Ok(());
    }

    println!(
        "{:<8} {:<10} {:<30} {:<12} {:<10} STATUS",
        "ID", "KODE", "COURSE", "CLASS", "SEMESTER"
    );
    for c in schedule {
        println!(
            "{:<8} {:<10} {:<30} {:<12} {:<10} {}",
            c.id_kelas_mk,
            c.kode_mk,
            c.nama_mk.as_deref().unwrap_or("-"),
            c.nama_kelas.as_deref().unwrap_or("-"),
            c.semester_aktif,
            c.status
        );
    }

    Ok(())
}

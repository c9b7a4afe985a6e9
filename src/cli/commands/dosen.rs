//! Lecturer command handlers.

use anyhow::Result;

use elearn::api::ApiClient;
use elearn::api::types::NewAssignment;
use elearn::guard::Guard;

pub async fn list(guard: &Guard, client: &ApiClient) -> Result<()> {
    super::require_session(guard)?;

    let dosen = client.list_dosen().await?;
    if dosen.is_empty() {
        println!("No lecturers found.");
        return Ok(());
    }

    println!("{:<6} {:<20} {:<30} EMAIL", "ID", "NIP", "NAME");
    for d in dosen {
        println!(
            "{:<6} {:<20} {:<30} {}",
            d.id_dosen,
            d.nip,
            d.nama_dosen,
            d.email_dosen.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub async fn assignments(guard: &Guard, client: &ApiClient, id_dosen: i64) -> Result<()> {
    super::require_session(guard)?;

    let assignments = client.dosen_assignments(id_dosen).await?;
    if assignments.is_empty() {
        println!("No assignments for lecturer {id_dosen}.");
        return Ok(());
    }

    println!(
        "{:<8} {:<10} {:<30} {:<12} {:<10} SEMESTER",
        "ID", "KODE", "COURSE", "CLASS", "YEAR"
    );
    for a in assignments {
        println!(
            "{:<8} {:<10} {:<30} {:<12} {:<10} {}",
            a.id_kelas_mk,
            a.kode_mk,
            a.nama_mk.as_deref().unwrap_or("-"),
            a.nama_kelas.as_deref().unwrap_or("-"),
            a.tahun_ajaran,
            a.semester_aktif
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub async fn assign(
    guard: &Guard,
    client: &ApiClient,
    id_dosen: i64,
    kode_mk: &str,
    id_kelas: i64,
    tahun_ajaran: &str,
    semester: &str,
) -> Result<()> {
    super::require_session(guard)?;

    let assignment = NewAssignment::new(id_dosen, kode_mk, id_kelas, tahun_ajaran, semester);
    let created = client.create_assignment(&assignment).await?;

    println!(
        "✓ Assignment added (id {}): {} -> {} {}",
        created.id_kelas_mk,
        created.nama_dosen.as_deref().unwrap_or("lecturer"),
        created.kode_mk,
        created.nama_kelas.as_deref().unwrap_or("")
    );

    Ok(())
}

pub async fn unassign(guard: &Guard, client: &ApiClient, id_kelas_mk: i64) -> Result<()> {
    super::require_session(guard)?;

    client.delete_assignment(id_kelas_mk).await?;
    println!("✓ Assignment {id_kelas_mk} removed");

    Ok(())
}

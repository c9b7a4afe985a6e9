//! Attendance command handlers.

use anyhow::Result;
use chrono::NaiveDate;

use elearn::api::ApiClient;
use elearn::guard::Guard;

pub async fn list(guard: &Guard, client: &ApiClient) -> Result<()> {
    super::require_session(guard)?;

    let sessions = client.presensi_list().await?;
    if sessions.is_empty() {
        println!("No attendance sessions found.");
        return Ok(());
    }

    println!(
        "{:<10} {:<12} {:<10} {:<25} {:<12} {:>7} {:>7} {:>7}",
        "KODE", "DATE", "MEETING", "COURSE", "CLASS", "TOTAL", "HADIR", "ALPA"
    );
    for s in sessions {
        println!(
            "{:<10} {:<12} {:<10} {:<25} {:<12} {:>7} {:>7} {:>7}",
            s.kode_mk, s.tanggal, s.pertemuan, s.matkul, s.kelas, s.total_mhs, s.hadir, s.alpa
        );
    }

    Ok(())
}

pub async fn detail(
    guard: &Guard,
    client: &ApiClient,
    kode_mk: &str,
    tanggal: NaiveDate,
    pertemuan: i32,
) -> Result<()> {
    super::require_session(guard)?;

    let rows = client.presensi_detail(kode_mk, tanggal, pertemuan).await?;
    if rows.is_empty() {
        println!("No attendance records for {kode_mk} meeting {pertemuan} on {tanggal}.");
        return Ok(());
    }

    println!("{:<14} {:<30} {:<8} RECORDED", "NIM", "NAME", "STATUS");
    for r in rows {
        let recorded = r
            .waktu_input
            .map_or_else(|| "-".to_string(), |t| t.format("%H:%M:%S").to_string());
        println!(
            "{:<14} {:<30} {:<8} {}",
            r.nim, r.nama_mahasiswa, r.status, recorded
        );
    }

    Ok(())
}

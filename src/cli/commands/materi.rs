//! Course material command handlers.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use elearn::api::ApiClient;
use elearn::api::types::NewMateri;
use elearn::guard::Guard;

/// Arguments for `materi upload`.
#[derive(clap::Args, Debug)]
pub struct UploadArgs {
    /// Course code
    #[arg(long = "kode-mk")]
    pub kode_mk: String,

    /// Class id
    #[arg(long)]
    pub kelas: i64,

    /// Teaching week (1-16)
    #[arg(long)]
    pub minggu: i32,

    /// Material title
    #[arg(long)]
    pub judul: String,

    /// Optional description
    #[arg(long)]
    pub deskripsi: Option<String>,

    /// Path to a PDF to attach
    #[arg(long)]
    pub file: Option<PathBuf>,
}

pub async fn list(guard: &Guard, client: &ApiClient, kode_mk: &str, id_kelas: i64) -> Result<()> {
    super::require_session(guard)?;

    let materi = client.list_materi(kode_mk, id_kelas).await?;
    if materi.is_empty() {
        println!("No materials for {kode_mk} in class {id_kelas}.");
        return Ok(());
    }

    println!("{:<6} {:<6} {:<40} FILE", "ID", "WEEK", "TITLE");
    for m in materi {
        println!(
            "{:<6} {:<6} {:<40} {}",
            m.id_materi,
            m.minggu,
            m.judul,
            m.file_pdf.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}

pub async fn upload(guard: &Guard, client: &ApiClient, args: UploadArgs) -> Result<()> {
    super::require_session(guard)?;

    let pdf = match &args.file {
        Some(path) => {
            let bytes =
                fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("materi.pdf")
                .to_string();
            Some((filename, bytes))
        }
        None => None,
    };

    let materi = NewMateri {
        kode_mk: args.kode_mk,
        id_kelas: args.kelas,
        minggu: args.minggu,
        judul: args.judul,
        deskripsi: args.deskripsi,
    };
    let created = client.upload_materi(&materi, pdf).await?;

    println!(
        "✓ Material '{}' uploaded (week {}, id {})",
        created.judul, created.minggu, created.id_materi
    );
    if let Some(file) = created.file_pdf {
        println!("  Stored file: {file}");
    }

    Ok(())
}

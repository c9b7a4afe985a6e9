//! Request and response schemas for the elearn REST API.
//!
//! Response fields are defaulted liberally: the backend decorates several
//! records with optional joined columns (lecturer names, class names) that
//! older deployments omit.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::session::UserProfile;

/// `POST /auth/login` request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /auth/login` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub user: UserProfile,
}

/// `GET /dashboard/superadmin/summary` response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_admin: u64,
    #[serde(default)]
    pub total_mahasiswa: u64,
    #[serde(default)]
    pub total_mata_kuliah: u64,
    #[serde(default)]
    pub total_kelas: u64,
    #[serde(default)]
    pub total_materi: u64,
    /// Distinct attendance sessions opened today
    #[serde(default)]
    pub presensi_hari_ini: u64,
}

/// Lecturer record (`GET /dosen`).
#[derive(Debug, Clone, Deserialize)]
pub struct Dosen {
    pub id_dosen: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    pub nip: String,
    pub nama_dosen: String,
    #[serde(default)]
    pub email_dosen: Option<String>,
    #[serde(default)]
    pub no_hp: Option<String>,
}

/// Class record (`GET /kelas`).
#[derive(Debug, Clone, Deserialize)]
pub struct Kelas {
    pub id_kelas: i64,
    pub nama_kelas: String,
    #[serde(default)]
    pub prodi: Option<String>,
    #[serde(default)]
    pub tahun_angkatan: Option<i32>,
    #[serde(default)]
    pub golongan: Option<String>,
}

/// Course record (`GET /mata-kuliah`).
#[derive(Debug, Clone, Deserialize)]
pub struct MataKuliah {
    pub kode_mk: String,
    pub nama_mk: String,
    #[serde(default)]
    pub sks: Option<i32>,
    #[serde(default)]
    pub semester: Option<i32>,
    #[serde(default)]
    pub deskripsi: Option<String>,
}

/// A course taught in a class by a lecturer (kelas-mata-kuliah link).
#[derive(Debug, Clone, Deserialize)]
pub struct CourseClass {
    pub id_kelas_mk: i64,
    pub kode_mk: String,
    pub id_kelas: i64,
    pub id_dosen: i64,
    #[serde(default)]
    pub tahun_ajaran: String,
    #[serde(default)]
    pub semester_aktif: String,
    #[serde(default)]
    pub status: String,
    // Joined display columns
    #[serde(default)]
    pub nama_mk: Option<String>,
    #[serde(default)]
    pub nama_kelas: Option<String>,
    #[serde(default)]
    pub nama_dosen: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// `POST /kelas-mata-kuliah` request body (lecturer assignment).
#[derive(Debug, Clone, Serialize)]
pub struct NewAssignment {
    pub id_dosen: i64,
    pub kode_mk: String,
    pub id_kelas: i64,
    pub tahun_ajaran: String,
    pub semester_aktif: String,
    pub status: String,
}

impl NewAssignment {
    /// Creates an assignment with the backend's default status of "Aktif".
    pub fn new(
        id_dosen: i64,
        kode_mk: impl Into<String>,
        id_kelas: i64,
        tahun_ajaran: impl Into<String>,
        semester_aktif: impl Into<String>,
    ) -> Self {
        Self {
            id_dosen,
            kode_mk: kode_mk.into(),
            id_kelas,
            tahun_ajaran: tahun_ajaran.into(),
            semester_aktif: semester_aktif.into(),
            status: "Aktif".to_string(),
        }
    }
}

/// Course material record (`GET /materi`).
#[derive(Debug, Clone, Deserialize)]
pub struct Materi {
    pub id_materi: i64,
    pub kode_mk: String,
    pub id_kelas: i64,
    pub minggu: i32,
    pub judul: String,
    #[serde(default)]
    pub deskripsi: Option<String>,
    #[serde(default)]
    pub file_pdf: Option<String>,
    #[serde(default)]
    pub uploaded_by: Option<i64>,
    #[serde(default)]
    pub nama_dosen: Option<String>,
    #[serde(default)]
    pub tanggal_upload: Option<NaiveDateTime>,
}

/// Fields of a new course material (multipart `POST /materi`).
#[derive(Debug, Clone)]
pub struct NewMateri {
    pub kode_mk: String,
    pub id_kelas: i64,
    /// Teaching week, 1-16
    pub minggu: i32,
    pub judul: String,
    pub deskripsi: Option<String>,
}

/// One attendance session (`GET /presensi/list`).
#[derive(Debug, Clone, Deserialize)]
pub struct PresensiSummary {
    pub id: i64,
    pub kelas: String,
    pub matkul: String,
    pub kode_mk: String,
    pub pertemuan: i32,
    pub tanggal: NaiveDate,
    #[serde(default)]
    pub waktu_mulai: String,
    #[serde(default)]
    pub waktu_selesai: String,
    #[serde(default)]
    pub total_mhs: u64,
    #[serde(default)]
    pub hadir: u64,
    #[serde(default)]
    pub alpa: u64,
}

/// One student's attendance within a session (`GET /presensi/detail/...`).
#[derive(Debug, Clone, Deserialize)]
pub struct PresensiDetail {
    pub id_presensi: i64,
    pub id_mahasiswa: i64,
    pub nim: String,
    pub nama_mahasiswa: String,
    pub status: String,
    #[serde(default)]
    pub waktu_input: Option<NaiveDateTime>,
}

/// Generic status body returned by delete endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusMessage {
    #[serde(default)]
    pub message: String,
}

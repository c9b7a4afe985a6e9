//! Typed endpoint helpers over [`ApiClient`].

use anyhow::{Context, Result};
use chrono::NaiveDate;
use reqwest::{Method, multipart};

use super::types::{
    CourseClass, DashboardSummary, Dosen, Kelas, LoginRequest, LoginResponse, MataKuliah, Materi,
    NewAssignment, NewMateri, PresensiDetail, PresensiSummary, StatusMessage,
};
use super::{ApiClient, ApiError};

impl ApiClient {
    /// Authenticates against `POST /auth/login`.
    ///
    /// Issued outside the session machinery: a 401 here means bad
    /// credentials, not an expired session, so it must not clear state or
    /// redirect. The caller decides what to persist on success.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let url = format!("{}/auth/login", self.base_url);
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("POST {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http_status(status.as_u16(), &body).into());
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::decode("/auth/login", e).into())
    }

    /// Fetches the superadmin dashboard counters.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        self.get("/dashboard/superadmin/summary").await
    }

    /// Lists all lecturers.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn list_dosen(&self) -> Result<Vec<Dosen>> {
        self.get("/dosen").await
    }

    /// Lists all classes.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn list_kelas(&self) -> Result<Vec<Kelas>> {
        self.get("/kelas").await
    }

    /// Lists all courses.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn list_mata_kuliah(&self) -> Result<Vec<MataKuliah>> {
        self.get("/mata-kuliah").await
    }

    /// Lists the course classes assigned to the authenticated lecturer.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn my_course_classes(&self) -> Result<Vec<CourseClass>> {
        self.get("/kelas-mata-kuliah/me").await
    }

    /// Fetches a single course class by id.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn course_class(&self, id_kelas_mk: i64) -> Result<CourseClass> {
        self.get(&format!("/kelas-mata-kuliah/{id_kelas_mk}")).await
    }

    /// Lists the course classes assigned to one lecturer.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn dosen_assignments(&self, id_dosen: i64) -> Result<Vec<CourseClass>> {
        self.get(&format!("/kelas-mata-kuliah/dosen/{id_dosen}"))
            .await
    }

    /// Assigns a lecturer to a course class.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn create_assignment(&self, assignment: &NewAssignment) -> Result<CourseClass> {
        self.post("/kelas-mata-kuliah", assignment).await
    }

    /// Removes a lecturer assignment.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn delete_assignment(&self, id_kelas_mk: i64) -> Result<StatusMessage> {
        self.delete(&format!("/kelas-mata-kuliah/{id_kelas_mk}"))
            .await
    }

    /// Lists materials for a course within a class.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn list_materi(&self, kode_mk: &str, id_kelas: i64) -> Result<Vec<Materi>> {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("kode_mk", kode_mk)
            .append_pair("id_kelas", &id_kelas.to_string())
            .finish();
        self.get(&format!("/materi?{query}")).await
    }

    /// Uploads a new course material, optionally with a PDF attachment.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn upload_materi(
        &self,
        materi: &NewMateri,
        pdf: Option<(String, Vec<u8>)>,
    ) -> Result<Materi> {
        let mut form = multipart::Form::new()
            .text("kode_mk", materi.kode_mk.clone())
            .text("id_kelas", materi.id_kelas.to_string())
            .text("minggu", materi.minggu.to_string())
            .text("judul", materi.judul.clone());
        if let Some(deskripsi) = &materi.deskripsi {
            form = form.text("deskripsi", deskripsi.clone());
        }
        if let Some((filename, bytes)) = pdf {
            let part = multipart::Part::bytes(bytes)
                .file_name(filename)
                .mime_str("application/pdf")
                .context("build file_pdf part")?;
            form = form.part("file_pdf", part);
        }

        self.upload("/materi", form, Method::POST).await
    }

    /// Lists all attendance sessions.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn presensi_list(&self) -> Result<Vec<PresensiSummary>> {
        self.get("/presensi/list").await
    }

    /// Fetches per-student attendance for one session.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn presensi_detail(
        &self,
        kode_mk: &str,
        tanggal: NaiveDate,
        pertemuan_ke: i32,
    ) -> Result<Vec<PresensiDetail>> {
        self.get(&format!(
            "/presensi/detail/{kode_mk}/{}/{pertemuan_ke}",
            tanggal.format("%Y-%m-%d")
        ))
        .await
    }
}

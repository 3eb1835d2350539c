//! HTTP client for the program and lecture catalog API.
//!
//! Each method is a single request against `{base_url}/...`. Path segments are
//! percent-encoded; non-success statuses surface as [`ClientError::Api`], and
//! 404 on single-record reads as [`ClientError::NotFound`].

use std::time::Duration;

use campus_core::entities::{Lecture, NewLecture, NewProgram, Program};
use campus_core::responses::LectureProgress;
use campus_core::stats::{LevelCounts, ProgramCounts};
use campus_core::updates::{LectureUpdate, ProgramUpdate};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::http::{check_found, check_response, decode};

/// HTTP client for the catalog endpoints.
pub struct RestCatalog {
    http: reqwest::Client,
    base_url: String,
}

impl RestCatalog {
    /// Create a client for `base_url` (e.g. `http://localhost:3001/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client` fails to build.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("campus/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        tracing::debug!(path, "GET");
        let resp = check_response(self.http.get(self.url(path)).send().await?).await?;
        decode(resp).await
    }

    async fn get_one<T: DeserializeOwned>(
        &self,
        path: &str,
        entity: &str,
        id: &str,
    ) -> Result<T, ClientError> {
        tracing::debug!(path, "GET");
        let resp = check_found(self.http.get(self.url(path)).send().await?, entity, id).await?;
        decode(resp).await
    }

    async fn send<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&B>,
        entity: &str,
        id: &str,
    ) -> Result<T, ClientError> {
        tracing::debug!(%method, path, "request");
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = check_found(request.send().await?, entity, id).await?;
        decode(resp).await
    }

    async fn delete(&self, path: &str, entity: &str, id: &str) -> Result<(), ClientError> {
        tracing::debug!(path, "DELETE");
        check_found(self.http.delete(self.url(path)).send().await?, entity, id).await?;
        Ok(())
    }

    // ── Lectures ───────────────────────────────────────────────────

    /// `GET /lectures`
    pub async fn lectures(&self) -> Result<Vec<Lecture>, ClientError> {
        self.get("/lectures").await
    }

    /// `GET /lectures/:id`
    pub async fn lecture(&self, id: u64) -> Result<Lecture, ClientError> {
        self.get_one(&format!("/lectures/{id}"), "lecture", &id.to_string())
            .await
    }

    /// `GET /programs/:id/lectures`
    pub async fn program_lectures(&self, program_id: u64) -> Result<Vec<Lecture>, ClientError> {
        self.get(&format!("/programs/{program_id}/lectures")).await
    }

    /// `GET /programs/slug/:slug/lectures`
    pub async fn program_lectures_by_slug(&self, slug: &str) -> Result<Vec<Lecture>, ClientError> {
        self.get(&format!(
            "/programs/slug/{}/lectures",
            urlencoding::encode(slug)
        ))
        .await
    }

    /// `POST /lectures`
    pub async fn create_lecture(&self, lecture: &NewLecture) -> Result<Lecture, ClientError> {
        self.send(reqwest::Method::POST, "/lectures", Some(lecture), "lecture", "new")
            .await
    }

    /// `PUT /lectures/:id`
    pub async fn update_lecture(
        &self,
        id: u64,
        update: &LectureUpdate,
    ) -> Result<Lecture, ClientError> {
        self.send(
            reqwest::Method::PUT,
            &format!("/lectures/{id}"),
            Some(update),
            "lecture",
            &id.to_string(),
        )
        .await
    }

    /// `DELETE /lectures/:id`
    pub async fn delete_lecture(&self, id: u64) -> Result<(), ClientError> {
        self.delete(&format!("/lectures/{id}"), "lecture", &id.to_string())
            .await
    }

    /// `GET /lectures/stats`
    pub async fn lecture_stats(&self) -> Result<LevelCounts, ClientError> {
        self.get("/lectures/stats").await
    }

    /// `POST /lectures/:id/complete`
    pub async fn complete_lecture(&self, id: u64) -> Result<LectureProgress, ClientError> {
        self.send::<(), _>(
            reqwest::Method::POST,
            &format!("/lectures/{id}/complete"),
            None,
            "lecture",
            &id.to_string(),
        )
        .await
    }

    /// `GET /lectures/:id/progress`
    pub async fn lecture_progress(&self, id: u64) -> Result<LectureProgress, ClientError> {
        self.get_one(
            &format!("/lectures/{id}/progress"),
            "lecture",
            &id.to_string(),
        )
        .await
    }

    // ── Programs ───────────────────────────────────────────────────

    /// `GET /programs`
    pub async fn programs(&self) -> Result<Vec<Program>, ClientError> {
        self.get("/programs").await
    }

    /// `GET /programs/stats`
    pub async fn program_stats(&self) -> Result<ProgramCounts, ClientError> {
        self.get("/programs/stats").await
    }

    /// `GET /programs/:id`
    pub async fn program(&self, id: u64) -> Result<Program, ClientError> {
        self.get_one(&format!("/programs/{id}"), "program", &id.to_string())
            .await
    }

    /// `GET /programs/slug/:slug`
    pub async fn program_by_slug(&self, slug: &str) -> Result<Program, ClientError> {
        self.get_one(
            &format!("/programs/slug/{}", urlencoding::encode(slug)),
            "program",
            slug,
        )
        .await
    }

    /// `POST /programs`
    pub async fn create_program(&self, program: &NewProgram) -> Result<Program, ClientError> {
        self.send(reqwest::Method::POST, "/programs", Some(program), "program", "new")
            .await
    }

    /// `PUT /programs/:id`
    pub async fn update_program(
        &self,
        id: u64,
        update: &ProgramUpdate,
    ) -> Result<Program, ClientError> {
        self.send(
            reqwest::Method::PUT,
            &format!("/programs/{id}"),
            Some(update),
            "program",
            &id.to_string(),
        )
        .await
    }

    /// `DELETE /programs/:id`
    pub async fn delete_program(&self, id: u64) -> Result<(), ClientError> {
        self.delete(&format!("/programs/{id}"), "program", &id.to_string())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let client =
            RestCatalog::new("http://localhost:3001/api/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3001/api");
        assert_eq!(client.url("/programs"), "http://localhost:3001/api/programs");
    }
}

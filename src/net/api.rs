//! REST API client for the EduVault backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with credentials
//! attached to every request. Uploads go through `XmlHttpRequest` since
//! `fetch` exposes no upload progress events.
//! Server-side (SSR): stubs returning the offline error, since these
//! endpoints are only meaningful in the browser.
//!
//! One explicitly constructed instance is provided through context; callers
//! receive it by reference instead of mutating a library-wide default.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{NewReminder, Reminder, StoredFile, Subject, User};

/// Shared HTTP client with a fixed base path and credential forwarding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    /// `base` is prepended to every request path, e.g. `/api`.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// Direct-download link for a stored file; rendered as a plain anchor.
    pub fn download_url(&self, id: i64) -> String {
        self.url(&format!("/files/{id}/download"))
    }

    /// Fetch the authenticated account from `GET /auth/me`.
    /// Any failure means "not signed in" to the caller.
    pub async fn me(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json("/auth/me").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    /// Establish a session via `POST /auth/login`.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_unit(
                "/auth/login",
                &serde_json::json!({ "email": email, "password": password }),
            )
            .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password);
            Err(ApiError::unavailable())
        }
    }

    /// Create an account via `POST /auth/signup`.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_unit(
                "/auth/signup",
                &serde_json::json!({
                    "email": email,
                    "password": password,
                    "fullName": full_name,
                }),
            )
            .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email, password, full_name);
            Err(ApiError::unavailable())
        }
    }

    /// End the session via `POST /auth/logout`.
    pub async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_empty("/auth/logout").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    pub async fn subjects(&self) -> Result<Vec<Subject>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json("/subjects").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    pub async fn subject_count(&self) -> Result<u64, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json("/subjects/count").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    pub async fn create_subject(&self, name: &str) -> Result<Subject, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json("/subjects", &serde_json::json!({ "name": name }))
                .await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            Err(ApiError::unavailable())
        }
    }

    /// Reminders sorted soonest-due first, the only ordering the UI shows.
    pub async fn reminders(&self) -> Result<Vec<Reminder>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let mut list: Vec<Reminder> = self.get_json("/reminders").await?;
            super::types::sort_by_due_date(&mut list);
            Ok(list)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    pub async fn reminder_count(&self) -> Result<u64, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json("/reminders/count").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    /// The soonest-due reminder, if any. The backend answers 204 when the
    /// list is empty.
    pub async fn next_reminder(&self) -> Result<Option<Reminder>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.url("/reminders/next"))
                .credentials(web_sys::RequestCredentials::Include)
                .send()
                .await
                .map_err(|e| ApiError::from_transport(&e.to_string()))?;
            if resp.status() == 204 {
                return Ok(None);
            }
            if !resp.ok() {
                return Err(Self::response_error(&resp).await);
            }
            resp.json::<Reminder>()
                .await
                .map(Some)
                .map_err(|e| ApiError::from_transport(&e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    pub async fn create_reminder(&self, reminder: &NewReminder) -> Result<Reminder, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.post_json("/reminders", reminder).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = reminder;
            Err(ApiError::unavailable())
        }
    }

    /// List uploaded files, optionally restricted to one subject.
    pub async fn files(&self, subject_id: Option<i64>) -> Result<Vec<StoredFile>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let path = match subject_id {
                Some(id) => format!("/files?subjectId={id}"),
                None => "/files".to_owned(),
            };
            self.get_json(&path).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = subject_id;
            Err(ApiError::unavailable())
        }
    }

    pub async fn file_count(&self) -> Result<u64, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.get_json("/files/count").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::unavailable())
        }
    }

    /// Upload one file as `multipart/form-data` via `POST /files/upload`,
    /// reporting completion as a 0-100 percentage. The browser sets the
    /// multipart boundary itself.
    #[cfg(feature = "hydrate")]
    pub async fn upload_file(
        &self,
        file: &web_sys::File,
        subject_id: Option<i64>,
        on_progress: impl Fn(u32) + 'static,
    ) -> Result<(), ApiError> {
        use futures::channel::oneshot;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::prelude::Closure;

        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::new("could not build upload form"))?;
        form.append_with_blob("file", file)
            .map_err(|_| ApiError::new("could not build upload form"))?;
        if let Some(id) = subject_id {
            let _ = form.append_with_str("subjectId", &id.to_string());
        }

        let xhr = web_sys::XmlHttpRequest::new()
            .map_err(|_| ApiError::new("could not build upload request"))?;
        xhr.open("POST", &self.url("/files/upload"))
            .map_err(|_| ApiError::new("could not build upload request"))?;
        xhr.set_with_credentials(true);

        let progress = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(
            move |ev: web_sys::ProgressEvent| {
                if let Some(pct) = progress_percent(ev.loaded(), ev.total()) {
                    on_progress(pct);
                }
            },
        );
        xhr.upload()
            .map_err(|_| ApiError::new("could not build upload request"))?
            .set_onprogress(Some(progress.as_ref().unchecked_ref()));

        let (done_tx, done_rx) = oneshot::channel::<()>();
        let mut done_tx = Some(done_tx);
        let onloadend = Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = done_tx.take() {
                let _ = tx.send(());
            }
        });
        xhr.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));

        xhr.send_with_opt_form_data(Some(&form))
            .map_err(|_| ApiError::from_transport("Network Error"))?;
        let _ = done_rx.await;

        // The callbacks must outlive the request; drop them only now.
        drop(progress);
        drop(onloadend);

        let status = xhr.status().unwrap_or(0);
        if (200..300).contains(&status) {
            Ok(())
        } else if status == 0 {
            Err(ApiError::from_transport("Network Error"))
        } else {
            let body = xhr.response_text().ok().flatten().unwrap_or_default();
            Err(ApiError::from_response_body(&body))
        }
    }
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = gloo_net::http::Request::get(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e.to_string()))?;
        Self::json_body(resp).await
    }

    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = gloo_net::http::Request::post(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::from_transport(&e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e.to_string()))?;
        Self::json_body(resp).await
    }

    /// POST with a JSON body, discarding any response payload.
    async fn post_unit<B: serde::Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let resp = gloo_net::http::Request::post(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include)
            .json(body)
            .map_err(|e| ApiError::from_transport(&e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e.to_string()))?;
        Self::ensure_ok(resp).await
    }

    /// POST with no body, discarding any response payload.
    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let resp = gloo_net::http::Request::post(&self.url(path))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e.to_string()))?;
        Self::ensure_ok(resp).await
    }

    async fn json_body<T: serde::de::DeserializeOwned>(
        resp: gloo_net::http::Response,
    ) -> Result<T, ApiError> {
        if !resp.ok() {
            return Err(Self::response_error(&resp).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::from_transport(&e.to_string()))
    }

    async fn ensure_ok(resp: gloo_net::http::Response) -> Result<(), ApiError> {
        if resp.ok() {
            Ok(())
        } else {
            Err(Self::response_error(&resp).await)
        }
    }

    async fn response_error(resp: &gloo_net::http::Response) -> ApiError {
        let body = resp.text().await.unwrap_or_default();
        ApiError::from_response_body(&body)
    }
}

/// Whole-number completion percentage for a transfer; `None` until the
/// total size is known.
pub fn progress_percent(loaded: f64, total: f64) -> Option<u32> {
    if total <= 0.0 {
        return None;
    }
    let pct = (loaded * 100.0 / total).round();
    Some(pct.clamp(0.0, 100.0) as u32)
}

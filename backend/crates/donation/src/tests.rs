//! Unit tests for Donation crate
//!
//! Use cases and routers run against an in-memory repository and a
//! recording image host.

#[cfg(test)]
mod support {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use kernel::id::DonationId;

    use crate::domain::entities::Donation;
    use crate::domain::repository::{DonationRepository, ImageHost, UploadError};
    use crate::domain::value_objects::{DonationStatus, ProofImage};
    use crate::error::DonationResult;

    #[derive(Clone, Default)]
    pub struct InMemoryDonationRepository {
        donations: Arc<Mutex<Vec<Donation>>>,
        fail_writes: Arc<AtomicBool>,
    }

    impl InMemoryDonationRepository {
        pub fn failing() -> Self {
            let repo = Self::default();
            repo.fail_writes.store(true, Ordering::SeqCst);
            repo
        }

        pub fn len(&self) -> usize {
            self.donations.lock().unwrap().len()
        }

        pub fn insert(&self, donation: Donation) {
            self.donations.lock().unwrap().push(donation);
        }
    }

    impl DonationRepository for InMemoryDonationRepository {
        async fn create(&self, donation: &Donation) -> DonationResult<()> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(sqlx::Error::PoolTimedOut.into());
            }
            self.donations.lock().unwrap().push(donation.clone());
            Ok(())
        }

        async fn list(&self) -> DonationResult<Vec<Donation>> {
            let mut donations = self.donations.lock().unwrap().clone();
            donations.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(donations)
        }

        async fn update_status(
            &self,
            donation_id: &DonationId,
            status: DonationStatus,
        ) -> DonationResult<Option<Donation>> {
            let mut donations = self.donations.lock().unwrap();
            Ok(donations
                .iter_mut()
                .find(|d| &d.donation_id == donation_id)
                .map(|d| {
                    d.status = status;
                    d.clone()
                }))
        }
    }

    /// (mime, byte length, folder) per upload call
    pub type UploadCall = (String, usize, String);

    #[derive(Clone, Default)]
    pub struct RecordingImageHost {
        calls: Arc<Mutex<Vec<UploadCall>>>,
        fail: Arc<AtomicBool>,
    }

    impl RecordingImageHost {
        pub fn failing() -> Self {
            let host = Self::default();
            host.fail.store(true, Ordering::SeqCst);
            host
        }

        pub fn calls(&self) -> Vec<UploadCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl ImageHost for RecordingImageHost {
        async fn upload(&self, image: ProofImage, folder: &str) -> Result<String, UploadError> {
            let image_type = image.image_type();
            let mut calls = self.calls.lock().unwrap();
            calls.push((image_type.mime().to_owned(), image.len(), folder.to_owned()));

            if self.fail.load(Ordering::SeqCst) {
                return Err(UploadError("status 401: Invalid Signature".into()));
            }
            Ok(format!(
                "https://res.cloudinary.com/test/image/upload/{folder}/{}.{}",
                calls.len(),
                image_type.extension()
            ))
        }
    }
}

#[cfg(test)]
mod submit_tests {
    use std::sync::Arc;

    use super::support::*;
    use crate::application::{DonationConfig, ImageUpload, SubmitDonationInput, SubmitDonationUseCase};
    use crate::domain::value_objects::DonationStatus;
    use crate::error::DonationError;

    fn use_case(
        repo: &InMemoryDonationRepository,
        host: &RecordingImageHost,
    ) -> SubmitDonationUseCase<InMemoryDonationRepository, RecordingImageHost> {
        SubmitDonationUseCase::new(
            Arc::new(repo.clone()),
            Arc::new(host.clone()),
            Arc::new(DonationConfig::default()),
        )
    }

    fn jpeg(len: usize) -> ImageUpload {
        ImageUpload {
            content_type: Some("image/jpeg".into()),
            bytes: vec![0xFF; len],
            oversized: false,
        }
    }

    fn input(name: Option<&str>, amount: Option<&str>, images: Vec<ImageUpload>) -> SubmitDonationInput {
        SubmitDonationInput {
            name: name.map(str::to_string),
            amount: amount.map(str::to_string),
            images,
            submitted_by: None,
        }
    }

    #[tokio::test]
    async fn test_submit_creates_pending_donation() {
        let repo = InMemoryDonationRepository::default();
        let host = RecordingImageHost::default();

        let donation = use_case(&repo, &host)
            .execute(input(Some(" Ali "), Some("500"), vec![jpeg(1024)]))
            .await
            .unwrap();

        assert_eq!(donation.name.as_str(), "Ali");
        assert_eq!(donation.amount.value(), 500.0);
        assert_eq!(donation.status, DonationStatus::Pending);
        assert!(donation.image_url.contains("/donation-proofs/"));
        assert_eq!(repo.len(), 1);
        assert_eq!(
            host.calls(),
            vec![("image/jpeg".to_string(), 1024, "donation-proofs".to_string())]
        );
    }

    #[tokio::test]
    async fn test_long_donor_name_accepted() {
        let repo = InMemoryDonationRepository::default();
        let host = RecordingImageHost::default();
        let long_name = "a".repeat(101);

        let donation = use_case(&repo, &host)
            .execute(input(Some(long_name.as_str()), Some("20"), vec![jpeg(8)]))
            .await
            .unwrap();

        assert_eq!(donation.name.as_str(), long_name);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_amount_rejected_before_upload() {
        for amount in [Some("0"), Some("-5"), Some("abc"), Some(""), None] {
            let repo = InMemoryDonationRepository::default();
            let host = RecordingImageHost::default();

            let err = use_case(&repo, &host)
                .execute(input(Some("Ali"), amount, vec![jpeg(10)]))
                .await
                .unwrap_err();

            assert!(matches!(err, DonationError::InvalidAmount(_)), "{amount:?}");
            assert_eq!(err.status_code(), 400);
            assert!(host.calls().is_empty());
            assert_eq!(repo.len(), 0);
        }
    }

    #[tokio::test]
    async fn test_invalid_name_rejected() {
        let repo = InMemoryDonationRepository::default();
        let host = RecordingImageHost::default();

        for name in [None, Some(""), Some("   ")] {
            let err = use_case(&repo, &host)
                .execute(input(name, Some("10"), vec![jpeg(10)]))
                .await
                .unwrap_err();
            assert!(matches!(err, DonationError::InvalidName));
        }
        assert!(host.calls().is_empty());
    }

    #[tokio::test]
    async fn test_image_problems_never_reach_host() {
        let gif = ImageUpload {
            content_type: Some("image/gif".into()),
            bytes: vec![1; 10],
            oversized: false,
        };
        let cases = vec![
            (vec![], "MissingImage"),
            (vec![gif], "UnsupportedImageType"),
            (vec![jpeg(0)], "EmptyImage"),
            (vec![jpeg(5 * 1024 * 1024 + 1)], "ImageTooLarge"),
            (vec![jpeg(1), jpeg(1)], "TooManyImages"),
        ];

        for (images, expected) in cases {
            let repo = InMemoryDonationRepository::default();
            let host = RecordingImageHost::default();

            let err = use_case(&repo, &host)
                .execute(input(Some("Ali"), Some("500"), images))
                .await
                .unwrap_err();

            let matched = match expected {
                "MissingImage" => matches!(err, DonationError::MissingImage),
                "UnsupportedImageType" => matches!(err, DonationError::UnsupportedImageType(_)),
                "EmptyImage" => matches!(err, DonationError::EmptyImage),
                "ImageTooLarge" => matches!(err, DonationError::ImageTooLarge),
                "TooManyImages" => matches!(err, DonationError::TooManyImages),
                _ => false,
            };
            assert!(matched, "expected {expected}, got {err:?}");
            assert_eq!(err.status_code(), 400);
            assert!(host.calls().is_empty());
            assert_eq!(repo.len(), 0);
        }
    }

    #[tokio::test]
    async fn test_image_at_limit_accepted() {
        let repo = InMemoryDonationRepository::default();
        let host = RecordingImageHost::default();

        let result = use_case(&repo, &host)
            .execute(input(Some("Ali"), Some("1"), vec![jpeg(5 * 1024 * 1024)]))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_upload_failure_persists_nothing() {
        let repo = InMemoryDonationRepository::default();
        let host = RecordingImageHost::failing();

        let err = use_case(&repo, &host)
            .execute(input(Some("Ali"), Some("500"), vec![jpeg(10)]))
            .await
            .unwrap_err();

        assert!(matches!(err, DonationError::Upload(_)));
        assert_eq!(err.status_code(), 500);
        assert_eq!(host.calls().len(), 1);
        assert_eq!(repo.len(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_after_upload() {
        let repo = InMemoryDonationRepository::failing();
        let host = RecordingImageHost::default();

        let err = use_case(&repo, &host)
            .execute(input(Some("Ali"), Some("500"), vec![jpeg(10)]))
            .await
            .unwrap_err();

        assert!(matches!(err, DonationError::Persist(_)));
        assert_eq!(err.status_code(), 500);
        assert_eq!(host.calls().len(), 1);
    }
}

#[cfg(test)]
mod update_status_tests {
    use std::sync::Arc;

    use kernel::amount::Amount;

    use super::support::*;
    use crate::application::{UpdateStatusInput, UpdateStatusUseCase};
    use crate::domain::entities::Donation;
    use crate::domain::value_objects::{DonationStatus, DonorName};
    use crate::error::DonationError;

    fn seeded() -> (InMemoryDonationRepository, Donation) {
        let repo = InMemoryDonationRepository::default();
        let donation = Donation::new(
            DonorName::new("Ali").unwrap(),
            Amount::new(500.0).unwrap(),
            "https://img.example/donation-proofs/1.jpg".into(),
        );
        repo.insert(donation.clone());
        (repo, donation)
    }

    fn input(id: &str, status: Option<&str>) -> UpdateStatusInput {
        UpdateStatusInput {
            donation_id: id.to_string(),
            status: status.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_update_status_idempotent() {
        let (repo, donation) = seeded();
        let use_case = UpdateStatusUseCase::new(Arc::new(repo));
        let id = donation.donation_id.to_string();

        for _ in 0..2 {
            let updated = use_case.execute(input(&id, Some("Disturbed"))).await.unwrap();
            assert_eq!(updated.status, DonationStatus::Disturbed);
        }

        let reverted = use_case.execute(input(&id, Some("Pending"))).await.unwrap();
        assert_eq!(reverted.status, DonationStatus::Pending);
    }

    #[tokio::test]
    async fn test_invalid_status() {
        let (repo, donation) = seeded();
        let use_case = UpdateStatusUseCase::new(Arc::new(repo));
        let id = donation.donation_id.to_string();

        for status in [None, Some("Approved"), Some("pending"), Some("")] {
            let err = use_case.execute(input(&id, status)).await.unwrap_err();
            assert!(matches!(err, DonationError::InvalidStatus));
        }

        // Status is checked first
        let err = use_case
            .execute(input("not-a-uuid", Some("Approved")))
            .await
            .unwrap_err();
        assert!(matches!(err, DonationError::InvalidStatus));
    }

    #[tokio::test]
    async fn test_unknown_donation() {
        let (repo, _) = seeded();
        let use_case = UpdateStatusUseCase::new(Arc::new(repo));

        let err = use_case
            .execute(input(&kernel::id::DonationId::new().to_string(), Some("Pending")))
            .await
            .unwrap_err();
        assert!(matches!(err, DonationError::NotFound));

        let err = use_case
            .execute(input("65f1c2a9e4b0a1b2c3d4e5f6", Some("Pending")))
            .await
            .unwrap_err();
        assert!(matches!(err, DonationError::NotFound));
        assert_eq!(err.status_code(), 404);
    }
}

#[cfg(test)]
mod router_tests {
    use auth::models::user_role::UserRole;
    use auth::{AuthConfig, AuthGate};
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use kernel::id::UserId;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::support::*;
    use crate::application::DonationConfig;
    use crate::presentation::router::{admin_donation_router_generic, donation_router_generic};

    const BOUNDARY: &str = "donation-test-boundary";

    struct Setup {
        app: Router,
        repo: InMemoryDonationRepository,
        host: RecordingImageHost,
        user_token: String,
        admin_token: String,
    }

    fn setup() -> Setup {
        let repo = InMemoryDonationRepository::default();
        let host = RecordingImageHost::default();
        let gate = AuthGate::from_config(&AuthConfig::with_secret("donation-test-secret"));

        let user_token = gate.tokens().issue(&UserId::new(), UserRole::User).unwrap();
        let admin_token = gate.tokens().issue(&UserId::new(), UserRole::Admin).unwrap();

        let app = Router::new()
            .nest(
                "/api/donation",
                donation_router_generic(
                    repo.clone(),
                    host.clone(),
                    DonationConfig::default(),
                    gate.clone(),
                ),
            )
            .nest(
                "/api/admin",
                admin_donation_router_generic(repo.clone(), gate),
            );

        Setup {
            app,
            repo,
            host,
            user_token,
            admin_token,
        }
    }

    fn multipart_body(name: &str, amount: &str, image: Option<(&str, Vec<u8>)>) -> Vec<u8> {
        let mut body = Vec::new();
        for (field, value) in [("name", name), ("amount", amount)] {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((mime, bytes)) = image {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"imageString\"; filename=\"proof\"\r\nContent-Type: {mime}\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(&bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn submit_request(token: Option<&str>, body: Vec<u8>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/donation")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            );
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::from(body)).unwrap()
    }

    fn admin_request(method: &str, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(header::CONTENT_TYPE, "application/json");
        match body {
            Some(body) => builder.body(Body::from(body.to_string())).unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_submit_requires_token() {
        let s = setup();
        let body = multipart_body("Ali", "500", Some(("image/jpeg", vec![1; 16])));

        let response = s.app.oneshot(submit_request(None, body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(s.host.calls().is_empty());
        assert_eq!(s.repo.len(), 0);
    }

    #[tokio::test]
    async fn test_submit_review_and_list() {
        let s = setup();

        // Submit
        let body = multipart_body("Ali", "500", Some(("image/jpeg", vec![1; 16])));
        let response = s
            .app
            .clone()
            .oneshot(submit_request(Some(&s.user_token), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;
        let donation = &created["donation"];
        assert_eq!(donation["name"], "Ali");
        assert_eq!(donation["amount"], 500.0);
        assert_eq!(donation["status"], "Pending");
        assert!(donation["imageString"].as_str().unwrap().contains("donation-proofs"));
        assert!(donation["createdAt"].is_string());
        let id = donation["id"].as_str().unwrap().to_string();

        // Approve
        let response = s
            .app
            .clone()
            .oneshot(admin_request(
                "PATCH",
                &format!("/api/admin/donations/{id}"),
                &s.admin_token,
                Some(json!({"status": "Disturbed"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "Disturbed");

        // List
        let response = s
            .app
            .oneshot(admin_request("GET", "/api/admin/donations", &s.admin_token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let list = body_json(response).await;
        assert_eq!(list[0]["id"], id.as_str());
        assert_eq!(list[0]["status"], "Disturbed");
    }

    #[tokio::test]
    async fn test_submit_rejects_gif() {
        let s = setup();
        let body = multipart_body("Ali", "500", Some(("image/gif", vec![1; 16])));

        let response = s
            .app
            .oneshot(submit_request(Some(&s.user_token), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "Only JPEG, PNG, or JPG images are allowed"
        );
        assert!(s.host.calls().is_empty());
    }

    #[tokio::test]
    async fn test_submit_without_image() {
        let s = setup();
        let body = multipart_body("Ali", "500", None);

        let response = s
            .app
            .oneshot(submit_request(Some(&s.user_token), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "Image is required");
        assert_eq!(s.repo.len(), 0);
    }

    #[tokio::test]
    async fn test_submit_oversized_image() {
        let s = setup();
        let body = multipart_body(
            "Ali",
            "500",
            Some(("image/png", vec![7; 5 * 1024 * 1024 + 1])),
        );

        let response = s
            .app
            .oneshot(submit_request(Some(&s.user_token), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "File too large");
        assert!(s.host.calls().is_empty());
    }

    #[tokio::test]
    async fn test_body_over_limit_reported_before_fields() {
        let s = setup();
        // Blank name and amount: the size problem still wins
        let body = multipart_body(
            "",
            "",
            Some(("image/png", vec![7; 7 * 1024 * 1024])),
        );

        let response = s
            .app
            .oneshot(submit_request(Some(&s.user_token), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["message"], "File too large");
        assert!(s.host.calls().is_empty());
        assert_eq!(s.repo.len(), 0);
    }

    #[tokio::test]
    async fn test_admin_routes_reject_user() {
        let s = setup();

        let response = s
            .app
            .clone()
            .oneshot(admin_request("GET", "/api/admin/donations", &s.user_token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let response = s
            .app
            .oneshot(admin_request(
                "PATCH",
                &format!("/api/admin/donations/{}", kernel::id::DonationId::new()),
                &s.user_token,
                Some(json!({"status": "Disturbed"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_patch_invalid_status_and_unknown_id() {
        let s = setup();

        let response = s
            .app
            .clone()
            .oneshot(admin_request(
                "PATCH",
                "/api/admin/donations/whatever",
                &s.admin_token,
                Some(json!({"status": 3})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = s
            .app
            .oneshot(admin_request(
                "PATCH",
                "/api/admin/donations/whatever",
                &s.admin_token,
                Some(json!({"status": "Pending"})),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["message"], "Donation not found");
    }
}

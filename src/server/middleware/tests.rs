//! Middleware gate tests

#[cfg(test)]
mod tests {
    use crate::auth::{AuthService, PrincipalView, RevocationSet, TokenService};
    use crate::config::{AppConfig, AuthConfig, StorageConfig};
    use crate::domain::{Department, Role, User};
    use crate::server::middleware::{PermissionPolicy, RequireAuth, RequirePermission};
    use crate::server::AppState;
    use crate::storage::{StorageLayer, UserStore};
    use actix_web::body;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App, HttpResponse};
    use std::sync::Arc;
    use uuid::Uuid;

    const TEST_POLICY: PermissionPolicy = PermissionPolicy::new(
        &[Role::Administrator, Role::Manager],
        &[Department::Sales, Department::Marketing],
    );

    fn user_with(username: &str, roles: Vec<Role>, department: Department) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: "$argon2id$test-hash".to_string(),
            roles,
            department,
        }
    }

    fn principal_of(user: &User) -> PrincipalView {
        PrincipalView {
            username: user.username.clone(),
            roles: user.roles.clone(),
            department: user.department,
        }
    }

    /// Build app state over empty stores, then insert the given users.
    async fn state_with_users(seed: Vec<User>) -> web::Data<AppState> {
        let config = AppConfig {
            auth: AuthConfig {
                jwt_secret: "middleware-test-secret".to_string(),
                token_ttl_secs: 3600,
            },
            storage: StorageConfig {
                users_seed_path: "missing-users.json".into(),
                courses_seed_path: "missing-courses.json".into(),
            },
            ..AppConfig::default()
        };

        let storage = StorageLayer::new(&config.storage).await;
        for user in seed {
            storage.users.insert(user).await.unwrap();
        }

        let users: Arc<dyn UserStore> = storage.users.clone();
        let revoked = Arc::new(RevocationSet::new());
        let tokens = Arc::new(TokenService::new(&config.auth, users.clone(), revoked));
        let auth = AuthService::new(users, tokens);

        web::Data::new(AppState::new(config, auth, storage))
    }

    async fn probe() -> HttpResponse {
        HttpResponse::Ok().finish()
    }

    /// Render a gate rejection the way the HTTP layer would.
    async fn render_rejection(err: actix_web::Error) -> (StatusCode, serde_json::Value) {
        let resp = HttpResponse::from_error(err);
        let status = resp.status();
        let bytes = body::to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    // ==================== Policy Evaluation ====================

    // `use actix_web::test` shadows the built-in `#[test]` in this module's
    // macro namespace, so the sync tests name the built-in attribute by path.
    #[::core::prelude::v1::test]
    fn test_policy_requires_one_matching_role() {
        let admin = user_with("admin", vec![Role::Administrator], Department::Sales);
        let consultant = user_with("consultant", vec![Role::Consultant], Department::Sales);
        let multi = user_with(
            "multi",
            vec![Role::Consultant, Role::Manager],
            Department::Sales,
        );

        assert!(TEST_POLICY.allows(&principal_of(&admin)));
        assert!(!TEST_POLICY.allows(&principal_of(&consultant)));
        assert!(TEST_POLICY.allows(&principal_of(&multi)));
    }

    #[::core::prelude::v1::test]
    fn test_policy_requires_both_conditions() {
        let wrong_department =
            user_with("admin", vec![Role::Administrator], Department::Accounting);
        let wrong_role = user_with("consultant", vec![Role::Consultant], Department::Sales);

        assert!(!TEST_POLICY.allows(&principal_of(&wrong_department)));
        assert!(!TEST_POLICY.allows(&principal_of(&wrong_role)));
    }

    // ==================== Gated Requests ====================

    #[actix_web::test]
    async fn test_missing_header_rejected_before_policy() {
        let state = state_with_users(vec![]).await;
        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/probe")
                    .wrap(RequirePermission::new(TEST_POLICY))
                    .wrap(RequireAuth)
                    .route("", web::get().to(probe)),
            ),
        )
        .await;

        let req = test::TestRequest::get().uri("/probe").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        let (status, body) = render_rejection(err).await;

        // 401 rather than 403 shows the authentication gate ran first.
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "UNAUTHORIZED");
        assert_eq!(body["message"], "No Token Provided");
    }

    #[actix_web::test]
    async fn test_allowed_principal_passes_both_gates() {
        let user = user_with("alice", vec![Role::Administrator], Department::Sales);
        let state = state_with_users(vec![user.clone()]).await;
        let token = state.auth.tokens().issue(&user).unwrap();

        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/probe")
                    .wrap(RequirePermission::new(TEST_POLICY))
                    .wrap(RequireAuth)
                    .route("", web::get().to(probe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(("Authorization", token.as_str()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_disallowed_principal_forbidden() {
        let user = user_with("carol", vec![Role::Consultant], Department::Accounting);
        let state = state_with_users(vec![user.clone()]).await;
        let token = state.auth.tokens().issue(&user).unwrap();

        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/probe")
                    .wrap(RequirePermission::new(TEST_POLICY))
                    .wrap(RequireAuth)
                    .route("", web::get().to(probe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(("Authorization", token.as_str()))
            .to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        let (status, body) = render_rejection(err).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"], "FORBIDDEN");
        assert_eq!(body["message"], "Insufficient permissions");
    }

    #[actix_web::test]
    async fn test_revoked_token_rejected() {
        let user = user_with("alice", vec![Role::Administrator], Department::Sales);
        let state = state_with_users(vec![user.clone()]).await;
        let token = state.auth.tokens().issue(&user).unwrap();
        state.auth.tokens().revoke(&token).await.unwrap();

        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/probe")
                    .wrap(RequirePermission::new(TEST_POLICY))
                    .wrap(RequireAuth)
                    .route("", web::get().to(probe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(("Authorization", token.as_str()))
            .to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        let (status, body) = render_rejection(err).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid Token");
    }

    #[actix_web::test]
    async fn test_garbage_header_rejected() {
        let state = state_with_users(vec![]).await;

        let app = test::init_service(
            App::new().app_data(state.clone()).service(
                web::scope("/probe")
                    .wrap(RequirePermission::new(TEST_POLICY))
                    .wrap(RequireAuth)
                    .route("", web::get().to(probe)),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/probe")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();
        let (status, body) = render_rejection(err).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"], "TOKEN_MALFORMED");
    }
}

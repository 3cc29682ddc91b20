//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    auth, form_modules, forms, health, modules, persons, rol_forms, rols, user_rols, users,
};
use super::AppState;
use crate::application::resources::{
    CreateFormModuleRequest, CreateFormRequest, CreateModuleRequest, CreatePersonRequest,
    CreateRolFormRequest, CreateRolRequest, CreateUserRequest, CreateUserRolRequest, FormDto,
    FormModuleDto, ModuleDto, PatchFormModuleRequest, PatchFormRequest, PatchModuleRequest,
    PatchPersonRequest, PatchRolFormRequest, PatchRolRequest, PatchUserRequest,
    PatchUserRolRequest, PersonDto, RolDto, RolFormDto, UpdateFormModuleRequest,
    UpdateFormRequest, UpdateModuleRequest, UpdatePersonRequest, UpdateRolFormRequest,
    UpdateRolRequest, UpdateUserRequest, UpdateUserRolRequest, UserDto, UserRolDto,
};
use crate::application::ServiceRegistry;
use crate::auth::jwt::JwtConfig;
use crate::auth::middleware::{auth_middleware, AuthState};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::validate,
        auth::logout,
        // Persons
        persons::list_persons,
        persons::get_person,
        persons::create_person,
        persons::update_person,
        persons::patch_person,
        persons::delete_person,
        persons::soft_delete_person,
        persons::activate_person,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::patch_user,
        users::delete_user,
        users::soft_delete_user,
        users::activate_user,
        users::list_user_roles,
        // Rols
        rols::list_rols,
        rols::get_rol,
        rols::create_rol,
        rols::update_rol,
        rols::patch_rol,
        rols::delete_rol,
        rols::soft_delete_rol,
        rols::activate_rol,
        rols::list_forms_for_rol,
        // Forms
        forms::list_forms,
        forms::get_form,
        forms::create_form,
        forms::update_form,
        forms::patch_form,
        forms::delete_form,
        forms::soft_delete_form,
        forms::activate_form,
        // Modules
        modules::list_modules,
        modules::get_module,
        modules::create_module,
        modules::update_module,
        modules::patch_module,
        modules::delete_module,
        modules::soft_delete_module,
        modules::activate_module,
        modules::list_module_forms,
        // UserRols
        user_rols::list_user_rols,
        user_rols::get_user_rol,
        user_rols::create_user_rol,
        user_rols::update_user_rol,
        user_rols::patch_user_rol,
        user_rols::delete_user_rol,
        user_rols::soft_delete_user_rol,
        user_rols::activate_user_rol,
        // RolForms
        rol_forms::list_rol_forms,
        rol_forms::get_rol_form,
        rol_forms::create_rol_form,
        rol_forms::update_rol_form,
        rol_forms::patch_rol_form,
        rol_forms::delete_rol_form,
        rol_forms::soft_delete_rol_form,
        rol_forms::activate_rol_form,
        rol_forms::list_rol_forms_by_rol,
        rol_forms::list_rol_forms_by_form,
        // FormModules
        form_modules::list_form_modules,
        form_modules::get_form_module,
        form_modules::create_form_module,
        form_modules::update_form_module,
        form_modules::patch_form_module,
        form_modules::delete_form_module,
        form_modules::soft_delete_form_module,
        form_modules::activate_form_module,
    ),
    components(
        schemas(
            // Common
            super::ErrorBody,
            health::HealthResponse,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::TokenInfo,
            // Persons
            PersonDto,
            CreatePersonRequest,
            UpdatePersonRequest,
            PatchPersonRequest,
            // Users
            UserDto,
            CreateUserRequest,
            UpdateUserRequest,
            PatchUserRequest,
            // Rols
            RolDto,
            CreateRolRequest,
            UpdateRolRequest,
            PatchRolRequest,
            // Forms
            FormDto,
            CreateFormRequest,
            UpdateFormRequest,
            PatchFormRequest,
            // Modules
            ModuleDto,
            CreateModuleRequest,
            UpdateModuleRequest,
            PatchModuleRequest,
            // UserRols
            UserRolDto,
            CreateUserRolRequest,
            UpdateUserRolRequest,
            PatchUserRolRequest,
            // RolForms
            RolFormDto,
            CreateRolFormRequest,
            UpdateRolFormRequest,
            PatchRolFormRequest,
            // FormModules
            FormModuleDto,
            CreateFormModuleRequest,
            UpdateFormModuleRequest,
            PatchFormModuleRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Login (JWT), token validation, logout"),
        (name = "Persons", description = "Person CRUD operations"),
        (name = "Users", description = "User account CRUD operations"),
        (name = "Rols", description = "Rol CRUD operations"),
        (name = "Forms", description = "Form CRUD operations"),
        (name = "Modules", description = "Module CRUD operations"),
        (name = "UserRols", description = "Rol assignments to users"),
        (name = "RolForms", description = "Form grants to rols"),
        (name = "FormModules", description = "Form placements in modules"),
    ),
    info(
        title = "RBAC Administration API",
        version = "0.1.0",
        description = "REST API for managing users, rols, forms, modules and their assignments",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(db: DatabaseConnection, jwt_config: JwtConfig) -> Router {
    let auth_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    let app_state = AppState {
        services: Arc::new(ServiceRegistry::new(db, jwt_config)),
        auth: auth_state.clone(),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public: login inspects credentials, validate inspects the
    // presented token itself, logout is a stateless no-op)
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/validate", get(auth::validate))
        .route("/logout", post(auth::logout))
        .with_state(app_state.clone());

    let person_routes = Router::new()
        .route("/", get(persons::list_persons).post(persons::create_person))
        .route(
            "/{id}",
            get(persons::get_person)
                .put(persons::update_person)
                .patch(persons::patch_person)
                .delete(persons::delete_person),
        )
        .route("/{id}/soft", delete(persons::soft_delete_person))
        .route("/{id}/activate", post(persons::activate_person));

    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .patch(users::patch_user)
                .delete(users::delete_user),
        )
        .route("/{id}/soft", delete(users::soft_delete_user))
        .route("/{id}/activate", post(users::activate_user))
        .route("/{id}/roles", get(users::list_user_roles));

    let rol_routes = Router::new()
        .route("/", get(rols::list_rols).post(rols::create_rol))
        .route(
            "/{id}",
            get(rols::get_rol)
                .put(rols::update_rol)
                .patch(rols::patch_rol)
                .delete(rols::delete_rol),
        )
        .route("/{id}/soft", delete(rols::soft_delete_rol))
        .route("/{id}/activate", post(rols::activate_rol))
        .route("/{id}/forms", get(rols::list_forms_for_rol));

    let form_routes = Router::new()
        .route("/", get(forms::list_forms).post(forms::create_form))
        .route(
            "/{id}",
            get(forms::get_form)
                .put(forms::update_form)
                .patch(forms::patch_form)
                .delete(forms::delete_form),
        )
        .route("/{id}/soft", delete(forms::soft_delete_form))
        .route("/{id}/activate", post(forms::activate_form));

    let module_routes = Router::new()
        .route("/", get(modules::list_modules).post(modules::create_module))
        .route(
            "/{id}",
            get(modules::get_module)
                .put(modules::update_module)
                .patch(modules::patch_module)
                .delete(modules::delete_module),
        )
        .route("/{id}/soft", delete(modules::soft_delete_module))
        .route("/{id}/activate", post(modules::activate_module))
        .route("/{id}/forms", get(modules::list_module_forms));

    let user_rol_routes = Router::new()
        .route(
            "/",
            get(user_rols::list_user_rols).post(user_rols::create_user_rol),
        )
        .route(
            "/{id}",
            get(user_rols::get_user_rol)
                .put(user_rols::update_user_rol)
                .patch(user_rols::patch_user_rol)
                .delete(user_rols::delete_user_rol),
        )
        .route("/{id}/soft", delete(user_rols::soft_delete_user_rol))
        .route("/{id}/activate", post(user_rols::activate_user_rol));

    let rol_form_routes = Router::new()
        .route(
            "/",
            get(rol_forms::list_rol_forms).post(rol_forms::create_rol_form),
        )
        .route(
            "/{id}",
            get(rol_forms::get_rol_form)
                .put(rol_forms::update_rol_form)
                .patch(rol_forms::patch_rol_form)
                .delete(rol_forms::delete_rol_form),
        )
        .route("/{id}/soft", delete(rol_forms::soft_delete_rol_form))
        .route("/{id}/activate", post(rol_forms::activate_rol_form))
        .route("/byRol/{rol_id}", get(rol_forms::list_rol_forms_by_rol))
        .route("/byForm/{form_id}", get(rol_forms::list_rol_forms_by_form));

    let form_module_routes = Router::new()
        .route(
            "/",
            get(form_modules::list_form_modules).post(form_modules::create_form_module),
        )
        .route(
            "/{id}",
            get(form_modules::get_form_module)
                .put(form_modules::update_form_module)
                .patch(form_modules::patch_form_module)
                .delete(form_modules::delete_form_module),
        )
        .route("/{id}/soft", delete(form_modules::soft_delete_form_module))
        .route("/{id}/activate", post(form_modules::activate_form_module));

    // All entity routes sit behind the JWT middleware.
    let protected = Router::new()
        .nest("/api/person", person_routes)
        .nest("/api/user", user_routes)
        .nest("/api/rol", rol_routes)
        .nest("/api/form", form_routes)
        .nest("/api/module", module_routes)
        .nest("/api/userrol", user_rol_routes)
        .nest("/api/rolform", rol_form_routes)
        .nest("/api/formmodule", form_module_routes)
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(app_state.clone());

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .route("/health", get(health::health_check))
        .nest("/api/auth", auth_routes)
        .merge(protected)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use sea_orm::{ConnectOptions, Database};
    use sea_orm_migration::MigratorTrait;
    use tower::Service;

    use super::*;
    use crate::application::resources::{CreatePersonRequest, CreateUserRequest};
    use crate::infrastructure::database::migrator::Migrator;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "router-test-secret".to_string(),
            expiration_hours: 8,
            issuer: "rbac-admin".to_string(),
        }
    }

    async fn app_with_admin() -> Router {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        // Seed an account to log in with.
        let registry = ServiceRegistry::new(db.clone(), test_jwt_config());
        let person = registry
            .persons()
            .create(CreatePersonRequest {
                first_name: "System".into(),
                middle_name: None,
                last_name: "Administrator".into(),
                email: "admin@example.com".into(),
                phone: None,
                identification_type: "SYSTEM".into(),
                identification_number: 1,
                signing: None,
            })
            .await
            .unwrap();
        registry
            .users()
            .create(CreateUserRequest {
                username: "admin".into(),
                email: "admin@example.com".into(),
                password: "admin-password".into(),
                person_id: person.id,
            })
            .await
            .unwrap();

        create_api_router(db, test_jwt_config())
    }

    async fn send(app: Router, req: Request<Body>) -> axum::http::Response<Body> {
        let mut svc = app.into_service();
        svc.call(req).await.unwrap()
    }

    async fn login_token(app: Router) -> String {
        let body = serde_json::json!({"username": "admin", "password": "admin-password"});
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();

        let resp = send(app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        parsed["token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = app_with_admin().await;
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let resp = send(app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn entity_routes_require_a_token() {
        let app = app_with_admin().await;
        let req = Request::builder().uri("/api/rol").body(Body::empty()).unwrap();
        let resp = send(app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_grants_access_to_protected_routes() {
        let app = app_with_admin().await;
        let token = login_token(app.clone()).await;

        let req = Request::builder()
            .uri("/api/rol")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let resp = send(app.clone(), req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = Request::builder()
            .uri("/api/auth/validate")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();
        let resp = send(app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let app = app_with_admin().await;
        let body = serde_json::json!({"username": "admin", "password": "wrong"});
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();

        let resp = send(app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn logout_is_a_stateless_no_content() {
        let app = app_with_admin().await;
        let req = Request::builder()
            .method("POST")
            .uri("/api/auth/logout")
            .body(Body::empty())
            .unwrap();
        let resp = send(app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }
}

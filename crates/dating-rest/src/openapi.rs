//! OpenAPI documentation configuration.

use crate::controllers::{ComponentHealth, HealthResponse, ReadinessResponse};
use crate::responses::ApiResponse;
use dating_core::{ErrorResponse, FieldError, Gender, PhotoId, UserId};
use dating_service::{PhotoForDetailedDto, UserForDetailedDto, UserForListDto, UserForUpdateDto};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// OpenAPI documentation for the DatingApp API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "DatingApp API",
        version = "1.0.0",
        description = "Member browsing, profile editing and likes"
    ),
    paths(
        crate::controllers::user_controller::list_users,
        crate::controllers::user_controller::get_user,
        crate::controllers::user_controller::update_user,
        crate::controllers::user_controller::like_user,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(
        schemas(
            UserId,
            PhotoId,
            Gender,
            ErrorResponse,
            FieldError,
            ApiResponse,
            UserForListDto,
            UserForDetailedDto,
            PhotoForDetailedDto,
            UserForUpdateDto,
            HealthResponse,
            ReadinessResponse,
            ComponentHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "users", description = "Member endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;

/// Security addon for JWT Bearer authentication.
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
                        .description(Some("JWT Bearer token authentication"))
                        .build(),
                ),
            );
        }
    }
}

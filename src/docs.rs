use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use bookshelf_auth::Role;
use bookshelf_models::{
    Book, CreateBookDto, LoginForm, RegisterRequestDto, TokenResponse, UpdateBookDto, User,
};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::system::controller::HealthResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_me,
        crate::modules::books::controller::list_books,
        crate::modules::books::controller::get_book,
        crate::modules::books::controller::create_book,
        crate::modules::books::controller::update_book,
        crate::modules::books::controller::delete_book,
        crate::modules::system::controller::get_metrics,
        crate::modules::system::controller::health_check,
    ),
    components(
        schemas(
            User,
            Role,
            RegisterRequestDto,
            LoginForm,
            TokenResponse,
            Book,
            CreateBookDto,
            UpdateBookDto,
            ErrorResponse,
            HealthResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and the current user"),
        (name = "Books", description = "Book catalogue"),
        (name = "System", description = "Health and metrics")
    ),
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "Book catalogue with JWT authentication and admin/user roles.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

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
                        .build(),
                ),
            )
        }
    }
}

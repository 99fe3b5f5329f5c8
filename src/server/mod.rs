//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::{AppSettings, ServerConfig};

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use taskboard::Trace;
#[cfg(debug_assertions)]
use taskboard::doc::ApiDoc;
use taskboard::inbound::http::health::{HealthState, live, ready};
use taskboard::inbound::http::projects::{
    add_member, create_project, get_project, list_project_tasks, list_projects_for_user,
};
use taskboard::inbound::http::settings::{get_settings, update_settings};
use taskboard::inbound::http::state::HttpState;
use taskboard::inbound::http::tasks::{
    create_task, delete_task, list_personal_tasks, set_task_status, toggle_task,
};
use taskboard::inbound::http::users::register_user;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
struct AppDependencies {
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
}

fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    let api = web::scope("/api")
        .service(register_user)
        .service(create_project)
        .service(list_projects_for_user)
        .service(get_project)
        .service(add_member)
        .service(list_project_tasks)
        .service(list_personal_tasks)
        .service(create_task)
        .service(toggle_task)
        .service(set_task_status)
        .service(delete_task)
        .service(get_settings)
        .service(update_settings);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and
/// configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state();
    let ServerConfig { bind_addr } = config;

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

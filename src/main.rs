use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware, web};

use erpdesk::{api, auth, config, handlers, store};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let cfg = config::AppConfig::from_env();
    let api_client = api::ApiClient::new(&cfg.api_base);
    let page_store = web::Data::new(store::Store::default());

    // Session encryption key — load from SESSION_KEY env var for persistent sessions across restarts
    let secret_key = match std::env::var("SESSION_KEY") {
        Ok(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Ok(val) => {
            log::warn!(
                "SESSION_KEY too short ({} bytes, need 64+) — generating random key",
                val.len()
            );
            Key::generate()
        }
        Err(_) => {
            log::warn!("No SESSION_KEY set — generating random key (sessions lost on restart)");
            Key::generate()
        }
    };

    log::info!("Starting server at http://{}", cfg.bind_addr);

    let bind_addr = cfg.bind_addr.clone();
    HttpServer::new(move || {
        let session_mw =
            SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                .cookie_secure(false)
                .cookie_http_only(true)
                .build();

        App::new()
            .wrap(session_mw)
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(api_client.clone()))
            .app_data(page_store.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            // Public routes
            .route("/login", web::get().to(handlers::auth_handlers::login_page))
            .route("/login", web::post().to(handlers::auth_handlers::login_submit))
            // Root redirect
            .route(
                "/",
                web::get().to(|| async {
                    actix_web::HttpResponse::SeeOther()
                        .insert_header(("Location", "/dashboard"))
                        .finish()
                }),
            )
            // Protected routes
            .service(
                web::scope("")
                    .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                    .route("/dashboard", web::get().to(handlers::dashboard::index))
                    .route("/logout", web::post().to(handlers::auth_handlers::logout))
                    // Approval inboxes
                    .route("/approvals/ctc", web::get().to(handlers::approvals::ctc::page))
                    .route(
                        "/approvals/ctc/submit",
                        web::post().to(handlers::approvals::ctc::submit),
                    )
                    .route(
                        "/approvals/pay-revision",
                        web::get().to(handlers::approvals::pay_revision::page),
                    )
                    .route(
                        "/approvals/pay-revision/submit",
                        web::post().to(handlers::approvals::pay_revision::submit),
                    )
                    .route(
                        "/approvals/vendor-payments",
                        web::get().to(handlers::approvals::vendor_payment::page),
                    )
                    .route(
                        "/approvals/vendor-payments/submit",
                        web::post().to(handlers::approvals::vendor_payment::submit),
                    )
                    // Accrued interest report
                    .route(
                        "/reports/accrued-interest",
                        web::get().to(handlers::reports::interest::page),
                    )
                    .route(
                        "/reports/accrued-interest/view",
                        web::post().to(handlers::reports::interest::view),
                    )
                    .route(
                        "/reports/accrued-interest/reset",
                        web::post().to(handlers::reports::interest::reset),
                    )
                    .route(
                        "/reports/accrued-interest/export.csv",
                        web::get().to(handlers::reports::interest::export_csv),
                    )
                    .route(
                        "/reports/accrued-interest/print",
                        web::get().to(handlers::reports::interest::print),
                    )
                    // Daily issued items report
                    .route(
                        "/reports/daily-issues",
                        web::get().to(handlers::reports::daily_issue::page),
                    )
                    .route(
                        "/reports/daily-issues/view",
                        web::post().to(handlers::reports::daily_issue::view),
                    )
                    .route(
                        "/reports/daily-issues/reset",
                        web::post().to(handlers::reports::daily_issue::reset),
                    )
                    .route(
                        "/reports/daily-issues/export.csv",
                        web::get().to(handlers::reports::daily_issue::export_csv),
                    )
                    // Stock reconciliation report
                    .route("/reports/stock", web::get().to(handlers::reports::stock::page))
                    .route(
                        "/reports/stock/view",
                        web::post().to(handlers::reports::stock::view),
                    )
                    .route(
                        "/reports/stock/reset",
                        web::post().to(handlers::reports::stock::reset),
                    )
                    .route(
                        "/reports/stock/movements",
                        web::get().to(handlers::reports::stock::movements),
                    )
                    .route(
                        "/reports/stock/movements/close",
                        web::get().to(handlers::reports::stock::close_drill),
                    )
                    .route(
                        "/reports/stock/export.csv",
                        web::get().to(handlers::reports::stock::export_csv),
                    )
                    // Indents report
                    .route(
                        "/reports/indents",
                        web::get().to(handlers::reports::indents::page),
                    )
                    .route(
                        "/reports/indents/view",
                        web::post().to(handlers::reports::indents::view),
                    )
                    .route(
                        "/reports/indents/reset",
                        web::post().to(handlers::reports::indents::reset),
                    )
                    .route(
                        "/reports/indents/export.csv",
                        web::get().to(handlers::reports::indents::export_csv),
                    ),
            )
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}

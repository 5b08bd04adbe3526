use std::{sync::Arc, time::Duration};

use actix_web::{
    dev::Server,
    error::JsonPayloadError,
    http::KeepAlive,
    middleware::Logger,
    web,
    App,
    HttpRequest,
    HttpServer,
};
use log::*;
use payout_engine::{OrderApi, PayoutApi, PdfRenderer, SmtpNotifier, SqliteDatabase, VendorApi};

use crate::{
    auth::TokenIssuer,
    config::ServerConfig,
    errors::ServerError,
    routes::{health, CreateOrderRoute, LoginRoute, PayoutRoute, RegisterRoute, UpdateOrderStatusRoute},
};

const MAX_DB_CONNECTIONS: u32 = 25;

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, MAX_DB_CONNECTIONS)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    if config.auto_migrate {
        db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    }
    let notifier = match config.email.smtp_config() {
        Some(smtp) => SmtpNotifier::new(smtp).map_err(|e| ServerError::ConfigurationError(e.to_string()))?,
        None => SmtpNotifier::disabled(),
    };
    let srv = create_server_instance(config, db, notifier)?;
    srv.await.map_err(ServerError::IOError)
}

/// Maps malformed or missing JSON bodies onto a 400 response with the usual error body.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("💻️ Rejected request body. {err}");
    ServerError::InvalidRequestBody(err.to_string()).into()
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    notifier: SmtpNotifier,
) -> Result<Server, ServerError> {
    // A single renderer and notifier (and hence SMTP connection pool) is shared by all workers
    let renderer = Arc::new(PdfRenderer::new());
    let notifier = Arc::new(notifier);
    let token_issuer = web::Data::new(TokenIssuer::new(&config.auth));
    let notification_timeout = config.notification_timeout;
    let srv = HttpServer::new(move || {
        let vendor_api = VendorApi::new(db.clone());
        let order_api = OrderApi::new(db.clone());
        let payout_api = PayoutApi::new(db.clone(), Arc::clone(&renderer), Arc::clone(&notifier));
        let payout_api = match notification_timeout {
            Some(timeout) => payout_api.with_notification_timeout(timeout),
            None => payout_api,
        };
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %r").log_target("nps::access_log"))
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::Data::new(vendor_api))
            .app_data(web::Data::new(order_api))
            .app_data(web::Data::new(payout_api))
            .app_data(token_issuer.clone())
            .service(health)
            .service(RegisterRoute::<SqliteDatabase>::new())
            .service(LoginRoute::<SqliteDatabase>::new())
            .service(CreateOrderRoute::<SqliteDatabase>::new())
            .service(UpdateOrderStatusRoute::<SqliteDatabase>::new())
            .service(PayoutRoute::<SqliteDatabase, PdfRenderer, SmtpNotifier>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    info!("🚀️ Listening on {}:{}", config.host, config.port);
    Ok(srv)
}

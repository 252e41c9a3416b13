use std::time::Duration;

use actix_web::{
    dev::Server,
    error::{JsonPayloadError, PathError},
    http::KeepAlive,
    middleware::Logger,
    web,
    App,
    HttpRequest,
    HttpServer,
};
use log::*;
use razorpay_tools::RazorpayApi;
use socify_engine::{
    traits::{OrderManagement, PaymentGateway, ProductManagement, SocialGraphManagement},
    OrderFlowApi,
    ProductApi,
    SocialApi,
    SqliteDatabase,
};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::razorpay::RazorpayGateway,
    routes::{
        health,
        index,
        AddProductRoute,
        AddUserRoute,
        AllProductsRoute,
        AllUsersRoute,
        CreateOrderRoute,
        FollowRoute,
        FollowersRoute,
        FollowingRoute,
        OrderDetailsRoute,
        ProductByIdRoute,
        UnfollowRoute,
        VerifyPaymentRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, config.max_db_connections)
        .await
        .map_err(|e| ServerError::InitializeError(format!("Could not connect to {}. {e}", config.database_url)))?;
    if config.run_migrations {
        db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    }
    let api = RazorpayApi::new(config.razorpay.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    info!("💳️ Razorpay client ready for key {}", api.key_id());
    let gateway = RazorpayGateway::new(api);
    let srv = create_server_instance(config, db, gateway)?;
    srv.await.map_err(ServerError::from)
}

pub fn create_server_instance(
    config: ServerConfig,
    db: SqliteDatabase,
    gateway: RazorpayGateway,
) -> Result<Server, ServerError> {
    let key_secret = config.razorpay.key_secret.clone();
    let srv = HttpServer::new(move || {
        let order_flow_api = OrderFlowApi::new(db.clone(), gateway.clone(), key_secret.clone());
        let social_api = SocialApi::new(db.clone());
        let product_api = ProductApi::new(db.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("socify::access_log"))
            .app_data(web::Data::new(order_flow_api))
            .app_data(web::Data::new(social_api))
            .app_data(web::Data::new(product_api))
            .configure(configure_extractors)
            .service(health)
            .service(index)
            .service(api_scope::<SqliteDatabase, RazorpayGateway>())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((config.host.as_str(), config.port))?
    .run();
    Ok(srv)
}

/// All the `/api` routes, for any backend and gateway.
pub fn api_scope<B, G>() -> actix_web::Scope
where
    B: OrderManagement + ProductManagement + SocialGraphManagement + 'static,
    G: PaymentGateway + 'static,
{
    web::scope("/api")
        .service(AddUserRoute::<B>::new())
        .service(AllUsersRoute::<B>::new())
        .service(FollowRoute::<B>::new())
        .service(UnfollowRoute::<B>::new())
        .service(FollowersRoute::<B>::new())
        .service(FollowingRoute::<B>::new())
        .service(AddProductRoute::<B>::new())
        .service(AllProductsRoute::<B>::new())
        .service(ProductByIdRoute::<B>::new())
        .service(CreateOrderRoute::<B, G>::new())
        .service(VerifyPaymentRoute::<B, G>::new())
        .service(OrderDetailsRoute::<B, G>::new())
}

/// Bad JSON bodies and unparseable path segments are reported with the same JSON error body as every other error.
pub fn configure_extractors(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error));
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("💻️ Could not deserialize request body. {err}");
    ServerError::InvalidRequestBody(err.to_string()).into()
}

fn path_error(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!("💻️ Could not parse request path. {err}");
    ServerError::InvalidRequestPath(err.to_string()).into()
}

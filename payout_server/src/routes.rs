//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Since each worker thread processes its requests sequentially, handlers must never block. Database access is
//! asynchronous, PDF rendering runs on the blocking pool, and payout emails are sent from a detached task.
use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use log::*;
use payout_engine::{
    db_types::{OrderId, VendorId},
    traits::{OrderManagement, PayoutDatabase, VendorManagement},
    DocumentRenderer,
    Notifier,
    OrderApi,
    PayoutApi,
    VendorApi,
};

use crate::{
    auth::{JwtClaims, TokenIssuer},
    data_objects::{
        AuthResponse,
        CreateOrderRequest,
        HealthResponse,
        LoginRequest,
        OrderStatusUpdate,
        RegisterRequest,
    },
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:ty),+) => {
        paste::paste! { pub struct [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ >( $( core::marker::PhantomData<fn() -> [< T $bounds:camel> ] >,)+ );}
        paste::paste! { impl< $( [< T $bounds:camel> ],)+ > [<$name:camel Route>]< $( [< T $bounds:camel> ],)+ > {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self($( core::marker::PhantomData::<fn() -> [< T $bounds:camel> ] >,)+)
            }
        }}
        paste::paste! { impl<$( [< T $bounds:camel >] , )+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$([<T $bounds:camel>],)+>
        where
            $([<T $bounds:camel>]: $bounds + 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::< $( [< T $bounds:camel >], )+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().json(HealthResponse::up(Utc::now()))
}

//----------------------------------------------   Auth  ----------------------------------------------------
route!(register => Post "/auth/register" impl VendorManagement);
/// Opens a vendor account. Responds with the new vendor record (which never includes the password digest) and an
/// access token.
pub async fn register<B: VendorManagement>(
    body: web::Json<RegisterRequest>,
    api: web::Data<VendorApi<B>>,
    issuer: web::Data<TokenIssuer>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received registration request");
    let request = body.into_inner();
    request.validate()?;
    let vendor = api.register(request.into()).await?;
    let token = issuer.issue_token(&vendor.id)?;
    Ok(HttpResponse::Created().json(AuthResponse { vendor, token }))
}

route!(login => Post "/auth/login" impl VendorManagement);
pub async fn login<B: VendorManagement>(
    body: web::Json<LoginRequest>,
    api: web::Data<VendorApi<B>>,
    issuer: web::Data<TokenIssuer>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received login request");
    let request = body.into_inner();
    request.validate()?;
    let vendor = api.login(request.email.trim(), &request.password).await?.ok_or(ServerError::InvalidCredentials)?;
    let token = issuer.issue_token(&vendor.id)?;
    debug!("💻️ Vendor {} logged in", vendor.id);
    Ok(HttpResponse::Ok().json(AuthResponse { vendor, token }))
}

//----------------------------------------------   Orders  ----------------------------------------------------
// Order and payout handlers take a `JwtClaims` argument, so they are only reachable with a valid access token.
route!(create_order => Post "/orders" impl OrderManagement);
pub async fn create_order<B: OrderManagement>(
    claims: JwtClaims,
    body: web::Json<CreateOrderRequest>,
    api: web::Data<OrderApi<B>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received new order request from vendor {}", claims.sub);
    let request = body.into_inner();
    request.validate()?;
    let order = api.create_order(request.into()).await?;
    Ok(HttpResponse::Created().json(order))
}

route!(update_order_status => Patch "/orders/{order_id}/status" impl OrderManagement);
pub async fn update_order_status<B: OrderManagement>(
    claims: JwtClaims,
    path: web::Path<String>,
    body: web::Json<OrderStatusUpdate>,
    api: web::Data<OrderApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let order_id = OrderId::from(path.into_inner());
    trace!("💻️ Received status update for order {order_id} from vendor {}", claims.sub);
    let order = api.update_order_status(&order_id, body.status).await?;
    Ok(HttpResponse::Ok().json(order))
}

//----------------------------------------------   Payouts  ----------------------------------------------------
route!(payout => Get "/payouts/{vendor_id}" impl PayoutDatabase, DocumentRenderer, Notifier);
/// Responds with the vendor's payout summary. The emailed copy of the summary is sent after the response, and
/// problems sending it do not affect the response.
pub async fn payout<B, R, N>(
    claims: JwtClaims,
    path: web::Path<String>,
    api: web::Data<PayoutApi<B, R, N>>,
) -> Result<HttpResponse, ServerError>
where
    B: PayoutDatabase,
    R: DocumentRenderer,
    N: Notifier,
{
    let vendor_id = VendorId::from(path.into_inner());
    trace!("💻️ Received payout request for vendor {vendor_id} from vendor {}", claims.sub);
    let summary = api.calculate_payout(&vendor_id).await?;
    Ok(HttpResponse::Ok().json(summary))
}

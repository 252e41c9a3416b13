//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! A note about performance:
//! Since each worker thread processes its requests sequentially, handlers which block the current thread will cause the
//! current worker to stop processing new requests. Every handler here awaits the database or the payment gateway
//! asynchronously, so workers stay free while those calls are in flight.
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use socify_engine::{
    order_objects::{CreateOrderRequest, VerifyPaymentRequest},
    traits::{OrderManagement, PaymentGateway, ProductManagement, SocialGraphManagement},
    user_objects::{AddUserRequest, FollowRequest},
    NewProductRequest,
    OrderFlowApi,
    ProductApi,
    SocialApi,
};

use crate::{
    data_objects::{JsonResponse, PaymentVerifiedResponse},
    errors::ServerError,
};

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
//
// * `route!(name => Get "/path" impl Trait)` creates a `NameRoute<T>` service for a handler generic over one backend.
// * `route!(name => Post "/path" where B: [TraitA, TraitB], G: [TraitC])` creates a `NameRoute<B, G>` service for a
//   handler with several type parameters, each with its own bounds.
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

    ($name:ident => $method:ident $path:literal where $($param:ident: [$($bound:path),+]),+) => {
        paste::paste! { pub struct [<$name:camel Route>]<$($param,)+>(core::marker::PhantomData<fn() -> ($($param,)+)>);}
        paste::paste! { impl<$($param,)+> [<$name:camel Route>]<$($param,)+> {
            #[allow(clippy::new_without_default)]
            pub fn new() -> Self {
                Self(core::marker::PhantomData::<fn() -> ($($param,)+)>)
            }
        }}
        paste::paste! { impl<$($param,)+> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<$($param,)+>
        where
            $($param: $($bound +)+ 'static,)+
        {
            fn register(self, config: &mut actix_web::dev::AppService) {
                let res = actix_web::Resource::new($path)
                    .name(stringify!($name))
                    .guard(actix_web::guard::$method())
                    .to($name::<$($param,)+>);
                actix_web::dev::HttpServiceFactory::register(res, config);
            }
        }}
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok().body("Socify Running...")
}

//----------------------------------------------   Users  ----------------------------------------------------
route!(add_user => Post "/user/add" impl SocialGraphManagement);
pub async fn add_user<B: SocialGraphManagement>(
    body: web::Json<AddUserRequest>,
    api: web::Data<SocialApi<B>>,
) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received add user request");
    api.add_user(body.into_inner()).await.map_err(|e| ServerError::from(e).or_internal("Error creating user"))?;
    Ok(HttpResponse::Created().json(JsonResponse::new("User created successfully")))
}

route!(all_users => Get "/user/all" impl SocialGraphManagement);
pub async fn all_users<B: SocialGraphManagement>(api: web::Data<SocialApi<B>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Received all users request");
    let users = api.all_users().await.map_err(|e| ServerError::from(e).or_internal("Error fetching users"))?;
    Ok(HttpResponse::Ok().json(users))
}

route!(follow => Post "/user/follow/{email}" impl SocialGraphManagement);
pub async fn follow<B: SocialGraphManagement>(
    path: web::Path<String>,
    body: web::Json<FollowRequest>,
    api: web::Data<SocialApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let followed = path.into_inner();
    let follower = body.into_inner().follower_email.unwrap_or_default();
    debug!("💻️ Follow request: {follower} -> {followed}");
    api.follow(&follower, &followed).await.map_err(|e| ServerError::from(e).or_internal("Error following user"))?;
    Ok(HttpResponse::Ok().json(JsonResponse::new("User followed successfully")))
}

route!(unfollow => Post "/user/unfollow/{email}" impl SocialGraphManagement);
pub async fn unfollow<B: SocialGraphManagement>(
    path: web::Path<String>,
    body: web::Json<FollowRequest>,
    api: web::Data<SocialApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let followed = path.into_inner();
    let follower = body.into_inner().follower_email.unwrap_or_default();
    debug!("💻️ Unfollow request: {follower} -> {followed}");
    api.unfollow(&follower, &followed).await.map_err(|e| ServerError::from(e).or_internal("Error unfollowing user"))?;
    Ok(HttpResponse::Ok().json(JsonResponse::new("User unfollowed successfully")))
}

route!(followers => Get "/user/followers/{email}" impl SocialGraphManagement);
pub async fn followers<B: SocialGraphManagement>(
    path: web::Path<String>,
    api: web::Data<SocialApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let users =
        api.followers(&path.into_inner()).await.map_err(|e| ServerError::from(e).or_internal("Error fetching followers"))?;
    Ok(HttpResponse::Ok().json(users))
}

route!(following => Get "/user/following/{email}" impl SocialGraphManagement);
pub async fn following<B: SocialGraphManagement>(
    path: web::Path<String>,
    api: web::Data<SocialApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let users =
        api.following(&path.into_inner()).await.map_err(|e| ServerError::from(e).or_internal("Error fetching following"))?;
    Ok(HttpResponse::Ok().json(users))
}

//----------------------------------------------   Products  ----------------------------------------------------
route!(add_product => Post "/product/add" impl ProductManagement);
pub async fn add_product<B: ProductManagement>(
    body: web::Json<NewProductRequest>,
    api: web::Data<ProductApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let product =
        api.add_product(body.into_inner()).await.map_err(|e| ServerError::from(e).or_internal("Error adding product"))?;
    Ok(HttpResponse::Created().json(product))
}

route!(all_products => Get "/product/all" impl ProductManagement);
pub async fn all_products<B: ProductManagement>(api: web::Data<ProductApi<B>>) -> Result<HttpResponse, ServerError> {
    let products = api.products().await.map_err(|e| ServerError::from(e).or_internal("Error fetching products"))?;
    Ok(HttpResponse::Ok().json(products))
}

route!(product_by_id => Get "/product/{id}" impl ProductManagement);
pub async fn product_by_id<B: ProductManagement>(
    path: web::Path<i64>,
    api: web::Data<ProductApi<B>>,
) -> Result<HttpResponse, ServerError> {
    let product =
        api.product(path.into_inner()).await.map_err(|e| ServerError::from(e).or_internal("Error fetching product"))?;
    Ok(HttpResponse::Ok().json(product))
}

//----------------------------------------------   Payments  ----------------------------------------------------
route!(create_order => Post "/payment/order" where B: [OrderManagement, ProductManagement, SocialGraphManagement], G: [PaymentGateway]);
pub async fn create_order<B, G>(
    body: web::Json<CreateOrderRequest>,
    api: web::Data<OrderFlowApi<B, G>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement + ProductManagement + SocialGraphManagement,
    G: PaymentGateway,
{
    trace!("💻️ Received create order request");
    let created =
        api.create_order(body.into_inner()).await.map_err(|e| ServerError::from(e).or_internal("Error creating order"))?;
    Ok(HttpResponse::Created().json(created))
}

route!(verify_payment => Post "/payment/verify" where B: [OrderManagement, ProductManagement, SocialGraphManagement], G: [PaymentGateway]);
pub async fn verify_payment<B, G>(
    body: web::Json<VerifyPaymentRequest>,
    api: web::Data<OrderFlowApi<B, G>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement + ProductManagement + SocialGraphManagement,
    G: PaymentGateway,
{
    trace!("💻️ Received payment verification request");
    let verified = api
        .verify_payment(body.into_inner())
        .await
        .map_err(|e| ServerError::from(e).or_internal("Error verifying payment"))?;
    if verified.replayed {
        info!("💻️ Payment callback for order #{} was a replay", verified.order.id);
    }
    Ok(HttpResponse::Ok().json(PaymentVerifiedResponse::new(verified.transaction)))
}

route!(order_details => Get "/payment/order/{id}" where B: [OrderManagement, ProductManagement, SocialGraphManagement], G: [PaymentGateway]);
pub async fn order_details<B, G>(
    path: web::Path<i64>,
    api: web::Data<OrderFlowApi<B, G>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderManagement + ProductManagement + SocialGraphManagement,
    G: PaymentGateway,
{
    let details = api
        .fetch_order_details(path.into_inner())
        .await
        .map_err(|e| ServerError::from(e).or_internal("Error fetching order"))?;
    Ok(HttpResponse::Ok().json(details))
}

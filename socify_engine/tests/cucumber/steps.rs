use cucumber::{then, when};
use socify_engine::{
    db_types::{OrderStatusType, Rupees},
    order_objects::{CreateOrderRequest, VerifyPaymentRequest},
};

use crate::{cucumber::SocifyWorld, support::sign};

#[when(expr = "'{word}' orders {int} '{word}'")]
async fn place_order(world: &mut SocifyWorld, user: String, quantity: i64, product: String) {
    let user_id = world.user(&user).id;
    let product_id = world.products.get(&product).map(|p| p.id).unwrap_or(-1);
    let result = world.system().api.create_order(CreateOrderRequest::new(product_id, quantity, user_id)).await;
    if let Some(created) = world.record(result) {
        world.last_order = Some(created);
    }
}

async fn send_callback(world: &mut SocifyWorld, payment_id: &str, signature: String) {
    let created = world.last_order();
    let request =
        VerifyPaymentRequest::new(payment_id, created.gateway_order.id.as_str(), signature.as_str(), created.order.id);
    let result = world.system().api.verify_payment(request).await;
    world.record(result);
}

#[when(expr = "the gateway confirms payment '{word}' for the last order")]
async fn confirm_payment(world: &mut SocifyWorld, payment_id: String) {
    let signature = sign(&world.last_order().gateway_order.id, &payment_id);
    send_callback(world, &payment_id, signature).await;
}

#[when(expr = "a forged callback for payment '{word}' arrives for the last order")]
async fn forged_payment(world: &mut SocifyWorld, payment_id: String) {
    let signature = sign(&world.last_order().gateway_order.id, "pay_someone_else");
    send_callback(world, &payment_id, signature).await;
}

#[when(expr = "'{word}' follows '{word}'")]
async fn follow(world: &mut SocifyWorld, follower: String, followed: String) {
    let follower = world.user(&follower).email.clone();
    let followed = world.user(&followed).email.clone();
    let result = world.social_api().follow(&follower, &followed).await;
    world.record(result);
}

#[when(expr = "'{word}' unfollows '{word}'")]
async fn unfollow(world: &mut SocifyWorld, follower: String, followed: String) {
    let follower = world.user(&follower).email.clone();
    let followed = world.user(&followed).email.clone();
    let result = world.social_api().unfollow(&follower, &followed).await;
    world.record(result);
}

#[then(expr = "the last order has an amount of {int} rupees")]
async fn check_amount(world: &mut SocifyWorld, rupees: i64) {
    assert_eq!(world.last_order().order.amount, Rupees::from(rupees));
}

#[then(expr = "the last order is {word}")]
async fn check_status(world: &mut SocifyWorld, status: String) {
    let expected = status.parse::<OrderStatusType>().expect("Not a valid order status");
    let details =
        world.system().api.fetch_order_details(world.last_order().order.id).await.expect("Error fetching order");
    assert_eq!(details.order.status, expected);
}

#[then(expr = "the gateway was asked for {int} paise")]
async fn check_gateway_amount(world: &mut SocifyWorld, paise: i64) {
    let requests = world.system().gateway.requests();
    let last = requests.last().expect("The gateway was never called");
    assert_eq!(last.amount.value(), paise);
}

#[then(expr = "there is/are {int} transaction(s)")]
async fn check_transactions(world: &mut SocifyWorld, count: i64) {
    assert_eq!(world.system().transaction_count().await, count);
}

#[then(expr = "the last error is {string}")]
async fn check_error(world: &mut SocifyWorld, message: String) {
    assert_eq!(world.last_error.as_deref(), Some(message.as_str()));
}

#[then("the last call succeeded")]
async fn check_success(world: &mut SocifyWorld) {
    assert!(world.last_error.is_none(), "Unexpected error: {:?}", world.last_error);
}

#[then(expr = "'{word}' has {int} follower(s)")]
async fn check_followers(world: &mut SocifyWorld, user: String, count: usize) {
    let email = world.user(&user).email.clone();
    let followers = world.social_api().followers(&email).await.expect("Error fetching followers");
    assert_eq!(followers.len(), count);
}

#[then(expr = "'{word}' follows {int} user(s)")]
async fn check_following(world: &mut SocifyWorld, user: String, count: usize) {
    let email = world.user(&user).email.clone();
    let following = world.social_api().following(&email).await.expect("Error fetching following");
    assert_eq!(following.len(), count);
}

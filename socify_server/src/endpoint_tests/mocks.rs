use chrono::{TimeZone, Utc};
use mockall::mock;
use socify_engine::{
    db_types::{
        Follow,
        NewOrder,
        NewProduct,
        NewTransaction,
        NewUser,
        Order,
        OrderStatusType,
        Paise,
        Product,
        Rupees,
        Transaction,
        TransactionStatusType,
        User,
        UserSummary,
    },
    traits::{
        GatewayOrder,
        GatewayOrderRequest,
        OrderManagement,
        OrderManagementError,
        PaymentCompletion,
        PaymentGateway,
        PaymentGatewayError,
        ProductManagement,
        ProductManagementError,
        SocialGraphError,
        SocialGraphManagement,
    },
};

mock! {
    pub Backend {}
    impl OrderManagement for Backend {
        async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderManagementError>;
        async fn fetch_order(&self, order_id: i64) -> Result<Option<Order>, OrderManagementError>;
        async fn set_gateway_order_id(&self, order_id: i64, gateway_order_id: &str) -> Result<Order, OrderManagementError>;
        async fn mark_order_failed(&self, order_id: i64) -> Result<Order, OrderManagementError>;
        async fn complete_order(&self, transaction: NewTransaction) -> Result<PaymentCompletion, OrderManagementError>;
        async fn fetch_transaction_for_order(&self, order_id: i64) -> Result<Option<Transaction>, OrderManagementError>;
    }
    impl ProductManagement for Backend {
        async fn insert_product(&self, product: NewProduct) -> Result<Product, ProductManagementError>;
        async fn fetch_product(&self, product_id: i64) -> Result<Option<Product>, ProductManagementError>;
        async fn fetch_products(&self) -> Result<Vec<Product>, ProductManagementError>;
    }
    impl SocialGraphManagement for Backend {
        async fn insert_user(&self, user: NewUser) -> Result<User, SocialGraphError>;
        async fn fetch_user(&self, user_id: i64) -> Result<Option<User>, SocialGraphError>;
        async fn fetch_user_by_email(&self, email: &str) -> Result<Option<User>, SocialGraphError>;
        async fn fetch_user_by_username_or_email(&self, username: &str, email: &str) -> Result<Option<User>, SocialGraphError>;
        async fn fetch_users(&self) -> Result<Vec<User>, SocialGraphError>;
        async fn insert_follow(&self, follower_id: i64, followed_id: i64) -> Result<bool, SocialGraphError>;
        async fn remove_follow(&self, follower_id: i64, followed_id: i64) -> Result<bool, SocialGraphError>;
        async fn fetch_follows(&self) -> Result<Vec<Follow>, SocialGraphError>;
        async fn fetch_followers(&self, user_id: i64) -> Result<Vec<UserSummary>, SocialGraphError>;
        async fn fetch_following(&self, user_id: i64) -> Result<Vec<UserSummary>, SocialGraphError>;
    }
}

mock! {
    pub Gateway {}
    impl PaymentGateway for Gateway {
        async fn create_order(&self, request: GatewayOrderRequest) -> Result<GatewayOrder, PaymentGatewayError>;
    }
}

//----------------------------------------------   Fixtures  ----------------------------------------------------

pub fn user(id: i64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: format!("{username}@x.com"),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap(),
        ..User::default()
    }
}

pub fn product(id: i64, rupees: i64) -> Product {
    Product {
        id,
        name: "Mug".to_string(),
        description: "A mug".to_string(),
        price: Rupees::from(rupees),
        stock: 10,
        created_at: Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap(),
    }
}

pub fn order(id: i64, amount: Rupees, status: OrderStatusType, gateway_order_id: Option<&str>) -> Order {
    Order {
        id,
        product_id: 1,
        user_id: 1,
        quantity: 3,
        amount,
        currency: "INR".to_string(),
        status,
        gateway_order_id: gateway_order_id.map(String::from),
        created_at: Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 10, 19, 12, 0, 0).unwrap(),
    }
}

pub fn transaction(id: i64, order_id: i64, payment_id: &str, gateway_order_id: &str) -> Transaction {
    Transaction {
        id,
        order_id,
        gateway_payment_id: payment_id.to_string(),
        gateway_order_id: gateway_order_id.to_string(),
        status: TransactionStatusType::Completed,
        created_at: Utc.with_ymd_and_hms(2024, 10, 19, 12, 5, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 10, 19, 12, 5, 0).unwrap(),
    }
}

pub fn gateway_order(id: &str, request: &GatewayOrderRequest) -> GatewayOrder {
    GatewayOrder {
        id: id.to_string(),
        entity: "order".to_string(),
        amount: request.amount,
        amount_paid: Paise::default(),
        amount_due: request.amount,
        currency: request.currency.clone(),
        receipt: Some(request.receipt.clone()),
        status: "created".to_string(),
        attempts: 0,
        created_at: 1_729_339_200,
    }
}

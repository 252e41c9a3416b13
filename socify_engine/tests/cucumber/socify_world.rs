use std::collections::HashMap;

use cucumber::World;
use socify_engine::{
    db_types::{Product, User},
    order_objects::OrderCreated,
    SocialApi,
    SqliteDatabase,
};

use crate::support::TestSystem;

#[derive(Default, Debug, World)]
pub struct SocifyWorld {
    pub system: Option<TestSystem>,
    pub users: HashMap<String, User>,
    pub products: HashMap<String, Product>,
    pub last_order: Option<OrderCreated>,
    pub last_error: Option<String>,
}

impl SocifyWorld {
    pub fn system(&self) -> &TestSystem {
        self.system.as_ref().expect("System not initialised")
    }

    pub fn social_api(&self) -> SocialApi<SqliteDatabase> {
        SocialApi::new(self.system().db.clone())
    }

    pub fn user(&self, name: &str) -> &User {
        self.users.get(name).unwrap_or_else(|| panic!("User {name} has not been created"))
    }

    pub fn last_order(&self) -> &OrderCreated {
        self.last_order.as_ref().expect("No order has been placed")
    }

    pub fn record<T, E: ToString>(&mut self, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(v) => {
                self.last_error = None;
                Some(v)
            },
            Err(e) => {
                self.last_error = Some(e.to_string());
                None
            },
        }
    }
}

// Shared test fixture for User records.

use crate::modules::users::core::user::{Address, Company, Geo, User};

pub struct UserBuilder {
    inner: User,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    pub fn new() -> Self {
        Self {
            inner: User {
                id: 1,
                name: "Leanne Graham".to_string(),
                user_name: "Bret".to_string(),
                email: "Sincere@april.biz".to_string(),
                address: Address {
                    street: "Kulas Light".to_string(),
                    suite: "Apt. 556".to_string(),
                    city: "Gwenborough".to_string(),
                    zipcode: "92998-3874".to_string(),
                    geo: Geo {
                        lat: "-37.3159".to_string(),
                        lng: "81.1496".to_string(),
                    },
                },
                phone: "1-770-736-8031 x56442".to_string(),
                website: "hildegard.org".to_string(),
                company: Company {
                    name: "Romaguera-Crona".to_string(),
                    catch_phrase: "Multi-layered client-server neural-net".to_string(),
                    bs: "harness real-time e-markets".to_string(),
                },
            },
        }
    }

    pub fn id(mut self, v: i64) -> Self {
        self.inner.id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn user_name(mut self, v: impl Into<String>) -> Self {
        self.inner.user_name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn build(self) -> User {
        self.inner
    }
}

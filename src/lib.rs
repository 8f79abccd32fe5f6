pub mod modules {
    pub mod users {
        pub mod core {
            pub mod ports;
            pub mod user;
        }
        pub mod use_cases {
            pub mod list_users {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod add_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_user {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod errors;
            }
            pub mod outbound {
                pub mod user_store_in_memory;
            }
        }
    }
}

pub mod shell;

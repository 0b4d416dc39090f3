pub mod modules {
    pub mod users {
        pub mod core {
            pub mod ports;
            pub mod profile;
            pub mod seed;
            pub mod user;
        }
        pub mod use_cases {
            pub mod create_user {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_user {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod list_users {
                pub mod response;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod registry_in_memory;
            }
        }
    }
}

pub mod shell;

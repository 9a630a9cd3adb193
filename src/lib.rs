pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod shifts {
        pub mod core {
            pub mod aggregate;
            pub mod period;
            pub mod position;
            pub mod shift;
            pub mod week;
        }
        pub mod use_cases {
            pub mod schedule_shift {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod view_week {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod queries_port;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod shift_repository;
                pub mod shifts_in_memory;
            }
        }
    }
}

pub mod shell;

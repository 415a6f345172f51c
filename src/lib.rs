pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod infrastructure {
        pub mod identity;
    }
}

pub mod modules {
    pub mod bookings {
        pub mod core {
            pub mod availability;
            pub mod booking;
            pub mod budget;
            pub mod grid_view;
            pub mod range_selection;
            pub mod slot_grid;
            pub mod time_point;
            pub mod wizard;
        }
        pub mod use_cases {
            pub mod confirm_booking {
                pub mod coordinator;
                pub mod decide;
                pub mod decision;
            }
            pub mod run_booking_wizard {
                pub mod command;
                pub mod handler;
                pub mod response;
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod booking_authority;
                pub mod booking_authority_in_memory;
                pub mod session_store;
                pub mod session_store_in_memory;
            }
        }
    }
}

pub mod shell;

// Crate entry point. Declare and expose modules so tests and the binary can reach them.

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod event_type;
            pub mod query;
        }
    }
}

pub mod shared {
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod shell;

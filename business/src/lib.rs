pub mod application {
    pub mod completion {
        pub mod ask;
    }
}

pub mod domain {
    pub mod logger;
    pub mod completion {
        pub mod errors;
        pub mod model;
        pub mod prompt;
        pub mod services;
        pub mod use_cases {
            pub mod ask;
        }
    }
    pub mod configuration {
        pub mod errors;
        pub mod model;
    }
}

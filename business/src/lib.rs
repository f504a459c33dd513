pub mod application {
    pub mod catalog {
        pub mod get_by_category;
        pub mod get_usage_history;
    }
    pub mod combination {
        pub mod delete;
        pub mod get_by_menu;
        pub mod toggle_flag;
        pub mod update;
    }
    pub mod composer {
        pub mod management;
        pub mod state;
        pub mod store;
        #[cfg(test)]
        mod test_support;
    }
    pub mod daily_menu {
        pub mod commit;
        pub mod get_selection;
        pub mod load_active;
    }
    pub mod template {
        pub mod create;
        pub mod get_all;
    }
}

pub mod domain {
    pub mod confirmation;
    pub mod errors;
    pub mod logger;
    pub mod notification;
    pub mod session;
    pub mod shared {
        pub mod value_objects;
    }
    pub mod category {
        pub mod model;
    }
    pub mod catalog {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_by_category;
            pub mod get_usage_history;
        }
    }
    pub mod combination {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod delete;
            pub mod get_by_menu;
            pub mod toggle_flag;
            pub mod update;
        }
    }
    pub mod daily_menu {
        pub mod errors;
        pub mod generator;
        pub mod model;
        pub mod repository;
        pub mod selection;
        pub mod use_cases {
            pub mod commit;
            pub mod get_selection;
            pub mod load_active;
        }
    }
    pub mod template {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod create;
            pub mod get_all;
        }
    }
    pub mod wizard {
        pub mod state_machine;
    }
}

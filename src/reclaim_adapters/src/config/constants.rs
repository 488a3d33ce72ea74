pub mod env {
    pub const SETTINGS_FILE_ENV_VAR: &str = "RECLAIM_SETTINGS_FILE";
    pub const API_BASE_URL_ENV_VAR: &str = "RECLAIM_API__BASE_URL";
    pub const API_TIMEOUT_ENV_VAR: &str = "RECLAIM_API__TIMEOUT_MILLIS";
}

pub mod prod {
    pub mod api {
        use std::time::Duration;

        pub const BASE_URL: &str = "http://localhost:5500";
        pub const TIMEOUT: Duration = Duration::from_secs(10);
    }
}

pub mod test {
    pub mod api {
        use std::time::Duration;

        pub const TIMEOUT: Duration = Duration::from_millis(200);
    }
}

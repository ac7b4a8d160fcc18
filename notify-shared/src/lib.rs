pub mod models {
    pub mod errors;
    pub mod notifications;
}

pub mod services {
    pub mod dispatch_services;
    pub mod email_services;
    pub mod notification_services;
    pub mod oauth_services;
}

pub mod utilities {
    pub mod config;
    pub mod encoding;
    pub mod logging;
    pub mod requests;
    pub mod responses;
    pub mod test;
}

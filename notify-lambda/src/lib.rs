pub mod router;

pub mod endpoints {
    pub mod notify;
    pub mod status;
}

pub mod header {
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: &str = "access-control-allow-origin";
    pub const ORIGIN: &str = "origin";
}

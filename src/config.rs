use std::env;

pub const DEFAULT_BROKER_URL: &str = "amqp://localhost:5672";

/// Broker endpoint for both roles: `$AMQP_ADDR` when set, the local default
/// otherwise. Callers pass the result explicitly to `connect`.
pub fn broker_url() -> String {
    env::var("AMQP_ADDR").unwrap_or_else(|_| DEFAULT_BROKER_URL.to_owned())
}

#[cfg(test)]
mod broker_url {
    use super::*;

    #[test]
    fn prefers_amqp_addr_and_falls_back_to_default() {
        env::set_var("AMQP_ADDR", "amqp://10.0.0.1:5672");
        assert_eq!(broker_url(), "amqp://10.0.0.1:5672");

        env::remove_var("AMQP_ADDR");
        assert_eq!(broker_url(), DEFAULT_BROKER_URL);
    }
}

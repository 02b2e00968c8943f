pub mod server;

use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Server {
        port: u16,
        dsn: SecretString,
        auth_timeout_seconds: Option<u64>,
        role_timeout_seconds: Option<u64>,
    },
}

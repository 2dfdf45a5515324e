//! Plain TCP checks, used by `autopilot check`.

use std::net::{SocketAddr, TcpStream};
use std::time::Duration;

const HOST: [u8; 4] = [127, 0, 0, 1];
const CONNECT_TIMEOUT_MS: u64 = 500;

pub struct PortManager;

impl PortManager {
    /// Check if something accepts connections on the port.
    pub fn is_in_use(port: u16) -> bool {
        TcpStream::connect_timeout(
            &SocketAddr::from((HOST, port)),
            Duration::from_millis(CONNECT_TIMEOUT_MS),
        )
        .is_ok()
    }
}

use leptos_use::ReconnectLimit;

use super::services::bootstrap::Bootstrap;

const SOCKET_PATH: &str = "/ws";

/// Client settings, resolved once at start and provided through context.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub socket_url: String,
    /// Pause between reconnect attempts after the socket drops.
    pub reconnect_interval_ms: u64,
    /// `None` keeps retrying forever.
    pub max_reconnects: Option<u64>,
    /// Years shown either side of today in the calendar year selector.
    pub year_span: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            socket_url: format!("ws://localhost:5000{}", SOCKET_PATH),
            reconnect_interval_ms: 3000,
            max_reconnects: None,
            year_span: 5,
        }
    }
}

impl BoardConfig {
    pub fn from_bootstrap(bootstrap: &Bootstrap) -> Self {
        let socket_url = bootstrap
            .socket_url
            .clone()
            .filter(|url| !url.is_empty())
            .or_else(page_socket_url)
            .unwrap_or_else(|| Self::default().socket_url);

        Self {
            socket_url,
            ..Self::default()
        }
    }

    pub fn reconnect_limit(&self) -> ReconnectLimit {
        match self.max_reconnects {
            Some(limit) => ReconnectLimit::Limited(limit),
            None => ReconnectLimit::Infinite,
        }
    }
}

/// Socket URL on the same host as the page, `wss:` under `https:`.
pub fn socket_url_for(protocol: &str, host: &str) -> String {
    let ws_protocol = if protocol == "https:" { "wss:" } else { "ws:" };
    format!("{}//{}{}", ws_protocol, host, SOCKET_PATH)
}

fn page_socket_url() -> Option<String> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().ok()?;
    let host = location.host().ok().filter(|h| !h.is_empty())?;
    Some(socket_url_for(&protocol, &host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_url_follows_page_protocol() {
        assert_eq!(socket_url_for("http:", "board.local:8080"), "ws://board.local:8080/ws");
        assert_eq!(socket_url_for("https:", "board.example"), "wss://board.example/ws");
    }

    #[test]
    fn test_bootstrap_socket_url_wins() {
        let bootstrap = Bootstrap {
            socket_url: Some("ws://relay:9000/ws".to_string()),
            ..Bootstrap::default()
        };
        assert_eq!(BoardConfig::from_bootstrap(&bootstrap).socket_url, "ws://relay:9000/ws");
    }

    #[test]
    fn test_default_reconnects_forever() {
        let config = BoardConfig::default();
        assert_eq!(config.reconnect_interval_ms, 3000);
        assert!(matches!(config.reconnect_limit(), ReconnectLimit::Infinite));
    }

    #[test]
    fn test_reconnect_limit_from_max_reconnects() {
        let config = BoardConfig {
            max_reconnects: Some(5),
            ..BoardConfig::default()
        };
        assert!(matches!(config.reconnect_limit(), ReconnectLimit::Limited(5)));
    }
}

//! WebSocket plumbing: endpoint normalisation, connect, and JSON framing.
//!
//! Frames are text, one JSON object each. Helpers are generic over the
//! stream/sink halves so tests can drive them with any tungstenite socket.

use futures_util::{Sink, SinkExt, Stream, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{self, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use url::Url;

use tigerdragon_shared::{ClientMsg, ServerMsg};

use crate::error::{ClientError, Result};

pub type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Build a websocket URL from an endpoint string.
///
/// `ws://` and `wss://` are kept as given, `http(s)://` is mapped to
/// `ws(s)://` and a bare `host:port` gets `ws://`. The path is left alone.
pub fn build_ws_url(endpoint: &str) -> Result<Url> {
    let endpoint = endpoint.trim();
    let invalid = |reason: String| ClientError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };
    if endpoint.is_empty() {
        return Err(invalid("endpoint is empty".into()));
    }

    let candidate = if endpoint.contains("://") {
        endpoint.to_string()
    } else {
        format!("ws://{}", endpoint)
    };
    let mut url = Url::parse(&candidate).map_err(|e| invalid(e.to_string()))?;

    match url.scheme() {
        "ws" | "wss" => Some(()),
        "http" => url.set_scheme("ws").ok(),
        "https" => url.set_scheme("wss").ok(),
        _ => None,
    }
    .ok_or_else(|| invalid(format!("unsupported URL scheme: {}", url.scheme())))?;

    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host".into()));
    }
    Ok(url)
}

pub async fn connect(url: &Url) -> Result<WsStream> {
    let (ws_stream, _resp) = tokio_tungstenite::connect_async(url.as_str())
        .await
        .map_err(ClientError::Connect)?;
    Ok(ws_stream)
}

pub fn encode(msg: &ClientMsg) -> Result<Message> {
    let txt = serde_json::to_string(msg).map_err(ClientError::Encode)?;
    Ok(Message::Text(txt))
}

pub fn decode(txt: &str) -> Result<ServerMsg> {
    serde_json::from_str(txt).map_err(|source| ClientError::Decode {
        raw: txt.to_string(),
        source,
    })
}

/// Serialize and send one message, flushing before returning.
pub async fn send_msg<S>(sink: &mut S, msg: &ClientMsg) -> Result<()>
where
    S: Sink<Message, Error = tungstenite::Error> + Unpin,
{
    let frame = encode(msg)?;
    tracing::debug!(out = ?msg);
    sink.send(frame).await.map_err(ClientError::Transport)
}

/// Wait for the next text frame and decode it.
///
/// Control and binary frames are skipped. A close frame or the end of the
/// stream is reported as [`ClientError::Closed`].
pub async fn next_msg<S>(stream: &mut S) -> Result<ServerMsg>
where
    S: Stream<Item = std::result::Result<Message, tungstenite::Error>> + Unpin,
{
    loop {
        match stream.next().await {
            Some(Ok(Message::Text(txt))) => {
                tracing::debug!(raw_in = %txt);
                return decode(&txt);
            }
            Some(Ok(Message::Close(frame))) => {
                tracing::debug!(?frame, "server sent close");
                return Err(ClientError::Closed);
            }
            Some(Ok(_other)) => { /* ping/pong/binary */ }
            Some(Err(e)) => return Err(ClientError::Transport(e)),
            None => return Err(ClientError::Closed),
        }
    }
}

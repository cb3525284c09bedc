// Integration tests for `EventStream` against a real in-process
// websocket server. Each accepted connection replays a fixed frame
// script, then stays open until the client goes away.

use std::net::SocketAddr;
use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::Message;

use pressa_api::{EventCallbacks, MachineClient};

const WAIT: Duration = Duration::from_secs(5);

fn status_frame() -> String {
    serde_json::json!({
        "event": "status",
        "data": {
            "name": "brewing",
            "sensors": { "p": 9.0, "f": 2.0, "w": 12.5, "t": 92.1 },
            "time": 5200.0,
            "profile": "Classic Italian",
        },
    })
    .to_string()
}

fn sensors_frame() -> String {
    serde_json::json!({
        "event": "sensors",
        "data": {
            "t_ext_1": 90.0, "t_ext_2": 90.5, "t_bar_up": 91.0, "t_bar_mu": 91.2,
            "t_bar_md": 91.4, "t_bar_down": 91.6, "t_tube": 88.0, "t_valv": 87.5,
        },
    })
    .to_string()
}

/// Spawn a websocket server that sends `script` on every connection,
/// then holds the socket open until the peer disconnects.
async fn spawn_server(script: Vec<String>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                break;
            };
            let script = script.clone();

            tokio::spawn(async move {
                let mut ws = match tokio_tungstenite::accept_async(stream).await {
                    Ok(ws) => ws,
                    Err(_) => return,
                };
                for frame in script {
                    if ws.send(Message::text(frame)).await.is_err() {
                        return;
                    }
                }
                // Drain until the client drops the connection.
                while let Some(msg) = ws.next().await {
                    if msg.is_err() {
                        break;
                    }
                }
            });
        }
    });

    addr
}

#[tokio::test]
async fn delivers_status_frames_to_registered_callback() {
    let addr = spawn_server(vec![sensors_frame(), status_frame()]).await;
    let client = MachineClient::new(&format!("http://{addr}")).expect("client");

    // Only `status` is registered; the preceding `sensors` frame must
    // pass through without firing anything.
    let (tx, mut rx) = mpsc::unbounded_channel();
    let callbacks = EventCallbacks::new().on_status(move |status| {
        tx.send(status.name).expect("send");
    });

    let mut stream = client.events(callbacks).expect("stream");
    stream.connect().await.expect("connect");
    assert!(stream.is_connected());

    let name = timeout(WAIT, rx.recv()).await.expect("status frame").expect("open");
    assert_eq!(name, "brewing");

    stream.disconnect();
    assert!(!stream.is_connected());
}

#[tokio::test]
async fn connect_is_idempotent() {
    let addr = spawn_server(vec![status_frame()]).await;
    let client = MachineClient::new(&format!("http://{addr}")).expect("client");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let callbacks = EventCallbacks::new().on_status(move |_| {
        tx.send(()).expect("send");
    });

    let mut stream = client.events(callbacks).expect("stream");
    stream.connect().await.expect("first connect");
    // A second connect while connected is a no-op, not a second socket.
    stream.connect().await.expect("second connect");

    timeout(WAIT, rx.recv()).await.expect("frame").expect("open");
    assert!(
        rx.try_recv().is_err(),
        "a duplicate connection delivered duplicate frames"
    );

    stream.disconnect();
}

#[tokio::test]
async fn reconnect_creates_fresh_connection_with_same_callbacks() {
    let addr = spawn_server(vec![status_frame()]).await;
    let client = MachineClient::new(&format!("http://{addr}")).expect("client");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let callbacks = EventCallbacks::new().on_status(move |_| {
        tx.send(()).expect("send");
    });

    let mut stream = client.events(callbacks).expect("stream");

    stream.connect().await.expect("connect");
    timeout(WAIT, rx.recv()).await.expect("first frame").expect("open");

    stream.disconnect();
    assert!(!stream.is_connected());

    // Reconnect: new socket, same construction-time registry.
    stream.connect().await.expect("reconnect");
    assert!(stream.is_connected());
    timeout(WAIT, rx.recv()).await.expect("second frame").expect("open");

    stream.disconnect();
}

#[tokio::test]
async fn connect_failure_is_event_stream_error() {
    // Bind a port, then free it so the connection is refused.
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let client = MachineClient::new(&format!("http://{addr}")).expect("client");
    let mut stream = client.events(EventCallbacks::new()).expect("stream");

    let err = stream.connect().await.expect_err("must fail");
    assert!(
        matches!(err, pressa_api::Error::EventStream(_)),
        "expected EventStream error, got: {err:?}"
    );
    assert!(!stream.is_connected());
}

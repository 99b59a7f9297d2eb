//! End-to-end exercise against a canned HTTP responder on the loopback
//! interface. No real database involved; the point is that a request built
//! from the typed API lands on the wire in the REST form the service
//! expects, and that the response decodes back into `T::Row`.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use wayfare_client::{Client, ClientError, Config};
use wayfare_types::Travel;
use wayfare_types::travel::{TripStatus, Trips};

/// Read one HTTP/1.1 request (headers plus content-length body), answer with
/// `status` and `body`, and hand the raw request back for inspection.
async fn respond_once(listener: TcpListener, status: &str, body: &str) -> String {
    let (mut socket, _) = listener.accept().await.unwrap();
    let raw = read_request(&mut socket).await;

    let response = format!(
        "HTTP/1.1 {status}\r\n\
         content-type: application/json\r\n\
         content-length: {}\r\n\
         connection: close\r\n\r\n{body}",
        body.len()
    );
    socket.write_all(response.as_bytes()).await.unwrap();
    socket.shutdown().await.unwrap();
    raw
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break buf.len();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
    let content_length = headers
        .lines()
        .find_map(|line| line.strip_prefix("content-length:"))
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    String::from_utf8_lossy(&buf).to_string()
}

const TRIP_BODY: &str = r#"[{
    "id": "e7a7a2f0-23bb-4f3a-a1ba-7f9df9a9a001",
    "user_id": "1f7f4e91-99ab-4f05-8f7e-df3a5f2a1002",
    "title": "Kyoto in autumn",
    "description": null,
    "start_date": "2026-10-20",
    "end_date": "2026-11-02",
    "status": "planning",
    "created_at": "2026-02-14T08:00:00Z",
    "updated_at": "2026-03-01T10:15:00Z"
}]"#;

#[tokio::test]
async fn select_roundtrips_through_the_wire() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(respond_once(listener, "200 OK", TRIP_BODY));

    let client: Client<Travel> = Client::new(Config::new(format!("http://{addr}"), "test-key"));
    let rows = client
        .table::<Trips>()
        .select()
        .eq("status", "planning")
        .limit(1)
        .send()
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Kyoto in autumn");
    assert_eq!(rows[0].status, TripStatus::Planning);
    assert_eq!(rows[0].description, None);

    let raw = server.await.unwrap();
    assert!(raw.starts_with("GET /rest/v1/trips?status=eq.planning&limit=1 HTTP/1.1\r\n"));
    let lowered = raw.to_lowercase();
    assert!(lowered.contains("apikey: test-key"));
    assert!(lowered.contains("authorization: bearer test-key"));
}

#[tokio::test]
async fn api_rejection_surfaces_status_and_body() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(respond_once(
        listener,
        "401 Unauthorized",
        r#"{"message":"JWT expired"}"#,
    ));

    let client: Client<Travel> = Client::new(Config::new(format!("http://{addr}"), "stale-key"));
    let error = client
        .table::<Trips>()
        .select()
        .send()
        .await
        .unwrap_err();

    match error {
        ClientError::Api { table, status, message } => {
            assert_eq!(table, "trips");
            assert_eq!(status, 401);
            assert!(message.contains("JWT expired"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }

    server.await.unwrap();
}

use noteview::application::Workspace;
use noteview::util::testing::{sample_folder, sample_note, MockNotebookRepository};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::thread::JoinHandle;

/// Known ids in the sample workspace
#[allow(dead_code)]
pub mod test_data {
    pub const WORK: &str = "f1";
    pub const IDEAS: &str = "f2";

    pub const FOO_REPORT: &str = "n1"; // title "Foo Report", content "bar"
    pub const MINUTES: &str = "n2";
    pub const SKETCH: &str = "n3"; // lives in IDEAS

    pub const NONEXISTENT: &str = "nope";
}

/// Workspace over an in-memory backend with two folders and three notes,
/// folder list already refreshed.
#[allow(dead_code)]
pub fn sample_workspace() -> Workspace<MockNotebookRepository> {
    let mock = MockNotebookRepository::builder()
        .with_folder(sample_folder(test_data::WORK, "Work", 2))
        .with_folder(sample_folder(test_data::IDEAS, "Ideas", 1))
        .with_notes(
            test_data::WORK,
            vec![
                sample_note(test_data::FOO_REPORT, test_data::WORK, "Foo Report", "bar"),
                sample_note(
                    test_data::MINUTES,
                    test_data::WORK,
                    "Minutes",
                    "notes from the weekly sync about the foo rollout",
                ),
            ],
        )
        .with_notes(
            test_data::IDEAS,
            vec![sample_note(
                test_data::SKETCH,
                test_data::IDEAS,
                "Sketch",
                "rough idea",
            )],
        )
        .build();

    let mut workspace = Workspace::new(mock);
    workspace
        .refresh_folders()
        .expect("Fixture refresh should succeed");
    workspace
}

/// Canned HTTP response served by `StubServer`.
#[allow(dead_code)]
pub struct StubResponse {
    pub status: u16,
    pub body: String,
}

#[allow(dead_code)]
impl StubResponse {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn not_found() -> Self {
        Self {
            status: 404,
            body: r#"{"error":"not found"}"#.to_string(),
        }
    }
}

/// A request as seen by `StubServer`.
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Minimal single-threaded HTTP stub: serves the given responses to
/// consecutive connections and records each request for assertions.
#[allow(dead_code)]
pub struct StubServer {
    addr: SocketAddr,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

#[allow(dead_code)]
impl StubServer {
    pub fn start(responses: Vec<StubResponse>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("Stub server has no address");

        let handle = std::thread::spawn(move || {
            let mut recorded = Vec::new();
            for response in responses {
                let (mut stream, _) = listener.accept().expect("Failed to accept connection");
                recorded.push(read_request(&mut stream));

                let reason = match response.status {
                    200 => "OK",
                    201 => "Created",
                    404 => "Not Found",
                    _ => "Error",
                };
                let payload = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    response.status,
                    reason,
                    response.body.len(),
                    response.body,
                );
                stream
                    .write_all(payload.as_bytes())
                    .expect("Failed to write response");
                stream.flush().expect("Failed to flush response");
            }
            recorded
        });

        Self { addr, handle }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Wait for all responses to be served and return the recorded requests.
    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().expect("Stub server thread panicked")
    }
}

fn read_request(stream: &mut TcpStream) -> RecordedRequest {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = stream.read(&mut chunk).expect("Failed to read request");
        if n == 0 {
            break buf.len();
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_blank_line(&buf) {
            break pos;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).into_owned();
    let mut parts = head.lines().next().unwrap_or_default().split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    let body_start = (header_end + 4).min(buf.len());
    let mut body = buf[body_start..].to_vec();
    while body.len() < content_length {
        let n = stream.read(&mut chunk).expect("Failed to read request body");
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    RecordedRequest {
        method,
        path,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}

fn find_blank_line(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|window| window == b"\r\n\r\n")
}

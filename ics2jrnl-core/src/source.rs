//! Obtains the raw iCalendar bytes, either from a local file or from a
//! secret iCal URL.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

/// Where the calendar document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

impl Source {
    /// Reads the full calendar document into memory.
    ///
    /// File mode is a plain read. URL mode issues a single blocking GET with
    /// the client's default redirect and timeout behavior: no retries, no
    /// backoff. A response status outside 2xx is an error carrying the status
    /// code; transport failures are wrapped with the URL for context.
    pub fn load(&self) -> Result<Vec<u8>> {
        match self {
            Source::File(path) => {
                fs::read(path).with_context(|| format!("reading {}", path.display()))
            }
            Source::Url(url) => fetch_ics(url),
        }
    }
}

fn fetch_ics(url: &str) -> Result<Vec<u8>> {
    let response =
        reqwest::blocking::get(url).with_context(|| format!("fetching iCal URL {url}"))?;
    let status = response.status();
    if !status.is_success() {
        bail!("HTTP status: {} for {url}", status.as_u16());
    }
    let body = response
        .bytes()
        .with_context(|| format!("reading response body from {url}"))?;
    Ok(body.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serves exactly one canned HTTP response on a random local port and
    /// returns the URL to request it.
    fn one_shot_server(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            let header = format!(
                "HTTP/1.1 {status_line}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            stream.write_all(header.as_bytes()).unwrap();
            stream.write_all(body).unwrap();
        });
        format!("http://{addr}/calendar.ics")
    }

    #[test]
    fn file_source_reads_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n")
            .unwrap();
        let bytes = Source::File(file.path().to_path_buf()).load().unwrap();
        assert_eq!(bytes, b"BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n");
    }

    #[test]
    fn missing_file_errors_with_path() {
        let err = Source::File(PathBuf::from("/no/such/calendar.ics"))
            .load()
            .unwrap_err();
        assert!(err.to_string().contains("/no/such/calendar.ics"));
    }

    #[test]
    fn url_source_returns_body_unchanged() {
        let url = one_shot_server("200 OK", b"BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n");
        let bytes = Source::Url(url).load().unwrap();
        assert_eq!(bytes, b"BEGIN:VCALENDAR\r\nEND:VCALENDAR\r\n");
    }

    #[test]
    fn non_success_status_errors_with_code() {
        let url = one_shot_server("404 Not Found", b"gone");
        let err = Source::Url(url).load().unwrap_err();
        assert!(err.to_string().contains("404"));
    }
}

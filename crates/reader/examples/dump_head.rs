use std::net::{TcpListener, TcpStream};

use micro_http_reader::codec::RequestDecoder;
use micro_http_reader::protocol::{HeaderField, ParseError, RequestLine};

use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> std::io::Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    info!(port = 8080, "start listening");
    let tcp_listener = match TcpListener::bind("127.0.0.1:8080") {
        Ok(tcp_listener) => tcp_listener,
        Err(e) => {
            error!(cause = %e, "bind server error");
            return Err(e);
        }
    };

    loop {
        let (tcp_stream, _remote_addr) = match tcp_listener.accept() {
            Ok(stream_and_addr) => stream_and_addr,
            Err(e) => {
                warn!(cause = %e, "failed to accept");
                continue;
            }
        };

        let mut decoder = RequestDecoder::new(tcp_stream);
        match dump_head(&mut decoder) {
            Ok(()) => info!(available = decoder.available(), "head complete"),
            Err(e) => error!(cause = %e, "bad request head"),
        }
        decoder.close();
    }
}

fn dump_head(decoder: &mut RequestDecoder<TcpStream>) -> Result<(), ParseError> {
    let mut line = RequestLine::new();
    decoder.decode_request_line(&mut line)?;
    info!(
        method = %String::from_utf8_lossy(line.method()),
        uri = %String::from_utf8_lossy(line.uri()),
        protocol = %String::from_utf8_lossy(line.protocol()),
        http09 = line.is_http09(),
        "request line"
    );

    let mut header = HeaderField::new();
    loop {
        decoder.decode_header(&mut header)?;
        if header.is_blank() {
            return Ok(());
        }
        info!(
            name = %String::from_utf8_lossy(header.name()),
            value = %String::from_utf8_lossy(header.value()),
            "header field"
        );
    }
}

use std::io::Cursor;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use micro_http_reader::codec::RequestDecoder;
use micro_http_reader::protocol::{HeaderField, RequestLine};

const SIMPLE_HEAD: &[u8] = b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n";

const BROWSER_HEAD: &[u8] = b"GET /index/?a=1&b=2&a=3 HTTP/1.1\r\n\
Host: 127.0.0.1:8080\r\n\
Connection: keep-alive\r\n\
Cache-Control: max-age=0\r\n\
Upgrade-Insecure-Requests: 1\r\n\
User-Agent: Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/109.0.0.0 Safari/537.36\r\n\
Accept: text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8\r\n\
Accept-Encoding: gzip, deflate, br\r\n\
Accept-Language: zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7\r\n\
\r\n";

fn decode_head(input: &[u8], line: &mut RequestLine, header: &mut HeaderField) {
    let mut decoder = RequestDecoder::new(Cursor::new(input));
    decoder.decode_request_line(line).unwrap();
    loop {
        decoder.decode_header(header).unwrap();
        if header.is_blank() {
            break;
        }
    }
}

fn bench_request_line(c: &mut Criterion) {
    c.bench_function("decode_request_line", |b| {
        let mut line = RequestLine::new();
        b.iter(|| {
            let mut decoder = RequestDecoder::new(Cursor::new(SIMPLE_HEAD));
            decoder.decode_request_line(&mut line).unwrap();
            black_box(line.uri().len());
        });
    });
}

fn bench_simple_head(c: &mut Criterion) {
    c.bench_function("decode_simple_head", |b| {
        let mut line = RequestLine::new();
        let mut header = HeaderField::new();
        b.iter(|| {
            decode_head(SIMPLE_HEAD, &mut line, &mut header);
            black_box(line.method().len());
        });
    });
}

fn bench_browser_head(c: &mut Criterion) {
    c.bench_function("decode_browser_head", |b| {
        let mut line = RequestLine::new();
        let mut header = HeaderField::new();
        b.iter(|| {
            decode_head(BROWSER_HEAD, &mut line, &mut header);
            black_box(line.uri().len());
        });
    });
}

criterion_group!(benches, bench_request_line, bench_simple_head, bench_browser_head);
criterion_main!(benches);

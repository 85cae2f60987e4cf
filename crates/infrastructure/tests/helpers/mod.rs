#![allow(dead_code)]


pub use http_server_mock::{closed_port_url, MockHttpServer};

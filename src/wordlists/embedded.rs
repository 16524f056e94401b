//! Embedded word list
//!
//! Secrets compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/secrets.rs"));

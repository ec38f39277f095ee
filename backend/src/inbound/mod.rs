//! Inbound adapters: everything that turns external input into calls on the
//! driving ports.

pub mod http;

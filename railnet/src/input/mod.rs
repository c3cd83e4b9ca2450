pub mod network;
pub mod network_parser;
pub mod arguments;

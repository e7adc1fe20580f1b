/// OpenVEX JSON codec
mod openvex_codec;

pub use openvex_codec::{parse_document, to_json, to_json_string};

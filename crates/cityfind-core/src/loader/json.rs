// crates/cityfind-core/src/loader/json.rs
use crate::error::Result;
use crate::raw::DatasetRaw;
use std::io::Read;

pub(super) fn parse_str(s: &str) -> Result<DatasetRaw> {
    Ok(serde_json::from_str(s)?)
}

pub(super) fn parse_reader(reader: impl Read) -> Result<DatasetRaw> {
    Ok(serde_json::from_reader(reader)?)
}

// Library root
// -----------
// The binary (`main.rs`) wires these modules together to push every user
// from `data.json` to the users API.
//
// Module responsibilities:
// - `models`: the `User`/`Address` shapes and loading them from disk.
// - `api`: the `Transport` seam and the blocking reqwest client behind it.
// - `submit`: the per-record loop and its skip/abort rules.
// - `config` and `error`: fixed run settings and typed failures.
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod submit;

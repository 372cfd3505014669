//! Domain core of the daylist task app: the task model, the ordered
//! repository with its persistence slots, the filter predicate, drag
//! reordering and theme resolution. Everything here is plain Rust so it
//! runs under `cargo test`; the browser bindings live in `daylist_ui`.

pub mod config;
pub mod filter;
pub mod reorder;
pub mod repository;
pub mod store;
pub mod task;
pub mod theme;

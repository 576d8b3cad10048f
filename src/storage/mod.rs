pub mod consts;
pub mod errors;
pub mod files;
pub mod interface;
pub mod memory;
pub mod records;

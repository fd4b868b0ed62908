pub mod archive;
pub mod pagination;

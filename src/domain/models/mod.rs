pub mod archive;
pub mod image;
pub mod part;
pub mod skipped;

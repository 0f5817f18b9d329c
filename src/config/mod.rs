pub mod load;
pub mod types;

pub use types::{
    Config, DEFAULT_CHUNK_SIZE, DEFAULT_DESTINATION_DIRECTORY, DEFAULT_SOURCE_DIRECTORY,
    HashAlgorithm,
};

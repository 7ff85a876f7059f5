pub mod db;
pub mod db_reset;
pub mod migrate;
pub mod serve;
pub mod version;

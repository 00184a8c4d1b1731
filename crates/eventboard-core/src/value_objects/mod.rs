//! Value objects - immutable types that represent domain concepts

mod page;
mod snowflake;

pub use page::Page;
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};

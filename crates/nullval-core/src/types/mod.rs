mod null_array;
mod null_string;

pub use null_array::NullArray;
pub use null_string::NullString;

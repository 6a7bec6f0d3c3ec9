pub mod capabilities;
pub mod category_channel;

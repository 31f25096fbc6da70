pub mod builder;
pub mod notification_list;
pub mod relative_time;

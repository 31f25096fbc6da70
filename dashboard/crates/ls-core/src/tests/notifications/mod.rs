mod builder;
mod notification_list;
mod relative_time;

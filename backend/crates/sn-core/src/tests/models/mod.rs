mod follow_edge;
mod profile;
mod profile_view;

mod plots;
mod space;

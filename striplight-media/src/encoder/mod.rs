mod edit_raw;
mod save_image;

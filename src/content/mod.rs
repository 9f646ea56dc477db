pub mod content_file;

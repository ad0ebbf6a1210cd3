pub mod use_comments;

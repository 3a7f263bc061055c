pub mod image_rs;

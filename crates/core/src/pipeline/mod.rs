pub mod annotate_image_use_case;
pub mod annotate_raw_use_case;

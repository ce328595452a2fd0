pub mod member;
pub mod subscription;

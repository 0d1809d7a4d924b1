pub mod modern;
pub mod pipe;
pub mod render;
pub mod spinner;
pub mod styles;

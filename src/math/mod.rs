pub mod curve;
pub mod vec3;
pub mod vec4;

pub mod composite;
pub mod enhance;
pub mod extract;
pub mod mask;
pub mod placeholder;
pub mod resize;

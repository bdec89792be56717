/// Quadtree decomposition and block classification
pub mod decomposer;
/// Terminal block painting with gaps and speckles
pub mod painter;
/// Render parameter snapshot
pub mod parameters;
/// Render pass orchestration and entry points
pub mod renderer;

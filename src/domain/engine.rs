/// Narrow interface to the simulation engine.
///
/// The engine owns the canonical grid and the transition rule. The view
/// only reads the packed buffer returned by [`Engine::cells`] and issues
/// mutation requests. Because `cells` borrows `&self`, a buffer slice can
/// never be held across a `&mut self` call that may reallocate it.
///
/// Row and column arguments must satisfy `row < height()` and
/// `col < width()`; callers are responsible for clamping.
pub trait Engine {
    /// Create an engine with the given grid dimensions
    fn new(width: u32, height: u32) -> Self
    where
        Self: Sized;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Current packed cell buffer, `ceil(width * height / 8)` bytes,
    /// row-major and LSB-first
    fn cells(&self) -> &[u8];

    /// Advance the simulation by one generation
    fn tick(&mut self);

    fn toggle_cell(&mut self, row: u32, col: u32);

    /// Stamp a glider centered on (row, col)
    fn put_glider(&mut self, row: u32, col: u32);

    /// Stamp a pulsar centered on (row, col)
    fn put_pulsar(&mut self, row: u32, col: u32);

    /// Reinitialize the grid. Dimensions may differ afterwards.
    fn reset(&mut self);
}

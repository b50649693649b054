//! Field data structures
//!
//! Dense, row-major grids of `f64`. Rows are latitudes, columns longitudes.

/// 2D scalar field over the lat/lon grid
///
/// Stores values as a flat `Vec<f64>` in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    /// Field values in row-major order (y * width + x)
    pub data: Vec<f64>,
    /// Number of longitude columns
    pub width: usize,
    /// Number of latitude rows
    pub height: usize,
}

impl ScalarField {
    /// Create a new field with given dimensions, initialized to zero
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_value(width, height, 0.0)
    }

    /// Create a new field with given dimensions, initialized to a value
    #[must_use]
    pub fn with_value(width: usize, height: usize, value: f64) -> Self {
        Self {
            data: vec![value; width * height],
            width,
            height,
        }
    }

    /// Get reference to field data
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Get mutable reference to field data
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Get value at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> f64 {
        assert!(
            x < self.width && y < self.height,
            "Coordinates out of bounds"
        );
        self.data[y * self.width + x]
    }

    /// Set value at grid position
    ///
    /// # Panics
    ///
    /// Panics if coordinates are out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        assert!(
            x < self.width && y < self.height,
            "Coordinates out of bounds"
        );
        self.data[y * self.width + x] = value;
    }

    /// Fill entire field with a value
    pub fn fill(&mut self, value: f64) {
        self.data.fill(value);
    }
}

/// Stack of 2D fields, one per atmosphere layer
///
/// Layout is `layer * (width * height) + y * width + x`.
#[derive(Debug, Clone, PartialEq)]
pub struct AtmosphereField {
    data: Vec<f64>,
    layers: usize,
    width: usize,
    height: usize,
}

impl AtmosphereField {
    /// Create a layered field with every value set to `value`
    #[must_use]
    pub fn with_value(layers: usize, width: usize, height: usize, value: f64) -> Self {
        Self {
            data: vec![value; layers * width * height],
            layers,
            width,
            height,
        }
    }

    /// Number of layers
    pub fn layers(&self) -> usize {
        self.layers
    }

    /// Number of longitude columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of latitude rows
    pub fn height(&self) -> usize {
        self.height
    }

    fn layer_len(&self) -> usize {
        self.width * self.height
    }

    /// Borrow one layer as a flat row-major slice
    ///
    /// # Panics
    ///
    /// Panics if `layer >= self.layers()`
    #[must_use]
    pub fn layer(&self, layer: usize) -> &[f64] {
        assert!(layer < self.layers, "Layer out of bounds");
        let len = self.layer_len();
        &self.data[layer * len..(layer + 1) * len]
    }

    /// Mutably borrow one layer as a flat row-major slice
    ///
    /// # Panics
    ///
    /// Panics if `layer >= self.layers()`
    pub fn layer_mut(&mut self, layer: usize) -> &mut [f64] {
        assert!(layer < self.layers, "Layer out of bounds");
        let len = self.layer_len();
        &mut self.data[layer * len..(layer + 1) * len]
    }

    /// Get value at grid position in a layer
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds
    #[must_use]
    pub fn get(&self, layer: usize, x: usize, y: usize) -> f64 {
        assert!(
            x < self.width && y < self.height,
            "Coordinates out of bounds"
        );
        self.layer(layer)[y * self.width + x]
    }

    /// All layers as one flat slice
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

// Hand-authored dot-matrix outline of the continents.
//
// Each row is one horizontal scan line holding normalized (0..1) x ranges as
// [start, end, start, end, ...]. Rows run from the Arctic down to Patagonia.

/// Vertical spacing between rows in normalized units. Accumulated into
/// [`WorldMap::span`] only; rendering derives y from the row index.
pub const ROW_GAP: f64 = 0.012;

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<f64>,
}

impl Row {
    pub fn new(values: &[f64]) -> Self {
        debug_assert!(values.len() % 2 == 0, "row needs (start, end) pairs");
        Self {
            values: values.to_vec(),
        }
    }

    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// (start, end) pairs; an unpaired trailing value is ignored.
    pub fn segments(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values.chunks_exact(2).map(|pair| (pair[0], pair[1]))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorldMap {
    rows: Vec<Row>,
    span: f64,
}

impl WorldMap {
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Total vertical extent accumulated by the builder (rows * gap).
    #[inline]
    pub fn span(&self) -> f64 {
        self.span
    }
}

#[derive(Debug, Clone)]
pub struct WorldMapBuilder {
    rows: Vec<Row>,
    y: f64,
    gap: f64,
}

impl WorldMapBuilder {
    pub fn new(gap: f64) -> Self {
        Self {
            rows: Vec::new(),
            y: 0.0,
            gap,
        }
    }

    pub fn row(mut self, values: &[f64]) -> Self {
        self.rows.push(Row::new(values));
        self.y += self.gap;
        self
    }

    pub fn build(self) -> WorldMap {
        WorldMap {
            rows: self.rows,
            span: self.y,
        }
    }
}

impl Default for WorldMapBuilder {
    fn default() -> Self {
        Self::new(ROW_GAP)
    }
}

/// Build the fixed world map table.
pub fn world_map() -> WorldMap {
    WorldMapBuilder::default()
        // Arctic: Greenland, northern Russia
        .row(&[0.15, 0.20, 0.42, 0.48, 0.55, 0.58, 0.65, 0.95])
        .row(&[0.14, 0.21, 0.41, 0.49, 0.55, 0.58, 0.63, 0.96])
        .row(&[0.08, 0.10, 0.13, 0.22, 0.40, 0.50, 0.55, 0.58, 0.62, 0.97])
        .row(&[0.07, 0.11, 0.12, 0.24, 0.39, 0.50, 0.55, 0.58, 0.60, 0.97])
        .row(&[0.06, 0.24, 0.39, 0.51, 0.54, 0.58, 0.60, 0.96])
        .row(&[0.06, 0.25, 0.38, 0.51, 0.54, 0.58, 0.59, 0.96])
        // Canada, northern Europe, Russia
        .row(&[0.05, 0.26, 0.37, 0.41, 0.43, 0.51, 0.54, 0.56, 0.59, 0.95])
        .row(&[0.05, 0.27, 0.36, 0.41, 0.43, 0.52, 0.54, 0.56, 0.58, 0.94])
        .row(&[0.04, 0.27, 0.36, 0.40, 0.43, 0.52, 0.54, 0.55, 0.58, 0.93])
        .row(&[0.04, 0.27, 0.35, 0.40, 0.43, 0.52, 0.54, 0.55, 0.57, 0.93])
        // US, western Europe, central Asia, China, Japan
        .row(&[0.04, 0.26, 0.35, 0.39, 0.43, 0.53, 0.57, 0.92])
        .row(&[0.05, 0.25, 0.35, 0.39, 0.43, 0.54, 0.57, 0.90, 0.91, 0.92])
        .row(&[0.05, 0.24, 0.35, 0.38, 0.43, 0.54, 0.56, 0.88, 0.91, 0.92])
        .row(&[0.06, 0.23, 0.35, 0.38, 0.43, 0.54, 0.56, 0.87, 0.91, 0.92])
        .row(&[0.06, 0.22, 0.36, 0.38, 0.43, 0.54, 0.56, 0.86])
        // Southern US, Mediterranean, Middle East, India
        .row(&[0.07, 0.21, 0.36, 0.38, 0.43, 0.55, 0.56, 0.85])
        .row(&[0.08, 0.20, 0.43, 0.54, 0.57, 0.60, 0.62, 0.84])
        .row(&[0.08, 0.20, 0.43, 0.54, 0.57, 0.60, 0.62, 0.82])
        .row(&[0.09, 0.19, 0.43, 0.46, 0.48, 0.53, 0.58, 0.60, 0.62, 0.80])
        .row(&[0.10, 0.19, 0.43, 0.45, 0.49, 0.53, 0.58, 0.60, 0.63, 0.78])
        // Central America, north Africa, SE Asia
        .row(&[0.11, 0.18, 0.37, 0.38, 0.43, 0.56, 0.58, 0.60, 0.64, 0.76])
        .row(&[0.11, 0.17, 0.37, 0.38, 0.43, 0.56, 0.59, 0.61, 0.65, 0.76])
        .row(&[0.11, 0.16, 0.27, 0.28, 0.43, 0.56, 0.59, 0.62, 0.66, 0.76])
        .row(&[0.11, 0.15, 0.26, 0.29, 0.43, 0.56, 0.60, 0.62, 0.67, 0.76])
        // Caribbean, Sahel, Arabian peninsula
        .row(&[0.11, 0.14, 0.26, 0.30, 0.43, 0.55, 0.61, 0.63, 0.68, 0.76])
        .row(&[0.26, 0.31, 0.43, 0.55, 0.62, 0.64, 0.69, 0.76])
        .row(&[0.26, 0.32, 0.43, 0.55, 0.63, 0.64, 0.70, 0.76])
        .row(&[0.26, 0.33, 0.43, 0.55, 0.71, 0.76])
        // South America, central Africa, Indonesia
        .row(&[0.27, 0.34, 0.43, 0.55, 0.72, 0.78])
        .row(&[0.27, 0.35, 0.44, 0.55, 0.73, 0.80])
        .row(&[0.27, 0.36, 0.44, 0.55, 0.74, 0.80])
        .row(&[0.27, 0.37, 0.45, 0.55, 0.74, 0.78])
        // South America, southern Africa
        .row(&[0.28, 0.37, 0.46, 0.55, 0.85, 0.87])
        .row(&[0.28, 0.37, 0.47, 0.54, 0.85, 0.88])
        .row(&[0.29, 0.36, 0.47, 0.53, 0.85, 0.88])
        .row(&[0.29, 0.36, 0.48, 0.53, 0.85, 0.89])
        // Southern cone, Cape, Australia
        .row(&[0.30, 0.35, 0.49, 0.52, 0.85, 0.90])
        .row(&[0.30, 0.34, 0.49, 0.52, 0.85, 0.90])
        .row(&[0.31, 0.34, 0.85, 0.90])
        .row(&[0.31, 0.33, 0.86, 0.90])
        // Argentina/Chile, Australia
        .row(&[0.31, 0.33, 0.86, 0.89])
        .row(&[0.31, 0.32, 0.86, 0.89])
        .row(&[0.31, 0.32])
        // Patagonia, New Zealand
        .row(&[0.31, 0.32, 0.90, 0.91])
        .row(&[0.31, 0.32, 0.90, 0.91])
        .build()
}

//! Data binding of a chart.

/// Describes where a chart's data comes from and which columns it plots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartDataDefinition {
    pub query: Option<String>,
    pub domain_column: Option<String>,
    pub range_column: Option<String>,
    pub category_column: Option<String>,
    pub scaling_factor: Option<f64>,
}

impl ChartDataDefinition {
    /// A definition for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Set the domain column.
    pub fn with_domain_column(mut self, column: impl Into<String>) -> Self {
        self.domain_column = Some(column.into());
        self
    }

    /// Set the range column.
    pub fn with_range_column(mut self, column: impl Into<String>) -> Self {
        self.range_column = Some(column.into());
        self
    }

    /// Set the category column.
    pub fn with_category_column(mut self, column: impl Into<String>) -> Self {
        self.category_column = Some(column.into());
        self
    }

    /// Set the factor applied to range values.
    pub fn with_scaling_factor(mut self, factor: f64) -> Self {
        self.scaling_factor = Some(factor);
        self
    }
}

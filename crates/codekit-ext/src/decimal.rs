use rust_decimal::Decimal;

///
/// DecimalExt
///

pub trait DecimalExt {
    /// Render with trailing fractional zeros trimmed.
    fn to_normalized_string(&self) -> String;

    /// Normalized value suffixed with `%`.
    fn to_percentage_string(&self) -> String;
}

impl DecimalExt for Decimal {
    fn to_normalized_string(&self) -> String {
        self.normalize().to_string()
    }

    fn to_percentage_string(&self) -> String {
        format!("{}%", self.normalize())
    }
}

///
/// TESTS
///

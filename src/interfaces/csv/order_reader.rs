use crate::domain::order::OrderSnapshot;
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads order snapshots from a CSV source.
///
/// Expects the header
/// `order_number,amount_minor,currency,customer_email,success_url,cancel_url`.
/// Whitespace around fields is trimmed.
pub struct OrderReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes orders.
    ///
    /// A malformed row yields an `Err` for that row only.
    pub fn orders(self) -> impl Iterator<Item = Result<OrderSnapshot>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(PaymentError::from))
    }
}
